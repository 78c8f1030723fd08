use digiurban_kernel::prelude::*;
use digiurban_kernel::schema::patterns;

const URGENCY: &[&str] = &["BAIXA", "NORMAL", "ALTA", "URGENTE"];

pub const PUBLIC_SERVICE_ATTENDANCE: KindSchema = KindSchema {
    module_type: ModuleType::AtendimentosServicosPublicos,
    kind: "public_service_attendance",
    entity_name: "PublicServiceAttendance",
    fields: &[
        FieldSpec::text("citizenName", "Citizen").aliases(&["requesterName"]),
        FieldSpec::text("citizenCpf", "CPF").aliases(&["cpf"]),
        FieldSpec::text("citizenPhone", "Phone").aliases(&["phone"]),
        FieldSpec::text("citizenEmail", "E-mail").aliases(&["email"]),
        FieldSpec::text("serviceType", "Service type").or(FieldDefault::Text("OUTROS")),
        FieldSpec::text("requestType", "Request type").or(FieldDefault::Text("SOLICITACAO")),
        FieldSpec::text("description", "Description"),
        FieldSpec::text("location", "Location").aliases(&["address"]),
        FieldSpec::choice("urgency", "Urgency", URGENCY).or(FieldDefault::Text("NORMAL")),
    ],
    rules: &[
        Rule::Required("description"),
        Rule::Pattern { field: "citizenEmail", pattern: patterns::EMAIL, hint: "must be a valid e-mail address" },
    ],
    derived: &[],
    vocabulary: StatusVocabulary::simple("PENDING", "COMPLETED").with_intermediate(&["IN_PROGRESS"]),
    uniqueness: Uniqueness::None,
};

/// Trees at risk of falling or touching power lines come first, then trees blocking passage.
pub const TREE_PRUNING_REQUEST: KindSchema = KindSchema {
    module_type: ModuleType::SolicitacaoPoda,
    kind: "tree_pruning_request",
    entity_name: "TreePruningRequest",
    fields: &[
        FieldSpec::text("requestorName", "Requestor").aliases(&["citizenName"]),
        FieldSpec::text("requestorCpf", "Requestor CPF").aliases(&["cpf"]),
        FieldSpec::text("location", "Location").aliases(&["address"]),
        FieldSpec::text("treeSpecies", "Tree species").aliases(&["treeType"]),
        FieldSpec::decimal("treeHeight", "Tree height (m)"),
        FieldSpec::choice("pruningType", "Pruning type", &["LIGHT", "HEAVY", "REMOVAL"])
            .or(FieldDefault::Text("LIGHT")),
        FieldSpec::choice("reason", "Reason", &["RISK", "BLOCKING", "MAINTENANCE"])
            .or(FieldDefault::Text("MAINTENANCE")),
        FieldSpec::boolean("nearPowerLines", "Near power lines"),
        FieldSpec::text("description", "Description"),
        FieldSpec::object("photos", "Photos"),
        FieldSpec::date("preferredDate", "Preferred date"),
    ],
    rules: &[
        Rule::Required("location"),
        Rule::Range { field: "treeHeight", min: 0.0, max: 100.0 },
        Rule::Date("preferredDate"),
    ],
    derived: &[DerivedField {
        field: "priority",
        cases: &[
            (Condition::Equals("reason", "RISK"), "URGENT"),
            (Condition::IsTrue("nearPowerLines"), "URGENT"),
            (Condition::Equals("reason", "BLOCKING"), "HIGH"),
        ],
        otherwise: "NORMAL",
    }],
    vocabulary: StatusVocabulary::simple("REQUESTED", "COMPLETED").with_intermediate(&["SCHEDULED"]),
    uniqueness: Uniqueness::None,
};

pub const SPECIAL_COLLECTION: KindSchema = KindSchema {
    module_type: ModuleType::ColetaEspecial,
    kind: "special_collection",
    entity_name: "SpecialCollection",
    fields: &[
        FieldSpec::choice("collectionType", "Collection", &["DEBRIS", "FURNITURE", "ELECTRONICS", "GARDEN", "OTHER"])
            .aliases(&["wasteType"])
            .or(FieldDefault::Text("DEBRIS")),
        FieldSpec::text("requestorName", "Requestor").aliases(&["citizenName"]),
        FieldSpec::text("address", "Address").aliases(&["location"]),
        FieldSpec::text("description", "Description"),
        FieldSpec::decimal("estimatedVolume", "Estimated volume (m³)"),
        FieldSpec::integer("quantity", "Items"),
        FieldSpec::choice("blocking", "Blocking the street", &["YES", "NO", "PARTIAL"]).or(FieldDefault::Text("NO")),
        FieldSpec::boolean("hasHazardousMaterial", "Hazardous material"),
        FieldSpec::date("preferredDate", "Preferred date"),
        FieldSpec::choice("timeSlot", "Time slot", &["MORNING", "AFTERNOON"]),
    ],
    rules: &[
        Rule::Required("address"),
        Rule::Range { field: "estimatedVolume", min: 0.0, max: 100.0 },
        Rule::Range { field: "quantity", min: 1.0, max: 1_000.0 },
        Rule::Date("preferredDate"),
    ],
    derived: &[DerivedField {
        field: "priority",
        cases: &[(Condition::Equals("blocking", "YES"), "HIGH")],
        otherwise: "NORMAL",
    }],
    vocabulary: StatusVocabulary::simple("REQUESTED", "COLLECTED").with_intermediate(&["SCHEDULED"]),
    uniqueness: Uniqueness::None,
};

pub const WEEDING_REQUEST: KindSchema = KindSchema {
    module_type: ModuleType::SolicitacaoCapina,
    kind: "weeding_request",
    entity_name: "WeedingRequest",
    fields: &[
        FieldSpec::text("requestorName", "Requestor").aliases(&["citizenName"]),
        FieldSpec::text("location", "Location").aliases(&["address"]),
        FieldSpec::decimal("areaSize", "Area (m²)"),
        FieldSpec::choice("terrainType", "Terrain", &["FLAT", "SLOPED", "IRREGULAR"]).or(FieldDefault::Text("FLAT")),
        FieldSpec::choice("accessType", "Access", &["EASY", "MODERATE", "DIFFICULT"]).or(FieldDefault::Text("EASY")),
        FieldSpec::text("description", "Description"),
        FieldSpec::choice("urgency", "Urgency", URGENCY).or(FieldDefault::Text("NORMAL")),
        FieldSpec::date("preferredDate", "Preferred date"),
    ],
    rules: &[
        Rule::Required("location"),
        Rule::Range { field: "areaSize", min: 0.0, max: 1_000_000.0 },
        Rule::Date("preferredDate"),
    ],
    derived: &[],
    vocabulary: StatusVocabulary::simple("REQUESTED", "COMPLETED").with_intermediate(&["SCHEDULED"]),
    uniqueness: Uniqueness::None,
};
