use digiurban_kernel::prelude::*;

const URGENCY: &[&str] = &["BAIXA", "NORMAL", "ALTA", "URGENTE"];
const SENSITIVE_SITES: &[&str] = &["nearSchool", "nearHospital", "accidentHistory"];

pub const PUBLIC_WORKS_ATTENDANCE: KindSchema = KindSchema {
    module_type: ModuleType::AtendimentosObras,
    kind: "public_works_attendance",
    entity_name: "PublicWorksAttendance",
    fields: &[
        FieldSpec::text("citizenName", "Citizen").aliases(&["reporterName"]),
        FieldSpec::text("citizenCpf", "CPF").aliases(&["cpf"]),
        FieldSpec::text("phone", "Phone"),
        FieldSpec::text("serviceType", "Service type")
            .aliases(&["problemType"])
            .or(FieldDefault::Text("MANUTENCAO")),
        FieldSpec::text("subject", "Subject").or(FieldDefault::Text("Solicitação de obra")),
        FieldSpec::text("description", "Description"),
        FieldSpec::text("location", "Location").aliases(&["address"]),
        FieldSpec::choice("urgency", "Urgency", URGENCY).or(FieldDefault::Text("NORMAL")),
    ],
    rules: &[Rule::Required("description"), Rule::Required("location")],
    derived: &[],
    vocabulary: StatusVocabulary::simple("PENDING", "COMPLETED").with_intermediate(&["IN_PROGRESS"]),
    uniqueness: Uniqueness::None,
};

/// Road repairs, signage included. `priority` ranks missing signage near schools, hospitals or
/// accident spots first, then damaged signage on busy roads.
pub const ROAD_REPAIR_REQUEST: KindSchema = KindSchema {
    module_type: ModuleType::SolicitacaoReparoVia,
    kind: "road_repair_request",
    entity_name: "RoadRepairRequest",
    fields: &[
        FieldSpec::text("citizenName", "Citizen").aliases(&["reporterName"]),
        FieldSpec::text("roadName", "Road").aliases(&["street"]),
        FieldSpec::text("location", "Location").aliases(&["address"]),
        FieldSpec::choice("problemType", "Problem", &["POTHOLE", "CRACK", "SIGNAGE", "DRAINAGE", "OTHER"])
            .or(FieldDefault::Text("POTHOLE")),
        FieldSpec::choice("issue", "Signage issue", &["MISSING", "DAMAGED", "FADED", "INCORRECTLY_PLACED"]),
        FieldSpec::choice("trafficImpact", "Traffic impact", &["LOW", "MEDIUM", "HIGH"]),
        FieldSpec::choice("severity", "Severity", &["LOW", "MEDIUM", "HIGH", "CRITICAL"])
            .or(FieldDefault::Text("MEDIUM")),
        FieldSpec::boolean("nearSchool", "Near a school"),
        FieldSpec::boolean("nearHospital", "Near a hospital"),
        FieldSpec::boolean("accidentHistory", "Accident history"),
        FieldSpec::decimal("affectedArea", "Affected area (m²)"),
        FieldSpec::text("description", "Description"),
        FieldSpec::object("photos", "Photos"),
    ],
    rules: &[
        Rule::Required("location"),
        Rule::RequiredIf { field: "issue", when: Condition::Equals("problemType", "SIGNAGE") },
        Rule::Range { field: "affectedArea", min: 0.0, max: 100_000.0 },
    ],
    derived: &[DerivedField {
        field: "priority",
        cases: &[
            (Condition::Equals("severity", "CRITICAL"), "URGENT"),
            (
                Condition::All(&[Condition::AnyTrue(SENSITIVE_SITES), Condition::Equals("issue", "MISSING")]),
                "URGENT",
            ),
            (
                Condition::All(&[Condition::Equals("trafficImpact", "HIGH"), Condition::Equals("issue", "DAMAGED")]),
                "HIGH",
            ),
            (Condition::Equals("issue", "FADED"), "NORMAL"),
            (Condition::Equals("trafficImpact", "MEDIUM"), "NORMAL"),
        ],
        otherwise: "LOW",
    }],
    vocabulary: StatusVocabulary::simple("PENDING", "COMPLETED").with_intermediate(&["SCHEDULED", "IN_PROGRESS"]),
    uniqueness: Uniqueness::None,
};

pub const TECHNICAL_INSPECTION: KindSchema = KindSchema {
    module_type: ModuleType::VistoriaTecnicaObras,
    kind: "technical_inspection",
    entity_name: "TechnicalInspection",
    fields: &[
        FieldSpec::text("requestorName", "Requestor").aliases(&["citizenName"]),
        FieldSpec::text("requestorCpf", "Requestor CPF").aliases(&["cpf"]),
        FieldSpec::choice("inspectionType", "Inspection type", &["CONSTRUCTION", "STRUCTURAL", "RISK_AREA", "OTHER"])
            .or(FieldDefault::Text("CONSTRUCTION")),
        FieldSpec::text("subject", "Subject")
            .aliases(&["purpose"])
            .or(FieldDefault::Text("Vistoria técnica")),
        FieldSpec::text("description", "Description"),
        FieldSpec::text("location", "Location").aliases(&["address"]),
        FieldSpec::text("propertyType", "Property type"),
        FieldSpec::text("constructionStage", "Construction stage"),
        FieldSpec::object("documents", "Documents"),
        FieldSpec::date("scheduledDate", "Scheduled date"),
    ],
    rules: &[
        Rule::Required("location"),
        Rule::Digits { field: "requestorCpf", count: 11 },
        Rule::Date("scheduledDate"),
    ],
    derived: &[],
    vocabulary: StatusVocabulary::simple("PENDING", "COMPLETED").with_intermediate(&["SCHEDULED"]),
    uniqueness: Uniqueness::None,
};
