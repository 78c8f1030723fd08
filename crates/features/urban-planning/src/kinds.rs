use digiurban_kernel::prelude::*;
use digiurban_kernel::schema::patterns;

pub const URBAN_PLANNING_ATTENDANCE: KindSchema = KindSchema {
    module_type: ModuleType::AtendimentosPlanejamento,
    kind: "urban_planning_attendance",
    entity_name: "UrbanPlanningAttendance",
    fields: &[
        FieldSpec::text("citizenName", "Citizen").aliases(&["requesterName"]),
        FieldSpec::text("citizenCpf", "CPF").aliases(&["cpf"]),
        FieldSpec::text("citizenPhone", "Phone").aliases(&["phone"]),
        FieldSpec::text("citizenEmail", "E-mail").aliases(&["email"]),
        FieldSpec::text("subject", "Subject").or(FieldDefault::Text("Atendimento de planejamento urbano")),
        FieldSpec::text("description", "Description"),
        FieldSpec::text("attendanceType", "Attendance type").or(FieldDefault::Text("INFORMACAO")),
    ],
    rules: &[
        Rule::Required("citizenCpf"),
        Rule::Digits { field: "citizenCpf", count: 11 },
        Rule::Pattern { field: "citizenEmail", pattern: patterns::EMAIL, hint: "must be a valid e-mail address" },
    ],
    derived: &[],
    vocabulary: StatusVocabulary::simple("OPEN", "CLOSED").with_intermediate(&["IN_PROGRESS"]),
    uniqueness: Uniqueness::None,
};

/// Building permits may go through a technical review before approval.
pub const BUILDING_PERMIT: KindSchema = KindSchema {
    module_type: ModuleType::AlvaraConstrucao,
    kind: "building_permit",
    entity_name: "BuildingPermit",
    fields: &[
        FieldSpec::text("ownerName", "Owner").aliases(&["applicantName", "citizenName"]),
        FieldSpec::text("ownerCpf", "Owner CPF").aliases(&["applicantCpf", "cpf"]),
        FieldSpec::text("ownerPhone", "Owner phone").aliases(&["applicantPhone", "phone"]),
        FieldSpec::text("propertyAddress", "Property").aliases(&["address"]),
        FieldSpec::text("propertyNumber", "Number").or(FieldDefault::Text("S/N")),
        FieldSpec::text("neighborhood", "Neighborhood").aliases(&["bairro"]),
        FieldSpec::choice("projectType", "Project type", &["RESIDENTIAL", "COMMERCIAL", "INDUSTRIAL", "MIXED"])
            .or(FieldDefault::Text("RESIDENTIAL")),
        FieldSpec::decimal("constructionArea", "Construction area (m²)").or(FieldDefault::Decimal(0.0)),
        FieldSpec::decimal("totalArea", "Total area (m²)").or(FieldDefault::Decimal(0.0)),
        FieldSpec::integer("floors", "Floors").or(FieldDefault::Integer(1)),
        FieldSpec::text("engineerName", "Engineer"),
        FieldSpec::text("engineerCrea", "Engineer CREA"),
    ],
    rules: &[
        Rule::Required("ownerCpf"),
        Rule::Digits { field: "ownerCpf", count: 11 },
        Rule::Required("propertyAddress"),
        Rule::Range { field: "floors", min: 1.0, max: 60.0 },
        Rule::Range { field: "constructionArea", min: 0.0, max: 1_000_000.0 },
        Rule::RequiredIf { field: "engineerCrea", when: Condition::Present("engineerName") },
    ],
    derived: &[],
    vocabulary: StatusVocabulary::simple("ANALYSIS", "APPROVED").with_review("UNDER_REVIEW", "REVIEWED"),
    uniqueness: Uniqueness::None,
};

pub const CERTIFICATE_REQUEST: KindSchema = KindSchema {
    module_type: ModuleType::SolicitacaoCertidao,
    kind: "certificate_request",
    entity_name: "CertificateRequest",
    fields: &[
        FieldSpec::text("requesterName", "Requester").aliases(&["applicantName", "citizenName"]),
        FieldSpec::text("requesterCpf", "Requester CPF").aliases(&["applicantCpf", "cpf"]),
        FieldSpec::text("requesterEmail", "E-mail").aliases(&["applicantEmail", "email"]),
        FieldSpec::choice("certificateType", "Certificate", &["USO_SOLO", "NUMERACAO", "DEMOLICAO", "HABITE_SE"])
            .or(FieldDefault::Text("USO_SOLO")),
        FieldSpec::text("purpose", "Purpose").aliases(&["reason", "description"]),
        FieldSpec::text("propertyAddress", "Property").aliases(&["address"]),
        FieldSpec::text("propertyRegistration", "Property registration"),
        FieldSpec::text("lotNumber", "Lot"),
        FieldSpec::text("block", "Block"),
    ],
    rules: &[
        Rule::Required("requesterCpf"),
        Rule::Digits { field: "requesterCpf", count: 11 },
        Rule::Pattern { field: "requesterEmail", pattern: patterns::EMAIL, hint: "must be a valid e-mail address" },
    ],
    derived: &[],
    vocabulary: StatusVocabulary::simple("PENDING", "ISSUED"),
    uniqueness: Uniqueness::None,
};

pub const URBAN_INFRACTION: KindSchema = KindSchema {
    module_type: ModuleType::DenunciaConstrucaoIrregular,
    kind: "urban_infraction",
    entity_name: "UrbanInfraction",
    fields: &[
        FieldSpec::text("complainantName", "Complainant").aliases(&["reporterName", "citizenName"]),
        FieldSpec::text("complainantPhone", "Complainant phone").aliases(&["reporterPhone", "phone"]),
        FieldSpec::text("infractionType", "Infraction").or(FieldDefault::Text("IRREGULAR_CONSTRUCTION")),
        FieldSpec::text("description", "Description"),
        FieldSpec::text("propertyAddress", "Property").aliases(&["address"]),
        FieldSpec::text("neighborhood", "Neighborhood").aliases(&["bairro"]),
        FieldSpec::decimal("latitude", "Latitude"),
        FieldSpec::decimal("longitude", "Longitude"),
        FieldSpec::object("photos", "Photos"),
        FieldSpec::choice("priority", "Priority", &["LOW", "MEDIUM", "HIGH"])
            .aliases(&["severity"])
            .or(FieldDefault::Text("MEDIUM")),
    ],
    rules: &[
        Rule::Required("description"),
        Rule::Required("propertyAddress"),
        Rule::Range { field: "latitude", min: -90.0, max: 90.0 },
        Rule::Range { field: "longitude", min: -180.0, max: 180.0 },
    ],
    derived: &[],
    vocabulary: StatusVocabulary::simple("OPEN", "RESOLVED").with_intermediate(&["INSPECTION_SCHEDULED"]),
    uniqueness: Uniqueness::None,
};
