use digiurban_kernel::prelude::*;

const URGENCY: &[&str] = &["BAIXA", "NORMAL", "ALTA", "URGENTE"];

pub const ENVIRONMENTAL_ATTENDANCE: KindSchema = KindSchema {
    module_type: ModuleType::AtendimentosMeioAmbiente,
    kind: "environmental_attendance",
    entity_name: "EnvironmentalAttendance",
    fields: &[
        FieldSpec::text("citizenName", "Citizen").aliases(&["requesterName"]),
        FieldSpec::text("citizenCpf", "CPF").aliases(&["cpf"]),
        FieldSpec::text("contact", "Contact").aliases(&["phone"]),
        FieldSpec::text("serviceType", "Service type").or(FieldDefault::Text("CONSULTA")),
        FieldSpec::text("subject", "Subject").or(FieldDefault::Text("Atendimento ambiental")),
        FieldSpec::text("description", "Description"),
        FieldSpec::choice("urgency", "Urgency", URGENCY).or(FieldDefault::Text("NORMAL")),
    ],
    rules: &[Rule::Required("description"), Rule::Digits { field: "citizenCpf", count: 11 }],
    derived: &[],
    vocabulary: StatusVocabulary::simple("PENDING", "COMPLETED").with_intermediate(&["IN_PROGRESS"]),
    uniqueness: Uniqueness::None,
};

pub const ENVIRONMENTAL_LICENSE: KindSchema = KindSchema {
    module_type: ModuleType::LicencaAmbiental,
    kind: "environmental_license",
    entity_name: "EnvironmentalLicense",
    fields: &[
        FieldSpec::text("applicantName", "Applicant").aliases(&["citizenName"]),
        FieldSpec::text("applicantCpf", "Applicant CPF").aliases(&["cpf"]),
        FieldSpec::choice("licenseType", "License type", &["PREVIA", "INSTALACAO", "OPERACAO", "AMBIENTAL"])
            .or(FieldDefault::Text("AMBIENTAL")),
        FieldSpec::text("activity", "Licensed activity").aliases(&["activityType"]),
        FieldSpec::text("description", "Description"),
        FieldSpec::text("location", "Location").aliases(&["address"]),
        FieldSpec::date("applicationDate", "Application date").or(FieldDefault::Today),
    ],
    rules: &[
        Rule::Required("applicantCpf"),
        Rule::Digits { field: "applicantCpf", count: 11 },
        Rule::Required("activity"),
        Rule::Required("location"),
    ],
    derived: &[],
    vocabulary: StatusVocabulary::simple("UNDER_ANALYSIS", "APPROVED")
        .with_intermediate(&["PENDING_DOCUMENTS", "INSPECTION_SCHEDULED"]),
    uniqueness: Uniqueness::None,
};

/// Complaints are ranked by reported severity.
pub const ENVIRONMENTAL_COMPLAINT: KindSchema = KindSchema {
    module_type: ModuleType::DenunciaAmbiental,
    kind: "environmental_complaint",
    entity_name: "EnvironmentalComplaint",
    fields: &[
        FieldSpec::text("reporterName", "Reporter")
            .aliases(&["citizenName"])
            .or(FieldDefault::Text("Anônimo")),
        FieldSpec::text("reporterPhone", "Reporter phone").aliases(&["phone"]),
        FieldSpec::text("complaintType", "Complaint type").or(FieldDefault::Text("POLUICAO")),
        FieldSpec::choice("severity", "Severity", &["BAIXA", "MEDIA", "ALTA", "CRITICA"])
            .or(FieldDefault::Text("MEDIA")),
        FieldSpec::text("description", "Description"),
        FieldSpec::text("location", "Location").aliases(&["address"]),
        FieldSpec::date("occurrenceDate", "Occurrence date").or(FieldDefault::Today),
    ],
    rules: &[Rule::Required("description"), Rule::Required("location"), Rule::Date("occurrenceDate")],
    derived: &[DerivedField {
        field: "priority",
        cases: &[
            (Condition::Equals("severity", "CRITICA"), "URGENT"),
            (Condition::Equals("severity", "ALTA"), "HIGH"),
        ],
        otherwise: "NORMAL",
    }],
    vocabulary: StatusVocabulary::simple("OPEN", "RESOLVED").with_intermediate(&["INVESTIGATING"]),
    uniqueness: Uniqueness::None,
};

pub const TREE_CUTTING_AUTHORIZATION: KindSchema = KindSchema {
    module_type: ModuleType::AutorizacaoPodaCorte,
    kind: "tree_cutting_authorization",
    entity_name: "TreeCuttingAuthorization",
    fields: &[
        FieldSpec::text("applicantName", "Applicant").aliases(&["citizenName"]),
        FieldSpec::text("applicantCpf", "Applicant CPF").aliases(&["cpf"]),
        FieldSpec::text("propertyAddress", "Property").aliases(&["address"]),
        FieldSpec::choice("requestType", "Request type", &["PODA", "CORTE"]).or(FieldDefault::Text("CORTE")),
        FieldSpec::text("treeSpecies", "Tree species"),
        FieldSpec::integer("treeQuantity", "Number of trees").or(FieldDefault::Integer(1)),
        FieldSpec::text("justification", "Justification").aliases(&["reason", "description"]),
    ],
    rules: &[
        Rule::Required("applicantCpf"),
        Rule::Digits { field: "applicantCpf", count: 11 },
        Rule::Required("justification"),
        Rule::Range { field: "treeQuantity", min: 1.0, max: 500.0 },
    ],
    derived: &[],
    vocabulary: StatusVocabulary::simple("PENDING", "AUTHORIZED").with_intermediate(&["INSPECTION_SCHEDULED"]),
    uniqueness: Uniqueness::None,
};
