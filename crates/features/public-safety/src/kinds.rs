use digiurban_kernel::prelude::*;
use digiurban_kernel::schema::patterns;

const SEVERITY: &[&str] = &["BAIXA", "MEDIA", "ALTA", "CRITICA"];

pub const SECURITY_ATTENDANCE: KindSchema = KindSchema {
    module_type: ModuleType::AtendimentosSeguranca,
    kind: "security_attendance",
    entity_name: "SecurityAttendance",
    fields: &[
        FieldSpec::text("citizenName", "Citizen")
            .aliases(&["reporterName"])
            .or(FieldDefault::Text("Anônimo")),
        FieldSpec::text("citizenCpf", "CPF").aliases(&["cpf"]),
        FieldSpec::text("contact", "Contact").aliases(&["phone"]),
        FieldSpec::text("serviceType", "Service type")
            .aliases(&["incidentType"])
            .or(FieldDefault::Text("OUTROS")),
        FieldSpec::text("subject", "Subject").or(FieldDefault::Text("Atendimento de segurança")),
        FieldSpec::text("description", "Description"),
        FieldSpec::text("location", "Location").aliases(&["address"]),
        FieldSpec::choice("urgency", "Urgency", &["BAIXA", "NORMAL", "ALTA", "URGENTE"])
            .or(FieldDefault::Text("NORMAL")),
    ],
    rules: &[Rule::Required("description")],
    derived: &[],
    vocabulary: StatusVocabulary::simple("PENDING", "COMPLETED").with_intermediate(&["IN_PROGRESS"]),
    uniqueness: Uniqueness::None,
};

pub const SECURITY_OCCURRENCE: KindSchema = KindSchema {
    module_type: ModuleType::RegistroOcorrencia,
    kind: "security_occurrence",
    entity_name: "SecurityOccurrence",
    fields: &[
        FieldSpec::text("occurrenceType", "Occurrence type").or(FieldDefault::Text("OUTROS")),
        FieldSpec::choice("severity", "Severity", SEVERITY).or(FieldDefault::Text("MEDIA")),
        FieldSpec::text("reporterName", "Reporter")
            .aliases(&["citizenName"])
            .or(FieldDefault::Text("Anônimo")),
        FieldSpec::text("reporterPhone", "Reporter phone").aliases(&["phone"]),
        FieldSpec::text("location", "Location").aliases(&["address"]),
        FieldSpec::text("description", "Description"),
        FieldSpec::date("occurrenceDate", "Occurrence date").or(FieldDefault::Today),
    ],
    rules: &[Rule::Required("description"), Rule::Required("location"), Rule::Date("occurrenceDate")],
    derived: &[],
    vocabulary: StatusVocabulary::simple("OPEN", "RESOLVED").with_intermediate(&["INVESTIGATING"]),
    uniqueness: Uniqueness::None,
};

pub const PATROL_REQUEST: KindSchema = KindSchema {
    module_type: ModuleType::SolicitacaoRonda,
    kind: "patrol_request",
    entity_name: "PatrolRequest",
    fields: &[
        FieldSpec::text("requesterName", "Requester").aliases(&["citizenName"]),
        FieldSpec::text("requesterPhone", "Requester phone").aliases(&["phone"]),
        FieldSpec::choice("patrolType", "Patrol type", &["PREVENTIVE", "EVENT", "COMPLAINT"])
            .aliases(&["type"])
            .or(FieldDefault::Text("PREVENTIVE")),
        FieldSpec::text("reason", "Reason").aliases(&["description"]),
        FieldSpec::text("location", "Location").aliases(&["address"]),
        FieldSpec::text("area", "Area").aliases(&["neighborhood"]),
        FieldSpec::choice("frequency", "Frequency", &["ONCE", "DAILY", "WEEKLY", "MONTHLY"])
            .or(FieldDefault::Text("ONCE")),
        FieldSpec::date("requestedDate", "Requested date"),
        FieldSpec::text("requestedTime", "Requested time"),
        FieldSpec::text("observations", "Observations"),
    ],
    rules: &[
        Rule::Required("location"),
        Rule::Date("requestedDate"),
        Rule::Pattern { field: "requestedTime", pattern: patterns::TIME_OF_DAY, hint: "must be a time in HH:MM format" },
    ],
    derived: &[],
    vocabulary: StatusVocabulary::simple("PENDING", "APPROVED").with_intermediate(&["SCHEDULED"]),
    uniqueness: Uniqueness::None,
};

/// Tips are screened before being forwarded; `priority` is derived from the urgency flag and
/// the reported danger level.
pub const ANONYMOUS_TIP: KindSchema = KindSchema {
    module_type: ModuleType::DenunciaAnonima,
    kind: "anonymous_tip",
    entity_name: "AnonymousTip",
    fields: &[
        FieldSpec::text("tipType", "Tip type").aliases(&["type"]).or(FieldDefault::Text("OTHER")),
        FieldSpec::text("category", "Category"),
        FieldSpec::text("description", "Description"),
        FieldSpec::text("location", "Location").aliases(&["address"]),
        FieldSpec::text("timeframe", "Timeframe"),
        FieldSpec::boolean("hasEvidence", "Has evidence"),
        FieldSpec::text("evidenceNotes", "Evidence notes"),
        FieldSpec::boolean("isUrgent", "Urgent"),
        FieldSpec::choice("dangerLevel", "Danger level", &["LOW", "MEDIUM", "HIGH"])
            .aliases(&["severity"])
            .or(FieldDefault::Text("MEDIUM")),
        FieldSpec::object("suspectInfo", "Suspect"),
        FieldSpec::object("vehicleInfo", "Vehicle"),
    ],
    rules: &[
        Rule::Required("description"),
        Rule::RequiredIf { field: "evidenceNotes", when: Condition::IsTrue("hasEvidence") },
    ],
    derived: &[DerivedField {
        field: "priority",
        cases: &[(Condition::IsTrue("isUrgent"), "URGENT"), (Condition::Equals("dangerLevel", "HIGH"), "HIGH")],
        otherwise: "NORMAL",
    }],
    vocabulary: StatusVocabulary::simple("RECEIVED", "FORWARDED").with_review("UNDER_ANALYSIS", "VERIFIED"),
    uniqueness: Uniqueness::None,
};
