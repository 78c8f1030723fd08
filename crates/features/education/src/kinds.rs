use digiurban_kernel::prelude::*;
use digiurban_kernel::schema::patterns;

const PRIORITY: &[&str] = &["BAIXA", "NORMAL", "ALTA", "URGENTE"];

pub const EDUCATION_ATTENDANCE: KindSchema = KindSchema {
    module_type: ModuleType::AtendimentosEducacao,
    kind: "education_attendance",
    entity_name: "EducationAttendance",
    fields: &[
        FieldSpec::text("serviceType", "Service type")
            .aliases(&["attendanceType"])
            .or(FieldDefault::Text("INFORMACAO")),
        FieldSpec::text("description", "Description").aliases(&["subject"]),
        FieldSpec::choice("priority", "Priority", PRIORITY).or(FieldDefault::Text("NORMAL")),
        FieldSpec::text("schoolName", "School"),
    ],
    rules: &[Rule::Required("description")],
    derived: &[],
    vocabulary: StatusVocabulary::simple("PENDING", "COMPLETED"),
    uniqueness: Uniqueness::None,
};

/// Document requests: declarations, transcripts, certificates.
pub const SCHOOL_DOCUMENT: KindSchema = KindSchema {
    module_type: ModuleType::SolicitacaoDocumentoEscolar,
    kind: "school_document",
    entity_name: "SchoolDocument",
    fields: &[
        FieldSpec::text("studentId", "Student id"),
        FieldSpec::text("studentName", "Student name"),
        FieldSpec::choice(
            "documentType",
            "Document type",
            &["DECLARACAO", "HISTORICO", "CERTIFICADO", "BOLETIM", "TRANSFERENCIA"],
        )
        .or(FieldDefault::Text("DECLARACAO")),
        FieldSpec::text("purpose", "Purpose").aliases(&["reason"]),
        FieldSpec::choice("deliveryMethod", "Delivery method", &["PRESENCIAL", "EMAIL", "MAIL"])
            .or(FieldDefault::Text("PRESENCIAL")),
        FieldSpec::text("deliveryAddress", "Delivery address").aliases(&["address"]),
        FieldSpec::text("deliveryEmail", "Delivery e-mail").aliases(&["email"]),
        FieldSpec::text("observations", "Observations"),
    ],
    rules: &[
        Rule::RequiredIf {
            field: "deliveryAddress",
            when: Condition::Equals("deliveryMethod", "MAIL"),
        },
        Rule::RequiredIf {
            field: "deliveryEmail",
            when: Condition::Equals("deliveryMethod", "EMAIL"),
        },
        Rule::Pattern {
            field: "deliveryEmail",
            pattern: patterns::EMAIL,
            hint: "must be a valid e-mail address",
        },
    ],
    derived: &[],
    vocabulary: StatusVocabulary::simple("PENDING", "APPROVED").with_intermediate(&["IN_PREPARATION"]),
    uniqueness: Uniqueness::None,
};

/// School incidents go through review before the measure takes effect.
pub const DISCIPLINARY_RECORD: KindSchema = KindSchema {
    module_type: ModuleType::RegistroOcorrenciaEscolar,
    kind: "disciplinary_record",
    entity_name: "DisciplinaryRecord",
    fields: &[
        FieldSpec::text("studentId", "Student id"),
        FieldSpec::text("schoolId", "School id"),
        FieldSpec::text("incidentType", "Incident type").or(FieldDefault::Text("COMPORTAMENTO")),
        FieldSpec::choice("severity", "Severity", &["LEVE", "MODERADA", "GRAVE"])
            .or(FieldDefault::Text("LEVE")),
        FieldSpec::text("description", "Description"),
        FieldSpec::date("incidentDate", "Incident date").or(FieldDefault::Today),
        FieldSpec::text("measures", "Measures taken").aliases(&["measuresTaken"]),
        FieldSpec::text("responsibleTeacher", "Responsible teacher").aliases(&["teacher"]),
        FieldSpec::choice(
            "disciplinaryAction",
            "Disciplinary action",
            &["WARNING", "SUSPENSION", "REFERRAL", "NONE"],
        )
        .or(FieldDefault::Text("NONE")),
        FieldSpec::integer("suspensionDays", "Suspension days"),
        FieldSpec::date("suspensionStartDate", "Suspension start"),
    ],
    rules: &[
        Rule::Required("studentId"),
        Rule::Required("schoolId"),
        Rule::Required("description"),
        Rule::RequiredIf {
            field: "suspensionDays",
            when: Condition::Equals("disciplinaryAction", "SUSPENSION"),
        },
        Rule::RequiredIf {
            field: "suspensionStartDate",
            when: Condition::Equals("disciplinaryAction", "SUSPENSION"),
        },
        Rule::Range { field: "suspensionDays", min: 1.0, max: 30.0 },
        Rule::Date("incidentDate"),
        Rule::Date("suspensionStartDate"),
    ],
    derived: &[],
    vocabulary: StatusVocabulary::simple("PENDING", "ACTIVE").with_review("PENDING_REVIEW", "REVIEWED"),
    uniqueness: Uniqueness::None,
};

pub const STUDENT_TRANSPORT: KindSchema = KindSchema {
    module_type: ModuleType::TransporteEscolar,
    kind: "student_transport",
    entity_name: "StudentTransport",
    fields: &[
        FieldSpec::text("studentName", "Student name"),
        FieldSpec::text("schoolName", "School"),
        FieldSpec::text("route", "Route").aliases(&["address"]),
        FieldSpec::choice("shift", "Shift", &["MORNING", "AFTERNOON", "EVENING"])
            .or(FieldDefault::Text("MORNING")),
        FieldSpec::list("stops", "Stops"),
    ],
    rules: &[Rule::Required("studentName")],
    derived: &[],
    vocabulary: StatusVocabulary::simple("PENDING", "ACTIVE"),
    uniqueness: Uniqueness::None,
};

pub const STUDENT_TRANSFER: KindSchema = KindSchema {
    module_type: ModuleType::TransferenciaEscolar,
    kind: "student_transfer",
    entity_name: "StudentTransfer",
    fields: &[
        FieldSpec::text("studentId", "Student id"),
        FieldSpec::text("studentName", "Student name"),
        FieldSpec::text("currentSchool", "Current school").aliases(&["originSchool"]),
        FieldSpec::text("targetSchool", "Target school").aliases(&["destinationSchool"]),
        FieldSpec::text("grade", "Grade"),
        FieldSpec::text("transferReason", "Transfer reason").aliases(&["reason"]),
        FieldSpec::date("transferDate", "Transfer date"),
    ],
    rules: &[Rule::Required("targetSchool"), Rule::Date("transferDate")],
    derived: &[],
    vocabulary: StatusVocabulary::simple("PENDING", "APPROVED"),
    uniqueness: Uniqueness::None,
};
