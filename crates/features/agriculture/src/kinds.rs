use digiurban_kernel::prelude::*;
use digiurban_kernel::schema::patterns;

pub const AGRICULTURE_ATTENDANCE: KindSchema = KindSchema {
    module_type: ModuleType::AtendimentosAgricultura,
    kind: "agriculture_attendance",
    entity_name: "AgricultureAttendance",
    fields: &[
        FieldSpec::text("serviceType", "Service type")
            .aliases(&["tipoServico"])
            .or(FieldDefault::Text("ASSISTENCIA_TECNICA")),
        FieldSpec::text("subject", "Subject").aliases(&["assunto"]),
        FieldSpec::text("description", "Description").aliases(&["descricao"]),
        FieldSpec::text("category", "Category")
            .aliases(&["categoria"])
            .or(FieldDefault::Text("GERAL")),
        FieldSpec::choice("urgency", "Urgency", &["BAIXA", "NORMAL", "ALTA", "URGENTE"])
            .aliases(&["urgencia"])
            .or(FieldDefault::Text("NORMAL")),
        FieldSpec::text("propertyName", "Property").aliases(&["nomePropriedade"]),
        FieldSpec::text("location", "Location").aliases(&["localizacao"]),
        FieldSpec::decimal("propertySize", "Property size (ha)").aliases(&["tamanhoPropriedade"]),
        FieldSpec::list("crops", "Crops").aliases(&["culturas"]),
        FieldSpec::date("preferredVisitDate", "Preferred visit date"),
    ],
    rules: &[
        Rule::Required("description"),
        Rule::Range { field: "propertySize", min: 0.0, max: 100_000.0 },
        Rule::Date("preferredVisitDate"),
    ],
    derived: &[],
    vocabulary: StatusVocabulary::simple("PENDING", "COMPLETED").with_intermediate(&["SCHEDULED"]),
    uniqueness: Uniqueness::None,
};

/// One producer record per citizen; the CPF is mandatory.
pub const RURAL_PRODUCER: KindSchema = KindSchema {
    module_type: ModuleType::CadastroProdutor,
    kind: "rural_producer",
    entity_name: "RuralProducer",
    fields: &[
        FieldSpec::text("name", "Producer name").aliases(&["producerName", "nome"]),
        FieldSpec::text("document", "CPF").aliases(&["cpf", "producerCpf"]),
        FieldSpec::text("phone", "Phone").aliases(&["telefone"]),
        FieldSpec::text("email", "E-mail"),
        FieldSpec::text("address", "Address").aliases(&["endereco"]),
        FieldSpec::text("productionType", "Production type")
            .aliases(&["producerType", "tipoProdutor"])
            .or(FieldDefault::Text("INDIVIDUAL")),
        FieldSpec::text("mainCrop", "Main activity")
            .aliases(&["mainActivity", "principaisProducoes"])
            .or(FieldDefault::Text("AGRICULTURA")),
        FieldSpec::decimal("propertySize", "Property size (ha)").aliases(&["tamanhoPropriedade"]),
    ],
    rules: &[
        Rule::Required("name"),
        Rule::Required("document"),
        Rule::Digits { field: "document", count: 11 },
        Rule::Pattern { field: "email", pattern: patterns::EMAIL, hint: "must be a valid e-mail address" },
        Rule::Pattern { field: "phone", pattern: patterns::PHONE, hint: "must be a phone number with area code" },
    ],
    derived: &[],
    vocabulary: StatusVocabulary::simple("PENDING", "ACTIVE"),
    uniqueness: Uniqueness::PerCitizen,
};

/// Course enrollment. Several enrollments per citizen are fine as long as they target
/// different courses, so no per-citizen uniqueness applies.
pub const RURAL_TRAINING_ENROLLMENT: KindSchema = KindSchema {
    module_type: ModuleType::InscricaoCursoRural,
    kind: "rural_training_enrollment",
    entity_name: "RuralTrainingEnrollment",
    fields: &[
        FieldSpec::text("trainingId", "Course").aliases(&["cursoId", "courseId"]),
        FieldSpec::text("applicantName", "Applicant").aliases(&["name", "nome"]),
        FieldSpec::text("applicantCpf", "Applicant CPF").aliases(&["cpf"]),
        FieldSpec::text("applicantPhone", "Phone").aliases(&["phone", "telefone"]),
        FieldSpec::list("documents", "Documents"),
        FieldSpec::object("customData", "Additional answers"),
        FieldSpec::text("observations", "Observations").aliases(&["observacoes"]),
    ],
    rules: &[
        Rule::Required("trainingId"),
        Rule::Required("applicantCpf"),
        Rule::Digits { field: "applicantCpf", count: 11 },
        Rule::Pattern { field: "applicantPhone", pattern: patterns::PHONE, hint: "must be a phone number with area code" },
    ],
    derived: &[],
    vocabulary: StatusVocabulary::simple("PENDING", "APPROVED"),
    uniqueness: Uniqueness::None,
};
