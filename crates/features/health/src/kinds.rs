use digiurban_kernel::prelude::*;
use digiurban_kernel::schema::patterns;

const URGENCY: &[&str] = &["BAIXA", "NORMAL", "ALTA", "URGENTE"];

pub const HEALTH_ATTENDANCE: KindSchema = KindSchema {
    module_type: ModuleType::AtendimentosSaude,
    kind: "health_attendance",
    entity_name: "HealthAttendance",
    fields: &[
        FieldSpec::choice("type", "Attendance type", &["CONSULTA", "EXAME", "RETORNO", "VACINA", "OUTRO"])
            .or(FieldDefault::Text("CONSULTA")),
        FieldSpec::text("description", "Description").aliases(&["symptoms"]),
        FieldSpec::choice("urgency", "Urgency", URGENCY).or(FieldDefault::Text("NORMAL")),
        FieldSpec::text("observations", "Observations"),
    ],
    rules: &[Rule::Required("description")],
    derived: &[],
    vocabulary: StatusVocabulary::simple("PENDING", "APPROVED"),
    uniqueness: Uniqueness::None,
};

pub const HEALTH_APPOINTMENT: KindSchema = KindSchema {
    module_type: ModuleType::AgendamentosMedicos,
    kind: "health_appointment",
    entity_name: "HealthAppointment",
    fields: &[
        FieldSpec::date("appointmentDate", "Appointment date").or(FieldDefault::Today),
        FieldSpec::text("appointmentTime", "Appointment time").or(FieldDefault::Text("08:00")),
        FieldSpec::text("speciality", "Speciality")
            .aliases(&["specialty"])
            .or(FieldDefault::Text("GENERAL")),
        FieldSpec::choice("priority", "Priority", URGENCY).or(FieldDefault::Text("NORMAL")),
        FieldSpec::text("symptoms", "Symptoms"),
        FieldSpec::text("observations", "Observations"),
    ],
    rules: &[
        Rule::Date("appointmentDate"),
        Rule::Pattern {
            field: "appointmentTime",
            pattern: patterns::TIME_OF_DAY,
            hint: "must be a time in HH:MM format",
        },
    ],
    derived: &[],
    vocabulary: StatusVocabulary::simple("SCHEDULED", "CONFIRMED"),
    uniqueness: Uniqueness::None,
};

/// Moves `REQUESTED → SCHEDULED → CONFIRMED` through updates before approval.
pub const HEALTH_TRANSPORT_REQUEST: KindSchema = KindSchema {
    module_type: ModuleType::TransportePacientes,
    kind: "health_transport_request",
    entity_name: "HealthTransportRequest",
    fields: &[
        FieldSpec::text("requestType", "Request type").or(FieldDefault::Text("CONSULTA")),
        FieldSpec::text("specialty", "Specialty"),
        FieldSpec::text("origin", "Origin")
            .aliases(&["address"])
            .or(FieldDefault::Text("Não informado")),
        FieldSpec::text("destination", "Destination").or(FieldDefault::Text("A definir")),
        FieldSpec::choice("transportType", "Transport type", &["AMBULANCIA", "VAN", "CARRO", "ONIBUS"])
            .or(FieldDefault::Text("AMBULANCIA")),
        FieldSpec::text("reason", "Reason")
            .aliases(&["description"])
            .or(FieldDefault::Text("Transporte para tratamento")),
        FieldSpec::choice("urgencyLevel", "Urgency level", URGENCY).or(FieldDefault::Text("NORMAL")),
        FieldSpec::text("diagnosis", "Diagnosis"),
        FieldSpec::text("medicalJustification", "Medical justification").aliases(&["observations"]),
        FieldSpec::date("travelDate", "Travel date"),
        FieldSpec::boolean("needsCompanion", "Needs companion"),
        FieldSpec::text("companionName", "Companion name"),
    ],
    rules: &[
        Rule::RequiredIf { field: "companionName", when: Condition::IsTrue("needsCompanion") },
        Rule::RequiredIf {
            field: "medicalJustification",
            when: Condition::Equals("urgencyLevel", "URGENTE"),
        },
        Rule::Date("travelDate"),
    ],
    derived: &[],
    vocabulary: StatusVocabulary::simple("REQUESTED", "APPROVED")
        .with_intermediate(&["SCHEDULED", "CONFIRMED"]),
    uniqueness: Uniqueness::None,
};

/// One live registration per citizen; the SUS card carries 15 digits.
pub const PATIENT: KindSchema = KindSchema {
    module_type: ModuleType::CadastroPaciente,
    kind: "patient",
    entity_name: "Patient",
    fields: &[
        FieldSpec::choice("bloodType", "Blood type", &["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"]),
        FieldSpec::text("susCardNumber", "SUS card number"),
        FieldSpec::text("emergencyContactName", "Emergency contact").aliases(&["emergencyContact"]),
        FieldSpec::text("emergencyContactPhone", "Emergency phone").aliases(&["emergencyPhone"]),
        FieldSpec::text("observations", "Observations"),
    ],
    rules: &[
        Rule::Required("susCardNumber"),
        Rule::Digits { field: "susCardNumber", count: 15 },
        Rule::RequiredIf {
            field: "emergencyContactPhone",
            when: Condition::Present("emergencyContactName"),
        },
        Rule::Pattern {
            field: "emergencyContactPhone",
            pattern: patterns::PHONE,
            hint: "must be a phone number with area code",
        },
    ],
    derived: &[],
    vocabulary: StatusVocabulary::simple("PENDING_APPROVAL", "ACTIVE"),
    uniqueness: Uniqueness::PerCitizen,
};

pub const COMMUNITY_HEALTH_AGENT: KindSchema = KindSchema {
    module_type: ModuleType::GestaoAcs,
    kind: "community_health_agent",
    entity_name: "CommunityHealthAgent",
    fields: &[
        FieldSpec::text("registrationNumber", "Registration number"),
        FieldSpec::date("hireDate", "Hire date").or(FieldDefault::Today),
        FieldSpec::choice("contractType", "Contract type", &["EFETIVO", "CONTRATADO", "TEMPORARIO"]),
        FieldSpec::text("healthUnitId", "Health unit id"),
        FieldSpec::text("healthUnitName", "Health unit").aliases(&["healthUnit"]),
        FieldSpec::text("assignedArea", "Assigned area")
            .aliases(&["area"])
            .or(FieldDefault::Text("A definir")),
        FieldSpec::text("observations", "Observations"),
    ],
    rules: &[Rule::Required("registrationNumber"), Rule::Date("hireDate")],
    derived: &[],
    vocabulary: StatusVocabulary::simple("PENDING", "ACTIVE"),
    uniqueness: Uniqueness::PerCitizen,
};
