use digiurban_kernel::prelude::*;

/// Household entry of the single social registry (CadÚnico).
pub const VULNERABLE_FAMILY: KindSchema = KindSchema {
    module_type: ModuleType::CadastroUnico,
    kind: "vulnerable_family",
    entity_name: "VulnerableFamily",
    fields: &[
        FieldSpec::integer("memberCount", "Family members")
            .aliases(&["familySize"])
            .or(FieldDefault::Integer(1)),
        FieldSpec::decimal("monthlyIncome", "Monthly income")
            .aliases(&["familyIncome"])
            .or(FieldDefault::Decimal(0.0)),
        FieldSpec::text("vulnerabilityType", "Vulnerability")
            .aliases(&["vulnerability"])
            .or(FieldDefault::Text("SOCIAL")),
        FieldSpec::choice("riskLevel", "Risk level", &["LOW", "MEDIUM", "HIGH"])
            .or(FieldDefault::Text("MEDIUM")),
        FieldSpec::boolean("hasCadUnico", "Already in CadÚnico"),
        FieldSpec::text("cadUnicoNumber", "CadÚnico NIS"),
        FieldSpec::text("address", "Address"),
        FieldSpec::text("observations", "Observations"),
    ],
    rules: &[
        Rule::Range { field: "memberCount", min: 1.0, max: 30.0 },
        Rule::Range { field: "monthlyIncome", min: 0.0, max: 1_000_000.0 },
        Rule::RequiredIf { field: "cadUnicoNumber", when: Condition::IsTrue("hasCadUnico") },
        Rule::Digits { field: "cadUnicoNumber", count: 11 },
    ],
    derived: &[],
    vocabulary: StatusVocabulary::simple("PENDING", "ACTIVE"),
    uniqueness: Uniqueness::PerCitizen,
};

pub const SOCIAL_APPOINTMENT: KindSchema = KindSchema {
    module_type: ModuleType::AgendamentoAtendimentoSocial,
    kind: "social_appointment",
    entity_name: "SocialAppointment",
    fields: &[
        FieldSpec::text("appointmentType", "Appointment type")
            .aliases(&["serviceType"])
            .or(FieldDefault::Text("ATENDIMENTO_GERAL")),
        FieldSpec::date("appointmentDate", "Appointment date").or(FieldDefault::Today),
        FieldSpec::text("purpose", "Purpose").aliases(&["description"]),
        FieldSpec::text("notes", "Notes").aliases(&["observations"]),
    ],
    rules: &[Rule::Date("appointmentDate")],
    derived: &[],
    vocabulary: StatusVocabulary::simple("SCHEDULED", "CONFIRMED"),
    uniqueness: Uniqueness::None,
};

/// Benefits are granted only after a social worker reviews the request.
pub const BENEFIT_REQUEST: KindSchema = KindSchema {
    module_type: ModuleType::SolicitacaoBeneficio,
    kind: "benefit_request",
    entity_name: "BenefitRequest",
    fields: &[
        FieldSpec::text("familyId", "Family id"),
        FieldSpec::choice(
            "benefitType",
            "Benefit",
            &["CESTA_BASICA", "AUXILIO_FUNERAL", "AUXILIO_NATALIDADE", "PASSAGEM", "OUTRO"],
        )
        .or(FieldDefault::Text("CESTA_BASICA")),
        FieldSpec::text("reason", "Reason").aliases(&["justification", "description"]),
        FieldSpec::boolean("hasCadUnico", "Already in CadÚnico"),
        FieldSpec::text("cadUnicoNumber", "CadÚnico NIS"),
    ],
    rules: &[
        Rule::Required("reason"),
        Rule::RequiredIf { field: "cadUnicoNumber", when: Condition::IsTrue("hasCadUnico") },
        Rule::Digits { field: "cadUnicoNumber", count: 11 },
    ],
    derived: &[],
    vocabulary: StatusVocabulary::simple("PENDING", "APPROVED").with_review("UNDER_REVIEW", "REVIEWED"),
    uniqueness: Uniqueness::None,
};

pub const EMERGENCY_DELIVERY: KindSchema = KindSchema {
    module_type: ModuleType::EntregaEmergencial,
    kind: "emergency_delivery",
    entity_name: "EmergencyDelivery",
    fields: &[
        FieldSpec::text("deliveryType", "Delivery type").or(FieldDefault::Text("CESTA_BASICA")),
        FieldSpec::integer("quantity", "Quantity").or(FieldDefault::Integer(1)),
        FieldSpec::date("deliveryDate", "Delivery date").or(FieldDefault::Today),
        FieldSpec::text("recipientName", "Recipient").aliases(&["citizenName"]),
        FieldSpec::text("deliveredBy", "Delivered by").or(FieldDefault::Text("Sistema")),
        FieldSpec::choice("urgency", "Urgency", &["BAIXA", "NORMAL", "ALTA", "URGENTE"])
            .or(FieldDefault::Text("ALTA")),
        FieldSpec::text("observations", "Observations"),
    ],
    rules: &[Rule::Range { field: "quantity", min: 1.0, max: 100.0 }, Rule::Date("deliveryDate")],
    derived: &[],
    vocabulary: StatusVocabulary::simple("PENDING", "DELIVERED"),
    uniqueness: Uniqueness::None,
};

pub const HOME_VISIT: KindSchema = KindSchema {
    module_type: ModuleType::VisitasDomiciliares,
    kind: "home_visit",
    entity_name: "HomeVisit",
    fields: &[
        FieldSpec::text("familyId", "Family id"),
        FieldSpec::date("visitDate", "Visit date").or(FieldDefault::Today),
        FieldSpec::text("socialWorker", "Social worker")
            .aliases(&["responsible"])
            .or(FieldDefault::Text("A definir")),
        FieldSpec::text("visitPurpose", "Visit purpose").aliases(&["purpose", "reason"]),
        FieldSpec::text("address", "Address"),
        FieldSpec::text("findings", "Findings"),
    ],
    rules: &[Rule::Required("address"), Rule::Date("visitDate")],
    derived: &[],
    vocabulary: StatusVocabulary::simple("SCHEDULED", "CONFIRMED").with_intermediate(&["RESCHEDULED"]),
    uniqueness: Uniqueness::None,
};
