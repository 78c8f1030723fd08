use digiurban_kernel::prelude::*;

const PRIORITY_FLAGS: &[&str] = &["hasDisabledMember", "hasElderly", "isWomanHeaded"];

/// Applications are ranked by the derived `priority`: homeless families first, then families
/// with a disabled member, an elderly member or a female head of household.
pub const HOUSING_APPLICATION: KindSchema = KindSchema {
    module_type: ModuleType::InscricaoProgramaHabitacional,
    kind: "housing_application",
    entity_name: "HousingApplication",
    fields: &[
        FieldSpec::choice("programType", "Housing program", &["MCMV", "CASA_VERDE_AMARELA", "MUNICIPAL"])
            .aliases(&["applicationType"])
            .or(FieldDefault::Text("MUNICIPAL")),
        FieldSpec::integer("familySize", "Family size").or(FieldDefault::Integer(1)),
        FieldSpec::decimal("familyIncome", "Family income").aliases(&["monthlyIncome"]),
        FieldSpec::choice(
            "currentSituation",
            "Current housing situation",
            &["ALUGUEL", "CASA_CEDIDA", "SITUACAO_RUA", "OUTRO"],
        )
        .or(FieldDefault::Text("OUTRO")),
        FieldSpec::boolean("hasDisabledMember", "Disabled family member"),
        FieldSpec::boolean("hasElderly", "Elderly family member"),
        FieldSpec::boolean("isWomanHeaded", "Female head of household"),
        FieldSpec::object("documents", "Documents"),
    ],
    rules: &[
        Rule::Required("familyIncome"),
        Rule::Range { field: "familySize", min: 1.0, max: 30.0 },
        Rule::Range { field: "familyIncome", min: 0.0, max: 100_000.0 },
    ],
    derived: &[DerivedField {
        field: "priority",
        cases: &[
            (Condition::Equals("currentSituation", "SITUACAO_RUA"), "URGENT"),
            (Condition::AnyTrue(PRIORITY_FLAGS), "HIGH"),
        ],
        otherwise: "NORMAL",
    }],
    vocabulary: StatusVocabulary::simple("UNDER_ANALYSIS", "APPROVED").with_intermediate(&["WAITING_LIST"]),
    uniqueness: Uniqueness::PerCitizen,
};

pub const RENT_ASSISTANCE: KindSchema = KindSchema {
    module_type: ModuleType::SolicitacaoAuxilioAluguel,
    kind: "rent_assistance",
    entity_name: "RentAssistance",
    fields: &[
        FieldSpec::decimal("monthlyRent", "Monthly rent").aliases(&["rentValue"]),
        FieldSpec::integer("requestedPeriod", "Requested months").or(FieldDefault::Integer(6)),
        FieldSpec::text("reason", "Reason").aliases(&["justification"]),
        FieldSpec::text("landlordName", "Landlord"),
        FieldSpec::text("propertyAddress", "Rented property").aliases(&["address"]),
    ],
    rules: &[
        Rule::Required("monthlyRent"),
        Rule::Range { field: "monthlyRent", min: 1.0, max: 10_000.0 },
        Rule::Range { field: "requestedPeriod", min: 1.0, max: 12.0 },
    ],
    derived: &[],
    vocabulary: StatusVocabulary::simple("UNDER_ANALYSIS", "APPROVED"),
    uniqueness: Uniqueness::PerCitizen,
};
