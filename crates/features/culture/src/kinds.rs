use digiurban_kernel::prelude::*;
use digiurban_kernel::schema::patterns;

pub const CULTURAL_SPACE_RESERVATION: KindSchema = KindSchema {
    module_type: ModuleType::ReservaEspacoCultural,
    kind: "cultural_space_reservation",
    entity_name: "CulturalSpaceReservation",
    fields: &[
        FieldSpec::text("spaceId", "Space id"),
        FieldSpec::text("spaceName", "Space").aliases(&["space"]),
        FieldSpec::text("eventName", "Event").aliases(&["eventTitle"]),
        FieldSpec::text("eventType", "Event type").or(FieldDefault::Text("APRESENTACAO")),
        FieldSpec::date("startDate", "Start date").aliases(&["date"]).or(FieldDefault::Today),
        FieldSpec::date("endDate", "End date"),
        FieldSpec::text("startTime", "Start time").or(FieldDefault::Text("08:00")),
        FieldSpec::text("endTime", "End time").or(FieldDefault::Text("18:00")),
        FieldSpec::integer("expectedAudience", "Expected audience").aliases(&["audience"]),
        FieldSpec::boolean("hasFee", "Charges a fee"),
        FieldSpec::decimal("feeAmount", "Fee amount"),
        FieldSpec::boolean("needsEquipment", "Needs equipment"),
        FieldSpec::list("equipment", "Equipment"),
    ],
    rules: &[
        Rule::Required("eventName"),
        Rule::Date("startDate"),
        Rule::Date("endDate"),
        Rule::Pattern { field: "startTime", pattern: patterns::TIME_OF_DAY, hint: "must be a time in HH:MM format" },
        Rule::Pattern { field: "endTime", pattern: patterns::TIME_OF_DAY, hint: "must be a time in HH:MM format" },
        Rule::RequiredIf { field: "feeAmount", when: Condition::IsTrue("hasFee") },
        Rule::RequiredIf { field: "equipment", when: Condition::IsTrue("needsEquipment") },
    ],
    derived: &[DerivedField {
        field: "feeStatus",
        cases: &[(Condition::IsTrue("hasFee"), "PENDING")],
        otherwise: "EXEMPT",
    }],
    vocabulary: StatusVocabulary::simple("PENDING", "APPROVED"),
    uniqueness: Uniqueness::None,
};

/// Projects submitted for municipal funding; a curator reviews before approval.
pub const CULTURAL_PROJECT: KindSchema = KindSchema {
    module_type: ModuleType::ProjetoCultural,
    kind: "cultural_project",
    entity_name: "CulturalProject",
    fields: &[
        FieldSpec::text("name", "Project name").aliases(&["projectName", "title"]),
        FieldSpec::text("category", "Category").or(FieldDefault::Text("OUTROS")),
        FieldSpec::text("description", "Description"),
        FieldSpec::text("objectives", "Objectives"),
        FieldSpec::text("targetAudience", "Target audience"),
        FieldSpec::decimal("budget", "Budget").aliases(&["requestedAmount"]),
        FieldSpec::date("startDate", "Start date"),
        FieldSpec::date("endDate", "End date"),
    ],
    rules: &[
        Rule::Required("name"),
        Rule::Required("description"),
        Rule::Range { field: "budget", min: 0.0, max: 10_000_000.0 },
        Rule::Date("startDate"),
        Rule::Date("endDate"),
    ],
    derived: &[],
    vocabulary: StatusVocabulary::simple("SUBMITTED", "APPROVED").with_review("UNDER_REVIEW", "REVIEWED"),
    uniqueness: Uniqueness::None,
};
