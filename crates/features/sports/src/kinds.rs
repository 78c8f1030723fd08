use digiurban_kernel::prelude::*;
use digiurban_kernel::schema::patterns;

pub const SPORTS_SCHOOL_ENROLLMENT: KindSchema = KindSchema {
    module_type: ModuleType::InscricaoEscolinha,
    kind: "sports_school_enrollment",
    entity_name: "SportsSchoolEnrollment",
    fields: &[
        FieldSpec::text("sportsSchoolId", "Sports school id").aliases(&["schoolId"]),
        FieldSpec::text("sport", "Sport").aliases(&["modality"]),
        FieldSpec::text("studentName", "Student name"),
        FieldSpec::date("studentBirthDate", "Student birth date").aliases(&["birthDate"]),
        FieldSpec::text("guardianName", "Guardian").aliases(&["responsibleName"]),
        FieldSpec::text("guardianPhone", "Guardian phone").aliases(&["responsiblePhone"]),
        FieldSpec::choice("shift", "Shift", &["MORNING", "AFTERNOON", "EVENING"])
            .or(FieldDefault::Text("AFTERNOON")),
        FieldSpec::text("medicalObservations", "Medical observations"),
    ],
    rules: &[
        Rule::Required("sport"),
        Rule::Date("studentBirthDate"),
        Rule::Pattern {
            field: "guardianPhone",
            pattern: patterns::PHONE,
            hint: "must be a phone number with area code",
        },
    ],
    derived: &[],
    vocabulary: StatusVocabulary::simple("PENDING", "ACTIVE"),
    uniqueness: Uniqueness::None,
};

pub const SPORTS_INFRASTRUCTURE_RESERVATION: KindSchema = KindSchema {
    module_type: ModuleType::ReservaEspacoEsportivo,
    kind: "sports_infrastructure_reservation",
    entity_name: "SportsInfrastructureReservation",
    fields: &[
        FieldSpec::text("infrastructureId", "Facility id").aliases(&["spaceId"]),
        FieldSpec::text("infrastructureName", "Facility").aliases(&["spaceName", "space"]),
        FieldSpec::text("activity", "Activity").aliases(&["purpose"]),
        FieldSpec::date("date", "Date").aliases(&["reservationDate"]).or(FieldDefault::Today),
        FieldSpec::text("startTime", "Start time").or(FieldDefault::Text("08:00")),
        FieldSpec::text("endTime", "End time").or(FieldDefault::Text("10:00")),
        FieldSpec::integer("participants", "Participants").aliases(&["expectedParticipants"]),
        FieldSpec::boolean("hasFee", "Charges a fee"),
        FieldSpec::decimal("feeAmount", "Fee amount"),
    ],
    rules: &[
        Rule::Date("date"),
        Rule::Pattern { field: "startTime", pattern: patterns::TIME_OF_DAY, hint: "must be a time in HH:MM format" },
        Rule::Pattern { field: "endTime", pattern: patterns::TIME_OF_DAY, hint: "must be a time in HH:MM format" },
        Rule::Range { field: "participants", min: 1.0, max: 500.0 },
        Rule::RequiredIf { field: "feeAmount", when: Condition::IsTrue("hasFee") },
    ],
    derived: &[DerivedField {
        field: "feeStatus",
        cases: &[(Condition::IsTrue("hasFee"), "PENDING")],
        otherwise: "EXEMPT",
    }],
    vocabulary: StatusVocabulary::simple("PENDING", "APPROVED"),
    uniqueness: Uniqueness::None,
};
