use digiurban_kernel::prelude::*;
use digiurban_kernel::schema::patterns;

pub const TOURISM_ATTENDANCE: KindSchema = KindSchema {
    module_type: ModuleType::AtendimentosTurismo,
    kind: "tourism_attendance",
    entity_name: "TourismAttendance",
    fields: &[
        FieldSpec::text("visitorName", "Visitor")
            .aliases(&["citizenName"])
            .or(FieldDefault::Text("Visitante")),
        FieldSpec::text("visitorEmail", "E-mail").aliases(&["email"]),
        FieldSpec::text("visitorPhone", "Phone").aliases(&["phone"]),
        FieldSpec::text("serviceType", "Service type").or(FieldDefault::Text("INFORMACAO")),
        FieldSpec::text("subject", "Subject").or(FieldDefault::Text("Informação turística")),
        FieldSpec::text("description", "Description"),
    ],
    rules: &[Rule::Pattern { field: "visitorEmail", pattern: patterns::EMAIL, hint: "must be a valid e-mail address" }],
    derived: &[],
    vocabulary: StatusVocabulary::simple("PENDING", "COMPLETED"),
    uniqueness: Uniqueness::None,
};

/// One guide registration per citizen.
pub const TOURISM_GUIDE: KindSchema = KindSchema {
    module_type: ModuleType::CadastroGuiaTuristico,
    kind: "tourism_guide",
    entity_name: "TourismGuide",
    fields: &[
        FieldSpec::text("name", "Guide name").aliases(&["fullName"]),
        FieldSpec::text("cpf", "CPF"),
        FieldSpec::text("email", "E-mail"),
        FieldSpec::text("phone", "Phone"),
        FieldSpec::list("languages", "Languages"),
        FieldSpec::list("specialties", "Specialties"),
        FieldSpec::text("licenseNumber", "License").aliases(&["registrationNumber"]),
        FieldSpec::date("licenseExpiry", "License expiry"),
        FieldSpec::integer("experienceYears", "Years of experience"),
        FieldSpec::text("bio", "Biography"),
    ],
    rules: &[
        Rule::Required("name"),
        Rule::Required("cpf"),
        Rule::Digits { field: "cpf", count: 11 },
        Rule::Pattern { field: "email", pattern: patterns::EMAIL, hint: "must be a valid e-mail address" },
        Rule::Date("licenseExpiry"),
        Rule::Range { field: "experienceYears", min: 0.0, max: 70.0 },
    ],
    derived: &[],
    vocabulary: StatusVocabulary::simple("PENDING", "ACTIVE"),
    uniqueness: Uniqueness::PerCitizen,
};

pub const LOCAL_BUSINESS: KindSchema = KindSchema {
    module_type: ModuleType::CadastroEstabelecimentoTuristico,
    kind: "local_business",
    entity_name: "LocalBusiness",
    fields: &[
        FieldSpec::text("name", "Business name").aliases(&["businessName"]),
        FieldSpec::text("businessType", "Business type").aliases(&["type"]).or(FieldDefault::Text("COMMERCE")),
        FieldSpec::text("category", "Category").or(FieldDefault::Text("OTHER")),
        FieldSpec::text("description", "Description"),
        FieldSpec::text("address", "Address"),
        FieldSpec::text("neighborhood", "Neighborhood").aliases(&["bairro"]),
        FieldSpec::text("phone", "Phone"),
        FieldSpec::text("email", "E-mail"),
        FieldSpec::object("openingHours", "Opening hours"),
        FieldSpec::list("amenities", "Amenities"),
        FieldSpec::choice("priceRange", "Price range", &["LOW", "MEDIUM", "HIGH"]),
        FieldSpec::text("owner", "Owner").aliases(&["ownerName", "responsibleName"]),
        FieldSpec::text("ownerCpf", "Owner CPF").aliases(&["cpf"]),
        FieldSpec::boolean("isTourismPartner", "Tourism partner"),
    ],
    rules: &[
        Rule::Required("name"),
        Rule::Required("address"),
        Rule::Digits { field: "ownerCpf", count: 11 },
        Rule::Pattern { field: "email", pattern: patterns::EMAIL, hint: "must be a valid e-mail address" },
    ],
    derived: &[],
    vocabulary: StatusVocabulary::simple("PENDING", "ACTIVE").with_review("UNDER_REVIEW", "APPROVED"),
    uniqueness: Uniqueness::None,
};
