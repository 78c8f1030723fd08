//! Declarative description of a department entity kind.
//!
//! A [`KindSchema`] is plain `'static` data: field list with defaults and aliases, derived
//! fields, validation rules, status vocabulary and uniqueness policy. The generic engine turns
//! it into a full lifecycle handler; department crates only declare schemas.

use crate::status::StatusVocabulary;
use digiurban_domain::constants::RESERVED_FIELDS;
use digiurban_domain::{Department, ModuleType};
use fxhash::FxHashSet;
use std::borrow::Cow;
use std::fmt;

#[digiurban_derive::digiurban_error]
pub enum SchemaError {
    #[error("Invalid schema{}: {message}", format_context(.context))]
    Invalid { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Invalid pattern{}: {source}", format_context(.context))]
    Pattern { source: regex::Error, context: Option<Cow<'static, str>> },
}

/// Persisted shape of a field; drives coercion of submitted values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldType {
    Text,
    Integer,
    Decimal,
    Boolean,
    /// Stored as `YYYY-MM-DD`; unparseable input is stored as null.
    Date,
    /// Closed vocabulary; input is matched case-insensitively and stored canonical.
    Choice(&'static [&'static str]),
    List,
    Object,
}

/// Value stored when a field is not informed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldDefault {
    Null,
    Text(&'static str),
    Integer(i64),
    Decimal(f64),
    Bool(bool),
    /// Date of the operation.
    Today,
    EmptyList,
    EmptyObject,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    /// Human-readable label used in validation messages.
    pub label: &'static str,
    pub ty: FieldType,
    pub default: FieldDefault,
    /// Alternative submission keys, tried in order after `name`.
    pub aliases: &'static [&'static str],
}

impl FieldSpec {
    const fn new(name: &'static str, label: &'static str, ty: FieldType) -> Self {
        Self { name, label, ty, default: FieldDefault::Null, aliases: &[] }
    }

    #[must_use]
    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldType::Text)
    }

    #[must_use]
    pub const fn integer(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldType::Integer)
    }

    #[must_use]
    pub const fn decimal(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldType::Decimal)
    }

    #[must_use]
    pub const fn boolean(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldType::Boolean).or(FieldDefault::Bool(false))
    }

    #[must_use]
    pub const fn date(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldType::Date)
    }

    #[must_use]
    pub const fn choice(
        name: &'static str,
        label: &'static str,
        values: &'static [&'static str],
    ) -> Self {
        Self::new(name, label, FieldType::Choice(values))
    }

    #[must_use]
    pub const fn list(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldType::List).or(FieldDefault::EmptyList)
    }

    #[must_use]
    pub const fn object(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldType::Object).or(FieldDefault::EmptyObject)
    }

    #[must_use]
    pub const fn or(mut self, default: FieldDefault) -> Self {
        self.default = default;
        self
    }

    #[must_use]
    pub const fn aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    /// Submission keys for this field, canonical name first.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.name).chain(self.aliases.iter().copied())
    }
}

/// Predicate over a form or a normalized record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// Field equals the literal (ASCII case-insensitive).
    Equals(&'static str, &'static str),
    /// Field is a truthy flag (`true`, `"sim"`, `1`, ...).
    IsTrue(&'static str),
    /// Field is informed.
    Present(&'static str),
    AnyTrue(&'static [&'static str]),
    /// Every nested condition holds.
    All(&'static [Self]),
}

impl Condition {
    /// Fields the condition reads, nested conditions included.
    #[must_use]
    pub fn fields(&self) -> Vec<&'static str> {
        match *self {
            Self::Equals(field, _) | Self::IsTrue(field) | Self::Present(field) => vec![field],
            Self::AnyTrue(fields) => fields.to_vec(),
            Self::All(parts) => parts.iter().flat_map(Self::fields).collect(),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equals(field, value) => write!(f, "{field} is {value}"),
            Self::IsTrue(field) => write!(f, "{field} is set"),
            Self::Present(field) => write!(f, "{field} is informed"),
            Self::AnyTrue(fields) => write!(f, "any of {} is set", fields.join(", ")),
            Self::All(parts) => {
                let parts: Vec<String> = parts.iter().map(ToString::to_string).collect();
                write!(f, "{}", parts.join(" and "))
            },
        }
    }
}

/// Declarative validation rule. Format rules only fire for informed fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    Required(&'static str),
    RequiredIf { field: &'static str, when: Condition },
    /// Inclusive numeric bounds; numeric strings are accepted.
    Range { field: &'static str, min: f64, max: f64 },
    /// Exact digit count once punctuation is stripped.
    Digits { field: &'static str, count: usize },
    Pattern { field: &'static str, pattern: &'static str, hint: &'static str },
    OneOf { field: &'static str, values: &'static [&'static str] },
    Date(&'static str),
}

impl Rule {
    pub const fn field(&self) -> &'static str {
        match *self {
            Self::Required(field)
            | Self::RequiredIf { field, .. }
            | Self::Range { field, .. }
            | Self::Digits { field, .. }
            | Self::Pattern { field, .. }
            | Self::OneOf { field, .. }
            | Self::Date(field) => field,
        }
    }
}

/// Field computed from other normalized fields; first matching case wins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedField {
    pub field: &'static str,
    pub cases: &'static [(Condition, &'static str)],
    pub otherwise: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Uniqueness {
    #[default]
    None,
    /// At most one non-cancelled record per citizen.
    PerCitizen,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindSchema {
    pub module_type: ModuleType,
    /// Store kind and id prefix, e.g. `"patient"`.
    pub kind: &'static str,
    pub entity_name: &'static str,
    pub fields: &'static [FieldSpec],
    pub rules: &'static [Rule],
    pub derived: &'static [DerivedField],
    pub vocabulary: StatusVocabulary,
    pub uniqueness: Uniqueness,
}

impl KindSchema {
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Field addressed by a submission key (canonical name or alias).
    #[must_use]
    pub fn field_for_key(&self, key: &str) -> Option<&FieldSpec> {
        self.field(key).or_else(|| self.fields.iter().find(|f| f.aliases.contains(&key)))
    }

    #[must_use]
    pub fn is_derived(&self, name: &str) -> bool {
        self.derived.iter().any(|d| d.field == name)
    }

    /// Structural self-check run at registration.
    ///
    /// # Errors
    /// Returns [`SchemaError::Invalid`] naming the first inconsistency found.
    pub fn check(&self) -> Result<(), SchemaError> {
        let fail = |message: String| {
            Err(SchemaError::Invalid {
                message: message.into(),
                context: Some(format!("{} ({})", self.entity_name, self.module_type).into()),
            })
        };

        if self.kind.trim().is_empty() || self.entity_name.trim().is_empty() {
            return fail("kind and entity name must not be empty".to_owned());
        }
        if self.module_type.is_informational() {
            return fail("informational module types carry no entity schema".to_owned());
        }

        let mut keys = FxHashSet::default();
        for spec in self.fields {
            if RESERVED_FIELDS.contains(&spec.name) {
                return fail(format!("field '{}' is reserved by the lifecycle", spec.name));
            }
            for key in spec.keys() {
                if !keys.insert(key) {
                    return fail(format!("submission key '{key}' is declared twice"));
                }
            }
            if let (FieldType::Choice(values), FieldDefault::Text(default)) = (spec.ty, spec.default)
                && !values.contains(&default)
            {
                return fail(format!("default '{default}' of '{}' is not a listed choice", spec.name));
            }
        }

        for rule in self.rules {
            let when = match rule {
                Rule::RequiredIf { when, .. } => Some(when),
                _ => None,
            };
            let referenced = std::iter::once(rule.field()).chain(when.into_iter().flat_map(Condition::fields));
            for name in referenced {
                if self.field(name).is_none() {
                    return fail(format!("rule references undeclared field '{name}'"));
                }
            }
        }

        for derived in self.derived {
            if self.field(derived.field).is_some() || RESERVED_FIELDS.contains(&derived.field) {
                return fail(format!("derived field '{}' shadows a declared field", derived.field));
            }
            for name in derived.cases.iter().flat_map(|(condition, _)| condition.fields()) {
                if self.field(name).is_none() {
                    return fail(format!("derived field '{}' reads undeclared '{name}'", derived.field));
                }
            }
        }

        if let Err(message) = self.vocabulary.check() {
            return fail(message);
        }

        Ok(())
    }
}

/// The schemas one department crate contributes.
#[derive(Debug, Clone, Copy)]
pub struct DepartmentManifest {
    pub department: Department,
    pub schemas: &'static [KindSchema],
}

/// Regex sources shared by department schemas.
pub mod patterns {
    /// `HH:MM`, 24-hour clock.
    pub const TIME_OF_DAY: &str = r"^([01]\d|2[0-3]):[0-5]\d$";
    pub const EMAIL: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";
    /// Brazilian phone with area code, punctuation allowed.
    pub const PHONE: &str = r"^\(?\d{2}\)?\s?9?\d{4}-?\d{4}$";
}
