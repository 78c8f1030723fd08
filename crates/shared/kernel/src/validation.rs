//! Pure, rule-driven form validation.

use crate::entity::FormData;
use crate::schema::{Condition, FieldSpec, FieldType, KindSchema, Rule, SchemaError};
use chrono::{DateTime, NaiveDate};
use fxhash::FxHashMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use tracing::debug;

/// Outcome of [`Validator::validate`]: accept, or reject with one message per failing rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    #[must_use]
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self { valid: errors.is_empty(), errors }
    }
}

/// Whether a submitted value counts as filled in.
///
/// Missing, null, blank strings, numeric zero, empty lists and `false` are not informed.
#[must_use]
pub fn is_informed(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(_)) => true,
    }
}

/// Flag semantics for checkbox-like answers (`true`, `"sim"`, `"1"`, non-zero numbers).
#[must_use]
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => {
            let s = s.trim();
            ["true", "sim", "s", "yes", "1"].iter().any(|t| s.eq_ignore_ascii_case(t))
        },
        _ => false,
    }
}

/// Scalar value as text, for comparisons against literals.
#[must_use]
pub fn as_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.trim())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        _ => None,
    }
}

/// Numeric value of a number or a numeric string (decimal comma accepted).
#[must_use]
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().replace(',', ".").parse().ok(),
        _ => None,
    }
}

/// Integral value of a number or numeric string: `4`, `4.0` and `"3,0"` qualify, `2.5` does not.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn as_whole(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    as_number(value)
        .filter(|n| n.fract().abs() < f64::EPSILON && n.abs() < 9.0e15)
        .map(|n| n as i64)
}

/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and `DD/MM/YYYY`.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| NaiveDate::parse_from_str(raw, "%d/%m/%Y").ok())
}

/// Evaluates a condition, reading values through `get`.
pub(crate) fn holds<'a>(condition: &Condition, get: impl Fn(&str) -> Option<&'a Value>) -> bool {
    eval(condition, &get)
}

fn eval<'a>(condition: &Condition, get: &dyn Fn(&str) -> Option<&'a Value>) -> bool {
    match *condition {
        Condition::Equals(field, expected) => get(field)
            .and_then(as_text)
            .is_some_and(|text| text.eq_ignore_ascii_case(expected)),
        Condition::IsTrue(field) => is_truthy(get(field)),
        Condition::Present(field) => is_informed(get(field)),
        Condition::AnyTrue(fields) => fields.iter().any(|field| is_truthy(get(field))),
        Condition::All(parts) => parts.iter().all(|part| eval(part, get)),
    }
}

/// First informed value among the field's submission keys, else the first present one.
pub(crate) fn lookup<'a>(spec: &FieldSpec, form: &'a FormData) -> Option<&'a Value> {
    spec.keys()
        .filter_map(|key| form.get(key))
        .find(|value| is_informed(Some(value)))
        .or_else(|| spec.keys().find_map(|key| form.get(key)))
}

/// Compiled validator of one kind. Construction checks the schema and compiles its patterns.
#[derive(Debug, Clone)]
pub struct Validator {
    schema: &'static KindSchema,
    patterns: FxHashMap<&'static str, Regex>,
}

impl Validator {
    /// # Errors
    /// [`SchemaError`] when the schema is inconsistent or a pattern does not compile.
    pub fn compile(schema: &'static KindSchema) -> Result<Self, SchemaError> {
        schema.check()?;

        let mut patterns = FxHashMap::default();
        for rule in schema.rules {
            if let Rule::Pattern { field, pattern, .. } = *rule {
                let regex = Regex::new(pattern)
                    .map_err(|source| SchemaError::Pattern {
                        source,
                        context: Some(format!("{}.{field}", schema.entity_name).into()),
                    })?;
                patterns.insert(pattern, regex);
            }
        }

        Ok(Self { schema, patterns })
    }

    #[must_use]
    pub const fn schema(&self) -> &'static KindSchema {
        self.schema
    }

    /// Runs every rule against the raw form. Never short-circuits and never mutates `form`.
    ///
    /// Integer fields are also type-checked, unless a rule already rejected the field.
    #[must_use]
    pub fn validate(&self, form: &FormData) -> ValidationReport {
        let get = |name: &str| self.schema.field(name).and_then(|spec| lookup(spec, form));

        let mut failed = Vec::new();
        let mut errors = Vec::new();
        for rule in self.schema.rules {
            if let Some(message) = self.check_rule(rule, &get) {
                failed.push(rule.field());
                errors.push(message);
            }
        }
        errors.extend(
            self.schema
                .fields
                .iter()
                .filter(|spec| !failed.contains(&spec.name))
                .filter_map(|spec| check_type(spec, lookup(spec, form))),
        );

        debug!(
            kind = self.schema.kind,
            valid = errors.is_empty(),
            failures = errors.len(),
            "Form validated"
        );
        ValidationReport::from_errors(errors)
    }

    fn check_rule<'a>(
        &self,
        rule: &Rule,
        get: &impl Fn(&str) -> Option<&'a Value>,
    ) -> Option<String> {
        let field = rule.field();
        let label = self.schema.field(field).map_or(field, |spec| spec.label);
        let value = get(field);

        match *rule {
            Rule::Required(_) => {
                (!is_informed(value)).then(|| format!("{label} ({field}) must be informed"))
            },
            Rule::RequiredIf { when, .. } => (holds(&when, get) && !is_informed(value))
                .then(|| format!("{label} ({field}) must be informed when {when}")),
            _ if !is_informed(value) => None,
            Rule::Range { min, max, .. } => match value.and_then(as_number) {
                Some(n) if (min..=max).contains(&n) => None,
                Some(_) => Some(format!("{label} ({field}) must be between {min} and {max}")),
                None => Some(format!("{label} ({field}) must be a number")),
            },
            Rule::Digits { count, .. } => {
                let ok = value.and_then(as_text).is_some_and(|text| {
                    let digits: String = text
                        .chars()
                        .filter(|c| !matches!(c, '.' | '-' | '/' | ' ' | '(' | ')'))
                        .collect();
                    digits.len() == count && digits.chars().all(|c| c.is_ascii_digit())
                });
                (!ok).then(|| format!("{label} ({field}) must have exactly {count} digits"))
            },
            Rule::Pattern { pattern, hint, .. } => {
                let ok = value
                    .and_then(as_text)
                    .zip(self.patterns.get(pattern))
                    .is_some_and(|(text, regex)| regex.is_match(&text));
                (!ok).then(|| format!("{label} ({field}) {hint}"))
            },
            Rule::OneOf { values, .. } => {
                let ok = value
                    .and_then(as_text)
                    .is_some_and(|text| values.iter().any(|v| text.eq_ignore_ascii_case(v)));
                (!ok).then(|| format!("{label} ({field}) must be one of: {}", values.join(", ")))
            },
            Rule::Date(_) => {
                let ok = value.and_then(Value::as_str).and_then(parse_date).is_some();
                (!ok).then(|| format!("{label} ({field}) must be a valid date"))
            },
        }
    }
}

fn check_type(spec: &FieldSpec, value: Option<&Value>) -> Option<String> {
    match spec.ty {
        FieldType::Integer if is_informed(value) => value
            .and_then(as_whole)
            .is_none()
            .then(|| format!("{} ({}) must be a whole number", spec.label, spec.name)),
        _ => None,
    }
}
