//! Canonical persisted form of submitted fields.

use crate::entity::FormData;
use crate::schema::{FieldDefault, FieldSpec, FieldType, KindSchema};
use crate::validation::{
    as_number, as_text, as_whole, holds, is_informed, is_truthy, lookup, parse_date,
};
use chrono::NaiveDate;
use serde_json::{Map, Number, Value};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Resolves aliases, applies defaults, coerces types and computes derived fields.
///
/// Keys that are not declared by the schema are dropped.
pub(crate) fn normalize(schema: &KindSchema, form: &FormData, today: NaiveDate) -> Map<String, Value> {
    let mut out = Map::new();
    for spec in schema.fields {
        let value = coerce(spec, lookup(spec, form)).unwrap_or_else(|| default_value(spec.default, today));
        out.insert(spec.name.to_owned(), value);
    }

    for derived in schema.derived {
        let value = derived
            .cases
            .iter()
            .find(|(condition, _)| holds(condition, |name| out.get(name)))
            .map_or(derived.otherwise, |&(_, value)| value);
        out.insert(derived.field.to_owned(), Value::from(value));
    }

    out
}

/// `None` means "use the default".
fn coerce(spec: &FieldSpec, raw: Option<&Value>) -> Option<Value> {
    if matches!(spec.ty, FieldType::Boolean) {
        return match raw? {
            Value::Bool(b) => Some(Value::Bool(*b)),
            Value::Number(_) => Some(Value::Bool(is_truthy(raw))),
            Value::String(_) if is_truthy(raw) => Some(Value::Bool(true)),
            Value::String(s) => ["false", "nao", "não", "n", "no", "0"]
                .iter()
                .any(|f| s.trim().eq_ignore_ascii_case(f))
                .then_some(Value::Bool(false)),
            _ => None,
        };
    }
    if !is_informed(raw) {
        return None;
    }
    let raw = raw?;

    match spec.ty {
        FieldType::Text => as_text(raw).map(|text| Value::String(text.into_owned())),
        FieldType::Integer => as_whole(raw).map(Value::from),
        FieldType::Decimal => as_number(raw).and_then(Number::from_f64).map(Value::Number),
        FieldType::Date => raw
            .as_str()
            .and_then(parse_date)
            .map(|date| Value::String(date.format(DATE_FORMAT).to_string())),
        FieldType::Choice(values) => as_text(raw).and_then(|text| {
            values.iter().find(|v| text.eq_ignore_ascii_case(v)).map(|v| Value::from(*v))
        }),
        FieldType::List => raw.is_array().then(|| raw.clone()),
        FieldType::Object => raw.is_object().then(|| raw.clone()),
        FieldType::Boolean => None,
    }
}

fn default_value(default: FieldDefault, today: NaiveDate) -> Value {
    match default {
        FieldDefault::Null => Value::Null,
        FieldDefault::Text(text) => Value::from(text),
        FieldDefault::Integer(n) => Value::from(n),
        FieldDefault::Decimal(n) => Number::from_f64(n).map_or(Value::Null, Value::Number),
        FieldDefault::Bool(b) => Value::Bool(b),
        FieldDefault::Today => Value::String(today.format(DATE_FORMAT).to_string()),
        FieldDefault::EmptyList => Value::Array(Vec::new()),
        FieldDefault::EmptyObject => Value::Object(Map::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Condition, DerivedField, Uniqueness};
    use crate::status::StatusVocabulary;
    use digiurban_domain::ModuleType;
    use serde_json::json;

    static SCHEMA: KindSchema = KindSchema {
        module_type: ModuleType::ReservaEspacoCultural,
        kind: "reservation",
        entity_name: "Reservation",
        fields: &[
            FieldSpec::text("spaceName", "Space").aliases(&["space"]),
            FieldSpec::integer("attendees", "Attendees").or(FieldDefault::Integer(1)),
            FieldSpec::decimal("feeAmount", "Fee"),
            FieldSpec::boolean("hasFee", "Has fee"),
            FieldSpec::date("eventDate", "Event date").or(FieldDefault::Today),
            FieldSpec::choice("period", "Period", &["MORNING", "EVENING"])
                .or(FieldDefault::Text("MORNING")),
            FieldSpec::list("equipment", "Equipment"),
        ],
        rules: &[],
        derived: &[DerivedField {
            field: "feeStatus",
            cases: &[(Condition::IsTrue("hasFee"), "PENDING")],
            otherwise: "EXEMPT",
        }],
        vocabulary: StatusVocabulary::simple("PENDING", "APPROVED"),
        uniqueness: Uniqueness::None,
    };

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, 20).unwrap()
    }

    fn form(value: Value) -> FormData {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn aliases_coercion_and_defaults() {
        let out = normalize(
            &SCHEMA,
            &form(json!({
                "space": "Teatro Municipal",
                "attendees": "40",
                "feeAmount": "12,50",
                "period": "evening",
                "unknown": "dropped"
            })),
            today(),
        );

        assert_eq!(out["spaceName"], "Teatro Municipal");
        assert_eq!(out["attendees"], 40);
        assert_eq!(out["feeAmount"], 12.5);
        assert_eq!(out["hasFee"], false);
        assert_eq!(out["eventDate"], "2026-05-20");
        assert_eq!(out["period"], "EVENING");
        assert_eq!(out["equipment"], json!([]));
        assert_eq!(out["feeStatus"], "EXEMPT");
        assert!(!out.contains_key("unknown"));
        assert!(!out.contains_key("space"));
    }

    #[test]
    fn falsy_values_fall_back_to_defaults() {
        let out = normalize(
            &SCHEMA,
            &form(json!({ "attendees": 0, "period": "NIGHT", "eventDate": "someday" })),
            today(),
        );
        assert_eq!(out["attendees"], 1);
        assert_eq!(out["period"], "MORNING");
        assert_eq!(out["eventDate"], "2026-05-20");
        assert_eq!(out["spaceName"], Value::Null);
    }

    #[test]
    fn integral_decimals_keep_their_value() {
        for attendees in [json!(4.0), json!("4,0"), json!("4.0"), json!(" 4 ")] {
            let out = normalize(&SCHEMA, &form(json!({ "attendees": attendees })), today());
            assert_eq!(out["attendees"], 4, "{attendees}");
        }
        let out = normalize(&SCHEMA, &form(json!({ "attendees": 2.5 })), today());
        assert_eq!(out["attendees"], 1);
    }

    #[test]
    fn derived_fields_read_normalized_values() {
        let out = normalize(&SCHEMA, &form(json!({ "hasFee": "sim" })), today());
        assert_eq!(out["hasFee"], true);
        assert_eq!(out["feeStatus"], "PENDING");

        let out = normalize(&SCHEMA, &form(json!({ "hasFee": "nao" })), today());
        assert_eq!(out["hasFee"], false);
        assert_eq!(out["feeStatus"], "EXEMPT");
    }
}
