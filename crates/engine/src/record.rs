//! The module contains the `ExpenseRecord` type representing one expense entry.
//!
//! Records only come into existence through two doors: [`ExpenseRecord::now`]
//! for a freshly added expense, and the `TryFrom<&Value>` conversion used when
//! reading storage. The conversion is where loosely typed stored values get
//! coerced, and where anything that cannot be coerced is rejected.
use core::fmt;

use chrono::Local;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::RecordRejection;

/// Local wall clock, second precision, no offset (`2024-01-01T10:00:00`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// One expense entry. Immutable once created.
///
/// The serialized field order is `amount`, `category`, `created_at`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExpenseRecord {
    amount: f64,
    category: String,
    created_at: String,
}

impl ExpenseRecord {
    /// Builds a record stamped with the current local time.
    ///
    /// The caller guarantees `amount > 0` and a category that is not blank.
    pub(crate) fn now(amount: f64, category: &str) -> Self {
        Self {
            amount,
            category: category.trim().to_string(),
            created_at: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn created_at(&self) -> &str {
        &self.created_at
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.amount, self.category, self.created_at)
    }
}

impl TryFrom<&Value> for ExpenseRecord {
    type Error = RecordRejection;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let map = value.as_object().ok_or(RecordRejection::NotAnObject)?;
        Ok(Self {
            amount: coerce_amount(map)?,
            category: coerce_text(map, "category")?,
            created_at: coerce_text(map, "created_at")?,
        })
    }
}

/// Numbers are taken as they are, strings are parsed after trimming.
/// Non-finite values never count as numbers.
fn coerce_amount(map: &Map<String, Value>) -> Result<f64, RecordRejection> {
    let amount = match map.get("amount") {
        None | Some(Value::Null) => return Err(RecordRejection::MissingField("amount")),
        Some(Value::Number(number)) => number
            .as_f64()
            .ok_or_else(|| RecordRejection::NotANumber(number.to_string()))?,
        Some(Value::String(text)) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| RecordRejection::NotANumber(text.clone()))?,
        Some(_) => return Err(RecordRejection::WrongType("amount")),
    };

    if !amount.is_finite() {
        return Err(RecordRejection::NotANumber(amount.to_string()));
    }
    if amount <= 0.0 {
        return Err(RecordRejection::NonPositiveAmount);
    }
    Ok(amount)
}

fn coerce_text(map: &Map<String, Value>, key: &'static str) -> Result<String, RecordRejection> {
    let text = match map.get(key) {
        None | Some(Value::Null) => return Err(RecordRejection::MissingField(key)),
        Some(Value::String(text)) => text.trim().to_string(),
        Some(Value::Number(number)) => number.to_string(),
        Some(_) => return Err(RecordRejection::WrongType(key)),
    };

    if text.is_empty() {
        return Err(RecordRejection::Blank(key));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn parse(value: Value) -> Result<ExpenseRecord, RecordRejection> {
        ExpenseRecord::try_from(&value)
    }

    #[test]
    fn accepts_well_formed_record() {
        let record = parse(json!({
            "amount": 12.5,
            "category": "Food",
            "created_at": "2024-01-01T10:00:00"
        }))
        .unwrap();

        assert_eq!(record.amount(), 12.5);
        assert_eq!(record.category(), "Food");
        assert_eq!(record.created_at(), "2024-01-01T10:00:00");
    }

    #[test]
    fn coerces_numeric_strings_and_trims_text() {
        let record = parse(json!({
            "amount": " 7.25 ",
            "category": "  Rent ",
            "created_at": " 2024-02-01T08:30:00 ",
            "note": "ignored"
        }))
        .unwrap();

        assert_eq!(record.amount(), 7.25);
        assert_eq!(record.category(), "Rent");
        assert_eq!(record.created_at(), "2024-02-01T08:30:00");
    }

    #[test]
    fn numeric_category_is_stringified() {
        let record = parse(json!({
            "amount": 3,
            "category": 42,
            "created_at": "2024-01-01T10:00:00"
        }))
        .unwrap();
        assert_eq!(record.category(), "42");
    }

    #[test]
    fn rejects_non_positive_amounts() {
        let zero = parse(json!({"amount": 0, "category": "x", "created_at": "t"}));
        let negative = parse(json!({"amount": -5, "category": "x", "created_at": "t"}));

        assert_eq!(zero, Err(RecordRejection::NonPositiveAmount));
        assert_eq!(negative, Err(RecordRejection::NonPositiveAmount));
    }

    #[test]
    fn rejects_non_numeric_amounts() {
        assert_eq!(
            parse(json!({"amount": "abc", "category": "x", "created_at": "t"})),
            Err(RecordRejection::NotANumber("abc".to_string()))
        );
        assert!(matches!(
            parse(json!({"amount": "inf", "category": "x", "created_at": "t"})),
            Err(RecordRejection::NotANumber(_))
        ));
        assert!(matches!(
            parse(json!({"amount": "NaN", "category": "x", "created_at": "t"})),
            Err(RecordRejection::NotANumber(_))
        ));
        assert_eq!(
            parse(json!({"amount": true, "category": "x", "created_at": "t"})),
            Err(RecordRejection::WrongType("amount"))
        );
    }

    #[test]
    fn rejects_amounts_beyond_f64_range() {
        let value: Value = serde_json::from_str(
            r#"{"amount": 1e400, "category": "Huge", "created_at": "2024-01-01T10:00:00"}"#,
        )
        .unwrap();

        assert!(matches!(
            ExpenseRecord::try_from(&value),
            Err(RecordRejection::NotANumber(_))
        ));
    }

    #[test]
    fn displays_amount_category_and_timestamp() {
        let record = parse(json!({
            "amount": 12.5,
            "category": "Food",
            "created_at": "2024-01-01T10:00:00"
        }))
        .unwrap();

        assert_eq!(record.to_string(), "12.5 Food 2024-01-01T10:00:00");
    }

    #[test]
    fn rejects_missing_or_blank_fields() {
        assert_eq!(
            parse(json!({"category": "x", "created_at": "t"})),
            Err(RecordRejection::MissingField("amount"))
        );
        assert_eq!(
            parse(json!({"amount": 1, "category": "   ", "created_at": "t"})),
            Err(RecordRejection::Blank("category"))
        );
        assert_eq!(
            parse(json!({"amount": 1, "category": "x"})),
            Err(RecordRejection::MissingField("created_at"))
        );
        assert_eq!(
            parse(json!({"amount": 1, "category": ["x"], "created_at": "t"})),
            Err(RecordRejection::WrongType("category"))
        );
    }

    #[test]
    fn rejects_non_objects() {
        assert_eq!(parse(json!([1, 2])), Err(RecordRejection::NotAnObject));
        assert_eq!(parse(json!("Food")), Err(RecordRejection::NotAnObject));
    }

    #[test]
    fn now_trims_category_and_stamps_seconds() {
        let record = ExpenseRecord::now(4.0, "  Coffee  ");

        assert_eq!(record.category(), "Coffee");
        assert_eq!(record.created_at().len(), "2024-01-01T10:00:00".len());
        assert!(
            chrono::NaiveDateTime::parse_from_str(record.created_at(), TIMESTAMP_FORMAT).is_ok()
        );
    }

    #[test]
    fn serializes_fields_in_storage_order() {
        let record = parse(json!({
            "created_at": "2024-01-01T10:00:00",
            "category": "Food",
            "amount": 12.5
        }))
        .unwrap();

        let text = serde_json::to_string(&record).unwrap();
        assert_eq!(
            text,
            r#"{"amount":12.5,"category":"Food","created_at":"2024-01-01T10:00:00"}"#
        );
    }
}
