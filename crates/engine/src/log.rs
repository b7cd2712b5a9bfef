//! Ordered collection of expense records.

use serde::Serialize;
use serde_json::Value;

use crate::ExpenseRecord;

/// Records in insertion order, which is also display and persisted order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ExpenseLog {
    records: Vec<ExpenseRecord>,
}

impl ExpenseLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExpenseRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn push(&mut self, record: ExpenseRecord) {
        self.records.push(record);
    }

    /// Keeps every element that converts into a record, in order, and drops
    /// the rest one by one. Anything other than an array is an empty log.
    pub(crate) fn from_value(value: &Value) -> Self {
        let Some(items) = value.as_array() else {
            tracing::warn!("stored expenses are not a list, starting empty");
            return Self::default();
        };

        items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| match ExpenseRecord::try_from(item) {
                Ok(record) => Some(record),
                Err(rejection) => {
                    tracing::debug!(index, "dropping stored expense: {rejection}");
                    None
                }
            })
            .collect()
    }
}

impl FromIterator<ExpenseRecord> for ExpenseLog {
    fn from_iter<I: IntoIterator<Item = ExpenseRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ExpenseLog {
    type Item = &'a ExpenseRecord;
    type IntoIter = std::slice::Iter<'a, ExpenseRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn keeps_valid_subset_in_order() {
        let value = json!([
            {"amount": 12.5, "category": "Food", "created_at": "2024-01-01T10:00:00"},
            {"amount": -5, "category": "Food", "created_at": "2024-01-01T10:00:00"},
            {"amount": "abc", "category": "Food", "created_at": "2024-01-01T10:00:00"},
            {"amount": 3, "category": "", "created_at": "2024-01-01T10:00:00"},
            {"amount": 3, "category": "Bus"},
            "not a record",
            {"amount": 8, "category": "Books", "created_at": "2024-01-02T09:00:00"}
        ]);

        let log = ExpenseLog::from_value(&value);

        let categories: Vec<&str> = log.iter().map(ExpenseRecord::category).collect();
        assert_eq!(categories, vec!["Food", "Books"]);
    }

    #[test]
    fn non_array_is_empty() {
        assert!(ExpenseLog::from_value(&json!({"amount": 1})).is_empty());
        assert!(ExpenseLog::from_value(&json!(null)).is_empty());
        assert!(ExpenseLog::from_value(&json!(42)).is_empty());
    }

    #[test]
    fn serializes_as_plain_list() {
        let log = ExpenseLog::new();
        assert_eq!(serde_json::to_string(&log).unwrap(), "[]");
    }
}
