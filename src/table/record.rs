// src/table/record.rs

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// One logical table row: header name → cell value.
///
/// Keys are kept in a `BTreeMap`, so serialising a record always yields its
/// keys in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, String>,
}

impl Record {
    /// The value for `header`, or `None` while the slot is still unset.
    pub fn field(&self, header: &str) -> Option<&str> {
        self.fields.get(header).map(String::as_str)
    }

    /// Set `header` to `value` unless the slot is already populated.
    /// Returns whether the value was stored.
    pub fn fill(&mut self, header: &str, value: &str) -> bool {
        if self.fields.contains_key(header) {
            return false;
        }
        self.fields.insert(header.to_owned(), value.to_owned());
        true
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Drop every field whose trimmed value is empty.
    pub fn without_empty_values(self) -> Self {
        Self {
            fields: self
                .fields
                .into_iter()
                .filter(|(_, v)| !v.trim().is_empty())
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// An extracted table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub records: Vec<Record>,
}

// Only the records go to disk; the header list is extraction state.
impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.records.serialize(serializer)
    }
}

impl Table {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Strip empty-string fields from every record. Records left with no fields
/// stay in place as empty objects, so the row order is unchanged.
pub fn remove_empty_values(table: Table) -> Table {
    Table {
        headers: table.headers,
        records: table
            .records
            .into_iter()
            .map(Record::without_empty_values)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_never_overwrites() {
        let mut r = Record::default();
        assert_eq!(r.field("Year"), None);
        assert!(r.fill("Year", "1969"));
        assert!(!r.fill("Year", "1970"));
        assert_eq!(r.field("Year"), Some("1969"));
    }

    #[test]
    fn empty_string_counts_as_filled() {
        let mut r = Record::default();
        assert!(r.fill("Notes", ""));
        assert!(!r.fill("Notes", "late"));
        assert_eq!(r.field("Notes"), Some(""));
    }

    #[test]
    fn remove_empty_values_keeps_non_empty_untouched() {
        let table = Table {
            headers: vec!["A".into(), "B".into(), "C".into()],
            records: vec![
                [("A", "x"), ("B", ""), ("C", "  ")].into_iter().collect(),
                [("A", " padded "), ("B", "y")].into_iter().collect(),
            ],
        };
        let cleaned = remove_empty_values(table);
        assert_eq!(cleaned.records[0], [("A", "x")].into_iter().collect::<Record>());
        assert_eq!(cleaned.records[1].field("A"), Some(" padded "));
        assert_eq!(cleaned.records[1].field("B"), Some("y"));
        assert_eq!(cleaned.headers.len(), 3);
    }

    #[test]
    fn fully_empty_record_is_preserved() {
        let table = Table {
            headers: vec!["A".into()],
            records: vec![
                [("A", "")].into_iter().collect(),
                [("A", "z")].into_iter().collect(),
            ],
        };
        let cleaned = remove_empty_values(table);
        assert_eq!(cleaned.len(), 2);
        assert!(cleaned.records[0].is_empty());
    }

    #[test]
    fn serialises_as_array_with_sorted_keys() {
        let table = Table {
            headers: vec!["b".into(), "a".into()],
            records: vec![[("b", "2"), ("a", "1")].into_iter().collect()],
        };
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"[{"a":"1","b":"2"}]"#);
    }
}
