use super::Value;

use indexmap::IndexMap;
use serde::Serialize;

/// A column-oriented view of a row, keyed by logical column name.
///
/// Entries keep insertion order; the first entry is always `row_key`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    columns: IndexMap<String, Value>,
}

impl Record {
    /// The column name under which the row key is recorded.
    pub const ROW_KEY: &'static str = "row_key";

    pub fn new(row_key: impl Into<String>) -> Record {
        let mut columns = IndexMap::new();
        columns.insert(Self::ROW_KEY.to_string(), Value::String(row_key.into()));
        Record { columns }
    }

    pub fn row_key(&self) -> Option<&str> {
        self.columns.get(Self::ROW_KEY).and_then(Value::as_str)
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.columns.insert(column.into(), value.into())
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns.get(column)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.contains_key(column)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<'a> IntoIterator for &'a Record {
    type IntoIter = indexmap::map::Iter<'a, String, Value>;
    type Item = (&'a String, &'a Value);

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}
