use super::Operation;
use crate::stmt::Filter;

#[derive(Debug, Clone)]
pub struct Scan {
    /// Which table to scan
    pub table: String,

    /// Restricts the returned cells and rows
    pub filter: Option<Filter>,

    /// First row key to include
    pub start: Option<String>,

    /// First row key to exclude
    pub stop: Option<String>,

    /// Rows fetched per round trip, a hint for remote stores
    pub caching: u32,
}

impl From<Scan> for Operation {
    fn from(value: Scan) -> Self {
        Self::Scan(value)
    }
}
