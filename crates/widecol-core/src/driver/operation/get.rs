use super::Operation;
use crate::stmt::Filter;

#[derive(Debug, Clone)]
pub struct Get {
    /// Which table to get from
    pub table: String,

    /// Which row to fetch
    pub row_key: String,

    /// Restricts the returned cells
    pub filter: Option<Filter>,
}

impl From<Get> for Operation {
    fn from(value: Get) -> Self {
        Self::Get(value)
    }
}
