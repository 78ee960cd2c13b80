use super::Operation;
use crate::stmt::Column;

#[derive(Debug, Clone)]
pub struct Delete {
    /// Which table to delete from
    pub table: String,

    /// Which row to delete from
    pub row_key: String,

    /// Columns to delete. When empty, the whole row is deleted.
    pub columns: Vec<Column>,
}

impl From<Delete> for Operation {
    fn from(value: Delete) -> Self {
        Self::Delete(value)
    }
}
