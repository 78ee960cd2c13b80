mod delete;
pub use delete::Delete;

mod get;
pub use get::Get;

mod scan;
pub use scan::Scan;

mod write;
pub use write::Write;

#[derive(Debug, Clone)]
pub enum Operation {
    /// Write one or more row mutations
    Write(Write),

    /// Get a single row by key
    Get(Get),

    /// Scan a range of rows
    Scan(Scan),

    /// Delete a row or some of its columns
    Delete(Delete),
}

impl Operation {
    /// The table the operation targets.
    pub fn table(&self) -> &str {
        match self {
            Self::Write(op) => &op.table,
            Self::Get(op) => &op.table,
            Self::Scan(op) => &op.table,
            Self::Delete(op) => &op.table,
        }
    }

    pub fn is_write(&self) -> bool {
        matches!(self, Self::Write(_))
    }

    pub fn is_get(&self) -> bool {
        matches!(self, Self::Get(_))
    }

    pub fn is_scan(&self) -> bool {
        matches!(self, Self::Scan(_))
    }

    pub fn is_delete(&self) -> bool {
        matches!(self, Self::Delete(_))
    }
}
