use crate::{driver::operation, stmt::Filter};

/// Options for [`Db::scan`](super::Db::scan).
#[derive(Debug, Clone, Default)]
pub struct Scan {
    filter: Option<Filter>,
    start: Option<String>,
    stop: Option<String>,
}

impl Scan {
    /// Scans the whole table.
    pub fn new() -> Scan {
        Scan::default()
    }

    /// Only returns cells passing `filter`. Calling this again AND-s the
    /// filters.
    pub fn filter(mut self, filter: impl Into<Filter>) -> Scan {
        self.filter = Some(match self.filter.take() {
            Some(existing) => Filter::and(existing, filter),
            None => filter.into(),
        });
        self
    }

    /// Starts at `row_key`, inclusive.
    pub fn start(mut self, row_key: impl Into<String>) -> Scan {
        self.start = Some(row_key.into());
        self
    }

    /// Stops before `row_key`.
    pub fn stop(mut self, row_key: impl Into<String>) -> Scan {
        self.stop = Some(row_key.into());
        self
    }

    pub(super) fn into_operation(self, table: String, caching: u32) -> operation::Scan {
        operation::Scan {
            table,
            filter: self.filter,
            start: self.start,
            stop: self.stop,
            caching,
        }
    }
}
