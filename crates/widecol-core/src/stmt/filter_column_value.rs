use super::{CompareOp, Filter, Row};

#[derive(Debug, Clone, PartialEq)]
pub struct FilterColumnValue {
    pub family: Vec<u8>,
    pub qualifier: Vec<u8>,
    pub op: CompareOp,
    pub value: Vec<u8>,

    /// Drop rows that do not have the column at all.
    pub filter_if_missing: bool,

    /// Compare only the newest version. Otherwise any version may match.
    pub latest_version_only: bool,
}

impl FilterColumnValue {
    pub fn filter_if_missing(mut self, filter_if_missing: bool) -> Self {
        self.filter_if_missing = filter_if_missing;
        self
    }

    pub fn latest_version_only(mut self, latest_version_only: bool) -> Self {
        self.latest_version_only = latest_version_only;
        self
    }

    pub(super) fn matches_row(&self, row: &Row) -> bool {
        let versions = row
            .families
            .get(&self.family)
            .and_then(|qualifiers| qualifiers.get(&self.qualifier));

        let Some(versions) = versions else {
            return !self.filter_if_missing;
        };

        if self.latest_version_only {
            versions
                .last_key_value()
                .is_some_and(|(_, stored)| self.op.eval(stored, &self.value))
        } else {
            versions
                .values()
                .any(|stored| self.op.eval(stored, &self.value))
        }
    }
}

impl From<FilterColumnValue> for Filter {
    fn from(value: FilterColumnValue) -> Self {
        Filter::ColumnValue(value)
    }
}
