use super::{Cell, CompareOp, FilterAnd, FilterColumnValue, FilterFamily, FilterOr, FilterQualifierPrefix, Row};

/// A read-time predicate over the cells of a row.
///
/// Filters are evaluated per cell: a cell is returned when the filter
/// matches it, and a row with no matching cells is not returned at all.
/// Column value filters look at the whole row, so they either keep or drop
/// every cell of it.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// All operands must match
    And(FilterAnd),

    /// At least one operand must match
    Or(FilterOr),

    /// The cell's family equals the given family
    Family(FilterFamily),

    /// The cell's qualifier starts with the given prefix
    QualifierPrefix(FilterQualifierPrefix),

    /// The row's value at a column compares against an operand
    ColumnValue(FilterColumnValue),
}

impl Filter {
    /// Matches every cell of `family`.
    pub fn family(family: impl Into<Vec<u8>>) -> Filter {
        FilterFamily {
            family: family.into(),
        }
        .into()
    }

    /// Matches cells whose qualifier starts with `prefix`, in any family.
    pub fn qualifier_prefix(prefix: impl Into<Vec<u8>>) -> Filter {
        FilterQualifierPrefix {
            prefix: prefix.into(),
        }
        .into()
    }

    /// Matches rows whose latest value at (family, qualifier) compares to
    /// `value` with `op`.
    ///
    /// Rows without the column pass unless
    /// [`FilterColumnValue::filter_if_missing`] is set.
    pub fn column_value(
        family: impl Into<Vec<u8>>,
        qualifier: impl Into<Vec<u8>>,
        op: CompareOp,
        value: impl Into<Vec<u8>>,
    ) -> FilterColumnValue {
        FilterColumnValue {
            family: family.into(),
            qualifier: qualifier.into(),
            op,
            value: value.into(),
            filter_if_missing: false,
            latest_version_only: true,
        }
    }

    /// Groups filters with OR semantics. An empty group matches everything.
    pub fn any(operands: impl IntoIterator<Item = Filter>) -> Filter {
        FilterOr {
            operands: operands.into_iter().collect(),
        }
        .into()
    }

    /// Groups filters with AND semantics. An empty group matches everything.
    pub fn all(operands: impl IntoIterator<Item = Filter>) -> Filter {
        FilterAnd {
            operands: operands.into_iter().collect(),
        }
        .into()
    }

    /// Returns `true` if `cell` of `row` passes this filter.
    pub fn matches(&self, row: &Row, cell: &Cell<'_>) -> bool {
        match self {
            Self::And(filter) => filter.operands.iter().all(|f| f.matches(row, cell)),
            Self::Or(filter) => {
                filter.operands.is_empty() || filter.operands.iter().any(|f| f.matches(row, cell))
            }
            Self::Family(filter) => cell.family == &filter.family[..],
            Self::QualifierPrefix(filter) => cell.qualifier.starts_with(&filter.prefix),
            Self::ColumnValue(filter) => filter.matches_row(row),
        }
    }

    /// Applies the filter to a row, keeping every version of each matching
    /// cell. Returns `None` when no cell passes.
    pub fn apply(&self, row: &Row) -> Option<Row> {
        let mut filtered = Row::new(row.key.clone());

        for cell in row.latest_cells() {
            if !self.matches(row, &cell) {
                continue;
            }

            if let Some(versions) = row
                .families
                .get(cell.family)
                .and_then(|qualifiers| qualifiers.get(cell.qualifier))
            {
                for (timestamp, value) in versions {
                    filtered.push(cell.family, cell.qualifier, *timestamp, value.clone());
                }
            }
        }

        if filtered.is_empty() {
            None
        } else {
            Some(filtered)
        }
    }
}
