use super::Filter;

use std::ops;

#[derive(Debug, Clone, PartialEq)]
pub struct FilterOr {
    pub operands: Vec<Filter>,
}

impl Filter {
    /// Combines two filters with OR, flattening nested OR groups.
    pub fn or(lhs: impl Into<Filter>, rhs: impl Into<Filter>) -> Filter {
        let mut lhs = lhs.into();
        let rhs = rhs.into();

        match (&mut lhs, rhs) {
            (Filter::Or(lhs_or), Filter::Or(rhs_or)) => {
                lhs_or.operands.extend(rhs_or.operands);
                lhs
            }
            (Filter::Or(lhs_or), rhs) => {
                lhs_or.operands.push(rhs);
                lhs
            }
            (_, Filter::Or(mut rhs_or)) => {
                rhs_or.operands.insert(0, lhs);
                rhs_or.into()
            }
            (_, rhs) => FilterOr {
                operands: vec![lhs, rhs],
            }
            .into(),
        }
    }
}

impl ops::Deref for FilterOr {
    type Target = [Filter];

    fn deref(&self) -> &Self::Target {
        self.operands.deref()
    }
}

impl<'a> IntoIterator for &'a FilterOr {
    type IntoIter = std::slice::Iter<'a, Filter>;
    type Item = &'a Filter;

    fn into_iter(self) -> Self::IntoIter {
        self.operands.iter()
    }
}

impl From<FilterOr> for Filter {
    fn from(value: FilterOr) -> Self {
        Filter::Or(value)
    }
}
