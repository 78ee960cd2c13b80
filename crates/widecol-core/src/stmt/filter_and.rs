use super::Filter;

use std::ops;

#[derive(Debug, Clone, PartialEq)]
pub struct FilterAnd {
    pub operands: Vec<Filter>,
}

impl Filter {
    /// Combines two filters with AND, flattening nested AND groups.
    pub fn and(lhs: impl Into<Filter>, rhs: impl Into<Filter>) -> Filter {
        let mut lhs = lhs.into();
        let rhs = rhs.into();

        match (&mut lhs, rhs) {
            (Filter::And(lhs_and), Filter::And(rhs_and)) => {
                lhs_and.operands.extend(rhs_and.operands);
                lhs
            }
            (Filter::And(lhs_and), rhs) => {
                lhs_and.operands.push(rhs);
                lhs
            }
            (_, Filter::And(mut rhs_and)) => {
                rhs_and.operands.insert(0, lhs);
                rhs_and.into()
            }
            (_, rhs) => FilterAnd {
                operands: vec![lhs, rhs],
            }
            .into(),
        }
    }
}

impl ops::Deref for FilterAnd {
    type Target = [Filter];

    fn deref(&self) -> &Self::Target {
        self.operands.deref()
    }
}

impl<'a> IntoIterator for &'a FilterAnd {
    type IntoIter = std::slice::Iter<'a, Filter>;
    type Item = &'a Filter;

    fn into_iter(self) -> Self::IntoIter {
        self.operands.iter()
    }
}

impl From<FilterAnd> for Filter {
    fn from(value: FilterAnd) -> Self {
        Filter::And(value)
    }
}
