use super::Filter;

#[derive(Debug, Clone, PartialEq)]
pub struct FilterQualifierPrefix {
    pub prefix: Vec<u8>,
}

impl From<FilterQualifierPrefix> for Filter {
    fn from(value: FilterQualifierPrefix) -> Self {
        Filter::QualifierPrefix(value)
    }
}
