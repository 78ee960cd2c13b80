use super::Filter;

#[derive(Debug, Clone, PartialEq)]
pub struct FilterFamily {
    pub family: Vec<u8>,
}

impl From<FilterFamily> for Filter {
    fn from(value: FilterFamily) -> Self {
        Filter::Family(value)
    }
}
