/// A (family, qualifier) pair addressing a column within a row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Column {
    pub family: Vec<u8>,
    pub qualifier: Vec<u8>,
}

impl Column {
    pub fn new(family: impl Into<Vec<u8>>, qualifier: impl Into<Vec<u8>>) -> Column {
        Column {
            family: family.into(),
            qualifier: qualifier.into(),
        }
    }
}
