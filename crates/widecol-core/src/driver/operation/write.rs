use super::Operation;
use crate::stmt::Mutation;

#[derive(Debug, Clone)]
pub struct Write {
    /// Which table to write to
    pub table: String,

    /// Row mutations, applied in order
    pub mutations: Vec<Mutation>,
}

impl From<Write> for Operation {
    fn from(value: Write) -> Self {
        Self::Write(value)
    }
}
