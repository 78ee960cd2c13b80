/// The writes for a single row, produced by encoding one entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Mutation {
    pub row_key: String,
    pub puts: Vec<Put>,
}

/// One cell write.
#[derive(Clone, PartialEq, Eq)]
pub struct Put {
    pub family: Vec<u8>,
    pub qualifier: Vec<u8>,
    pub value: Vec<u8>,
}

impl Mutation {
    pub fn new(row_key: impl Into<String>) -> Mutation {
        Mutation {
            row_key: row_key.into(),
            puts: vec![],
        }
    }

    pub fn push(&mut self, put: Put) {
        self.puts.push(put);
    }

    pub fn is_empty(&self) -> bool {
        self.puts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.puts.len()
    }
}

impl Put {
    pub fn new(
        family: impl Into<Vec<u8>>,
        qualifier: impl Into<Vec<u8>>,
        value: impl Into<Vec<u8>>,
    ) -> Put {
        Put {
            family: family.into(),
            qualifier: qualifier.into(),
            value: value.into(),
        }
    }
}

impl std::fmt::Debug for Put {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Put")
            .field(&String::from_utf8_lossy(&self.family))
            .field(&String::from_utf8_lossy(&self.qualifier))
            .field(&String::from_utf8_lossy(&self.value))
            .finish()
    }
}
