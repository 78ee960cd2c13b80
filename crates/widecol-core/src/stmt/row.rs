use std::{borrow::Cow, collections::BTreeMap};

/// A stored row: families map to qualifiers, qualifiers to versions.
///
/// Everything is kept in byte order, like the store keeps it. Versions are
/// keyed by timestamp; only [`Row::latest`] is consulted when decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub key: Vec<u8>,
    pub families: BTreeMap<Vec<u8>, BTreeMap<Vec<u8>, BTreeMap<u64, Vec<u8>>>>,
}

/// A single cell version, borrowed from a [`Row`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell<'a> {
    pub family: &'a [u8],
    pub qualifier: &'a [u8],
    pub timestamp: u64,
    pub value: &'a [u8],
}

impl Row {
    pub fn new(key: impl Into<Vec<u8>>) -> Row {
        Row {
            key: key.into(),
            families: BTreeMap::new(),
        }
    }

    /// The row key as text.
    pub fn key_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.key)
    }

    pub fn is_empty(&self) -> bool {
        self.families.values().all(|qualifiers| qualifiers.is_empty())
    }

    /// Adds a cell version, replacing any value at the same timestamp.
    pub fn push(
        &mut self,
        family: impl Into<Vec<u8>>,
        qualifier: impl Into<Vec<u8>>,
        timestamp: u64,
        value: impl Into<Vec<u8>>,
    ) {
        self.families
            .entry(family.into())
            .or_default()
            .entry(qualifier.into())
            .or_default()
            .insert(timestamp, value.into());
    }

    /// Builder-style [`Row::push`].
    pub fn with(
        mut self,
        family: impl Into<Vec<u8>>,
        qualifier: impl Into<Vec<u8>>,
        timestamp: u64,
        value: impl Into<Vec<u8>>,
    ) -> Row {
        self.push(family, qualifier, timestamp, value);
        self
    }

    /// The newest version stored at (family, qualifier).
    pub fn latest(&self, family: &[u8], qualifier: &[u8]) -> Option<&[u8]> {
        self.families
            .get(family)?
            .get(qualifier)?
            .last_key_value()
            .map(|(_, value)| &value[..])
    }

    /// Iterates the newest version of every cell, in family then qualifier
    /// order.
    pub fn latest_cells(&self) -> impl Iterator<Item = Cell<'_>> {
        self.families.iter().flat_map(|(family, qualifiers)| {
            qualifiers.iter().filter_map(move |(qualifier, versions)| {
                let (timestamp, value) = versions.last_key_value()?;
                Some(Cell {
                    family,
                    qualifier,
                    timestamp: *timestamp,
                    value,
                })
            })
        })
    }

    /// Iterates every stored version of every cell.
    pub fn cells(&self) -> impl Iterator<Item = Cell<'_>> {
        self.families.iter().flat_map(|(family, qualifiers)| {
            qualifiers.iter().flat_map(move |(qualifier, versions)| {
                versions.iter().map(move |(timestamp, value)| Cell {
                    family,
                    qualifier,
                    timestamp: *timestamp,
                    value,
                })
            })
        })
    }

    /// Removes a whole column, returning `true` if it existed.
    pub fn remove(&mut self, family: &[u8], qualifier: &[u8]) -> bool {
        let Some(qualifiers) = self.families.get_mut(family) else {
            return false;
        };

        let removed = qualifiers.remove(qualifier).is_some();

        if qualifiers.is_empty() {
            self.families.remove(family);
        }

        removed
    }
}
