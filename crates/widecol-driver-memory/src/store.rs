use widecol_core::stmt::{Mutation, Row};

use std::collections::BTreeMap;

#[derive(Debug)]
pub(crate) struct Store {
    pub(crate) tables: BTreeMap<String, BTreeMap<String, Row>>,

    /// Last timestamp handed out
    clock: u64,

    pub(crate) max_versions: usize,
}

impl Store {
    pub(crate) fn new(max_versions: usize) -> Store {
        Store {
            tables: BTreeMap::new(),
            clock: 0,
            max_versions,
        }
    }

    pub(crate) fn table(&self, name: &str) -> Option<&BTreeMap<String, Row>> {
        self.tables.get(name)
    }

    pub(crate) fn table_mut(&mut self, name: &str) -> Option<&mut BTreeMap<String, Row>> {
        self.tables.get_mut(name)
    }

    /// Applies a mutation, creating the table and row as needed. All cells
    /// of one mutation share a timestamp.
    pub(crate) fn apply(&mut self, table: &str, mutation: Mutation) {
        if mutation.is_empty() {
            return;
        }

        self.clock += 1;
        let timestamp = self.clock;
        let max_versions = self.max_versions;

        let row = self
            .tables
            .entry(table.to_string())
            .or_default()
            .entry(mutation.row_key.clone())
            .or_insert_with(|| Row::new(mutation.row_key.as_bytes()));

        for put in mutation.puts {
            let versions = row
                .families
                .entry(put.family)
                .or_default()
                .entry(put.qualifier)
                .or_default();

            versions.insert(timestamp, put.value);

            while versions.len() > max_versions {
                versions.pop_first();
            }
        }
    }
}
