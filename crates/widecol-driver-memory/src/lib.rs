//! An in-process wide-column store.
//!
//! Tables are sorted maps from row key to [`Row`]; each write stamps its
//! cells with the next value of a store-wide clock, and every cell keeps up
//! to `max_versions` versions. Tables are created on first write.

mod op;
mod store;

use store::Store;

use widecol_core::{
    async_trait,
    driver::{operation::Operation, Driver, Response},
    stmt::Row,
    Result,
};

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone)]
pub struct Memory {
    store: Arc<Mutex<Store>>,
}

impl Memory {
    /// Versions kept per cell unless configured otherwise.
    pub const DEFAULT_MAX_VERSIONS: usize = 3;

    pub fn new() -> Self {
        Self {
            store: Arc::new(Mutex::new(Store::new(Self::DEFAULT_MAX_VERSIONS))),
        }
    }

    /// Sets how many versions of each cell are kept. At least one is always
    /// kept.
    pub fn max_versions(self, max_versions: usize) -> Self {
        lock(&self.store).max_versions = max_versions.max(1);
        self
    }

    /// Returns a copy of a stored row, with every retained version.
    pub fn row(&self, table: &str, row_key: &str) -> Option<Row> {
        lock(&self.store).table(table)?.get(row_key).cloned()
    }

    /// Names of the tables created so far.
    pub fn tables(&self) -> Vec<String> {
        lock(&self.store).tables.keys().cloned().collect()
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Driver for Memory {
    async fn connect(&self) -> Result<Box<dyn widecol_core::driver::Connection>> {
        Ok(Box::new(Connection {
            store: self.store.clone(),
        }))
    }
}

#[derive(Debug)]
pub struct Connection {
    store: Arc<Mutex<Store>>,
}

impl Connection {
    fn store(&self) -> MutexGuard<'_, Store> {
        lock(&self.store)
    }
}

#[async_trait]
impl widecol_core::driver::Connection for Connection {
    async fn exec(&mut self, op: Operation) -> Result<Response> {
        log::trace!("memory driver exec; op={op:?}");

        match op {
            Operation::Write(op) => self.exec_write(op),
            Operation::Get(op) => self.exec_get(op),
            Operation::Scan(op) => self.exec_scan(op),
            Operation::Delete(op) => self.exec_delete(op),
        }
    }
}

// Operations never leave the store half-applied, so poisoning is ignored.
fn lock(store: &Mutex<Store>) -> MutexGuard<'_, Store> {
    store.lock().unwrap_or_else(PoisonError::into_inner)
}
