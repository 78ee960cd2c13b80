use super::{Connect, Db};
use crate::{driver::Driver, Result};

use std::sync::Arc;

#[derive(Debug)]
pub struct Builder {
    table_name_prefix: String,
    scan_caching: u32,
}

impl Builder {
    /// Set the table name prefix for all tables
    ///
    /// Useful for stores addressing tables by path, such as
    /// `/apps/tables/`.
    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.table_name_prefix = prefix.to_string();
        self
    }

    /// Set the number of rows fetched per round trip when scanning
    pub fn scan_caching(&mut self, rows: u32) -> &mut Self {
        self.scan_caching = rows;
        self
    }

    pub async fn connect(&mut self, url: &str) -> Result<Db> {
        let driver = Connect::new(url)?;
        self.build(driver).await
    }

    pub async fn build(&mut self, driver: impl Driver) -> Result<Db> {
        // Fail early if the store is unreachable.
        driver.connect().await?;

        Ok(Db {
            driver: Arc::new(driver),
            table_name_prefix: self.table_name_prefix.clone(),
            scan_caching: self.scan_caching,
        })
    }
}

impl Default for Builder {
    fn default() -> Self {
        Builder {
            table_name_prefix: String::new(),
            scan_caching: 20,
        }
    }
}
