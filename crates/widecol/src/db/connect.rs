use crate::{driver::Connection, Error, Result};

use widecol_core::{async_trait, driver::Driver};

use url::Url;

/// A driver chosen by the scheme of a connection URL.
///
/// `memory:` (optionally `memory:?max_versions=N`) opens an in-process
/// store; each `Connect` owns its own store.
#[derive(Debug)]
pub struct Connect {
    driver: Box<dyn Driver>,
}

impl Connect {
    pub fn new(url: &str) -> Result<Self> {
        let url = Url::parse(url).map_err(|err| Error::invalid_connection_url(err.to_string()))?;

        let driver = match url.scheme() {
            "memory" => connect_memory(&url)?,
            scheme => {
                return Err(Error::invalid_connection_url(format!(
                    "unsupported store; scheme={scheme}; url={url}"
                )))
            }
        };

        Ok(Self { driver })
    }
}

#[async_trait]
impl Driver for Connect {
    async fn connect(&self) -> Result<Box<dyn Connection>> {
        self.driver.connect().await
    }
}

#[cfg(feature = "memory")]
fn connect_memory(url: &Url) -> Result<Box<dyn Driver>> {
    let mut driver = widecol_driver_memory::Memory::new();

    for (key, value) in url.query_pairs() {
        match &*key {
            "max_versions" => {
                let max_versions = value.parse().map_err(|_| {
                    Error::invalid_connection_url(format!("invalid max_versions `{value}`"))
                })?;
                driver = driver.max_versions(max_versions);
            }
            _ => {
                return Err(Error::invalid_connection_url(format!(
                    "unknown parameter `{key}`; url={url}"
                )))
            }
        }
    }

    Ok(Box::new(driver))
}

#[cfg(not(feature = "memory"))]
fn connect_memory(_url: &Url) -> Result<Box<dyn Driver>> {
    Err(Error::invalid_connection_url("`memory` feature not enabled"))
}
