mod response;
pub use response::{Response, Rows};

pub mod operation;
pub use operation::Operation;

use crate::async_trait;

use std::fmt::Debug;

/// A wide-column store backend.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Opens a connection to the store.
    async fn connect(&self) -> crate::Result<Box<dyn Connection>>;
}

/// A connection able to execute [`Operation`]s against the store.
#[async_trait]
pub trait Connection: Debug + Send + 'static {
    /// Execute a store operation
    async fn exec(&mut self, op: Operation) -> crate::Result<Response>;
}
