use crate::{
    logging_driver::{DriverOp, LoggingDriver},
    ExecLog, Setup,
};

use std::{
    future::Future,
    pin::Pin,
    sync::{Arc, Mutex},
};
use widecol::{db, Db};

/// Runs one test against one store, logging every driver operation.
///
/// Tests use `#[test]` rather than `#[tokio::test]`; the runtime is created
/// here so every store gets the same current-thread setup.
pub struct DbTest {
    setup: Box<dyn Setup>,
    ops_log: Arc<Mutex<Vec<DriverOp>>>,
}

impl DbTest {
    pub fn new(setup: impl Setup) -> Self {
        Self {
            setup: Box::new(setup),
            ops_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Run a test function on a current-thread runtime.
    pub fn run<F>(setup: impl Setup, test_fn: F)
    where
        F: for<'a> FnOnce(&'a mut DbTest) -> Pin<Box<dyn Future<Output = ()> + 'a>>,
    {
        let _ = env_logger::builder().is_test(true).try_init();

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("Failed to create Tokio runtime");

        let mut test = DbTest::new(setup);
        runtime.block_on(test_fn(&mut test));
    }

    /// Try to setup a database, returns Result for error handling
    pub async fn try_setup_db(&mut self, mut builder: db::Builder) -> widecol::Result<Db> {
        self.setup.configure_builder(&mut builder);

        // Always wrap with logging, replacing the log of any earlier setup
        let logging_driver = LoggingDriver::new(self.setup.driver());
        self.ops_log = logging_driver.ops_log_handle();

        builder.build(logging_driver).await
    }

    /// Setup a database with default settings
    pub async fn setup_db(&mut self) -> Db {
        self.try_setup_db(Db::builder()).await.unwrap()
    }

    /// Setup a database from a configured builder
    pub async fn setup_db_with(&mut self, builder: db::Builder) -> Db {
        self.try_setup_db(builder).await.unwrap()
    }

    /// Get the operations log for assertions
    pub fn log(&self) -> ExecLog {
        ExecLog::new(self.ops_log.clone())
    }
}
