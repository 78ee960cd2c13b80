use crate::Connection;

use widecol_core::{
    driver::{operation, Response},
    Result,
};

impl Connection {
    pub(crate) fn exec_write(&mut self, op: operation::Write) -> Result<Response> {
        let mut store = self.store();
        let count = op.mutations.len() as u64;

        for mutation in op.mutations {
            store.apply(&op.table, mutation);
        }

        Ok(Response::count(count))
    }
}
