use crate::Connection;

use widecol_core::{
    driver::{operation, Response},
    Result,
};

impl Connection {
    pub(crate) fn exec_get(&mut self, op: operation::Get) -> Result<Response> {
        let store = self.store();

        let Some(row) = store
            .table(&op.table)
            .and_then(|table| table.get(&op.row_key))
        else {
            return Ok(Response::empty_row_stream());
        };

        let row = match &op.filter {
            Some(filter) => filter.apply(row),
            None => Some(row.clone()),
        };

        Ok(Response::row_stream(row.into_iter().collect::<Vec<_>>()))
    }
}
