use crate::Connection;

use widecol_core::{
    driver::{operation, Response},
    Result,
};

impl Connection {
    pub(crate) fn exec_delete(&mut self, op: operation::Delete) -> Result<Response> {
        let mut store = self.store();

        let Some(table) = store.table_mut(&op.table) else {
            return Ok(Response::count(0));
        };

        if op.columns.is_empty() {
            let removed = table.remove(&op.row_key).is_some();
            return Ok(Response::count(removed as u64));
        }

        let Some(row) = table.get_mut(&op.row_key) else {
            return Ok(Response::count(0));
        };

        let mut removed = 0;

        for column in &op.columns {
            if row.remove(&column.family, &column.qualifier) {
                removed += 1;
            }
        }

        if row.is_empty() {
            table.remove(&op.row_key);
        }

        Ok(Response::count(removed))
    }
}
