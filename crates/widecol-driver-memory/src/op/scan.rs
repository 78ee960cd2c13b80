use crate::Connection;

use widecol_core::{
    driver::{operation, Response},
    Result,
};

use std::ops::Bound;

impl Connection {
    pub(crate) fn exec_scan(&mut self, op: operation::Scan) -> Result<Response> {
        let store = self.store();

        let Some(table) = store.table(&op.table) else {
            return Ok(Response::empty_row_stream());
        };

        let start = match &op.start {
            Some(start) => Bound::Included(start.as_str()),
            None => Bound::Unbounded,
        };

        let stop = match &op.stop {
            Some(stop) => Bound::Excluded(stop.as_str()),
            None => Bound::Unbounded,
        };

        // `BTreeMap::range` panics when start > stop.
        if let (Some(start), Some(stop)) = (&op.start, &op.stop) {
            if start >= stop {
                return Ok(Response::empty_row_stream());
            }
        }

        let rows = table
            .range::<str, _>((start, stop))
            .filter_map(|(_, row)| match &op.filter {
                Some(filter) => filter.apply(row),
                None => (!row.is_empty()).then(|| row.clone()),
            })
            .collect::<Vec<_>>();

        Ok(Response::row_stream(rows))
    }
}
