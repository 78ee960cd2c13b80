use crate::{
    stmt::{Row, RowStream},
    Result,
};

#[derive(Debug)]
pub struct Response {
    pub rows: Rows,
}

#[derive(Debug)]
pub enum Rows {
    /// Number of rows impacted by the operation
    Count(u64),

    /// Operation result, as a stream of rows
    Stream(RowStream),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self {
            rows: Rows::Count(count),
        }
    }

    pub fn row_stream(rows: impl Into<RowStream>) -> Self {
        Self {
            rows: Rows::Stream(rows.into()),
        }
    }

    pub fn empty_row_stream() -> Self {
        Self {
            rows: Rows::Stream(RowStream::empty()),
        }
    }

    /// Converts the response into its rows, treating a count as no rows.
    pub async fn into_rows(self) -> Result<Vec<Row>> {
        match self.rows {
            Rows::Count(_) => Ok(vec![]),
            Rows::Stream(stream) => stream.collect().await,
        }
    }
}

impl Rows {
    pub fn is_count(&self) -> bool {
        matches!(self, Self::Count(_))
    }

    pub fn is_stream(&self) -> bool {
        matches!(self, Self::Stream(_))
    }

    pub async fn dup(&mut self) -> Result<Self> {
        match self {
            Rows::Count(count) => Ok(Rows::Count(*count)),
            Rows::Stream(stream) => Ok(Rows::Stream(stream.dup().await?)),
        }
    }
}
