use super::Row;

use std::{
    collections::VecDeque,
    fmt,
    pin::Pin,
    task::{Context, Poll},
};
use tokio_stream::{Stream, StreamExt};

/// A finite, single-pass stream of rows returned by a scan.
#[derive(Default)]
pub struct RowStream {
    buffer: VecDeque<Row>,
    stream: Option<DynStream>,
}

type DynStream = Pin<Box<dyn Stream<Item = crate::Result<Row>> + Send + 'static>>;

impl RowStream {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_stream<T: Stream<Item = crate::Result<Row>> + Send + 'static>(stream: T) -> Self {
        Self {
            buffer: VecDeque::new(),
            stream: Some(Box::pin(stream)),
        }
    }

    pub fn from_vec(rows: Vec<Row>) -> Self {
        Self {
            buffer: rows.into(),
            stream: None,
        }
    }

    /// Returns the next row in the stream
    pub async fn next(&mut self) -> Option<crate::Result<Row>> {
        StreamExt::next(self).await
    }

    /// The stream will contain at least this number of rows
    pub fn min_len(&self) -> usize {
        let (ret, _) = self.size_hint();
        ret
    }

    pub async fn collect(mut self) -> crate::Result<Vec<Row>> {
        let mut ret = Vec::with_capacity(self.min_len());

        while let Some(res) = self.next().await {
            ret.push(res?);
        }

        Ok(ret)
    }

    /// Drains any pending stream into the buffer and returns a copy of it.
    pub async fn dup(&mut self) -> crate::Result<Self> {
        if let Some(stream) = &mut self.stream {
            while let Some(res) = stream.next().await {
                self.buffer.push_back(res?);
            }
        }
        self.stream = None;

        Ok(Self {
            buffer: self.buffer.clone(),
            stream: None,
        })
    }
}

impl Stream for RowStream {
    type Item = crate::Result<Row>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if let Some(next) = self.buffer.pop_front() {
            Poll::Ready(Some(Ok(next)))
        } else if let Some(stream) = self.stream.as_mut() {
            Pin::new(stream).poll_next(cx)
        } else {
            Poll::Ready(None)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (mut low, mut high) = match &self.stream {
            Some(stream) => stream.size_hint(),
            None => (0, Some(0)),
        };

        let buffered = self.buffer.len();

        low += buffered;

        if let Some(high) = high.as_mut() {
            *high += buffered;
        }

        (low, high)
    }
}

impl From<Vec<Row>> for RowStream {
    fn from(value: Vec<Row>) -> Self {
        Self::from_vec(value)
    }
}

impl fmt::Debug for RowStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowStream")
            .field("buffer", &self.buffer)
            .field("stream", &self.stream.as_ref().map(|_| "<stream>"))
            .finish()
    }
}
