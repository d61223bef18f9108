//! Generic row cursor over decoded results.
//!
//! [`RowCursor`] pulls result pages from the transport lazily and yields one
//! decoded row at a time to the consumer.

use crate::decode::decode_api_row;
use crate::error::CirroError;
use crate::transport::messages::{ColumnInfo, Datum, PageToken, QueryHandle, ResultPage};
use crate::transport::{QueryConfig, QueryTransport};
use crate::types::Value;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Cursor over the rows of one query's result set.
///
/// Rows are decoded per position against the result set's declared column
/// schema. A decode failure is returned for the offending row only; the
/// cursor remains usable, so the caller chooses between aborting the result
/// set and skipping the row.
pub struct RowCursor {
    columns: Vec<ColumnInfo>,
    handle: QueryHandle,
    transport: Arc<Mutex<dyn QueryTransport>>,
    config: QueryConfig,
    buffered: VecDeque<Vec<Datum>>,
    next_token: Option<PageToken>,
    complete: bool,
}

impl std::fmt::Debug for RowCursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RowCursor")
            .field("columns", &self.columns)
            .field("handle", &self.handle)
            .field("config", &self.config)
            .field("buffered", &self.buffered.len())
            .field("complete", &self.complete)
            .finish()
    }
}

impl RowCursor {
    /// Create a cursor that fetches all pages for `handle` on demand.
    ///
    /// The configuration's page size is forwarded on every page fetch; its
    /// poll mode is carried for the surrounding submission loop.
    pub fn new(
        handle: QueryHandle,
        transport: Arc<Mutex<dyn QueryTransport>>,
        config: QueryConfig,
    ) -> Self {
        Self {
            columns: Vec::new(),
            handle,
            transport,
            config,
            buffered: VecDeque::new(),
            next_token: None,
            complete: false,
        }
    }

    /// Create a cursor seeded with an already-fetched first page.
    pub fn from_first_page(
        handle: QueryHandle,
        page: ResultPage,
        transport: Arc<Mutex<dyn QueryTransport>>,
        config: QueryConfig,
    ) -> Self {
        let complete = page.next_token.is_none();
        Self {
            columns: page.columns,
            handle,
            transport,
            config,
            buffered: page.rows.into(),
            next_token: page.next_token,
            complete,
        }
    }

    /// The result set's column schema. Empty until the first page arrives.
    pub fn columns(&self) -> &[ColumnInfo] {
        &self.columns
    }

    /// The configuration this cursor was created with.
    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// Fetch the next decoded row, or `None` when the result set is
    /// exhausted.
    ///
    /// # Errors
    ///
    /// Returns `CirroError::Transport` if a page fetch fails, or
    /// `CirroError::Decode` if the current row cannot be converted. A decode
    /// error consumes only the offending row.
    pub async fn next_row(&mut self) -> Result<Option<Vec<Value>>, CirroError> {
        loop {
            if let Some(cells) = self.buffered.pop_front() {
                return match decode_api_row(&self.columns, &cells) {
                    Ok(row) => Ok(Some(row)),
                    Err(err) => {
                        debug!(handle = %self.handle.as_str(), error = %err, "row decode failed");
                        Err(err.into())
                    }
                };
            }

            if self.complete {
                return Ok(None);
            }

            self.fetch_next_page().await?;
        }
    }

    /// Collect every remaining row, failing on the first bad one.
    ///
    /// # Errors
    ///
    /// Same contract as [`RowCursor::next_row`].
    pub async fn collect_rows(mut self) -> Result<Vec<Vec<Value>>, CirroError> {
        let mut rows = Vec::new();
        while let Some(row) = self.next_row().await? {
            rows.push(row);
        }
        Ok(rows)
    }

    async fn fetch_next_page(&mut self) -> Result<(), CirroError> {
        let page = {
            let mut transport = self.transport.lock().await;
            transport
                .fetch_page(&self.handle, self.next_token.take(), self.config.page_size)
                .await?
        };

        debug!(
            handle = %self.handle.as_str(),
            rows = page.rows.len(),
            has_next = page.next_token.is_some(),
            "fetched result page"
        );

        if self.columns.is_empty() {
            self.columns = page.columns;
        }

        // An empty page means the result set is drained even if the service
        // handed back a token.
        self.complete = page.next_token.is_none() || page.rows.is_empty();
        self.next_token = page.next_token;
        self.buffered.extend(page.rows);

        Ok(())
    }
}
