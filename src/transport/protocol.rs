//! Query transport abstraction trait.
//!
//! This module defines the `QueryTransport` trait that abstracts the remote
//! query service: submitting queries, polling their status, fetching result
//! pages, and downloading spooled CSV exports. The decoding layer consumes
//! these shapes but contains no network logic of its own; concrete transports
//! live behind this trait.

use crate::error::TransportError;
use crate::poll::PollMode;
use async_trait::async_trait;

use super::messages::{DownloadField, PageToken, QueryHandle, QueryStatus, ResultPage};

/// Client-side query configuration.
///
/// Carries the polling backoff mode for the submission loop and the page
/// size for result fetches. The decoding layer passes `poll_mode` through
/// unchanged; it performs no timing logic itself.
#[derive(Debug, Clone)]
pub struct QueryConfig {
    /// Backoff strategy between status polls
    pub poll_mode: PollMode,
    /// Maximum rows per fetched result page
    pub page_size: usize,
}

impl QueryConfig {
    /// Create a configuration with defaults: constant-interval polling,
    /// 1000-row pages.
    pub fn new() -> Self {
        Self {
            poll_mode: PollMode::default(),
            page_size: 1000,
        }
    }

    /// Set the polling backoff mode.
    pub fn with_poll_mode(mut self, poll_mode: PollMode) -> Self {
        self.poll_mode = poll_mode;
        self
    }

    /// Set the result page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Transport trait for the remote query service.
///
/// Implementations own all networking, credentials, retries, and timeouts.
#[async_trait]
pub trait QueryTransport: Send + Sync {
    /// Submit a SQL query for asynchronous execution.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if submission fails.
    async fn submit(&mut self, sql: &str) -> Result<QueryHandle, TransportError>;

    /// Poll the current status of a submitted query.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the status request fails.
    async fn status(&mut self, handle: &QueryHandle) -> Result<QueryStatus, TransportError>;

    /// Fetch one page of results through the direct query API.
    ///
    /// Pass `None` for the first page; subsequent pages use the token from
    /// the previous page. `page_size` caps the number of rows in the
    /// returned page (callers take it from [`QueryConfig::page_size`]).
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the fetch fails.
    async fn fetch_page(
        &mut self,
        handle: &QueryHandle,
        token: Option<PageToken>,
        page_size: usize,
    ) -> Result<ResultPage, TransportError>;

    /// Download and decompress the spooled CSV export of a query's results.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the download or decompression fails.
    async fn download_spooled(
        &mut self,
        handle: &QueryHandle,
    ) -> Result<Vec<Vec<DownloadField>>, TransportError>;

    /// Cancel a running query.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if cancellation fails.
    async fn cancel(&mut self, handle: &QueryHandle) -> Result<(), TransportError>;
}
