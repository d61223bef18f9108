//! Result-delivery interfaces for the remote query service.
//!
//! The transport layer is organized into:
//! - `protocol` - the `QueryTransport` trait and query configuration
//! - `messages` - delivery-shape message types
//!
//! Concrete transports (HTTP query API clients, CSV export downloaders) are
//! out of scope for this crate and plug in behind [`QueryTransport`].

pub mod messages;
pub mod protocol;

pub use messages::{ColumnInfo, Datum, DownloadField, PageToken, QueryHandle, QueryStatus, ResultPage};
pub use protocol::{QueryConfig, QueryTransport};
