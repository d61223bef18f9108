//! Result-delivery message shapes.
//!
//! These structs model the three shapes in which the remote engine delivers
//! result data: direct API result pages (JSON over the query API), plain CSV
//! export rows, and downloaded/decompressed CSV fields. The API-borne shapes
//! carry serde derives matching the service's camelCase JSON.

use serde::{Deserialize, Serialize};

/// Handle identifying a submitted query execution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryHandle(pub String);

impl QueryHandle {
    /// Create a new query handle.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw execution id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for QueryHandle {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Lifecycle state of a submitted query, as reported by the status poll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueryStatus {
    /// Accepted, waiting for execution resources
    Queued,
    /// Currently executing
    Running,
    /// Finished; results are available
    Succeeded,
    /// Finished with an error
    Failed {
        /// Engine-reported failure reason
        message: String,
    },
    /// Cancelled before completion
    Cancelled,
}

impl QueryStatus {
    /// Whether the query has reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            QueryStatus::Succeeded | QueryStatus::Failed { .. } | QueryStatus::Cancelled
        )
    }

    /// Turn a terminal status into the outcome the polling loop reports:
    /// `Ok` for success, the matching [`QueryError`] otherwise.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::NoResultSet` for non-terminal states,
    /// `QueryError::ExecutionFailed` / `QueryError::Cancelled` for the
    /// failed/cancelled ones.
    pub fn into_result(self) -> Result<(), crate::error::QueryError> {
        use crate::error::QueryError;

        match self {
            QueryStatus::Succeeded => Ok(()),
            QueryStatus::Failed { message } => Err(QueryError::ExecutionFailed(message)),
            QueryStatus::Cancelled => Err(QueryError::Cancelled),
            QueryStatus::Queued | QueryStatus::Running => Err(QueryError::NoResultSet(
                "query has not finished executing".to_string(),
            )),
        }
    }
}

/// Column metadata from the active result set's schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnInfo {
    /// Column name
    pub name: String,
    /// Declared type label, e.g. `"varchar"` or `"decimal(10,2)"`
    #[serde(rename = "type")]
    pub declared_type: String,
}

impl ColumnInfo {
    /// Create column metadata from a name and declared type label.
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
        }
    }

    /// The declared type, normalized into the closed label enumeration.
    pub fn column_type(&self) -> crate::types::ColumnType {
        crate::types::ColumnType::parse(&self.declared_type)
    }
}

/// One cell of a direct API result row.
///
/// The API distinguishes "no value" (SQL NULL) from "value present" by
/// omitting the text payload entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Datum {
    /// Text rendering of the cell value; `None` signals SQL NULL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Datum {
    /// A cell carrying a value.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            text: Some(value.into()),
        }
    }

    /// A NULL cell.
    pub fn null() -> Self {
        Self { text: None }
    }
}

/// Opaque continuation token for fetching the next result page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageToken(pub String);

/// One page of direct API results.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultPage {
    /// Result set schema; present on every page
    pub columns: Vec<ColumnInfo>,
    /// Rows in this page, one `Datum` per column
    pub rows: Vec<Vec<Datum>>,
    /// Token for the next page, absent on the last page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<PageToken>,
}

/// One field of a downloaded, decompressed CSV result row.
///
/// Unlike the plain CSV export (which marks NULL with a reserved sentinel
/// token inside the text), the download path attaches an explicit null flag
/// that wins over any text content.
#[derive(Debug, Clone)]
pub struct DownloadField {
    /// Raw field text; meaningless when `is_null` is set
    pub text: String,
    /// Explicit NULL marker
    pub is_null: bool,
}

impl DownloadField {
    /// A field carrying a value.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            text: value.into(),
            is_null: false,
        }
    }

    /// A NULL field.
    pub fn null() -> Self {
        Self {
            text: String::new(),
            is_null: true,
        }
    }
}
