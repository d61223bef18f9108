//! Polling backoff mode for query status checks.

/// Backoff strategy used between query submission and result availability.
///
/// The decoding layer exposes this as an opaque selector consumed by the
/// status-polling loop; it performs no timing logic itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PollMode {
    /// Poll at a constant interval
    #[default]
    Constant,
    /// Poll with exponentially growing intervals
    Exponential,
}
