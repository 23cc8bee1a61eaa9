use thiserror::Error;

/// Failures of the data layer.
///
/// `Unavailable` and `EmptyDataset` are fatal at startup: the dashboard must
/// not come up with no data behind it. `InvalidRange` is an integration error
/// from the caller; the transform validates rather than silently swapping or
/// clamping the bounds.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("data source unavailable: {0}")]
    Unavailable(String),

    #[error("dataset contains no mission records")]
    EmptyDataset,

    #[error("invalid payload range: low {low} exceeds high {high}")]
    InvalidRange { low: f64, high: f64 },
}
