use thiserror::Error;

/// Errors from decoding raw attribute bytes coming off the telemetry pipeline.
///
/// Announcing itself never fails; these only show up when turning wire codes into
/// [`Unit`](crate::Unit) and [`Precision`](crate::Precision).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unknown unit code {0}")]
    UnknownUnit(u8),
    #[error("unsupported precision mode {0}, expected 0, 1 or 2")]
    Precision(u8),
}
