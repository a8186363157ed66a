use core::fmt;
use std::collections::TryReserveError;

/// Failure modes of [`downsample`](crate::downsample).
///
/// Every variant is a precondition violation discovered before either pass
/// runs; nothing here is transient and no partial output is ever produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResizeError {
    /// Target width or height is zero, or exceeds the source dimension.
    InvalidDimensions {
        source_width: usize,
        source_height: usize,
        target_width: usize,
        target_height: usize,
    },
    /// The intermediate or output buffer could not be allocated. Retrying
    /// with the same inputs would fail identically.
    Allocation(TryReserveError),
}

impl fmt::Display for ResizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions {
                source_width,
                source_height,
                target_width,
                target_height,
            } => write!(
                f,
                "invalid target dimensions {target_width}x{target_height} \
                 for {source_width}x{source_height} source \
                 (targets must be nonzero and no larger than the source)"
            ),
            Self::Allocation(_) => write!(f, "buffer allocation failed"),
        }
    }
}

impl std::error::Error for ResizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidDimensions { .. } => None,
            Self::Allocation(err) => Some(err),
        }
    }
}
