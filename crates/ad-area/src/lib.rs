//! Exact area-weighted image downscaling: a box filter applied via
//! back-projection in two separable passes.
//!
//! Each output pixel equals the true average of the source region its
//! back-projected footprint covers, including fractional edge pixels, so
//! downscaling conserves total pixel energy up to the final rounding.
//!
//! Pass policy:
//! - Horizontal: every source row collapses into `target_width` per-channel
//!   partial sums weighted by exact fractional coverage.
//! - Vertical: the intermediate columns collapse into `target_height` rows
//!   with the same weighting, are divided by the source area one output
//!   pixel represents, and rounded half-up per channel.
//!
//! Downscaling only: targets must be nonzero and must not exceed the source
//! dimensions. The transform is stateless and deterministic.

mod error;
mod horizontal;
mod resize;
mod span;
mod vertical;

pub use error::ResizeError;
pub use resize::{downsample, downsample_into};
pub use span::{Span, SpanIter, round_half_up};
