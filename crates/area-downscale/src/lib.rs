//! Umbrella crate for the `area-downscale` workspace.
//!
//! Re-exports the pixel containers and the area-averaging resize so most
//! users only depend on a single crate.

pub use ad_area::*;
pub use ad_core::*;
