//! Foundational pixel and image containers for area-weighted downscaling.
//!
//! ## Pixel Encoding
//! Pixels are packed 32-bit words with layout `0xAARRGGBB`. The top byte
//! carries no semantics on input and is forced to full opacity when a pixel
//! is rebuilt from channels. Averaging code only ever sees the `[u8; 3]`
//! channel vector, so the packed layout can change without touching it.
//!
//! ## Image Views and Stride
//! Images use element stride (not byte stride). `stride` is the distance, in
//! elements, between adjacent row starts and may be greater than `width`.
//! This allows borrowed views over padded buffers and subviews.

mod error;
mod image;
mod pixel;

pub use error::Error;
pub use image::{Image, ImageView, ImageViewMut};
pub use pixel::{ChannelSum, PackedRgb};
