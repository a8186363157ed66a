use ad_core::{ChannelSum, Image, ImageView, ImageViewMut, PackedRgb};

use crate::error::ResizeError;
use crate::horizontal::integrate_rows;
use crate::vertical::integrate_columns;

/// Downscales `src` to `target_width x target_height` by exact area-weighted
/// averaging and returns the owned result.
///
/// Targets must be nonzero and must not exceed the source dimensions.
pub fn downsample(
    src: &ImageView<'_, PackedRgb>,
    target_width: usize,
    target_height: usize,
) -> Result<Image<PackedRgb>, ResizeError> {
    validate(src.width(), src.height(), target_width, target_height)?;

    let data = try_filled(target_width * target_height, PackedRgb::default())?;
    let mut out = Image::from_vec(target_width, target_height, data)
        .expect("buffer length matches requested dimensions");
    let mut sink = out.as_view_mut();
    downsample_into(src, &mut sink)?;
    Ok(out)
}

/// Downscales `src` into a caller-owned sink whose dimensions are the
/// target.
///
/// The intermediate `target_width x source_height` buffer is allocated once
/// per invocation and dropped before returning; the horizontal pass is the
/// only writer and the vertical pass the only reader.
pub fn downsample_into(
    src: &ImageView<'_, PackedRgb>,
    dst: &mut ImageViewMut<'_, PackedRgb>,
) -> Result<(), ResizeError> {
    validate(src.width(), src.height(), dst.width(), dst.height())?;

    let mut mid = try_filled(dst.width() * src.height(), ChannelSum::ZERO)?;
    integrate_rows(src, dst.width(), &mut mid);

    let normalization =
        (src.width() * src.height()) as f64 / (dst.width() * dst.height()) as f64;
    integrate_columns(&mid, src.height(), normalization, dst);
    Ok(())
}

fn validate(
    source_width: usize,
    source_height: usize,
    target_width: usize,
    target_height: usize,
) -> Result<(), ResizeError> {
    if target_width == 0
        || target_height == 0
        || target_width > source_width
        || target_height > source_height
    {
        return Err(ResizeError::InvalidDimensions {
            source_width,
            source_height,
            target_width,
            target_height,
        });
    }
    Ok(())
}

/// Fallible eager allocation: an out-of-memory condition surfaces as an
/// error instead of aborting the process.
fn try_filled<T: Clone>(len: usize, value: T) -> Result<Vec<T>, ResizeError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len).map_err(ResizeError::Allocation)?;
    buf.resize(len, value);
    Ok(buf)
}
