//! Downscales a synthetic 4x4 gray ramp to 2x2 and prints the averaged
//! pixels, demonstrating the half-up rounding of the 42.5 / 212.5 averages.

use area_downscale::{Image, PackedRgb, downsample};

fn main() {
    let mut pixels = Vec::with_capacity(16);
    for &gray in &[0u8, 85, 170, 255] {
        for _ in 0..4 {
            pixels.push(PackedRgb::from_channels([gray, gray, gray]));
        }
    }
    let src = Image::from_vec(4, 4, pixels).expect("4x4 grid");

    let half = downsample(&src.as_view(), 2, 2).expect("valid target");

    for y in 0..half.height() {
        for x in 0..half.width() {
            let px = half.as_view().get(x, y).expect("in bounds");
            let [r, g, b] = px.channels();
            println!("({x}, {y}) = rgb({r}, {g}, {b})");
        }
    }
}
