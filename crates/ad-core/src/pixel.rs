const OPAQUE: u32 = 0xff00_0000;

/// Packed 32-bit pixel with layout `0xAARRGGBB`.
///
/// Only the three low bytes carry color. The top byte is ignored on input;
/// [`PackedRgb::from_channels`] always sets it to full opacity, so every
/// pixel produced by this crate is opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PackedRgb(u32);

impl PackedRgb {
    pub fn from_channels(channels: [u8; 3]) -> Self {
        let [r, g, b] = channels;
        Self(OPAQUE | (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b))
    }

    /// Reinterprets a packed word as-is, preserving whatever the top byte holds.
    pub fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    /// Color channels in `[red, green, blue]` order.
    pub fn channels(self) -> [u8; 3] {
        [
            (self.0 >> 16) as u8,
            (self.0 >> 8) as u8,
            self.0 as u8,
        ]
    }
}

/// Per-channel `f64` accumulator for one output cell.
///
/// Values are plain weighted sums of channel bytes and stay unclamped until
/// the final quantization divides by the normalization factor. Arithmetic is
/// identical and independent per lane; vectorization is left to the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChannelSum([f64; 3]);

impl ChannelSum {
    pub const ZERO: Self = Self([0.0; 3]);

    /// Adds `weight * pixel` channel-wise.
    pub fn add_pixel(&mut self, px: PackedRgb, weight: f64) {
        let [r, g, b] = px.channels();
        self.0[0] += f64::from(r) * weight;
        self.0[1] += f64::from(g) * weight;
        self.0[2] += f64::from(b) * weight;
    }

    /// Adds `weight * other` channel-wise.
    pub fn add_sum(&mut self, other: ChannelSum, weight: f64) {
        self.0[0] += other.0[0] * weight;
        self.0[1] += other.0[1] * weight;
        self.0[2] += other.0[2] * weight;
    }

    pub fn channels(self) -> [f64; 3] {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::{ChannelSum, PackedRgb};

    #[test]
    fn pack_unpack_round_trip() {
        let px = PackedRgb::from_channels([12, 200, 7]);
        assert_eq!(px.channels(), [12, 200, 7]);
        assert_eq!(px.bits(), 0xff0c_c807);
    }

    #[test]
    fn from_channels_forces_opacity() {
        assert_eq!(PackedRgb::from_channels([0, 0, 0]).bits(), 0xff00_0000);
        assert_eq!(PackedRgb::from_channels([255, 255, 255]).bits(), 0xffff_ffff);
    }

    #[test]
    fn from_bits_keeps_reserved_byte_and_ignores_it_for_channels() {
        let px = PackedRgb::from_bits(0x0001_0203);
        assert_eq!(px.channels(), [1, 2, 3]);
        assert_eq!(px.bits(), 0x0001_0203);
    }

    #[test]
    fn accumulate_weighted_pixels_and_sums() {
        let mut sum = ChannelSum::ZERO;
        sum.add_pixel(PackedRgb::from_channels([10, 20, 30]), 0.5);
        sum.add_pixel(PackedRgb::from_channels([100, 0, 2]), 1.0);
        assert_eq!(sum.channels(), [105.0, 10.0, 17.0]);

        let mut doubled = ChannelSum::ZERO;
        doubled.add_sum(sum, 2.0);
        assert_eq!(doubled.channels(), [210.0, 20.0, 34.0]);
    }
}
