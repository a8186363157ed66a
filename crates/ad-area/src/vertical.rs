use ad_core::{ChannelSum, ImageViewMut, PackedRgb};

use crate::span::{SpanIter, round_half_up};

/// Collapses the intermediate columns into the final output rows.
///
/// For each output row the covered intermediate rows are combined with the
/// same span weighting the horizontal pass used, divided by `normalization`
/// (the source area one output pixel represents) and quantized. Every sink
/// pixel is written exactly once.
pub(crate) fn integrate_columns(
    mid: &[ChannelSum],
    source_height: usize,
    normalization: f64,
    dst: &mut ImageViewMut<'_, PackedRgb>,
) {
    let target_width = dst.width();
    debug_assert_eq!(mid.len(), target_width * source_height);

    for (ny, span) in SpanIter::new(source_height, dst.height()).enumerate() {
        let dst_row = dst.row_mut(ny);
        let lead_row = &mid[span.lead * target_width..][..target_width];

        for (nx, out) in dst_row.iter_mut().enumerate() {
            let mut sum = ChannelSum::ZERO;
            sum.add_sum(lead_row[nx], span.lead_weight);
            for y in span.lead + 1..span.tail {
                sum.add_sum(mid[y * target_width + nx], 1.0);
            }
            if span.tail_weight > 0.0 {
                sum.add_sum(mid[span.tail * target_width + nx], span.tail_weight);
            }
            *out = quantize(sum, normalization);
        }
    }
}

/// Divides by the averaging divisor and rounds each channel half-up.
///
/// No clamping: axis weights sum to the covered span, so the average never
/// leaves the source channel range.
fn quantize(sum: ChannelSum, normalization: f64) -> PackedRgb {
    let [r, g, b] = sum.channels();
    PackedRgb::from_channels([
        round_half_up(r / normalization),
        round_half_up(g / normalization),
        round_half_up(b / normalization),
    ])
}

#[cfg(test)]
mod tests {
    use ad_core::{ChannelSum, Image, PackedRgb};

    use super::{integrate_columns, quantize};

    fn sum_of(px: PackedRgb, weight: f64) -> ChannelSum {
        let mut s = ChannelSum::ZERO;
        s.add_pixel(px, weight);
        s
    }

    #[test]
    fn quantize_divides_then_rounds_half_up() {
        let sum = sum_of(PackedRgb::from_channels([85, 170, 255]), 2.0);
        assert_eq!(quantize(sum, 2.0).channels(), [85, 170, 255]);

        // 85 / 2 = 42.5 rounds up, 171 / 2 = 85.5 rounds up.
        let half = sum_of(PackedRgb::from_channels([85, 171, 0]), 1.0);
        assert_eq!(quantize(half, 2.0).channels(), [43, 86, 0]);
    }

    #[test]
    fn column_halving_averages_adjacent_rows() {
        // One column, four intermediate rows, halved vertically. The
        // intermediate values are single-pixel sums (weight 1).
        let mid: Vec<ChannelSum> = [0u8, 85, 170, 255]
            .iter()
            .map(|&v| sum_of(PackedRgb::from_channels([v, v, v]), 1.0))
            .collect();

        let mut out = Image::new_fill(1, 2, PackedRgb::default());
        let mut sink = out.as_view_mut();
        // Normalization for a 1x4 -> 1x2 reduction.
        integrate_columns(&mid, 4, 2.0, &mut sink);

        // (0 + 85) / 2 = 42.5 -> 43, (170 + 255) / 2 = 212.5 -> 213.
        assert_eq!(out.data()[0].channels(), [43; 3]);
        assert_eq!(out.data()[1].channels(), [213; 3]);
    }

    #[test]
    fn fractional_row_boundary_weights_both_rows() {
        // 3 intermediate rows -> 2 output rows: boundary at 1.5.
        let mid: Vec<ChannelSum> = [10u8, 20, 30]
            .iter()
            .map(|&v| sum_of(PackedRgb::from_channels([v, 0, 0]), 1.0))
            .collect();

        let mut out = Image::new_fill(1, 2, PackedRgb::default());
        let mut sink = out.as_view_mut();
        integrate_columns(&mid, 3, 1.5, &mut sink);

        // (10 + 0.5 * 20) / 1.5 = 13.33 -> 13, (0.5 * 20 + 30) / 1.5 = 26.67 -> 27.
        assert_eq!(out.data()[0].channels()[0], 13);
        assert_eq!(out.data()[1].channels()[0], 27);
    }
}
