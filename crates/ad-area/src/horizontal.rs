use ad_core::{ChannelSum, ImageView, PackedRgb};

use crate::span::SpanIter;

/// Collapses every source row into `target_width` per-channel partial sums.
///
/// `mid` is the row-major `target_width x src.height()` intermediate buffer.
/// Each slot receives the coverage-weighted sum of the source pixels its
/// output column back-projects onto; normalization happens later, in the
/// vertical pass. Rows are processed independently.
pub(crate) fn integrate_rows(
    src: &ImageView<'_, PackedRgb>,
    target_width: usize,
    mid: &mut [ChannelSum],
) {
    debug_assert_eq!(mid.len(), target_width * src.height());

    let source_width = src.width();
    for y in 0..src.height() {
        let src_row = src.row(y);
        let mid_row = &mut mid[y * target_width..(y + 1) * target_width];

        for (slot, span) in mid_row
            .iter_mut()
            .zip(SpanIter::new(source_width, target_width))
        {
            let mut sum = ChannelSum::ZERO;
            sum.add_pixel(src_row[span.lead], span.lead_weight);
            for x in span.lead + 1..span.tail {
                sum.add_pixel(src_row[x], 1.0);
            }
            // Zero tail weight means the boundary sits on a cell edge and
            // `span.tail` may equal the row length.
            if span.tail_weight > 0.0 {
                sum.add_pixel(src_row[span.tail], span.tail_weight);
            }
            *slot = sum;
        }
    }
}

#[cfg(test)]
mod tests {
    use ad_core::{ChannelSum, Image, PackedRgb};

    use super::integrate_rows;

    fn gray_row(values: &[u8]) -> Image<PackedRgb> {
        let pixels = values
            .iter()
            .map(|&v| PackedRgb::from_channels([v, v, v]))
            .collect();
        Image::from_vec(values.len(), 1, pixels).expect("valid row")
    }

    #[test]
    fn halving_a_row_sums_adjacent_pairs() {
        let row = gray_row(&[0, 100, 200, 40]);
        let mut mid = vec![ChannelSum::ZERO; 2];

        integrate_rows(&row.as_view(), 2, &mut mid);

        assert_eq!(mid[0].channels(), [100.0; 3]);
        assert_eq!(mid[1].channels(), [240.0; 3]);
    }

    #[test]
    fn fractional_boundary_splits_the_shared_pixel() {
        // 3 -> 2: boundary at 1.5 puts half of the middle pixel in each sum.
        let row = gray_row(&[10, 20, 30]);
        let mut mid = vec![ChannelSum::ZERO; 2];

        integrate_rows(&row.as_view(), 2, &mut mid);

        assert_eq!(mid[0].channels(), [20.0; 3]);
        assert_eq!(mid[1].channels(), [40.0; 3]);
    }

    #[test]
    fn rows_integrate_independently() {
        let pixels = vec![
            PackedRgb::from_channels([8, 0, 0]),
            PackedRgb::from_channels([16, 0, 0]),
            PackedRgb::from_channels([100, 0, 0]),
            PackedRgb::from_channels([200, 0, 0]),
        ];
        let img = Image::from_vec(2, 2, pixels).expect("valid image");
        let mut mid = vec![ChannelSum::ZERO; 2];

        integrate_rows(&img.as_view(), 1, &mut mid);

        assert_eq!(mid[0].channels()[0], 24.0);
        assert_eq!(mid[1].channels()[0], 300.0);
    }
}
