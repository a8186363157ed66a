/// One output cell's back-projected footprint along a single axis.
///
/// The footprint covers source cells `lead..=tail`:
/// - `lead` is the first, fractionally covered cell; `lead_weight` is 1.0
///   when the left boundary sits exactly on a cell edge,
/// - cells strictly between `lead` and `tail` contribute full weight 1.0,
/// - `tail` contributes `tail_weight` and must be skipped entirely when that
///   weight is zero: a boundary landing on a cell edge means the cell at
///   `tail` is not part of this segment, and for the last span `tail`
///   equals the source length and is out of range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub lead: usize,
    pub lead_weight: f64,
    pub tail: usize,
    pub tail_weight: f64,
}

impl Span {
    /// Sum of all weights in this span, equal to the length of source
    /// coordinate units the output cell covers.
    pub fn coverage(&self) -> f64 {
        self.lead_weight + (self.tail - self.lead - 1) as f64 + self.tail_weight
    }
}

/// Yields one [`Span`] per output cell of a `source_len -> target_len` axis
/// reduction.
///
/// The right boundary of output cell `i` is `(i + 1) * source_len /
/// target_len`, computed with an integer product and a single real division
/// so the coordinate is exact whenever the ratio is. The left boundary is
/// carried over from the previous cell, starting at 0.
#[derive(Debug, Clone)]
pub struct SpanIter {
    source_len: usize,
    target_len: usize,
    index: usize,
    left: f64,
}

impl SpanIter {
    /// Callers guarantee `0 < target_len <= source_len`.
    pub fn new(source_len: usize, target_len: usize) -> Self {
        debug_assert!(target_len > 0 && target_len <= source_len);
        Self {
            source_len,
            target_len,
            index: 0,
            left: 0.0,
        }
    }
}

impl Iterator for SpanIter {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        if self.index == self.target_len {
            return None;
        }

        let right = ((self.index + 1) * self.source_len) as f64 / self.target_len as f64;
        let lead = self.left as usize;
        let tail = right as usize;
        let span = Span {
            lead,
            lead_weight: 1.0 - (self.left - lead as f64),
            tail,
            tail_weight: right - tail as f64,
        };

        self.index += 1;
        self.left = right;
        Some(span)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.target_len - self.index;
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for SpanIter {}

/// Rounds a non-negative value half-up: add 0.5, truncate toward zero, so
/// exactly `k.5` becomes `k + 1`.
///
/// Only valid for non-negative inputs; averaged channel values are in
/// `[0, 255]`, so no clamping is needed either.
pub fn round_half_up(v: f64) -> u8 {
    debug_assert!(v >= 0.0, "round_half_up is defined for non-negative values");
    (v + 0.5) as u8
}
