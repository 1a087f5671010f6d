use std::fmt;
use std::str::FromStr;
use crate::error::ParseLookupError;
/// How a query abscissa is assigned to the cubic segment that evaluates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SegmentLookup {
    /// Segment starting at the knot nearest to the query; ties go to the
    /// earlier knot and the last knot maps to the last segment. A query just
    /// left of a knot is therefore evaluated on the segment to its right.
    #[default]
    NearestKnot,
    /// Segment whose interval `[x[i], x[i + 1])` contains the query.
    Containing,
}
impl SegmentLookup {
    /// Segment index for `q` over the knots `x`.
    ///
    /// `q` must already lie in `[x[0], x[n - 1]]` and `x` must hold at least
    /// two strictly increasing values.
    pub fn locate(self, x: &[f64], q: f64) -> usize {
        let last_segment = x.len() - 2;
        match self {
            Self::NearestKnot => nearest_knot(x, q).min(last_segment),
            Self::Containing => x.partition_point(|&k| k <= q).saturating_sub(1).min(last_segment),
        }
    }
}
/// Index of the first knot with the smallest `|q - x[i]|`.
///
/// Same answer as a front-to-back linear scan with strict `<`, found by
/// binary search over the sorted knots.
fn nearest_knot(x: &[f64], q: f64) -> usize {
    let right = x.partition_point(|&k| k < q);
    if right == 0 {
        return 0;
    }
    if right == x.len() {
        return x.len() - 1;
    }
    let left = right - 1;
    if (q - x[left]).abs() <= (x[right] - q).abs() { left } else { right }
}
impl fmt::Display for SegmentLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NearestKnot => write!(f, "nearest"),
            Self::Containing => write!(f, "containing"),
        }
    }
}
impl FromStr for SegmentLookup {
    type Err = ParseLookupError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nearest" | "nearest_knot" => Ok(Self::NearestKnot),
            "containing" | "binary" => Ok(Self::Containing),
            other => Err(ParseLookupError(other.to_string())),
        }
    }
}
