//! Slope stages of the Akima fit.
//!
//! Each function takes the output of the previous stage; `n` below is the
//! number of knots.
use tracing::trace;
use crate::utils::abs_diff;
/// Secant slope of every segment, `n - 1` values.
pub fn raw_slopes(dx: &[f64], dy: &[f64]) -> Vec<f64> {
    dx.iter().zip(dy).map(|(&h, &d)| d / h).collect()
}
/// Pads the secants with two linearly extrapolated slopes on each side,
/// giving `[left2, left1, s.., right1, right2]` (`n + 3` values).
///
/// Needs at least two secants.
pub fn extend_slopes(s: &[f64]) -> Vec<f64> {
    let k = s.len();
    let left1 = 2.0 * s[0] - s[1];
    let left2 = 2.0 * left1 - s[0];
    let right1 = 2.0 * s[k - 1] - s[k - 2];
    let right2 = 2.0 * right1 - s[k - 1];
    let mut m = Vec::with_capacity(k + 4);
    m.push(left2);
    m.push(left1);
    m.extend_from_slice(s);
    m.push(right1);
    m.push(right2);
    m
}
/// Akima derivative at every knot from the extended slopes.
///
/// With `f = |diff(m)|`, knot `i` blends `m[i + 1]` and `m[i + 2]` weighted by
/// `f[i + 2]` and `f[i]`. When `f[i] + f[i + 2]` does not exceed
/// `ratio * max_j(f[j] + f[j + 2])` the plain slope `m[i + 1]` is used. A
/// negative or NaN `ratio` counts as zero, so a zero weight sum always falls
/// back.
///
/// Returns the derivatives and the knots that took the fallback.
pub fn blend_derivatives(m: &[f64], ratio: f64) -> (Vec<f64>, Vec<usize>) {
    let n = m.len() - 3;
    let f = abs_diff(m);
    let sums: Vec<f64> = (0..n).map(|i| f[i] + f[i + 2]).collect();
    let biggest = sums.iter().copied().fold(0.0, f64::max);
    let threshold = ratio.max(0.0) * biggest;
    let mut degenerate = Vec::new();
    let b = (0..n)
        .map(|i| {
            if sums[i] > threshold {
                (f[i + 2] * m[i + 1] + f[i] * m[i + 2]) / sums[i]
            } else {
                trace!("Degenerate weights at knot {} (sum {:e})", i, sums[i]);
                degenerate.push(i);
                m[i + 1]
            }
        })
        .collect();
    (b, degenerate)
}
/// Quadratic and cubic coefficients `(c, d)` of every segment.
pub fn segment_coefficients(s: &[f64], b: &[f64], dx: &[f64]) -> (Vec<f64>, Vec<f64>) {
    s.iter()
        .zip(dx)
        .enumerate()
        .map(|(i, (&si, &h))| {
            let c = (3.0 * si - 2.0 * b[i] - b[i + 1]) / h;
            let d = (b[i] + b[i + 1] - 2.0 * si) / (h * h);
            (c, d)
        })
        .unzip()
}
#[cfg(test)]
mod tests {
    use super::*;
    const EPS: f64 = 1e-12;
    #[test]
    fn test_raw_slopes() {
        let s = raw_slopes(&[1.0, 2.0, 0.5], &[2.0, -1.0, 0.25]);
        assert_eq!(s, vec![2.0, -0.5, 0.5]);
    }
    #[test]
    fn test_extend_slopes_extrapolates_linearly() {
        let m = extend_slopes(&[1.0, 2.0, 4.0]);
        assert_eq!(m, vec![-1.0, 0.0, 1.0, 2.0, 4.0, 6.0, 8.0]);
    }
    #[test]
    fn test_extend_slopes_two_secants() {
        let m = extend_slopes(&[3.0, 1.0]);
        assert_eq!(m.len(), 6);
        assert_eq!(m, vec![7.0, 5.0, 3.0, 1.0, -1.0, -3.0]);
    }
    #[test]
    fn test_blend_constant_slopes_falls_back() {
        let m = extend_slopes(&[2.0, 2.0, 2.0, 2.0]);
        let (b, degenerate) = blend_derivatives(&m, 1e-8);
        assert_eq!(degenerate, vec![0, 1, 2, 3, 4]);
        assert!(b.iter().all(|&v| v == 2.0));
    }
    #[test]
    fn test_blend_weighted_average() {
        let s = [0.6, -0.1, 0.5, -0.2];
        let m = extend_slopes(&s);
        let (b, degenerate) = blend_derivatives(&m, 1e-8);
        assert!(degenerate.is_empty());
        let expected = [0.95, 0.22307692307692317, 0.2, 0.17692307692307696, -0.5500000000000002];
        for (got, want) in b.iter().zip(expected) {
            assert!((got - want).abs() < EPS, "got {}, want {}", got, want);
        }
    }
    #[test]
    fn test_blend_favors_flatter_side() {
        // Flat on the left, sharp change on the right.
        let m = extend_slopes(&[0.0, 0.0, 0.0, 10.0, 10.0, 10.0]);
        let (b, _) = blend_derivatives(&m, 1e-8);
        assert_eq!(b[2], 0.0);
        assert_eq!(b[4], 10.0);
    }
    // Knots 1 and 3 see a change of 2^-30 on one side only: a positive
    // weight sum far below 1e-8 of the 64-unit jump.
    const TINY_STEP: [f64; 9] = [0.0, 0.0, 9.313225746154785e-10, 9.313225746154785e-10, 9.313225746154785e-10, 9.313225746154785e-10, 64.0, 64.0, 64.0];
    #[test]
    fn test_blend_relative_guard() {
        let m = extend_slopes(&TINY_STEP);
        let (b, degenerate) = blend_derivatives(&m, 1e-8);
        assert_eq!(degenerate, vec![0, 1, 2, 3, 4, 6, 8, 9]);
        for i in degenerate {
            assert_eq!(b[i], m[i + 1], "knot {}", i);
        }
        let (_, exact_zero_only) = blend_derivatives(&m, 0.0);
        assert_eq!(exact_zero_only, vec![0, 2, 4, 6, 8, 9]);
    }
    #[test]
    fn test_blend_guard_scales_with_data() {
        let scaled: Vec<f64> = TINY_STEP.iter().map(|v| v * 1e6).collect();
        let (_, base) = blend_derivatives(&extend_slopes(&TINY_STEP), 1e-8);
        let (_, wide) = blend_derivatives(&extend_slopes(&scaled), 1e-8);
        assert_eq!(base, wide);
    }
    #[test]
    fn test_blend_bad_ratio_never_divides_zero() {
        let m = extend_slopes(&[1.0, 1.0, 1.0, 1.0, 1.0, 5.0]);
        for ratio in [-1e-8, f64::NAN, f64::NEG_INFINITY] {
            let (b, degenerate) = blend_derivatives(&m, ratio);
            assert!(b.iter().all(|v| v.is_finite()), "ratio {}: {:?}", ratio, b);
            assert_eq!(degenerate, vec![0, 1, 2, 3], "ratio {}", ratio);
            assert_eq!(b[6], 7.0);
        }
    }
    #[test]
    fn test_segment_coefficients_reproduce_secant() {
        let dx = [1.0, 2.0];
        let s = [1.0, 0.25];
        let b = [0.5, 0.75, 0.1];
        let (c, d) = segment_coefficients(&s, &b, &dx);
        for i in 0..2 {
            let h = dx[i];
            let rise = b[i] * h + c[i] * h * h + d[i] * h * h * h;
            assert!((rise - s[i] * h).abs() < EPS);
        }
    }
}
