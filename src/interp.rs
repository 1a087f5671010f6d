//! Akima spline fitting and evaluation.
//!
//! The curve through `(x[i], y[i])` is piecewise cubic; segment `i` is
//! `y[i] + b[i] w + c[i] w^2 + d[i] w^3` with `w = q - x[i]`. The knot
//! derivatives `b` come from Akima's weighted blend of neighbouring secants,
//! which keeps the curve from overshooting around abrupt slope changes.
pub mod lookup;
pub mod slopes;
use ndarray::{Array1, ArrayView1};
use tracing::debug;
use crate::{
    consts::{DEGENERACY_RATIO, MIN_POINTS},
    error::{EvalError, FitError},
    utils::diff,
};
pub use lookup::SegmentLookup;
use slopes::{blend_derivatives, extend_slopes, raw_slopes, segment_coefficients};
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AkimaOptions {
    pub lookup: SegmentLookup,
    /// Weight sums at or below `degeneracy_ratio` times the largest weight
    /// sum fall back to the plain secant.
    pub degeneracy_ratio: f64,
}
impl Default for AkimaOptions {
    fn default() -> Self {
        Self {
            lookup: SegmentLookup::default(),
            degeneracy_ratio: DEGENERACY_RATIO,
        }
    }
}
#[derive(Debug, Clone)]
struct Fitted {
    x: Vec<f64>,
    b: Vec<f64>,
    /// `[y[i], b[i], c[i], d[i]]` per segment.
    coeffs: Vec<[f64; 4]>,
    /// `y` of the last knot, which starts no segment.
    y_last: f64,
}
impl Fitted {
    fn bounds(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }
}
/// Akima interpolator over one sample set.
///
/// Starts unfitted; every successful [`fit`](Self::fit) replaces the whole
/// fitted state, a failed one leaves it untouched.
#[derive(Debug, Clone, Default)]
pub struct AkimaInterpolator {
    options: AkimaOptions,
    fitted: Option<Fitted>,
}
impl AkimaInterpolator {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_options(options: AkimaOptions) -> Self {
        Self { options, fitted: None }
    }
    pub fn from_points(x: &[f64], y: &[f64]) -> Result<Self, FitError> {
        let mut interp = Self::new();
        interp.fit(x, y)?;
        Ok(interp)
    }
    pub fn options(&self) -> AkimaOptions {
        self.options
    }
    /// Changes the lookup strategy. Takes effect on the next evaluation, no
    /// refit needed.
    pub fn set_lookup(&mut self, lookup: SegmentLookup) {
        self.options.lookup = lookup;
    }
    pub fn fit(&mut self, x: &[f64], y: &[f64]) -> Result<(), FitError> {
        validate(x, y)?;
        let dx = diff(x);
        let dy = diff(y);
        let s = raw_slopes(&dx, &dy);
        let m = extend_slopes(&s);
        let (b, degenerate) = blend_derivatives(&m, self.options.degeneracy_ratio);
        let (c, d) = segment_coefficients(&s, &b, &dx);
        let coeffs = (0..s.len())
            .map(|i| [y[i], b[i], c[i], d[i]])
            .collect();
        let fitted = Fitted {
            x: x.to_vec(),
            b,
            coeffs,
            y_last: y[y.len() - 1],
        };
        let (lo, hi) = fitted.bounds();
        debug!(
            "Akima fit: {} knots on [{}, {}], {} degenerate derivative(s)",
            x.len(), lo, hi, degenerate.len()
        );
        self.fitted = Some(fitted);
        Ok(())
    }
    pub fn fit_array(&mut self, x: ArrayView1<f64>, y: ArrayView1<f64>) -> Result<(), FitError> {
        let x = x.to_vec();
        let y = y.to_vec();
        self.fit(&x, &y)
    }
    /// Interpolated values at `queries`, in order.
    ///
    /// Fails as a whole if any query lies outside the fitted domain.
    pub fn evaluate(&self, queries: &[f64]) -> Result<Vec<f64>, EvalError> {
        let fitted = self.checked(queries)?;
        debug!("Evaluating {} queries ({} lookup)", queries.len(), self.options.lookup);
        Ok(queries
            .iter()
            .map(|&q| {
                let i = self.options.lookup.locate(&fitted.x, q);
                if q == fitted.x[i + 1] {
                    return fitted.coeffs.get(i + 1).map_or(fitted.y_last, |c| c[0]);
                }
                let w = q - fitted.x[i];
                let [y0, b, c, d] = fitted.coeffs[i];
                if w == 0.0 {
                    return y0;
                }
                ((w * d + c) * w + b) * w + y0
            })
            .collect())
    }
    pub fn evaluate_one(&self, q: f64) -> Result<f64, EvalError> {
        Ok(self.evaluate(&[q])?[0])
    }
    pub fn evaluate_array(&self, queries: ArrayView1<f64>) -> Result<Array1<f64>, EvalError> {
        let queries = queries.to_vec();
        self.evaluate(&queries).map(Array1::from)
    }
    /// First derivative of the piecewise cubic at `queries`, with the same
    /// lookup and domain rules as [`evaluate`](Self::evaluate).
    pub fn derivative(&self, queries: &[f64]) -> Result<Vec<f64>, EvalError> {
        let fitted = self.checked(queries)?;
        Ok(queries
            .iter()
            .map(|&q| {
                let i = self.options.lookup.locate(&fitted.x, q);
                if q == fitted.x[i + 1] {
                    return fitted.b[i + 1];
                }
                let w = q - fitted.x[i];
                let [_, b, c, d] = fitted.coeffs[i];
                if w == 0.0 {
                    return b;
                }
                (3.0 * d * w + 2.0 * c) * w + b
            })
            .collect())
    }
    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }
    pub fn bounds(&self) -> Option<(f64, f64)> {
        self.fitted.as_ref().map(Fitted::bounds)
    }
    pub fn len(&self) -> usize {
        self.fitted.as_ref().map_or(0, |f| f.x.len())
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Knot derivatives `b`.
    pub fn derivatives(&self) -> Option<&[f64]> {
        self.fitted.as_ref().map(|f| f.b.as_slice())
    }
    /// `[y[i], b[i], c[i], d[i]]` of segment `i`.
    pub fn segment(&self, i: usize) -> Option<[f64; 4]> {
        self.fitted.as_ref()?.coeffs.get(i).copied()
    }
    fn checked(&self, queries: &[f64]) -> Result<&Fitted, EvalError> {
        let fitted = self.fitted.as_ref().ok_or(EvalError::NotFitted)?;
        let (lo, hi) = fitted.bounds();
        match queries.iter().find(|&&q| !(lo <= q && q <= hi)) {
            Some(&value) => Err(EvalError::OutOfDomain { value, lo, hi }),
            None => Ok(fitted),
        }
    }
}
fn validate(x: &[f64], y: &[f64]) -> Result<(), FitError> {
    if x.len() != y.len() {
        return Err(FitError::LengthMismatch { x_len: x.len(), y_len: y.len() });
    }
    if x.len() < MIN_POINTS {
        return Err(FitError::TooFewPoints { len: x.len() });
    }
    match x.windows(2).position(|w| !(w[1] - w[0] > 0.0)) {
        Some(i) => Err(FitError::NotStrictlyIncreasing { index: i + 1 }),
        None => Ok(()),
    }
}
