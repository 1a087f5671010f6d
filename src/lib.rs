//! Akima spline interpolation over strictly increasing 1-D samples.
//!
//! ```
//! use akima_spline::AkimaInterpolator;
//! let interp = AkimaInterpolator::from_points(&[1., 2., 3., 4., 5.], &[0.1, 0.7, 0.6, 1.1, 0.9])?;
//! let ys = interp.evaluate(&[1.5, 2.5, 3.5, 4.5])?;
//! assert_eq!(ys.len(), 4);
//! # Ok::<(), anyhow::Error>(())
//! ```
pub mod consts;
pub mod error;
pub mod interp;
pub mod utils;
pub use error::{EvalError, FitError, ParseLookupError};
pub use interp::{AkimaInterpolator, AkimaOptions, SegmentLookup};
