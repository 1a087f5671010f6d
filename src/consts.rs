pub const MIN_POINTS: usize = 3;
pub const DEGENERACY_RATIO: f64 = 1e-8;
