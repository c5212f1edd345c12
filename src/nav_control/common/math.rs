use super::vec2d::Vec2D;
use itertools::Itertools;
use rand::Rng;

/// Draws uniform noise centered on zero.
///
/// # Arguments
/// - `rng`: The random source.
/// - `span`: The total width of the noise band.
///
/// # Returns
/// - An `f64` in `[-span / 2, span / 2)`.
pub fn symmetric_noise<R: Rng>(rng: &mut R, span: f64) -> f64 {
    (rng.random::<f64>() - 0.5) * span
}

/// Draws a uniform value in `[base, base + span)`.
///
/// # Arguments
/// - `rng`: The random source.
/// - `base`: The lower bound of the band.
/// - `span`: The width of the band.
pub fn offset_uniform<R: Rng>(rng: &mut R, base: f64, span: f64) -> f64 {
    base + rng.random::<f64>() * span
}

/// Computes the length of the polyline through `points`.
///
/// # Returns
/// - `0.0` for fewer than two points.
pub fn polyline_length<'a, I>(points: I) -> f64
where I: IntoIterator<Item = &'a Vec2D<f64>> {
    points.into_iter().tuple_windows().map(|(a, b)| a.euclid_distance(b)).sum()
}
