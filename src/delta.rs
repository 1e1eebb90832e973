//! Bond-length dispersion Δ.

use crate::linear;
use nalgebra::Vector3;

/// Compute Δ, the dimensionless dispersion of the six M–L bond lengths.
///
/// With dᵢ the six metal–ligand distances and d̄ their mean,
///
/// ```text
/// Δ = (1/6) Σᵢ ((dᵢ − d̄)/d̄)²
/// ```
///
/// Δ >= 0, with Δ = 0 exactly when all six distances are equal. The input
/// is the seven-point layout used throughout the crate: index 0 is the
/// metal, indices 1..=6 the ligands.
///
/// # Examples
///
/// ```
/// use nalgebra::Vector3;
/// use octapar::compute_delta;
///
/// let coords = [
///     Vector3::zeros(),
///     Vector3::new(1.5, 0.0, 0.0),
///     Vector3::new(-1.5, 0.0, 0.0),
///     Vector3::new(0.0, 1.5, 0.0),
///     Vector3::new(0.0, -1.5, 0.0),
///     Vector3::new(0.0, 0.0, 1.5),
///     Vector3::new(0.0, 0.0, -1.5),
/// ];
/// assert_eq!(compute_delta(&coords), 0.0);
/// ```
pub fn compute_delta(coords: &[Vector3<f64>; 7]) -> f64 {
    let metal = coords[0];
    let mut distances = [0.0f64; 6];
    for (i, d) in distances.iter_mut().enumerate() {
        *d = linear::distance(&metal, &coords[i + 1]);
    }
    let mean = distances.iter().sum::<f64>() / 6.0;
    distances
        .iter()
        .map(|d| ((d - mean) / mean).powi(2))
        .sum::<f64>()
        / 6.0
}
