//! Cis-angle deviation Σ.

use crate::linear;
use nalgebra::Vector3;

/// Compute Σ and the largest retained cis angle.
///
/// All 15 L–M–L angles are computed, the three largest (the trans pairs)
/// are discarded, and Σ sums |90° − α| over the twelve that remain:
///
/// ```text
/// Σ = Σₖ₌₁..₁₂ |90° − αₖ|     (degrees)
/// ```
///
/// The second value returned is α_max_cis, the largest of the twelve
/// retained angles. The Θ engine consumes it as a threshold seed: two
/// ligands whose angle exceeds α_max_cis − 1° are considered axially
/// opposite.
pub fn compute_sigma(coords: &[Vector3<f64>; 7]) -> (f64, f64) {
    let metal = coords[0];
    let mut angles = Vec::with_capacity(15);
    for i in 1..7 {
        for j in (i + 1)..7 {
            angles.push(linear::angle(&(coords[i] - metal), &(coords[j] - metal)));
        }
    }
    angles.sort_by(f64::total_cmp);

    let cis = &angles[..12];
    let sigma = cis.iter().map(|a| (90.0 - a).abs()).sum();
    (sigma, cis[11])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ideal() -> [Vector3<f64>; 7] {
        [
            Vector3::zeros(),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(-1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, -1.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(0.0, 0.0, -1.0),
        ]
    }

    #[test]
    fn test_ideal_octahedron() {
        let (sigma, alpha_max_cis) = compute_sigma(&ideal());
        assert_relative_eq!(sigma, 0.0, epsilon = 1e-9);
        assert_relative_eq!(alpha_max_cis, 90.0, max_relative = 1e-12);
    }

    #[test]
    fn test_five_degree_cis_perturbation() {
        // Rotate the ligand on +x by 5 degrees in the xy-plane: the angles
        // to +y and -y move to 85 and 95, everything else keeps its value,
        // and the widened trans angle (175) is discarded with the other two
        // trans pairs.
        let mut coords = ideal();
        let t = 5.0_f64.to_radians();
        coords[1] = Vector3::new(t.cos(), t.sin(), 0.0);

        let (sigma, alpha_max_cis) = compute_sigma(&coords);
        assert_relative_eq!(sigma, 10.0, max_relative = 1e-9);
        assert_relative_eq!(alpha_max_cis, 95.0, max_relative = 1e-9);
    }

    #[test]
    fn test_scale_invariance() {
        let mut coords = ideal();
        let t = 5.0_f64.to_radians();
        coords[1] = Vector3::new(t.cos(), t.sin(), 0.0);
        let scaled = coords.map(|p| p * 3.7);

        let (sigma, alpha) = compute_sigma(&coords);
        let (sigma_scaled, alpha_scaled) = compute_sigma(&scaled);
        assert_relative_eq!(sigma, sigma_scaled, max_relative = 1e-9);
        assert_relative_eq!(alpha, alpha_scaled, max_relative = 1e-9);
    }
}
