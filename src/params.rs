//! Facade assembling Δ, Σ and Θ into one result.

use crate::delta::compute_delta;
use crate::geometry::{Atom, Octahedron};
use crate::selector::{select_octahedron, SelectionError};
use crate::sigma::compute_sigma;
use crate::theta::{compute_theta_traced, ThetaError};
use crate::trace::{NoTrace, TraceSink};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The complete set of distortion parameters for one complex.
///
/// `theta_min` and `theta_max` are the paired (opposite-face) split, which
/// is the primary reported pair; the naive sorted split is kept alongside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistortionResult {
    /// Bond-length dispersion Δ (dimensionless).
    pub delta: f64,
    /// Cis-angle deviation Σ in degrees.
    pub sigma: f64,
    /// Largest retained cis angle in degrees; the Θ trans-detection seed.
    pub alpha_max_cis: f64,
    /// Paired Θ minimum in degrees.
    pub theta_min: f64,
    /// Paired Θ maximum in degrees.
    pub theta_max: f64,
    /// Θ mean in degrees (half the total over the eight projections).
    pub theta_mean: f64,
    /// Naive (sorted-split) Θ minimum in degrees.
    pub theta_min_naive: f64,
    /// Naive (sorted-split) Θ maximum in degrees.
    pub theta_max_naive: f64,
}

impl fmt::Display for DistortionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "delta      = {:.6}", self.delta)?;
        writeln!(f, "sigma      = {:.6} deg", self.sigma)?;
        writeln!(f, "theta_min  = {:.6} deg", self.theta_min)?;
        writeln!(f, "theta_max  = {:.6} deg", self.theta_max)?;
        write!(f, "theta_mean = {:.6} deg", self.theta_mean)
    }
}

/// Errors raised by the combined selection-plus-computation entry points.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DistortionError {
    /// The octahedral core could not be selected from the atom list.
    #[error(transparent)]
    Selection(#[from] SelectionError),
    /// The Θ engine failed on a degenerate geometry.
    #[error(transparent)]
    Theta(#[from] ThetaError),
}

/// Compute all distortion parameters for one octahedral core.
///
/// Invokes the Δ, Σ and Θ engines in that order and assembles the result;
/// Σ's largest retained cis angle seeds the Θ canonicalisation.
pub fn compute_distortion(core: &Octahedron) -> Result<DistortionResult, ThetaError> {
    compute_distortion_traced(core, &mut NoTrace)
}

/// Like [`compute_distortion`], with the Θ walk reporting through `sink`.
pub fn compute_distortion_traced(
    core: &Octahedron,
    sink: &mut dyn TraceSink,
) -> Result<DistortionResult, ThetaError> {
    let coords = core.positions();
    let delta = compute_delta(&coords);
    let (sigma, alpha_max_cis) = compute_sigma(&coords);
    let theta = compute_theta_traced(&coords, alpha_max_cis, sink)?;

    Ok(DistortionResult {
        delta,
        sigma,
        alpha_max_cis,
        theta_min: theta.theta_min,
        theta_max: theta.theta_max,
        theta_mean: theta.theta_mean,
        theta_min_naive: theta.theta_min_naive,
        theta_max_naive: theta.theta_max_naive,
    })
}

/// Select the octahedral core from a full atom list and compute all
/// distortion parameters for it.
pub fn analyze(atoms: &[Atom]) -> Result<DistortionResult, DistortionError> {
    let core = select_octahedron(atoms)?;
    Ok(compute_distortion(&core)?)
}

/// Run [`analyze`] over a batch of identified complexes.
///
/// Each complex is processed independently and sequentially; a failure in
/// one leaves the others untouched. The returned vector aligns every
/// result with its source identifier in input order.
pub fn compute_batch<I, S>(complexes: I) -> Vec<(S, Result<DistortionResult, DistortionError>)>
where
    I: IntoIterator<Item = (S, Vec<Atom>)>,
{
    complexes
        .into_iter()
        .map(|(id, atoms)| {
            let result = analyze(&atoms);
            (id, result)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    fn ideal_core() -> Octahedron {
        Octahedron::from_points([
            Vector3::zeros(),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(-1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, -1.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(0.0, 0.0, -1.0),
        ])
    }

    #[test]
    fn test_display_renders_six_fractional_digits() {
        let result = compute_distortion(&ideal_core()).unwrap();
        let text = result.to_string();
        assert!(text.contains("delta      = 0.000000"));
        assert!(text.contains("theta_mean = 0.000000 deg"));
    }

    #[test]
    fn test_traced_facade_collects_lines() {
        let mut lines: Vec<String> = Vec::new();
        compute_distortion_traced(&ideal_core(), &mut lines).unwrap();
        assert!(!lines.is_empty());
    }

    #[test]
    fn test_batch_keeps_identifiers_aligned() {
        let good = vec![
            Atom::new("Fe", Vector3::zeros()),
            Atom::new("N", Vector3::new(2.0, 0.0, 0.0)),
            Atom::new("N", Vector3::new(-2.0, 0.0, 0.0)),
            Atom::new("N", Vector3::new(0.0, 2.0, 0.0)),
            Atom::new("N", Vector3::new(0.0, -2.0, 0.0)),
            Atom::new("N", Vector3::new(0.0, 0.0, 2.0)),
            Atom::new("N", Vector3::new(0.0, 0.0, -2.0)),
        ];
        let bad = vec![Atom::new("C", Vector3::zeros())];

        let results = compute_batch(vec![("good", good), ("bad", bad)]);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].0, "good");
        assert!(results[0].1.is_ok());
        assert_eq!(results[1].0, "bad");
        assert_eq!(
            results[1].1,
            Err(DistortionError::Selection(SelectionError::NoMetalCenter))
        );
    }
}
