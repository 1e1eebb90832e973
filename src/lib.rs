#![deny(missing_docs)]

//! octapar - Octahedral Distortion Parameters
//!
//! octapar computes the three distortion parameters used in the
//! inorganic-chemistry crystallography literature to quantify how far a
//! six-coordinate metal complex departs from an ideal octahedron:
//!
//! | Parameter | Definition | Units |
//! |-----------|------------|-------|
//! | Δ (delta) | (1/6) Σ ((dᵢ − d̄)/d̄)² over the six M–L distances | dimensionless |
//! | Σ (sigma) | Σ \|90° − αᵢ\| over the twelve cis L–M–L angles | degrees |
//! | Θ (theta) | Σ \|60° − θᵢ\| over the 24 trigonal-twist angles | degrees |
//!
//! All three are zero for a perfect octahedron and grow with distortion.
//!
//! # Overview
//!
//! The library is a pure synchronous kernel: every entry point consumes a
//! seven-point coordinate set (index 0 = metal centre, indices 1..=6 = the
//! ligand atoms) and returns plain values. There is no global state, no I/O
//! and no logging; degenerate inputs surface as typed errors.
//!
//! The Θ computation is the involved part. It canonicalises the ligand
//! labelling so that the three trans pairs sit at fixed index positions,
//! then walks the eight triangular faces of the octahedron, projecting the
//! metal and the three far ligands onto each face plane and accumulating
//! six signed 60°-deviations per face. See the [`theta`] module for the
//! details of the face-walk scheme.
//!
//! # Quick Start
//!
//! ```
//! use nalgebra::Vector3;
//! use octapar::{compute_distortion, Octahedron};
//!
//! // An ideal octahedron: metal at the origin, ligands on the axes.
//! let core = Octahedron::from_points([
//!     Vector3::zeros(),
//!     Vector3::new(2.0, 0.0, 0.0),
//!     Vector3::new(-2.0, 0.0, 0.0),
//!     Vector3::new(0.0, 2.0, 0.0),
//!     Vector3::new(0.0, -2.0, 0.0),
//!     Vector3::new(0.0, 0.0, 2.0),
//!     Vector3::new(0.0, 0.0, -2.0),
//! ]);
//!
//! let result = compute_distortion(&core).unwrap();
//! assert!(result.delta.abs() < 1e-12);
//! assert!(result.sigma.abs() < 1e-9);
//! assert!(result.theta_mean.abs() < 1e-9);
//! ```
//!
//! Starting from a full atom list instead, [`select_octahedron`] picks the
//! (single) metal centre and its six nearest neighbours, and [`analyze`]
//! combines selection and computation:
//!
//! ```
//! use nalgebra::Vector3;
//! use octapar::{analyze, Atom};
//!
//! let atoms = vec![
//!     Atom::new("Fe", Vector3::zeros()),
//!     Atom::new("N", Vector3::new(2.1, 0.0, 0.0)),
//!     Atom::new("N", Vector3::new(-2.1, 0.0, 0.0)),
//!     Atom::new("N", Vector3::new(0.0, 2.1, 0.0)),
//!     Atom::new("N", Vector3::new(0.0, -2.1, 0.0)),
//!     Atom::new("N", Vector3::new(0.0, 0.0, 2.1)),
//!     Atom::new("N", Vector3::new(0.0, 0.0, -2.1)),
//!     // spectator atom, farther out than the six ligands
//!     Atom::new("C", Vector3::new(3.0, 3.0, 0.0)),
//! ];
//!
//! let result = analyze(&atoms).unwrap();
//! assert!(result.sigma.abs() < 1e-9);
//! ```
//!
//! # Modules
//!
//! - [`linear`] - vector primitives (distances, angles, planes, projections)
//! - [`geometry`] - atoms, the seven-atom octahedral core, element data
//! - [`selector`] - metal-centre and nearest-neighbour selection
//! - [`delta`] - bond-length dispersion Δ
//! - [`sigma`] - cis-angle deviation Σ
//! - [`theta`] - trigonal-twist deviation Θ
//! - [`trace`] - optional trace-line sink for the Θ walk
//! - [`params`] - facade assembling all parameters into one result
//!
//! # References
//!
//! - Marchivie, M.; Guionneau, P.; Létard, J.-F.; Chasseau, D.
//!   *Acta Cryst.* **2005**, B61, 25-28 (the Θ parameter).
//! - Guionneau, P.; Marchivie, M.; Bravic, G.; Létard, J.-F.; Chasseau, D.
//!   *J. Mater. Chem.* **2002**, 12, 2546-2551 (the Σ parameter).
//! - Drew, M. G. B.; Harding, C. J.; McKee, V.; Morgan, G. G.; Nelson, J.
//!   *J. Chem. Soc., Chem. Commun.* **1995**, 1035-1038.

pub mod delta;
pub mod geometry;
pub mod linear;
pub mod params;
pub mod selector;
pub mod sigma;
pub mod theta;
pub mod trace;

pub use delta::compute_delta;
pub use geometry::{Atom, Octahedron};
pub use params::{analyze, compute_batch, compute_distortion, DistortionError, DistortionResult};
pub use selector::{select_octahedron, SelectionError};
pub use sigma::compute_sigma;
pub use theta::{compute_theta, ThetaError, ThetaValues};
pub use trace::{NoTrace, TraceSink};
