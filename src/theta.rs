//! Trigonal-twist deviation Θ.
//!
//! Θ sums the absolute deviations from 60° of the 24 trigonal-twist angles
//! of the coordination octahedron. The engine works in three stages:
//!
//! 1. **Canonicalisation** - the six ligands are reordered so that the
//!    trans pairs occupy the fixed index positions (1,5), (2,6), (3,4)
//!    (1-based). The trans partner of a ligand is the one at the largest
//!    L–M–L angle; a loose threshold seeded from the largest cis angle is
//!    evaluated as well, and the strict maximum wins when they disagree.
//! 2. **Face walk** - eight projections, one per octahedral face. For each,
//!    the plane through the three near ligands is formed, the metal and
//!    the three far ligands are projected onto it, and six signed angles
//!    between successive in-plane vectors are accumulated as |angle − 60°|.
//!    A hard-coded label cycle advances from face to face; a hemisphere
//!    swap between projections 3 and 4 moves the walk to the four faces
//!    around the opposite apex.
//! 3. **Aggregation** - the eight per-face sums collapse into Θ_mean
//!    (half the total, since every twist angle is seen from two faces) and
//!    two min/max splits: the primary paired split, which compares each
//!    face with its opposite, and the naive split of the four smallest
//!    against the four largest.

use crate::linear::{self, PlaneEq};
use crate::trace::{NoTrace, TraceSink};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Margin subtracted from α_max_cis to form the loose trans threshold.
pub const TRANS_MARGIN_DEG: f64 = 1.0;

/// Swap destination for the trans partner of ligands 0, 1, 2 (0-based):
/// the canonical trans pairs are (0,4), (1,5), (2,3).
const TRANS_TARGET: [usize; 3] = [4, 5, 3];

/// The Θ values for one complex, all in degrees.
///
/// The paired `theta_min`/`theta_max` are the primary values; the naive
/// variants split the eight sorted per-face sums down the middle instead
/// of comparing opposite faces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThetaValues {
    /// Sum over the four smaller of each opposite-face pair.
    pub theta_min: f64,
    /// Sum over the four larger of each opposite-face pair.
    pub theta_max: f64,
    /// Half the total over all eight faces (each twist angle is counted
    /// from two faces).
    pub theta_mean: f64,
    /// Sum of the four smallest per-face values, ignoring pairing.
    pub theta_min_naive: f64,
    /// Sum of the four largest per-face values, ignoring pairing.
    pub theta_max_naive: f64,
}

/// Errors raised by the Θ engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ThetaError {
    /// The three reference ligands of a projection are collinear, so no
    /// face plane exists.
    #[error("degenerate face in projection {projection}: reference ligands are collinear")]
    DegenerateFace {
        /// Index of the failing projection, 0..8.
        projection: usize,
    },
}

/// Compute Θ for a seven-point coordinate set (index 0 = metal).
///
/// `alpha_max_cis` is the largest retained cis angle as returned by
/// [`compute_sigma`](crate::sigma::compute_sigma); it seeds the loose
/// trans-detection threshold during canonicalisation.
pub fn compute_theta(
    coords: &[Vector3<f64>; 7],
    alpha_max_cis: f64,
) -> Result<ThetaValues, ThetaError> {
    compute_theta_traced(coords, alpha_max_cis, &mut NoTrace)
}

/// Like [`compute_theta`], but reporting the canonicalisation decisions
/// and per-projection contributions through `sink`.
pub fn compute_theta_traced(
    coords: &[Vector3<f64>; 7],
    alpha_max_cis: f64,
    sink: &mut dyn TraceSink,
) -> Result<ThetaValues, ThetaError> {
    let metal = coords[0];
    let mut ligands = [
        coords[1], coords[2], coords[3], coords[4], coords[5], coords[6],
    ];

    canonicalize(&metal, &mut ligands, alpha_max_cis, sink);

    let mut order: [usize; 6] = [0, 1, 2, 3, 4, 5];
    let mut face_sums = [0.0f64; 8];
    for step in 0..8 {
        face_sums[step] = face_theta(&metal, &ligands, &order, step, sink)?;
        advance_working_order(&mut order, step);
    }

    Ok(aggregate(&face_sums))
}

/// Reorder the ligands in place so that the trans pairs land on the
/// canonical index positions (0,4), (1,5), (2,3).
///
/// For each of the first three ligands in turn, the partner is the ligand
/// at the largest angle through the metal. The loose predicate
/// `angle > α_max_cis − 1°` is evaluated as well; when it nominates a
/// different ligand than the strict maximum, the strict maximum wins and
/// the disagreement is traced.
fn canonicalize(
    metal: &Vector3<f64>,
    ligands: &mut [Vector3<f64>; 6],
    alpha_max_cis: f64,
    sink: &mut dyn TraceSink,
) {
    let threshold = alpha_max_cis - TRANS_MARGIN_DEG;
    for k in 0..3 {
        let vk = ligands[k] - metal;
        let mut strict = k;
        let mut strict_angle = f64::NEG_INFINITY;
        let mut loose: Option<usize> = None;
        for n in 0..6 {
            if n == k {
                continue;
            }
            let a = linear::angle(&vk, &(ligands[n] - metal));
            if loose.is_none() && a > threshold {
                loose = Some(n);
            }
            if a > strict_angle {
                strict_angle = a;
                strict = n;
            }
        }
        if let Some(l) = loose {
            if l != strict {
                sink.record(&format!(
                    "trans partner of ligand {}: loose rule nominated ligand {}, strict maximum ligand {} wins",
                    k + 1,
                    l + 1,
                    strict + 1
                ));
            }
        }
        sink.record(&format!(
            "ligand {} is trans to ligand {} ({:.4} deg)",
            k + 1,
            strict + 1,
            strict_angle
        ));
        ligands.swap(TRANS_TARGET[k], strict);
    }
}

/// One projection: the plane through the first three working ligands, the
/// metal and far ligands projected onto it, six signed 60°-deviations.
fn face_theta(
    metal: &Vector3<f64>,
    ligands: &[Vector3<f64>; 6],
    order: &[usize; 6],
    projection: usize,
    sink: &mut dyn TraceSink,
) -> Result<f64, ThetaError> {
    let n1 = ligands[order[0]];
    let n2 = ligands[order[1]];
    let n3 = ligands[order[2]];

    let plane: PlaneEq = linear::plane_from_points(&n1, &n2, &n3);
    if plane.is_degenerate() {
        return Err(ThetaError::DegenerateFace { projection });
    }

    let metal_proj = linear::project_onto_plane(metal, &plane);
    let v1 = n1 - metal_proj;
    let v2 = n2 - metal_proj;
    let v3 = n3 - metal_proj;
    let v4 = linear::project_onto_plane(&ligands[order[3]], &plane) - metal_proj;
    let v5 = linear::project_onto_plane(&ligands[order[4]], &plane) - metal_proj;
    let v6 = linear::project_onto_plane(&ligands[order[5]], &plane) - metal_proj;

    // The rotational sense of the traversal: take the cross product whose
    // two-step neighbour is closer. An exact tie goes to v1 x v2.
    let normal = if linear::angle(&v1, &v2) <= linear::angle(&v1, &v3) {
        v1.cross(&v2)
    } else {
        v3.cross(&v1)
    };

    let cycle = [v1, v4, v2, v5, v3, v6];
    let mut sum = 0.0;
    for i in 0..6 {
        let sa = linear::signed_angle(&cycle[i], &cycle[(i + 1) % 6], &normal);
        sum += (sa - 60.0).abs();
    }

    sink.record(&format!(
        "projection {}: face (N{}, N{}, N{}) contributes {:.6} deg",
        projection,
        order[0] + 1,
        order[1] + 1,
        order[2] + 1,
        sum
    ));
    Ok(sum)
}

/// Advance the working-label order to the next projection.
///
/// The 4-cycle (N2, N4, N6, N3) <- (N4, N6, N3, N2) walks the four faces
/// around the N1 apex; after projection 3 the additional pair swaps
/// N1<->N5, N2<->N6, N3<->N4 move the walk onto the opposite hemisphere.
/// Together they visit each of the eight octahedral faces exactly once.
pub(crate) fn advance_working_order(order: &mut [usize; 6], step: usize) {
    let t = order[1];
    order[1] = order[3];
    order[3] = order[5];
    order[5] = order[2];
    order[2] = t;
    if step == 3 {
        order.swap(0, 4);
        order.swap(1, 5);
        order.swap(2, 3);
    }
}

/// Collapse the eight per-face sums into the reported Θ values.
fn aggregate(face_sums: &[f64; 8]) -> ThetaValues {
    let total: f64 = face_sums.iter().sum();

    let mut sorted = *face_sums;
    sorted.sort_by(f64::total_cmp);
    let theta_min_naive = sorted[..4].iter().sum();
    let theta_max_naive = sorted[4..].iter().sum();

    let mut theta_min = 0.0;
    let mut theta_max = 0.0;
    for i in 0..4 {
        let (upper, lower) = (face_sums[i], face_sums[i + 4]);
        theta_min += upper.min(lower);
        theta_max += upper.max(lower);
    }

    ThetaValues {
        theta_min,
        theta_max,
        theta_mean: total / 2.0,
        theta_min_naive,
        theta_max_naive,
    }
}
