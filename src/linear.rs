//! Linear-geometry kernel shared by all distortion engines.
//!
//! Pure vector primitives over [`nalgebra::Vector3`]: distances, angles
//! (unsigned and signed against an oriented normal), triangle areas, plane
//! equations and orthogonal projections. Angles are returned in degrees
//! throughout, matching the conventions of the distortion parameters.
//!
//! Numerical domain safety: every arccos argument is clamped to [-1, +1]
//! before the call, so angle computations cannot produce NaN for non-zero
//! input vectors. Zero-length vectors and zero-normal planes are the
//! caller's responsibility except where an explicit `Result` is returned.

use nalgebra::Vector3;
use thiserror::Error;

/// Squared-magnitude threshold below which a vector or plane normal is
/// treated as numerically zero.
pub const DEGENERACY_EPS: f64 = 1e-12;

/// Errors raised by the vector kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LinearError {
    /// A unit vector was requested for a vector of (numerically) zero length.
    #[error("cannot normalise a vector of zero length")]
    DegenerateVector,
}

/// Euclidean distance between two points.
///
/// Strictly non-negative; zero exactly when `a == b`.
pub fn distance(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    (a - b).norm()
}

/// Euclidean norm of a vector.
pub fn norm(v: &Vector3<f64>) -> f64 {
    v.norm()
}

/// Unit vector in the direction of `v`.
///
/// Fails with [`LinearError::DegenerateVector`] when `v` has (numerically)
/// zero length.
pub fn unit(v: &Vector3<f64>) -> Result<Vector3<f64>, LinearError> {
    if v.norm_squared() <= DEGENERACY_EPS {
        return Err(LinearError::DegenerateVector);
    }
    Ok(v / v.norm())
}

/// Unsigned angle between two vectors, in degrees, in [0, 180].
///
/// The cosine is clamped to [-1, +1] before the arccos call. Both vectors
/// must have non-zero length; the caller guarantees this.
///
/// # Examples
///
/// ```
/// use nalgebra::Vector3;
/// use octapar::linear::angle;
///
/// let a = angle(&Vector3::new(1.0, 0.0, 0.0), &Vector3::new(0.0, 1.0, 0.0));
/// assert!((a - 90.0).abs() < 1e-12);
/// ```
pub fn angle(u: &Vector3<f64>, v: &Vector3<f64>) -> f64 {
    let cosine = u.dot(v) / (u.norm() * v.norm());
    cosine.clamp(-1.0, 1.0).acos().to_degrees()
}

/// Signed angle between two vectors with respect to an oriented reference
/// normal, in degrees, in [-180, +180].
///
/// The magnitude equals [`angle(u, v)`](angle); the sign is the sign of
/// `det[u; v; n] = (u × v) · n`. A zero magnitude yields 0 regardless of
/// the normal.
pub fn signed_angle(u: &Vector3<f64>, v: &Vector3<f64>, n: &Vector3<f64>) -> f64 {
    let magnitude = angle(u, v);
    if magnitude == 0.0 {
        return 0.0;
    }
    if u.cross(v).dot(n) < 0.0 {
        -magnitude
    } else {
        magnitude
    }
}

/// Area of the triangle spanned by three points.
pub fn triangle_area(p: &Vector3<f64>, q: &Vector3<f64>, r: &Vector3<f64>) -> f64 {
    0.5 * (q - p).cross(&(r - p)).norm()
}

/// Plane equation `a·x + b·y + c·z = d`.
///
/// Produced by [`plane_from_points`]. The normal `(a, b, c)` is zero when
/// the defining points were collinear; check [`PlaneEq::is_degenerate`]
/// before projecting onto the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneEq {
    /// x-coefficient of the plane normal.
    pub a: f64,
    /// y-coefficient of the plane normal.
    pub b: f64,
    /// z-coefficient of the plane normal.
    pub c: f64,
    /// Offset: the plane satisfies `(a, b, c) · p = d` for every point `p`
    /// on it.
    pub d: f64,
}

impl PlaneEq {
    /// The (unnormalised) plane normal `(a, b, c)`.
    pub fn normal(&self) -> Vector3<f64> {
        Vector3::new(self.a, self.b, self.c)
    }

    /// Whether the plane normal is numerically zero (collinear defining
    /// points).
    pub fn is_degenerate(&self) -> bool {
        self.normal().norm_squared() <= DEGENERACY_EPS
    }
}

/// Plane through three points.
///
/// The normal is `(r − p) × (q − p)` and the offset is `normal · r`.
/// Collinear input yields a degenerate (zero-normal) plane; callers must
/// check [`PlaneEq::is_degenerate`].
pub fn plane_from_points(p: &Vector3<f64>, q: &Vector3<f64>, r: &Vector3<f64>) -> PlaneEq {
    let n = (r - p).cross(&(q - p));
    PlaneEq {
        a: n.x,
        b: n.y,
        c: n.z,
        d: n.dot(r),
    }
}

/// Orthogonal projection of a point onto a plane.
///
/// Moves `p` along the plane normal: `p + λ·n` with
/// `λ = (d − n·p) / ‖n‖²`. The plane must not be degenerate; the caller
/// guarantees `‖n‖² > 0`.
pub fn project_onto_plane(p: &Vector3<f64>, plane: &PlaneEq) -> Vector3<f64> {
    let n = plane.normal();
    let lambda = (plane.d - n.dot(p)) / n.norm_squared();
    p + n * lambda
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance_zero_iff_equal() {
        let a = Vector3::new(1.0, -2.0, 3.0);
        let b = Vector3::new(4.0, 2.0, 3.0);
        assert_relative_eq!(distance(&a, &b), 5.0);
        assert_eq!(distance(&a, &a), 0.0);
    }

    #[test]
    fn test_unit_rejects_zero_vector() {
        assert_eq!(unit(&Vector3::zeros()), Err(LinearError::DegenerateVector));
        let u = unit(&Vector3::new(0.0, 3.0, 4.0)).unwrap();
        assert_relative_eq!(u.norm(), 1.0, max_relative = 1e-14);
    }

    #[test]
    fn test_angle_range_and_clamping() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        assert_relative_eq!(angle(&x, &x), 0.0);
        assert_relative_eq!(angle(&x, &-x), 180.0, max_relative = 1e-12);
        // Parallel vectors of different length: the raw cosine can land a
        // hair above 1.0 and must be clamped before acos.
        let long = Vector3::new(1e8, 1e-8, 0.0);
        assert!(angle(&long, &long).is_finite());
    }

    #[test]
    fn test_signed_angle_sign_convention() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);
        let z = Vector3::new(0.0, 0.0, 1.0);
        assert_relative_eq!(signed_angle(&x, &y, &z), 90.0, max_relative = 1e-12);
        assert_relative_eq!(signed_angle(&y, &x, &z), -90.0, max_relative = 1e-12);
        // Zero magnitude yields zero regardless of the normal.
        assert_eq!(signed_angle(&x, &x, &z), 0.0);
        // Antiparallel vectors have zero determinant; the sign stays positive.
        assert_relative_eq!(signed_angle(&x, &-x, &z), 180.0, max_relative = 1e-12);
    }

    #[test]
    fn test_triangle_area() {
        let p = Vector3::zeros();
        let q = Vector3::new(3.0, 0.0, 0.0);
        let r = Vector3::new(0.0, 4.0, 0.0);
        assert_relative_eq!(triangle_area(&p, &q, &r), 6.0);
        // Collinear points span no area.
        let s = Vector3::new(6.0, 0.0, 0.0);
        assert_relative_eq!(triangle_area(&p, &q, &s), 0.0);
    }

    #[test]
    fn test_plane_from_points_contains_all_three() {
        let p = Vector3::new(1.0, 0.0, 0.0);
        let q = Vector3::new(0.0, 1.0, 0.0);
        let r = Vector3::new(0.0, 0.0, 1.0);
        let plane = plane_from_points(&p, &q, &r);
        assert!(!plane.is_degenerate());
        for point in [&p, &q, &r] {
            assert_relative_eq!(plane.normal().dot(point), plane.d, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_plane_from_collinear_points_is_degenerate() {
        let p = Vector3::new(0.0, 0.0, 0.0);
        let q = Vector3::new(1.0, 1.0, 1.0);
        let r = Vector3::new(2.0, 2.0, 2.0);
        assert!(plane_from_points(&p, &q, &r).is_degenerate());
    }

    #[test]
    fn test_projection_lands_on_plane() {
        let plane = plane_from_points(
            &Vector3::new(1.0, 0.0, 0.0),
            &Vector3::new(0.0, 1.0, 0.0),
            &Vector3::new(0.0, 0.0, 1.0),
        );
        let p = Vector3::new(2.0, -3.0, 0.5);
        let projected = project_onto_plane(&p, &plane);
        assert_relative_eq!(plane.normal().dot(&projected), plane.d, max_relative = 1e-12);
        // The displacement is parallel to the normal.
        let shift = projected - p;
        assert_relative_eq!(shift.cross(&plane.normal()).norm(), 0.0, epsilon = 1e-12);
        // A point already on the plane stays put.
        let on_plane = Vector3::new(1.0, 0.0, 0.0);
        assert_relative_eq!(
            (project_onto_plane(&on_plane, &plane) - on_plane).norm(),
            0.0,
            epsilon = 1e-12
        );
    }
}
