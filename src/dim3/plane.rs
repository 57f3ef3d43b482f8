use glam::DVec3;

/// A plane `normal · x = d` through three points.
///
/// The normal is not normalized; its direction follows the winding of the
/// points the plane was built from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    /// The (unnormalized) normal of the plane.
    pub normal: DVec3,
    /// The offset of the plane along its normal.
    pub d: f64,
}

impl Plane {
    /// Returns `normal · point - d`.
    ///
    /// Positive values are on the side the normal points to.
    #[inline]
    pub fn signed_value(&self, point: DVec3) -> f64 {
        self.normal.dot(point) - self.d
    }

    /// Computes the perpendicular distance from `point` to the plane.
    #[inline]
    pub fn distance(&self, point: DVec3) -> f64 {
        self.signed_value(point).abs() / self.normal.length()
    }

    /// Returns `true` if the points the plane was built from are collinear.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.normal == DVec3::ZERO
    }
}

/// Computes the plane through `p1`, `p2` and `p3`.
///
/// The normal is `(p2 - p1) × (p3 - p1)`. The points must not be collinear,
/// otherwise the normal is zero and the plane is meaningless.
///
/// # Example
///
/// ```
/// use convex_quickhull::plane_equation;
/// use glam::DVec3;
///
/// let plane = plane_equation(DVec3::X, DVec3::Y, DVec3::Z);
///
/// assert_eq!(plane.normal, DVec3::ONE);
/// assert_eq!(plane.d, 1.0);
/// ```
#[inline]
pub fn plane_equation(p1: DVec3, p2: DVec3, p3: DVec3) -> Plane {
    let normal = (p2 - p1).cross(p3 - p1);
    Plane {
        normal,
        d: normal.dot(p1),
    }
}

/// Computes the volume of the tetrahedron spanned by four points.
#[inline]
pub fn tetrahedron_volume(p1: DVec3, p2: DVec3, p3: DVec3, p4: DVec3) -> f64 {
    (p2 - p1).dot((p3 - p1).cross(p4 - p1)).abs() / 6.0
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn face_normal_test() {
        let plane = plane_equation(
            DVec3::new(-1.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
        );
        assert_eq!(plane.normal, DVec3::new(0.0, 0.0, 2.0));
        assert_eq!(plane.d, 0.0);

        let plane = plane_equation(
            DVec3::new(0.0, -1.0, 3.0),
            DVec3::new(0.0, 1.0, 3.0),
            DVec3::new(0.0, 0.0, 4.0),
        );
        assert_eq!(plane.normal, DVec3::new(2.0, 0.0, 0.0));
        assert_eq!(plane.d, 0.0);

        let plane = plane_equation(
            DVec3::new(0.0, 2.0, -1.0),
            DVec3::new(0.0, 2.0, 1.0),
            DVec3::new(1.0, 2.0, 0.0),
        );
        assert_eq!(plane.normal, DVec3::new(0.0, 2.0, 0.0));
        assert_eq!(plane.d, 4.0);
    }

    #[test]
    fn signed_value_and_distance() {
        let plane = plane_equation(DVec3::X, DVec3::Y, DVec3::Z);

        assert!(plane.signed_value(DVec3::splat(1.0)) > 0.0);
        assert!(plane.signed_value(DVec3::ZERO) < 0.0);
        assert_eq!(plane.signed_value(DVec3::X), 0.0);

        assert_relative_eq!(plane.distance(DVec3::ZERO), 1.0 / 3.0_f64.sqrt());
        assert_relative_eq!(plane.distance(DVec3::splat(1.0)), 2.0 / 3.0_f64.sqrt());
    }

    #[test]
    fn collinear_plane_is_degenerate() {
        let plane = plane_equation(DVec3::ZERO, DVec3::X, DVec3::X * 2.0);
        assert!(plane.is_degenerate());
        assert!(!plane_equation(DVec3::ZERO, DVec3::X, DVec3::Y).is_degenerate());
    }

    #[test]
    fn tetrahedron_volume_test() {
        let volume = tetrahedron_volume(DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z);
        assert_relative_eq!(volume, 1.0 / 6.0);

        // Orientation does not matter.
        let volume = tetrahedron_volume(DVec3::ZERO, DVec3::Y, DVec3::X, DVec3::Z);
        assert_relative_eq!(volume, 1.0 / 6.0);

        let coplanar =
            tetrahedron_volume(DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::new(0.5, 0.5, 0.0));
        assert_eq!(coplanar, 0.0);
    }
}
