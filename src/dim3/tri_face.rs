use glam::DVec3;

use crate::dim3::plane::{plane_equation, Plane};

/// A directed edge between two points of a [`TriFace`], given as point indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge(pub usize, pub usize);

/// A triangular face belonging to a [`ConvexHull3d`](crate::ConvexHull3d).
///
/// The face stores the indices of its points. Their order fixes the face normal,
/// and with it which side of the face counts as "outside".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TriFace {
    /// The indices of the face's points.
    pub(crate) indices: [usize; 3],
}

impl TriFace {
    /// Creates a face from the given point indices.
    #[inline]
    pub fn new(indices: [usize; 3]) -> Self {
        Self { indices }
    }

    /// Returns the indices of the face's points.
    #[inline]
    pub fn indices(&self) -> [usize; 3] {
        self.indices
    }

    /// Returns the face's points looked up in `points`.
    #[inline]
    pub fn points(&self, points: &[DVec3]) -> [DVec3; 3] {
        self.indices.map(|i| points[i])
    }

    /// Computes the plane of the face.
    #[inline]
    pub fn plane(&self, points: &[DVec3]) -> Plane {
        let [a, b, c] = self.points(points);
        plane_equation(a, b, c)
    }

    /// Returns the three directed edges `(p1, p2)`, `(p2, p3)`, `(p3, p1)`.
    #[inline]
    pub fn edges(&self) -> [Edge; 3] {
        let [a, b, c] = self.indices;
        [Edge(a, b), Edge(b, c), Edge(c, a)]
    }

    /// Returns `true` if `point` lies in front of the face by more than `epsilon`.
    ///
    /// The test uses the raw plane value `normal · point - d`, not a normalized distance.
    #[inline]
    pub fn is_point_outside(&self, points: &[DVec3], point: DVec3, epsilon: f64) -> bool {
        self.plane(points).signed_value(point) > epsilon
    }

    /// Computes the perpendicular distance from `point` to the plane of the face.
    #[inline]
    pub fn perpendicular_distance(&self, points: &[DVec3], point: DVec3) -> f64 {
        self.plane(points).distance(point)
    }

    /// Returns the face with its first two points swapped, flipping the normal.
    #[inline]
    pub(crate) fn flipped(self) -> Self {
        let [a, b, c] = self.indices;
        Self::new([b, a, c])
    }

    /// Returns the indices rotated so that the smallest comes first.
    ///
    /// Faces with the same points and the same orientation share this key.
    pub(crate) fn oriented_key(&self) -> [usize; 3] {
        let [a, b, c] = self.indices;
        if a <= b && a <= c {
            [a, b, c]
        } else if b <= a && b <= c {
            [b, c, a]
        } else {
            [c, a, b]
        }
    }
}

/// Finds the candidate point farthest from the plane of `face`.
///
/// `candidates` are indices into `points`. Ties keep the first candidate.
/// Returns `None` if `candidates` is empty.
pub fn find_farthest_point(
    face: &TriFace,
    points: &[DVec3],
    candidates: &[usize],
) -> Option<usize> {
    let plane = face.plane(points);

    let mut farthest: Option<(usize, f64)> = None;
    for &index in candidates {
        let distance = plane.distance(points[index]);
        if farthest.is_none_or(|(_, max_distance)| distance > max_distance) {
            farthest = Some((index, distance));
        }
    }

    farthest.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle() -> Vec<DVec3> {
        vec![
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(0.0, 0.0, 1.0),
            DVec3::new(0.0, 0.0, 10.0),
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(2.0, 0.0, 0.0),
        ]
    }

    #[test]
    fn inner_outer_test() {
        let points = unit_triangle();
        let face = TriFace::new([0, 1, 2]);
        let epsilon = 1e-6;

        assert!(face.is_point_outside(&points, points[3], epsilon));
        assert!(!face.is_point_outside(&points, points[4], epsilon));

        // Points on the plane are not outside.
        assert!(!face.is_point_outside(&points, points[5], epsilon));
        assert!(!face.is_point_outside(&points, DVec3::new(1.0, 0.0, 1e-9), epsilon));

        // Flipping the face flips the sides.
        let flipped = face.flipped();
        assert!(!flipped.is_point_outside(&points, points[3], epsilon));
        assert!(flipped.is_point_outside(&points, points[4], epsilon));
    }

    #[test]
    fn edges_are_cyclic() {
        let face = TriFace::new([4, 7, 2]);
        assert_eq!(face.edges(), [Edge(4, 7), Edge(7, 2), Edge(2, 4)]);
    }

    #[test]
    fn oriented_key_ignores_rotation() {
        let face = TriFace::new([4, 7, 2]);
        assert_eq!(face.oriented_key(), [2, 4, 7]);
        assert_eq!(TriFace::new([7, 2, 4]).oriented_key(), [2, 4, 7]);
        assert_eq!(TriFace::new([2, 4, 7]).oriented_key(), [2, 4, 7]);
        assert_eq!(face.flipped().oriented_key(), [2, 7, 4]);
    }

    #[test]
    fn farthest_point() {
        let points = unit_triangle();
        let face = TriFace::new([0, 1, 2]);

        assert_eq!(find_farthest_point(&face, &points, &[4, 6, 3]), Some(3));

        // Points 4 and 6 are equally far from the plane, on opposite sides.
        assert_eq!(find_farthest_point(&face, &points, &[4, 6]), Some(4));
        assert_eq!(find_farthest_point(&face, &points, &[6, 4]), Some(6));

        assert_eq!(find_farthest_point(&face, &points, &[]), None);
    }

    #[test]
    fn perpendicular_distance_is_unsigned() {
        let points = unit_triangle();
        let face = TriFace::new([0, 1, 2]);
        let expected = 1.0 / 3.0_f64.sqrt();

        approx::assert_relative_eq!(face.perpendicular_distance(&points, points[4]), expected);
        approx::assert_relative_eq!(
            face.flipped().perpendicular_distance(&points, points[4]),
            expected
        );
    }
}
