use glam::DVec2;
use log::debug;

use crate::ConvexHullError;

/// A 2D [convex hull] representing the smallest convex set containing
/// all input points in a given point set.
///
/// This can be thought of as a shrink wrapping of a 2D object.
///
/// [convex hull]: https://en.wikipedia.org/wiki/Convex_hull
///
/// # Example
///
/// ```
/// use convex_quickhull::ConvexHull2d;
/// use glam::DVec2;
///
/// let points = vec![
///     DVec2::new(0.0, 0.0),
///     DVec2::new(1.0, 0.0),
///     DVec2::new(0.0, 1.0),
///     DVec2::new(1.0, 1.0),
///     DVec2::new(0.5, 0.5),
/// ];
///
/// // Create the convex hull.
/// let hull = ConvexHull2d::try_from_points(&points).unwrap();
///
/// // Get the points of the convex hull in clockwise order,
/// // starting from the leftmost point.
/// let points = hull.points();
///
/// assert_eq!(
///     points,
///     &[
///         DVec2::new(0.0, 0.0),
///         DVec2::new(0.0, 1.0),
///         DVec2::new(1.0, 1.0),
///         DVec2::new(1.0, 0.0),
///     ],
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConvexHull2d {
    points: Vec<DVec2>,
}

impl ConvexHull2d {
    /// The minimum number of input points accepted by [`try_from_points`](Self::try_from_points).
    pub const MIN_POINTS: usize = 3;

    /// Attempts to compute a [`ConvexHull2d`] for the given set of 2D points.
    ///
    /// Point sets with exactly three points are returned as-is.
    ///
    /// # Errors
    ///
    /// Returns [`ConvexHullError::InsufficientPoints`] for fewer than three points
    /// and [`ConvexHullError::NonFinitePoint`] if any coordinate is NaN or infinite.
    pub fn try_from_points(points: &[DVec2]) -> Result<Self, ConvexHullError> {
        if points.len() < Self::MIN_POINTS {
            return Err(ConvexHullError::InsufficientPoints {
                required: Self::MIN_POINTS,
                actual: points.len(),
            });
        }

        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(ConvexHullError::NonFinitePoint { index });
        }

        if points.len() == Self::MIN_POINTS {
            return Ok(Self {
                points: points.to_vec(),
            });
        }

        // Find the points with minimum and maximum `x` coordinates.
        let (min, max) = extreme_points(points);

        // Split the remaining points into both sides of the line `min, max`.
        let upper: Vec<DVec2> = points
            .iter()
            .copied()
            .filter(|p| is_left(min, max, *p))
            .collect();
        let lower: Vec<DVec2> = points
            .iter()
            .copied()
            .filter(|p| is_left(max, min, *p))
            .collect();

        let mut hull = Vec::new();
        hull.push(min);
        Self::hull_set(min, max, &upper, &mut hull);
        hull.push(max);
        Self::hull_set(max, min, &lower, &mut hull);

        debug!(
            "computed 2D hull with {} of {} points",
            hull.len(),
            points.len()
        );

        Ok(Self { points: hull })
    }

    /// Returns the points of the convex hull in clockwise order.
    ///
    /// This consumes the convex hull. If you want a reference to the points,
    /// consider using [`points_ref`](Self::points_ref) instead.
    #[inline]
    pub fn points(self) -> Vec<DVec2> {
        self.points
    }

    /// Returns a reference to the points of the convex hull in clockwise order.
    #[inline]
    pub fn points_ref(&self) -> &[DVec2] {
        &self.points
    }

    /// Returns the hull points with the first point appended again at the end,
    /// ready to be drawn as a closed polyline.
    pub fn closed_loop(&self) -> Vec<DVec2> {
        let mut points = self.points.clone();
        if let Some(first) = self.points.first() {
            points.push(*first);
        }
        points
    }

    /// Computes the area enclosed by the hull.
    pub fn area(&self) -> f64 {
        signed_area(&self.points).abs()
    }

    /// Returns `true` if `point` is inside the hull or on its boundary.
    pub fn contains(&self, point: DVec2) -> bool {
        let n = self.points.len();
        let winding = signed_area(&self.points);

        if winding == 0.0 {
            // Degenerate hull, either a single point or a segment.
            return (0..n).any(|i| on_segment(self.points[i], self.points[(i + 1) % n], point));
        }

        (0..n).all(|i| {
            let orientation = orient2d(self.points[i], self.points[(i + 1) % n], point);
            orientation * winding.signum() >= 0.0
        })
    }

    // Recursively computes the hull chain from `a` to `b` over points left of `a -> b`.
    fn hull_set(a: DVec2, b: DVec2, points: &[DVec2], hull: &mut Vec<DVec2>) {
        if points.is_empty() {
            return;
        }

        // Find the point furthest from the line through `a, b`.
        // Ties keep the first point encountered.
        let mut furthest_point = points[0];
        let mut max_distance = distance_point_to_line(a, b, furthest_point);
        for point in &points[1..] {
            let distance = distance_point_to_line(a, b, *point);
            if distance > max_distance {
                max_distance = distance;
                furthest_point = *point;
            }
        }

        // Points inside the triangle `a, furthest_point, b` cannot be on the hull.
        let left_of_a: Vec<DVec2> = points
            .iter()
            .copied()
            .filter(|p| is_left(a, furthest_point, *p))
            .collect();
        let left_of_b: Vec<DVec2> = points
            .iter()
            .copied()
            .filter(|p| is_left(furthest_point, b, *p))
            .collect();

        Self::hull_set(a, furthest_point, &left_of_a, hull);
        hull.push(furthest_point);
        Self::hull_set(furthest_point, b, &left_of_b, hull);
    }
}

/// Returns the points with the minimum and maximum `x` coordinates.
/// Ties keep the first point encountered.
///
/// If every point has the same `x`, the points with the minimum and maximum `y`
/// are returned instead.
///
/// `points` must not be empty.
fn extreme_points(points: &[DVec2]) -> (DVec2, DVec2) {
    let (min, max) = extremes_by(points, |p| p.x);
    if min.x == max.x {
        return extremes_by(points, |p| p.y);
    }
    (min, max)
}

fn extremes_by(points: &[DVec2], key: impl Fn(DVec2) -> f64) -> (DVec2, DVec2) {
    points[1..]
        .iter()
        .fold((points[0], points[0]), |(min, max), point| {
            let min = if key(*point) < key(min) { *point } else { min };
            let max = if key(*point) > key(max) { *point } else { max };
            (min, max)
        })
}

/// Gives the orientation of the triangle formed by `a`, `b`, `c`.
///
/// - `orientation > 0`: counterclockwise
/// - `orientation < 0`: clockwise
/// - `orientation == 0`: collinear
#[inline]
fn orient2d(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    use robust::Coord;
    robust::orient2d(
        Coord { x: a.x, y: a.y },
        Coord { x: b.x, y: b.y },
        Coord { x: c.x, y: c.y },
    )
}

/// Returns `true` if `p` lies strictly to the left of the directed line `a -> b`.
///
/// This is the sign of the cross product `(b - a) × (p - b)`, evaluated exactly.
#[inline]
pub fn is_left(a: DVec2, b: DVec2, p: DVec2) -> bool {
    orient2d(a, b, p) > 0.0
}

/// Computes the perpendicular distance from `p` to the line through `a` and `b`.
///
/// The line is written as `α·x + β·y + γ = 0`, so vertical lines need no special slope.
/// If `a` and `b` coincide, this is the distance from `p` to `a`.
pub fn distance_point_to_line(a: DVec2, b: DVec2, p: DVec2) -> f64 {
    let alpha = b.y - a.y;
    let beta = a.x - b.x;
    let gamma = b.x * a.y - a.x * b.y;

    let norm = (alpha * alpha + beta * beta).sqrt();
    if norm == 0.0 {
        return p.distance(a);
    }

    (alpha * p.x + beta * p.y + gamma).abs() / norm
}

/// Signed area of a polygon, positive for counterclockwise winding.
fn signed_area(points: &[DVec2]) -> f64 {
    let n = points.len();
    let doubled: f64 = (0..n)
        .map(|i| points[i].perp_dot(points[(i + 1) % n]))
        .sum();
    0.5 * doubled
}

/// Returns `true` if `p` lies on the closed segment `a, b`.
fn on_segment(a: DVec2, b: DVec2, p: DVec2) -> bool {
    orient2d(a, b, p) == 0.0 && p.cmpge(a.min(b)).all() && p.cmple(a.max(b)).all()
}
