// The face-expansion loop follows the classic QuickHull outline, but without
// horizon computation: each expanded face is replaced by three faces joined at
// its farthest outside point, and the new faces are processed in the same sweep.

mod initial_hull;
mod plane;
mod tri_face;

use std::collections::VecDeque;

use glam::DVec3;
use hashbrown::HashSet;
use log::{debug, trace, warn};

use crate::{fixed_hasher::FixedHasher, ConvexHullError, HullConfig};

pub use initial_hull::{compute_extremes, find_non_coplanar_points};
pub use plane::{plane_equation, tetrahedron_volume, Plane};
pub use tri_face::{find_farthest_point, Edge, TriFace};

/// A 3D [convex hull] approximating the smallest convex set containing
/// all input points in a given point set.
///
/// The hull is a list of triangular faces over the input points. Every face
/// is oriented so that its normal points away from the seed tetrahedron it grew from.
///
/// Faces are expanded one at a time without removing the faces around them,
/// so the face list may contain overlapping or redundant triangles for inputs
/// with many hull points. Use [`unenclosed_points`](Self::unenclosed_points) to
/// check the result against the input.
///
/// [convex hull]: https://en.wikipedia.org/wiki/Convex_hull
///
/// # Example
///
/// ```
/// use convex_quickhull::{ConvexHull3d, HullConfig};
/// use glam::DVec3;
///
/// // Define a set of 3D points.
/// let points = vec![
///     DVec3::new(0.0, 0.0, 0.0),
///     DVec3::new(1.0, 0.0, 0.0),
///     DVec3::new(0.0, 1.0, 0.0),
///     DVec3::new(0.0, 0.0, 1.0),
/// ];
///
/// // Compute the convex hull with the default tolerance.
/// let hull = ConvexHull3d::try_from_points(&points, &HullConfig::default()).unwrap();
///
/// // The hull is the tetrahedron itself.
/// assert_eq!(hull.faces().count(), 4);
/// assert!(hull.unenclosed_points().is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ConvexHull3d {
    /// The input points. Faces index into this buffer.
    points: Vec<DVec3>,
    /// The faces of the convex hull.
    faces: Vec<TriFace>,
    /// The tolerance the hull was built with.
    epsilon: f64,
}

impl ConvexHull3d {
    /// The minimum number of input points accepted by [`try_from_points`](Self::try_from_points).
    pub const MIN_POINTS: usize = 4;

    /// Attempts to compute a [`ConvexHull3d`] for the given set of points.
    ///
    /// # Errors
    ///
    /// Returns a [`ConvexHullError`] if hull construction fails.
    /// Possible errors include:
    ///
    /// - [`InsufficientPoints`](ConvexHullError::InsufficientPoints) for fewer than four points.
    /// - [`NonFinitePoint`](ConvexHullError::NonFinitePoint) for NaN or infinite coordinates.
    /// - [`DegenerateInput`](ConvexHullError::DegenerateInput) if the points do not span a volume.
    pub fn try_from_points(points: &[DVec3], config: &HullConfig) -> Result<Self, ConvexHullError> {
        if points.len() < Self::MIN_POINTS {
            return Err(ConvexHullError::InsufficientPoints {
                required: Self::MIN_POINTS,
                actual: points.len(),
            });
        }

        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(ConvexHullError::NonFinitePoint { index });
        }

        // Create the initial simplex, a tetrahedron in 3D.
        let initial_faces = initial_hull::init_tetrahedron(points, config.epsilon)?;

        // Run the main quickhull algorithm.
        let faces = Self::update(points, initial_faces, config);

        debug!(
            "computed 3D hull with {} faces over {} points",
            faces.len(),
            points.len()
        );

        Ok(Self {
            points: points.to_vec(),
            faces,
            epsilon: config.epsilon,
        })
    }

    /// The main quickhull loop.
    ///
    /// For each queued face:
    ///
    /// 1. Collect the input points outside the face.
    /// 2. If there are none, the face is final.
    /// 3. Otherwise, find the outside point farthest from the face, the "eye point".
    /// 4. Replace the face with three faces connecting each of its edges to the eye point,
    ///    and queue them behind the faces already waiting.
    ///
    /// A face is never queued twice with the same orientation, so the queue always drains.
    fn update(points: &[DVec3], initial_faces: [TriFace; 4], config: &HullConfig) -> Vec<TriFace> {
        let max_iter = config.max_iter.unwrap_or(usize::MAX);

        let mut queue: VecDeque<TriFace> = initial_faces.into_iter().collect();
        let mut queued = HashSet::with_hasher(FixedHasher);
        for face in &queue {
            queued.insert(face.oriented_key());
        }

        let mut faces = Vec::new();
        let mut outside_points = Vec::new();
        let mut num_iter = 0;

        while let Some(face) = queue.pop_front() {
            if num_iter >= max_iter {
                warn!(
                    "reached the limit of {max_iter} face expansions with {} faces left unexpanded",
                    queue.len() + 1
                );
                faces.push(face);
                faces.extend(queue.drain(..));
                break;
            }

            outside_points.clear();
            outside_points.extend(
                (0..points.len())
                    .filter(|&i| face.is_point_outside(points, points[i], config.epsilon)),
            );

            let Some(eye_point) = find_farthest_point(&face, points, &outside_points) else {
                faces.push(face);
                continue;
            };

            num_iter += 1;
            trace!(
                "expanding face {:?} towards point {eye_point} ({} outside points)",
                face.indices,
                outside_points.len()
            );

            for Edge(a, b) in face.edges() {
                let new_face = TriFace::new([a, b, eye_point]);
                if queued.insert(new_face.oriented_key()) {
                    queue.push_back(new_face);
                }
            }
        }

        faces
    }

    /// Returns a reference to the input points the faces index into.
    #[inline]
    pub fn points_ref(&self) -> &[DVec3] {
        &self.points
    }

    /// Returns the faces of the convex hull.
    #[inline]
    #[doc(alias = "triangles")]
    pub fn tri_faces(&self) -> &[TriFace] {
        &self.faces
    }

    /// Returns an iterator over the faces of the convex hull as point triples.
    #[inline]
    pub fn faces(&self) -> impl ExactSizeIterator<Item = [DVec3; 3]> + '_ {
        self.faces.iter().map(|face| face.points(&self.points))
    }

    /// Returns the point indices of the faces of the convex hull.
    #[inline]
    pub fn indices(&self) -> Vec<[usize; 3]> {
        self.faces.iter().map(TriFace::indices).collect()
    }

    /// Returns the vertices and indices of the convex hull.
    ///
    /// This consumes the convex hull. The vertices are the input points.
    #[inline]
    pub fn vertices_indices(self) -> (Vec<DVec3>, Vec<[usize; 3]>) {
        let indices = self.indices();
        (self.points, indices)
    }

    /// Returns `true` if `point` is not outside at least one face of the hull.
    pub fn is_enclosed(&self, point: DVec3) -> bool {
        self.faces
            .iter()
            .any(|face| !face.is_point_outside(&self.points, point, self.epsilon))
    }

    /// Returns the indices of the input points that are outside every face.
    ///
    /// Empty for a well-formed hull.
    pub fn unenclosed_points(&self) -> Vec<usize> {
        (0..self.points.len())
            .filter(|&i| !self.is_enclosed(self.points[i]))
            .collect()
    }

    /// Computes the point on the convex hull that is furthest in the given direction.
    ///
    /// Ties keep the first input point. Returns `None` if the hull has no points.
    pub fn support_point(&self, direction: DVec3) -> Option<DVec3> {
        self.points.iter().copied().reduce(|support, point| {
            if point.dot(direction) > support.dot(direction) {
                point
            } else {
                support
            }
        })
    }
}
