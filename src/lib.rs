//! # Convex QuickHull
//!
//! Convex hulls of 2D and 3D point sets with the QuickHull divide-and-conquer algorithm.
//!
//! - [`ConvexHull2d`] recursively splits the point set by the line through its
//!   leftmost and rightmost points and returns the hull polygon in clockwise order.
//! - [`ConvexHull3d`] grows a seed tetrahedron by repeatedly replacing a face with
//!   three faces joined at the face's farthest outside point, and returns the faces.
//!
//! When the dimension is only known at runtime, build a [`PointSet`] and
//! compute a [`ConvexHull`] from it.
//!
//! ## References
//!
//! - C. Bradford Barber et al. 1996. [The Quickhull Algorithm for Convex Hulls](https://www.cise.ufl.edu/~ungor/courses/fall06/papers/QuickHull.pdf) (the original paper)
//! - Dirk Gregorius. GDC 2014. [Physics for Game Programmers: Implementing Quickhull](https://archive.org/details/GDC2014Gregorius)

#![warn(missing_docs)]

mod config;
mod dim2;
mod dim3;
mod fixed_hasher;
mod point_set;

pub use config::{HullConfig, DEFAULT_EPSILON};
pub use dim2::{distance_point_to_line, is_left, ConvexHull2d};
pub use dim3::{
    compute_extremes, find_farthest_point, find_non_coplanar_points, plane_equation,
    tetrahedron_volume, ConvexHull3d, Edge, Plane, TriFace,
};
pub use point_set::{ConvexHull, PointSet};

use thiserror::Error;

/// An error returned during convex hull construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvexHullError {
    /// Too few points were given to build a polygon or polyhedron.
    #[error("at least {required} points are required to build a convex hull, got {actual}")]
    InsufficientPoints {
        /// The minimum number of points for the requested dimension.
        required: usize,
        /// The number of points given.
        actual: usize,
    },
    /// The given point set cannot produce a valid convex hull.
    #[error("degenerate input: {0}")]
    DegenerateInput(DegenerateInput),
    /// A point has a NaN or infinite coordinate.
    #[error("point {index} has a non-finite coordinate")]
    NonFinitePoint {
        /// The index of the offending point.
        index: usize,
    },
    /// Only 2D and 3D point sets are supported.
    #[error("unsupported dimension {0}, expected 2 or 3")]
    UnsupportedDimension(usize),
    /// A point does not have as many coordinates as the point set's dimension.
    #[error("point {index} has {actual} coordinates, expected {expected}")]
    MalformedPoint {
        /// The index of the offending point.
        index: usize,
        /// The dimension of the point set.
        expected: usize,
        /// The number of coordinates the point has.
        actual: usize,
    },
}

/// The type of degeneracy for when attempting to compute a convex hull for a point set.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateInput {
    /// The input points are approximately equal.
    #[error("points are coincident")]
    Coincident,
    /// The input points are approximately on the same line.
    #[error("points are collinear")]
    Collinear,
    /// The input points are approximately on the same plane.
    #[error("points are coplanar")]
    Coplanar,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let err = ConvexHullError::InsufficientPoints {
            required: 4,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "at least 4 points are required to build a convex hull, got 2"
        );

        let err = ConvexHullError::DegenerateInput(DegenerateInput::Coplanar);
        assert_eq!(err.to_string(), "degenerate input: points are coplanar");

        let err = ConvexHullError::MalformedPoint {
            index: 1,
            expected: 3,
            actual: 2,
        };
        assert_eq!(err.to_string(), "point 1 has 2 coordinates, expected 3");
    }
}
