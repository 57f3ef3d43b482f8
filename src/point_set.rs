use glam::{DVec2, DVec3};

use crate::{ConvexHull2d, ConvexHull3d, ConvexHullError, HullConfig};

/// A point set whose dimension is chosen at runtime.
#[derive(Clone, Debug, PartialEq)]
pub enum PointSet {
    /// Points in the plane.
    Planar(Vec<DVec2>),
    /// Points in space.
    Spatial(Vec<DVec3>),
}

impl PointSet {
    /// Builds a point set of the given dimension from coordinate rows.
    ///
    /// # Errors
    ///
    /// Returns [`ConvexHullError::UnsupportedDimension`] unless `dimension` is 2 or 3,
    /// and [`ConvexHullError::MalformedPoint`] for a row with the wrong number of coordinates.
    ///
    /// # Example
    ///
    /// ```
    /// use convex_quickhull::PointSet;
    ///
    /// let rows = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]];
    /// let points = PointSet::from_coordinates(2, &rows).unwrap();
    ///
    /// assert_eq!(points.dimension(), 2);
    /// assert_eq!(points.len(), 3);
    /// ```
    pub fn from_coordinates<R: AsRef<[f64]>>(
        dimension: usize,
        rows: &[R],
    ) -> Result<Self, ConvexHullError> {
        if dimension != 2 && dimension != 3 {
            return Err(ConvexHullError::UnsupportedDimension(dimension));
        }

        if let Some((index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.as_ref().len() != dimension)
        {
            return Err(ConvexHullError::MalformedPoint {
                index,
                expected: dimension,
                actual: row.as_ref().len(),
            });
        }

        Ok(match dimension {
            2 => PointSet::Planar(
                rows.iter()
                    .map(|row| DVec2::from_slice(row.as_ref()))
                    .collect(),
            ),
            _ => PointSet::Spatial(
                rows.iter()
                    .map(|row| DVec3::from_slice(row.as_ref()))
                    .collect(),
            ),
        })
    }

    /// Returns the dimension of the points, 2 or 3.
    #[inline]
    pub fn dimension(&self) -> usize {
        match self {
            PointSet::Planar(_) => 2,
            PointSet::Spatial(_) => 3,
        }
    }

    /// Returns the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            PointSet::Planar(points) => points.len(),
            PointSet::Spatial(points) => points.len(),
        }
    }

    /// Returns `true` if the set contains no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<DVec2>> for PointSet {
    fn from(points: Vec<DVec2>) -> Self {
        PointSet::Planar(points)
    }
}

impl From<Vec<DVec3>> for PointSet {
    fn from(points: Vec<DVec3>) -> Self {
        PointSet::Spatial(points)
    }
}

/// The convex hull of a [`PointSet`], matching its dimension.
#[derive(Clone, Debug)]
pub enum ConvexHull {
    /// The hull polygon of a planar point set.
    Planar(ConvexHull2d),
    /// The hull faces of a spatial point set.
    Spatial(ConvexHull3d),
}

impl ConvexHull {
    /// Attempts to compute the convex hull of the given point set.
    ///
    /// `config` only affects spatial point sets.
    ///
    /// # Errors
    ///
    /// Returns the error of [`ConvexHull2d::try_from_points`] or
    /// [`ConvexHull3d::try_from_points`], depending on the dimension.
    ///
    /// # Example
    ///
    /// ```
    /// use convex_quickhull::{ConvexHull, HullConfig, PointSet};
    ///
    /// let rows = [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]];
    /// let points = PointSet::from_coordinates(2, &rows).unwrap();
    ///
    /// let hull = ConvexHull::try_from_point_set(&points, &HullConfig::default()).unwrap();
    /// assert_eq!(hull.as_planar().unwrap().points_ref().len(), 4);
    /// ```
    pub fn try_from_point_set(
        points: &PointSet,
        config: &HullConfig,
    ) -> Result<Self, ConvexHullError> {
        match points {
            PointSet::Planar(points) => ConvexHull2d::try_from_points(points).map(Self::Planar),
            PointSet::Spatial(points) => {
                ConvexHull3d::try_from_points(points, config).map(Self::Spatial)
            }
        }
    }

    /// Returns the 2D hull, if the point set was planar.
    #[inline]
    pub fn as_planar(&self) -> Option<&ConvexHull2d> {
        match self {
            ConvexHull::Planar(hull) => Some(hull),
            ConvexHull::Spatial(_) => None,
        }
    }

    /// Returns the 3D hull, if the point set was spatial.
    #[inline]
    pub fn as_spatial(&self) -> Option<&ConvexHull3d> {
        match self {
            ConvexHull::Planar(_) => None,
            ConvexHull::Spatial(hull) => Some(hull),
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::dvec2;

    use super::*;

    #[test]
    fn unsupported_dimension() {
        let rows = [[0.0; 4]; 5];
        assert_eq!(
            PointSet::from_coordinates(4, &rows),
            Err(ConvexHullError::UnsupportedDimension(4))
        );
    }

    #[test]
    fn malformed_point() {
        let rows: Vec<Vec<f64>> = vec![vec![0.0, 0.0, 0.0], vec![1.0, 0.0], vec![0.0, 1.0, 0.0]];
        assert_eq!(
            PointSet::from_coordinates(3, &rows),
            Err(ConvexHullError::MalformedPoint {
                index: 1,
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn planar_dispatch() {
        let points: PointSet = vec![
            dvec2(0.0, 0.0),
            dvec2(2.0, 0.0),
            dvec2(1.0, 3.0),
            dvec2(1.0, 1.0),
        ]
        .into();

        let hull = ConvexHull::try_from_point_set(&points, &HullConfig::default()).unwrap();
        assert!(hull.as_spatial().is_none());
        assert_eq!(
            hull.as_planar().unwrap().points_ref(),
            &[dvec2(0.0, 0.0), dvec2(1.0, 3.0), dvec2(2.0, 0.0)]
        );
    }

    #[test]
    fn spatial_dispatch() {
        let rows = [
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        ];
        let points = PointSet::from_coordinates(3, &rows).unwrap();
        assert_eq!(points.dimension(), 3);

        let hull = ConvexHull::try_from_point_set(&points, &HullConfig::default()).unwrap();
        assert!(hull.as_planar().is_none());
        assert_eq!(hull.as_spatial().unwrap().tri_faces().len(), 4);
    }

    #[test]
    fn errors_pass_through() {
        let points = PointSet::from_coordinates(3, &[[0.0, 0.0, 0.0]; 3]).unwrap();
        assert!(matches!(
            ConvexHull::try_from_point_set(&points, &HullConfig::default()),
            Err(ConvexHullError::InsufficientPoints {
                required: 4,
                actual: 3
            })
        ));
    }
}
