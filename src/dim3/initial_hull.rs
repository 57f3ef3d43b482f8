use glam::DVec3;
use log::debug;

use crate::{
    dim3::{plane::tetrahedron_volume, tri_face::TriFace},
    ConvexHullError, DegenerateInput,
};

/// Computes the indices of the points with the minimum and maximum coordinate
/// along each axis, ordered as `[min_x, max_x, min_y, max_y, min_z, max_z]`.
///
/// Ties keep the first point encountered. One point may be extreme along several axes.
///
/// `points` must not be empty.
pub fn compute_extremes(points: &[DVec3]) -> [usize; 6] {
    let mut extremes = [0; 6];

    for (i, point) in points.iter().enumerate().skip(1) {
        for axis in 0..3 {
            if point[axis] < points[extremes[2 * axis]][axis] {
                extremes[2 * axis] = i;
            }
            if point[axis] > points[extremes[2 * axis + 1]][axis] {
                extremes[2 * axis + 1] = i;
            }
        }
    }

    extremes
}

/// Searches `candidates` for four points spanning a tetrahedron with a volume
/// larger than `epsilon`.
///
/// Quadruples are tried in lexicographic order of their positions in `candidates`,
/// and the first non-coplanar one is returned.
///
/// # Errors
///
/// Returns [`DegenerateInput::Coplanar`] if every quadruple is coplanar.
pub fn find_non_coplanar_points(
    points: &[DVec3],
    candidates: &[usize],
    epsilon: f64,
) -> Result<[usize; 4], ConvexHullError> {
    let n = candidates.len();

    for i in 0..n {
        for j in i + 1..n {
            for k in j + 1..n {
                for l in k + 1..n {
                    let indices = [candidates[i], candidates[j], candidates[k], candidates[l]];
                    let [a, b, c, d] = indices.map(|index| points[index]);

                    if tetrahedron_volume(a, b, c, d) > epsilon {
                        return Ok(indices);
                    }
                }
            }
        }
    }

    Err(ConvexHullError::DegenerateInput(DegenerateInput::Coplanar))
}

/// Computes the indices for the initial tetrahedron from the whole point set.
///
/// Used when the axis-extreme points alone are coplanar.
fn search_tetrahedron_indices(
    points: &[DVec3],
    extremes: [usize; 6],
    epsilon: f64,
) -> Result<[usize; 4], ConvexHullError> {
    let mut indices = [0; 4];

    // The maximum one-dimensional extent of the point cloud, and the axis
    // it is measured along (x = 0, y = 1, z = 2).
    let mut max_extent = 0.0;
    let mut max_axis = 0;

    for axis in 0..3 {
        let extent = points[extremes[2 * axis + 1]][axis] - points[extremes[2 * axis]][axis];
        if extent > max_extent {
            max_extent = extent;
            max_axis = axis;
        }
    }

    if max_extent == 0.0 {
        // The point cloud seems to consist of a single point.
        return Err(ConvexHullError::DegenerateInput(DegenerateInput::Coincident));
    }

    // The first two vertices are the ones farthest apart along the maximum axis.
    indices[0] = extremes[2 * max_axis + 1];
    indices[1] = extremes[2 * max_axis];

    // The third vertex should be the one farthest from the line
    // through the first two vertices.
    let unit_01 = (points[indices[1]] - points[indices[0]]).normalize();
    let mut max_squared_distance = 0.0;

    for (i, point) in points.iter().enumerate() {
        let distance_squared = unit_01.cross(*point - points[indices[0]]).length_squared();

        if distance_squared > max_squared_distance {
            max_squared_distance = distance_squared;
            indices[2] = i;
        }
    }

    if max_squared_distance == 0.0 {
        return Err(ConvexHullError::DegenerateInput(DegenerateInput::Collinear));
    }

    // The fourth vertex should be the one spanning the largest volume
    // with the base triangle.
    let [a, b, c] = [indices[0], indices[1], indices[2]].map(|i| points[i]);
    let mut max_volume = 0.0;

    for (i, point) in points.iter().enumerate() {
        let volume = tetrahedron_volume(a, b, c, *point);

        if volume > max_volume {
            max_volume = volume;
            indices[3] = i;
        }
    }

    if max_volume <= epsilon {
        return Err(ConvexHullError::DegenerateInput(DegenerateInput::Coplanar));
    }

    Ok(indices)
}

/// Builds the four outward-facing faces of the initial tetrahedron.
///
/// # Errors
///
/// Returns [`ConvexHullError::DegenerateInput`] if the points do not span a volume.
pub fn init_tetrahedron(points: &[DVec3], epsilon: f64) -> Result<[TriFace; 4], ConvexHullError> {
    let extremes = compute_extremes(points);

    let indices = match find_non_coplanar_points(points, &extremes, epsilon) {
        Ok(indices) => indices,
        Err(ConvexHullError::DegenerateInput(DegenerateInput::Coplanar)) => {
            debug!("axis extremes {extremes:?} are coplanar, searching all points");
            search_tetrahedron_indices(points, extremes, epsilon)?
        }
        Err(err) => return Err(err),
    };

    debug!("seed tetrahedron {indices:?}");

    Ok(std::array::from_fn(|omitted| {
        let [a, b, c] = match omitted {
            0 => [indices[1], indices[2], indices[3]],
            1 => [indices[0], indices[2], indices[3]],
            2 => [indices[0], indices[1], indices[3]],
            _ => [indices[0], indices[1], indices[2]],
        };
        let face = TriFace::new([a, b, c]);

        // The omitted vertex must end up behind the face.
        if face.plane(points).signed_value(points[indices[omitted]]) > 0.0 {
            face.flipped()
        } else {
            face
        }
    }))
}
