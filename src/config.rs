//! Tolerances and limits used during hull construction.

/// The default tolerance for outside tests and coplanarity checks.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Configuration for [`ConvexHull3d`](crate::ConvexHull3d) construction.
///
/// # Example
///
/// ```
/// use convex_quickhull::HullConfig;
///
/// let config = HullConfig::default().with_epsilon(1e-9).with_max_iter(100);
///
/// assert_eq!(config.epsilon, 1e-9);
/// assert_eq!(config.max_iter, Some(100));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HullConfig {
    /// Points whose signed plane value is at most `epsilon` are treated as lying
    /// on or behind a face. Four points whose tetrahedron volume is at most
    /// `epsilon` are treated as coplanar.
    pub epsilon: f64,
    /// The maximum number of face expansions to perform.
    /// If `None`, the algorithm runs until no queued face has outside points.
    pub max_iter: Option<usize>,
}

impl Default for HullConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            max_iter: None,
        }
    }
}

impl HullConfig {
    /// Returns the configuration with the given tolerance.
    #[inline]
    pub fn with_epsilon(self, epsilon: f64) -> Self {
        Self { epsilon, ..self }
    }

    /// Returns the configuration with the given cap on face expansions.
    #[inline]
    pub fn with_max_iter(self, max_iter: usize) -> Self {
        Self {
            max_iter: Some(max_iter),
            ..self
        }
    }
}
