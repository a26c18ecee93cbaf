//! Error type shared by the hull computation and its I/O helpers.

use crate::geom::Point;

#[derive(thiserror::Error, Debug)]
pub enum HullError {
    /// The root boundary needs two points.
    #[error("need at least 2 input points, got {found}")]
    TooFewPoints { found: usize },
    /// Every input point is identical, so no boundary segment exists.
    #[error("input points have no two distinct extremes")]
    NoDistinctExtremes,
    #[error("coordinate of {point} exceeds the supported magnitude {bound}")]
    CoordinateOutOfRange { point: Point, bound: i64 },
    #[error("invalid window: {reason}")]
    InvalidWindow { reason: String },
    #[error("unable to write hull output: {0}")]
    Io(#[from] std::io::Error),
}

impl HullError {
    pub(crate) fn invalid_window(reason: impl Into<String>) -> Self {
        Self::InvalidWindow {
            reason: reason.into(),
        }
    }
}
