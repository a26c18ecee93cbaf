//! Seeded random point clouds inside a window.
//!
//! - `random_points`: uniform integer points in the window's inner area
//!   (`margin` kept free on each side), sorted lexicographically.
//! - Determinism: identical `(cfg, seed)` give identical output.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cfg::{RandomPointsCfg, WindowCfg, MAX_COORD};
use crate::error::HullError;
use crate::geom::{sort_lexicographic, Point};

impl WindowCfg {
    /// Exclusive upper bounds of the drawable offsets `(x, y)`.
    fn drawable(&self) -> Result<(i64, i64), HullError> {
        if self.margin < 0 || self.width < 0 || self.height < 0 {
            return Err(HullError::invalid_window(
                "width, height and margin must be >= 0",
            ));
        }
        if self.width > MAX_COORD || self.height > MAX_COORD || self.margin > MAX_COORD {
            return Err(HullError::invalid_window(format!(
                "extent {}x{} with margin {} exceeds {MAX_COORD}",
                self.width, self.height, self.margin
            )));
        }
        let x_max = self.width - 2 * self.margin;
        let y_max = self.height - 2 * self.margin;
        if x_max <= 0 || y_max <= 0 {
            return Err(HullError::invalid_window(format!(
                "no drawable area in {}x{} with margin {}",
                self.width, self.height, self.margin
            )));
        }
        Ok((x_max, y_max))
    }
}

/// Draw `cfg.count` points uniformly inside the window.
pub fn random_points(cfg: RandomPointsCfg, seed: u64) -> Result<Vec<Point>, HullError> {
    let (x_max, y_max) = cfg.window.drawable()?;
    let mut rng = StdRng::seed_from_u64(seed);
    let m = cfg.window.margin;
    let mut points: Vec<Point> = (0..cfg.count)
        .map(|_| Point::new(rng.gen_range(0..x_max) + m, rng.gen_range(0..y_max) + m))
        .collect();
    sort_lexicographic(&mut points);
    Ok(points)
}
