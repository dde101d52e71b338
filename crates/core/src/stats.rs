//! Canvas occupancy bookkeeping.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Snapshot of how much of the canvas is occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackStats {
    /// Current canvas width.
    pub canvas_w: i32,
    /// Current canvas height.
    pub canvas_h: i32,
    /// Number of rectangles placed since the last reset.
    pub placed: usize,
    /// Total area occupied by placed rectangles.
    pub placed_area: i64,
}

impl PackStats {
    /// Total canvas area.
    pub fn canvas_area(&self) -> i64 {
        self.canvas_w as i64 * self.canvas_h as i64
    }

    /// Occupied fraction of the canvas (0.0 - 1.0). Zero for an empty canvas.
    pub fn utilization(&self) -> f64 {
        let area = self.canvas_area();
        if area == 0 {
            return 0.0;
        }
        self.placed_area as f64 / area as f64
    }

    /// Returns utilization as a percentage string.
    pub fn utilization_percent(&self) -> String {
        format!("{:.1}%", self.utilization() * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utilization() {
        let stats = PackStats {
            canvas_w: 8,
            canvas_h: 8,
            placed: 3,
            placed_area: 16,
        };
        assert_eq!(stats.canvas_area(), 64);
        assert!((stats.utilization() - 0.25).abs() < 1e-12);
        assert_eq!(stats.utilization_percent(), "25.0%");
    }

    #[test]
    fn test_utilization_empty_canvas() {
        let stats = PackStats {
            canvas_w: 0,
            canvas_h: 0,
            placed: 0,
            placed_area: 0,
        };
        assert_eq!(stats.utilization(), 0.0);
    }
}
