//! Rectangle request/response types and interval helpers.

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Overlap length of the half-open integer intervals `[a_pos, a_pos + a_len)`
/// and `[b_pos, b_pos + b_len)`.
#[inline]
pub fn range_overlap(a_pos: i32, a_len: i32, b_pos: i32, b_len: i32) -> i32 {
    ((a_pos + a_len).min(b_pos + b_len) - a_pos.max(b_pos)).max(0)
}

/// A rectangle to be packed.
///
/// Fill in `w` and `h` before handing the rectangle to the packer. On a
/// successful placement `x` and `y` receive the origin-closest corner,
/// `packed` becomes true, and `rotated` records whether the packer placed
/// the rectangle with `w` and `h` swapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    /// Requested width.
    pub w: i32,
    /// Requested height.
    pub h: i32,
    /// Assigned x coordinate (valid when `packed`).
    pub x: i32,
    /// Assigned y coordinate (valid when `packed`).
    pub y: i32,
    /// True once the packer has assigned a position.
    pub packed: bool,
    /// True if the rectangle was placed with its sides swapped.
    pub rotated: bool,
}

impl Rect {
    /// Creates an unplaced rectangle request of the given size.
    pub fn new(w: i32, h: i32) -> Self {
        Self {
            w,
            h,
            x: 0,
            y: 0,
            packed: false,
            rotated: false,
        }
    }

    /// Area of the rectangle.
    pub fn area(&self) -> i64 {
        self.w as i64 * self.h as i64
    }

    /// Length of the longer side.
    pub fn longest_side(&self) -> i32 {
        self.w.max(self.h)
    }

    /// Width of the occupied footprint, accounting for rotation.
    pub fn placed_w(&self) -> i32 {
        if self.rotated {
            self.h
        } else {
            self.w
        }
    }

    /// Height of the occupied footprint, accounting for rotation.
    pub fn placed_h(&self) -> i32 {
        if self.rotated {
            self.w
        } else {
            self.h
        }
    }

    /// Checks that the requested dimensions are packable.
    pub fn validate(&self) -> Result<()> {
        if self.w <= 0 || self.h <= 0 {
            return Err(Error::InvalidSize {
                w: self.w,
                h: self.h,
            });
        }
        Ok(())
    }
}

/// Position chosen for a rectangle, including whether it was rotated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    pub x: i32,
    pub y: i32,
    pub rotated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_overlap() {
        assert_eq!(range_overlap(0, 4, 2, 4), 2);
        assert_eq!(range_overlap(0, 4, 4, 4), 0);
        assert_eq!(range_overlap(0, 4, 5, 4), 0);
        assert_eq!(range_overlap(2, 2, 0, 8), 2);
        assert_eq!(range_overlap(3, 3, 3, 3), 3);
    }

    #[test]
    fn test_rect_new() {
        let rect = Rect::new(4, 3);
        assert_eq!(rect.area(), 12);
        assert_eq!(rect.longest_side(), 4);
        assert!(!rect.packed);
        assert!(!rect.rotated);
    }

    #[test]
    fn test_rect_placed_footprint() {
        let mut rect = Rect::new(4, 3);
        assert_eq!((rect.placed_w(), rect.placed_h()), (4, 3));
        rect.rotated = true;
        assert_eq!((rect.placed_w(), rect.placed_h()), (3, 4));
    }

    #[test]
    fn test_rect_validate() {
        assert!(Rect::new(1, 1).validate().is_ok());
        assert_eq!(
            Rect::new(0, 1).validate(),
            Err(Error::InvalidSize { w: 0, h: 1 })
        );
        assert_eq!(
            Rect::new(3, -2).validate(),
            Err(Error::InvalidSize { w: 3, h: -2 })
        );
    }
}
