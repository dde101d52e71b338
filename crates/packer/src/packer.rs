//! The stateful packer over the edge-map substrate.
//!
//! Free space is never stored directly; the packer keeps four [`EdgeMap`]s
//! holding the exposed faces of occupied space and of the canvas perimeter.
//! Placing a rectangle inserts its four sides, and the mask-subtract logic
//! in [`EdgeMap::insert`] cancels any opposing edges they butt against, so
//! shared walls disappear from the maps the moment they stop bordering
//! free space.

use crate::edge_map::{EdgeMap, Orientation, Segment};
use edgepack_core::{PackStats, Placement, Rect};
use std::cmp::Reverse;

/// Contact-perimeter rectangle packer.
///
/// Created with a canvas size and an `open` flag. While open, contact with
/// the canvas walls does not score, which keeps placements away from
/// boundaries that a later [`Packer::enlarge`] would move outward. See the
/// crate docs for usage examples.
#[derive(Debug, Clone)]
pub struct Packer {
    pub(crate) canvas_w: i32,
    pub(crate) canvas_h: i32,
    pub(crate) open: bool,
    /// Right-facing edges, indexed by x line.
    pub(crate) right: EdgeMap,
    /// Left-facing edges, indexed by x line.
    pub(crate) left: EdgeMap,
    /// Up-facing edges, indexed by y line.
    pub(crate) up: EdgeMap,
    /// Down-facing edges, indexed by y line.
    pub(crate) down: EdgeMap,
    placed: usize,
    placed_area: i64,
}

impl Packer {
    /// Creates a packer for a `w` x `h` canvas. Negative dimensions clamp
    /// to zero. Pass `open = true` if you plan to enlarge the canvas later.
    pub fn new(w: i32, h: i32, open: bool) -> Self {
        let w = w.max(0);
        let h = h.max(0);
        let mut packer = Self {
            canvas_w: w,
            canvas_h: h,
            open,
            right: EdgeMap::new(w),
            left: EdgeMap::new(w),
            up: EdgeMap::new(h),
            down: EdgeMap::new(h),
            placed: 0,
            placed_area: 0,
        };
        packer.reset();
        packer
    }

    /// Current canvas width.
    pub fn width(&self) -> i32 {
        self.canvas_w
    }

    /// Current canvas height.
    pub fn height(&self) -> i32 {
        self.canvas_h
    }

    /// Whether canvas-wall contact is currently excluded from scoring.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Toggles the boundary-contact policy. Affects future placements only.
    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    /// Occupancy snapshot for the current canvas.
    pub fn stats(&self) -> PackStats {
        PackStats {
            canvas_w: self.canvas_w,
            canvas_h: self.canvas_h,
            placed: self.placed,
            placed_area: self.placed_area,
        }
    }

    /// Read access to the exposed edges facing the given direction, for
    /// debugging and external tooling.
    pub fn edge_map(&self, orientation: Orientation) -> &EdgeMap {
        match orientation {
            Orientation::Right => &self.right,
            Orientation::Left => &self.left,
            Orientation::Up => &self.up,
            Orientation::Down => &self.down,
        }
    }

    /// Clears all placements and restores the canvas perimeter edges.
    pub fn reset(&mut self) {
        self.right.reset(self.canvas_w);
        self.left.reset(self.canvas_w);
        self.up.reset(self.canvas_h);
        self.down.reset(self.canvas_h);
        self.placed = 0;
        self.placed_area = 0;
        if self.canvas_w > 0 && self.canvas_h > 0 {
            // the outer perimeter reads as solid from inside
            self.right.insert(0, Segment::new(0, self.canvas_h), &mut self.left);
            self.left
                .insert(self.canvas_w, Segment::new(0, self.canvas_h), &mut self.right);
            self.up.insert(0, Segment::new(0, self.canvas_w), &mut self.down);
            self.down
                .insert(self.canvas_h, Segment::new(0, self.canvas_w), &mut self.up);
        }
    }

    /// Clears all placements and resizes the canvas.
    pub fn reset_to(&mut self, w: i32, h: i32) {
        self.canvas_w = w.max(0);
        self.canvas_h = h.max(0);
        self.reset();
    }

    /// Grows the canvas without disturbing existing placements. Dimensions
    /// smaller than the current canvas clamp to it; shrinking is not
    /// supported.
    pub fn enlarge(&mut self, w: i32, h: i32) {
        let new_w = w.max(self.canvas_w);
        let new_h = h.max(self.canvas_h);
        if new_w == self.canvas_w && new_h == self.canvas_h {
            return;
        }
        let (old_w, old_h) = (self.canvas_w, self.canvas_h);
        log::debug!("enlarging canvas {}x{} -> {}x{}", old_w, old_h, new_w, new_h);

        self.right.enlarge(new_w);
        self.left.enlarge(new_w);
        self.up.enlarge(new_h);
        self.down.enlarge(new_h);

        // Dissolve the old top and right boundaries. Inserting the opposing
        // orientation over the full old extent cancels the surviving
        // boundary runs and, where rectangles sat flush against the old
        // wall, exposes their faces into the new free area.
        if new_h > old_h && old_w > 0 {
            self.up.insert(old_h, Segment::new(0, old_w), &mut self.down);
        }
        if new_w > old_w && old_h > 0 {
            self.right.insert(old_w, Segment::new(0, old_h), &mut self.left);
        }

        // Walls of the grown canvas.
        if new_w > 0 && new_h > 0 {
            if new_h > old_h {
                self.right
                    .insert(0, Segment::new(old_h, new_h - old_h), &mut self.left);
                self.down.insert(new_h, Segment::new(0, new_w), &mut self.up);
            }
            if new_w > old_w {
                self.up
                    .insert(0, Segment::new(old_w, new_w - old_w), &mut self.down);
                self.left.insert(new_w, Segment::new(0, new_h), &mut self.right);
            }
            if new_h > old_h && new_w == old_w {
                self.left
                    .insert(new_w, Segment::new(old_h, new_h - old_h), &mut self.right);
            }
            if new_w > old_w && new_h == old_h {
                self.down
                    .insert(new_h, Segment::new(old_w, new_w - old_w), &mut self.up);
            }
        }

        self.canvas_w = new_w;
        self.canvas_h = new_h;
    }

    /// Packs one rectangle. Returns the origin-closest corner of the chosen
    /// position, or `None` if the rectangle does not fit right now; the
    /// caller may [`Packer::enlarge`] and retry.
    pub fn pack(&mut self, w: i32, h: i32) -> Option<(i32, i32)> {
        match self.find_best(w, h) {
            Some(best) => {
                self.place(best.x, best.y, w, h);
                Some((best.x, best.y))
            }
            None => {
                log::debug!("no fit for {}x{} in {}x{}", w, h, self.canvas_w, self.canvas_h);
                None
            }
        }
    }

    /// Packs one rectangle, allowing a 90° rotation. Both orientations are
    /// scored and the better one wins; ties prefer the supplied orientation.
    pub fn pack_rotate(&mut self, w: i32, h: i32) -> Option<Placement> {
        if w == h {
            return self.pack(w, h).map(|(x, y)| Placement {
                x,
                y,
                rotated: false,
            });
        }
        let straight = self.find_best(w, h);
        let turned = self.find_best(h, w);
        match (straight, turned) {
            (Some(a), Some(b)) if b.score > a.score => {
                self.place(b.x, b.y, h, w);
                Some(Placement {
                    x: b.x,
                    y: b.y,
                    rotated: true,
                })
            }
            (Some(a), _) => {
                self.place(a.x, a.y, w, h);
                Some(Placement {
                    x: a.x,
                    y: a.y,
                    rotated: false,
                })
            }
            (None, Some(b)) => {
                self.place(b.x, b.y, h, w);
                Some(Placement {
                    x: b.x,
                    y: b.y,
                    rotated: true,
                })
            }
            (None, None) => None,
        }
    }

    /// Packs a batch of rectangles, largest longest-side first, mutating
    /// each rectangle in place. Rectangles that were already packed are
    /// kept as-is; ones that fail stay unpacked and are not retried.
    /// Returns how many rectangles end up packed, including those packed
    /// on entry.
    pub fn pack_batch(&mut self, rects: &mut [Rect], allow_rotation: bool) -> usize {
        let mut order: Vec<usize> = (0..rects.len()).collect();
        order.sort_by_key(|&i| Reverse((rects[i].longest_side(), rects[i].area())));

        let mut packed = rects.iter().filter(|r| r.packed).count();
        for i in order {
            let rect = &mut rects[i];
            if rect.packed {
                continue;
            }
            if let Err(err) = rect.validate() {
                log::warn!("skipping unpackable rectangle: {err}");
                continue;
            }
            if allow_rotation {
                if let Some(found) = self.pack_rotate(rect.w, rect.h) {
                    rect.x = found.x;
                    rect.y = found.y;
                    rect.rotated = found.rotated;
                    rect.packed = true;
                    packed += 1;
                }
            } else if let Some((x, y)) = self.pack(rect.w, rect.h) {
                rect.x = x;
                rect.y = y;
                rect.rotated = false;
                rect.packed = true;
                packed += 1;
            }
        }
        log::debug!("batch packed {packed} of {} rectangles", rects.len());
        packed
    }

    // Inserts the four sides of a placed rectangle. Each insert cancels
    // against the opposing map, removing walls shared with occupied space.
    fn place(&mut self, x: i32, y: i32, w: i32, h: i32) {
        self.right.insert(x + w, Segment::new(y, h), &mut self.left);
        self.left.insert(x, Segment::new(y, h), &mut self.right);
        self.up.insert(y + h, Segment::new(x, w), &mut self.down);
        self.down.insert(y, Segment::new(x, w), &mut self.up);
        self.placed += 1;
        self.placed_area += w as i64 * h as i64;
    }
}
