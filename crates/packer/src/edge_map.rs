//! Exposed-edge bookkeeping for the placement engine.
//!
//! An [`EdgeMap`] holds, for every integer line along one axis, the sorted
//! disjoint runs of exposed edge on that line. The packer owns four of them,
//! one per [`Orientation`]: the faces of occupied space (and of the canvas
//! boundary, viewed from inside as solid) that still border free space.
//!
//! Storage is a single flat segment array plus a per-line prefix-sum table:
//! the segments of line `l` occupy `edges[lines[l]..lines[l + 1]]`. Edits
//! within a line shift the suffix of the array and offset the later table
//! entries, which amortizes well because the total segment count is bounded
//! by the perimeter of the placed rectangles.

use edgepack_core::range_overlap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A maximal run of exposed edge on one line: the half-open interval
/// `[pos, pos + len)` along the line's tangent axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Segment {
    pub pos: i32,
    pub len: i32,
}

impl Segment {
    /// Creates a segment covering `[pos, pos + len)`.
    pub fn new(pos: i32, len: i32) -> Self {
        Self { pos, len }
    }

    /// One past the last covered coordinate.
    #[inline]
    pub fn end(&self) -> i32 {
        self.pos + self.len
    }

    /// Overlap length with the half-open interval `[pos, pos + len)`.
    #[inline]
    pub fn overlap(&self, pos: i32, len: i32) -> i32 {
        range_overlap(self.pos, self.len, pos, len)
    }
}

/// Direction an exposed edge faces, i.e. which side of it is free space.
///
/// A placed rectangle `[x1, x2) × [y1, y2)` owns a right-facing edge at
/// x-line `x2`, a left-facing edge at `x1`, an up-facing edge at y-line
/// `y2` and a down-facing edge at `y1`. The canvas perimeter contributes
/// a right-facing edge at `x = 0`, a left-facing edge at `x = W`, an
/// up-facing edge at `y = 0` and a down-facing edge at `y = H`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Right,
    Left,
    Up,
    Down,
}

/// Sorted disjoint edge segments per integer line.
///
/// Lines run over `0..=extent` inclusive, where `extent` is the canvas size
/// along the map's normal axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeMap {
    edges: Vec<Segment>,
    // prefix offsets; line `l` owns `edges[lines[l]..lines[l + 1]]`
    lines: Vec<usize>,
}

impl EdgeMap {
    /// Creates an empty map with lines `0..=extent`.
    pub fn new(extent: i32) -> Self {
        let mut map = Self {
            edges: Vec::new(),
            lines: Vec::new(),
        };
        map.reset(extent);
        map
    }

    /// Clears all segments and resizes the line range to `0..=extent`.
    pub fn reset(&mut self, extent: i32) {
        self.edges.clear();
        self.lines.clear();
        self.lines.resize(extent as usize + 2, 0);
    }

    /// Grows the line range to `0..=extent`; added lines start empty.
    pub fn enlarge(&mut self, extent: i32) {
        debug_assert!(extent >= self.extent());
        let total = self.edges.len();
        self.lines.resize(extent as usize + 2, total);
    }

    /// Largest valid line index.
    pub fn extent(&self) -> i32 {
        self.lines.len() as i32 - 2
    }

    /// Total number of stored segments.
    pub fn segment_count(&self) -> usize {
        self.edges.len()
    }

    /// The segments on `line`, sorted by position.
    pub fn segments_on(&self, line: i32) -> &[Segment] {
        let (start, end) = self.line_bounds(line);
        &self.edges[start..end]
    }

    /// Total overlap of the segments on `line` with `[pos, pos + len)`.
    pub fn overlap_on(&self, line: i32, pos: i32, len: i32) -> i32 {
        let mut total = 0;
        for seg in self.segments_on(line) {
            if seg.pos >= pos + len {
                break;
            }
            total += seg.overlap(pos, len);
        }
        total
    }

    /// True if any segment on `line` has positive-length overlap with the
    /// open interval `(lo, hi)`.
    pub fn overlaps_interior(&self, line: i32, lo: i32, hi: i32) -> bool {
        self.segments_on(line)
            .iter()
            .any(|seg| seg.pos < hi && seg.end() > lo)
    }

    /// Inserts `seg` on `line`, cancelling against the opposing map.
    ///
    /// The parts of `seg` that `mask` already covers on the same line are
    /// removed from `mask` and not inserted here; only the uncovered residue
    /// lands in `self`, merged with any runs it touches. Two solid regions
    /// butting along a shared wall therefore leave no exposed edge between
    /// them.
    pub fn insert(&mut self, line: i32, seg: Segment, mask: &mut EdgeMap) {
        debug_assert!(seg.len > 0);
        let (mstart, mend) = mask.line_bounds(line);
        let mut residue: Vec<Segment> = Vec::with_capacity(2);
        let mut clipped: Vec<Segment> = Vec::with_capacity(mend - mstart + 1);
        let mut cursor = seg.pos;
        let mut touched = false;
        for m in &mask.edges[mstart..mend] {
            if m.end() <= seg.pos || m.pos >= seg.end() {
                clipped.push(*m);
                continue;
            }
            touched = true;
            let lo = m.pos.max(seg.pos);
            let hi = m.end().min(seg.end());
            if m.pos < lo {
                clipped.push(Segment::new(m.pos, lo - m.pos));
            }
            if hi < m.end() {
                clipped.push(Segment::new(hi, m.end() - hi));
            }
            if cursor < lo {
                residue.push(Segment::new(cursor, lo - cursor));
            }
            cursor = hi;
        }
        if cursor < seg.end() {
            residue.push(Segment::new(cursor, seg.end() - cursor));
        }
        if touched {
            let delta = clipped.len() as isize - (mend - mstart) as isize;
            mask.edges.splice(mstart..mend, clipped);
            if delta != 0 {
                mask.shift_lines_after(line, delta);
            }
        }
        for r in residue {
            self.insert_merged(line, r);
        }
    }

    // Inserts a segment known to be disjoint from everything on the line,
    // merging with neighbours it touches.
    fn insert_merged(&mut self, line: i32, seg: Segment) {
        let (start, end) = self.line_bounds(line);
        let at = start + self.edges[start..end].partition_point(|m| m.pos < seg.pos);
        let touches_prev = at > start && self.edges[at - 1].end() == seg.pos;
        let touches_next = at < end && self.edges[at].pos == seg.end();
        match (touches_prev, touches_next) {
            (true, true) => {
                self.edges[at - 1].len += seg.len + self.edges[at].len;
                self.edges.remove(at);
                self.shift_lines_after(line, -1);
            }
            (true, false) => self.edges[at - 1].len += seg.len,
            (false, true) => {
                let next = &mut self.edges[at];
                next.pos = seg.pos;
                next.len += seg.len;
            }
            (false, false) => {
                self.edges.insert(at, seg);
                self.shift_lines_after(line, 1);
            }
        }
    }

    fn line_bounds(&self, line: i32) -> (usize, usize) {
        let line = line as usize;
        (self.lines[line], self.lines[line + 1])
    }

    fn shift_lines_after(&mut self, line: i32, delta: isize) {
        for offset in &mut self.lines[line as usize + 1..] {
            *offset = (*offset as isize + delta) as usize;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segs(map: &EdgeMap, line: i32) -> Vec<(i32, i32)> {
        map.segments_on(line)
            .iter()
            .map(|s| (s.pos, s.len))
            .collect()
    }

    #[test]
    fn test_new_is_empty() {
        let map = EdgeMap::new(8);
        assert_eq!(map.extent(), 8);
        assert_eq!(map.segment_count(), 0);
        for line in 0..=8 {
            assert!(map.segments_on(line).is_empty());
        }
    }

    #[test]
    fn test_insert_without_mask_coverage() {
        let mut map = EdgeMap::new(8);
        let mut mask = EdgeMap::new(8);
        map.insert(3, Segment::new(2, 4), &mut mask);
        assert_eq!(segs(&map, 3), vec![(2, 4)]);
        assert!(map.segments_on(2).is_empty());
        assert_eq!(mask.segment_count(), 0);
    }

    #[test]
    fn test_insert_merges_touching_runs() {
        let mut map = EdgeMap::new(8);
        let mut mask = EdgeMap::new(8);
        map.insert(1, Segment::new(0, 2), &mut mask);
        map.insert(1, Segment::new(5, 2), &mut mask);
        map.insert(1, Segment::new(2, 3), &mut mask);
        assert_eq!(segs(&map, 1), vec![(0, 7)]);
        assert_eq!(map.segment_count(), 1);
    }

    #[test]
    fn test_insert_merges_with_previous_only() {
        let mut map = EdgeMap::new(8);
        let mut mask = EdgeMap::new(8);
        map.insert(0, Segment::new(0, 3), &mut mask);
        map.insert(0, Segment::new(3, 2), &mut mask);
        assert_eq!(segs(&map, 0), vec![(0, 5)]);
    }

    #[test]
    fn test_mask_fully_absorbs_insert() {
        let mut map = EdgeMap::new(8);
        let mut mask = EdgeMap::new(8);
        let mut scratch = EdgeMap::new(8);
        mask.insert(4, Segment::new(0, 8), &mut scratch);

        map.insert(4, Segment::new(2, 3), &mut mask);
        // the overlap annihilates on both sides
        assert!(map.segments_on(4).is_empty());
        assert_eq!(segs(&mask, 4), vec![(0, 2), (5, 3)]);
    }

    #[test]
    fn test_mask_partial_overlap_leaves_residue() {
        let mut map = EdgeMap::new(8);
        let mut mask = EdgeMap::new(8);
        let mut scratch = EdgeMap::new(8);
        mask.insert(2, Segment::new(3, 2), &mut scratch);

        map.insert(2, Segment::new(0, 8), &mut mask);
        assert_eq!(segs(&map, 2), vec![(0, 3), (5, 3)]);
        assert!(mask.segments_on(2).is_empty());
    }

    #[test]
    fn test_mask_multiple_segments() {
        let mut map = EdgeMap::new(8);
        let mut mask = EdgeMap::new(8);
        let mut scratch = EdgeMap::new(8);
        mask.insert(5, Segment::new(1, 2), &mut scratch);
        mask.insert(5, Segment::new(5, 2), &mut scratch);

        map.insert(5, Segment::new(0, 8), &mut mask);
        assert_eq!(segs(&map, 5), vec![(0, 1), (3, 2), (7, 1)]);
        assert!(mask.segments_on(5).is_empty());
    }

    #[test]
    fn test_line_offsets_stay_consistent() {
        let mut map = EdgeMap::new(8);
        let mut mask = EdgeMap::new(8);
        map.insert(6, Segment::new(0, 4), &mut mask);
        map.insert(2, Segment::new(1, 3), &mut mask);
        map.insert(4, Segment::new(5, 2), &mut mask);
        assert_eq!(segs(&map, 2), vec![(1, 3)]);
        assert_eq!(segs(&map, 4), vec![(5, 2)]);
        assert_eq!(segs(&map, 6), vec![(0, 4)]);
        assert_eq!(map.segment_count(), 3);
    }

    #[test]
    fn test_overlap_on() {
        let mut map = EdgeMap::new(8);
        let mut mask = EdgeMap::new(8);
        map.insert(0, Segment::new(1, 2), &mut mask);
        map.insert(0, Segment::new(5, 2), &mut mask);
        assert_eq!(map.overlap_on(0, 0, 8), 4);
        assert_eq!(map.overlap_on(0, 2, 4), 2);
        assert_eq!(map.overlap_on(0, 3, 2), 0);
        assert_eq!(map.overlap_on(1, 0, 8), 0);
    }

    #[test]
    fn test_overlaps_interior() {
        let mut map = EdgeMap::new(8);
        let mut mask = EdgeMap::new(8);
        map.insert(3, Segment::new(2, 2), &mut mask);
        assert!(map.overlaps_interior(3, 0, 8));
        assert!(map.overlaps_interior(3, 3, 8));
        // only touches the interval endpoint
        assert!(!map.overlaps_interior(3, 4, 8));
        assert!(!map.overlaps_interior(3, 0, 2));
    }

    #[test]
    fn test_enlarge_extends_empty_lines() {
        let mut map = EdgeMap::new(4);
        let mut mask = EdgeMap::new(4);
        map.insert(4, Segment::new(0, 4), &mut mask);
        map.enlarge(9);
        assert_eq!(map.extent(), 9);
        assert_eq!(segs(&map, 4), vec![(0, 4)]);
        for line in 5..=9 {
            assert!(map.segments_on(line).is_empty());
        }
    }

    #[test]
    fn test_reset_clears() {
        let mut map = EdgeMap::new(4);
        let mut mask = EdgeMap::new(4);
        map.insert(1, Segment::new(0, 4), &mut mask);
        map.reset(6);
        assert_eq!(map.extent(), 6);
        assert_eq!(map.segment_count(), 0);
    }
}
