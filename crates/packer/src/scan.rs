//! Candidate enumeration and contact-perimeter scoring.
//!
//! Two sweeps look for the best position: a vertical one that visits each
//! x column and walks candidate y positions upward, and a horizontal one
//! that visits each y row and walks x rightward. Both are needed because a
//! best position may be corner-pinned against a horizontal edge in one
//! sweep but not the other.
//!
//! Candidates are corner-pinned: within a column the walk visits the y
//! positions where the rectangle's low corner aligns with an exposed edge
//! (a segment start on the lines its vertical sides ride on, or a line
//! carrying bottom contact), and the row walk does the same for x. A
//! candidate that cannot beat the current best skips its blocker check
//! entirely; a blocked candidate yields the minimum advance that clears
//! every blocking segment, and the walk re-evaluates wherever it lands.

use crate::packer::Packer;

/// Best placement found so far, with its contact score.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Candidate {
    pub x: i32,
    pub y: i32,
    pub score: i32,
}

/// Which coordinate a sweep advances along.
#[derive(Clone, Copy)]
enum Axis {
    X,
    Y,
}

impl Packer {
    /// Highest-contact valid position for a `w` x `h` rectangle, or `None`
    /// when no position scores.
    pub(crate) fn find_best(&self, w: i32, h: i32) -> Option<Candidate> {
        if w <= 0 || h <= 0 || w > self.canvas_w || h > self.canvas_h {
            return None;
        }
        let mut best = None;
        self.scan_columns(w, h, &mut best);
        self.scan_rows(w, h, &mut best);
        best
    }

    /// Total side contact of the candidate with exposed edges. Canvas wall
    /// lines do not count while the packer is open.
    pub(crate) fn contact_score(&self, x: i32, y: i32, w: i32, h: i32) -> i32 {
        let mut score = 0;
        if !(self.open && x == 0) {
            score += self.right.overlap_on(x, y, h);
        }
        if !(self.open && x + w == self.canvas_w) {
            score += self.left.overlap_on(x + w, y, h);
        }
        if !(self.open && y == 0) {
            score += self.up.overlap_on(y, x, w);
        }
        if !(self.open && y + h == self.canvas_h) {
            score += self.down.overlap_on(y + h, x, w);
        }
        score
    }

    fn scan_columns(&self, w: i32, h: i32, best: &mut Option<Candidate>) {
        let mut events = Vec::new();
        for x in 0..=self.canvas_w - w {
            self.column_events(x, w, h, &mut events);
            self.walk_column(x, w, h, &events, best);
        }
    }

    fn scan_rows(&self, w: i32, h: i32, best: &mut Option<Candidate>) {
        let mut events = Vec::new();
        for y in 0..=self.canvas_h - h {
            self.row_events(y, w, h, &mut events);
            self.walk_row(y, w, h, &events, best);
        }
    }

    /// Candidate y positions for column `x`: the rectangle's bottom corner
    /// pinned to a segment start on either line its vertical sides ride on,
    /// or resting on a line that gives it bottom contact.
    fn column_events(&self, x: i32, w: i32, h: i32, out: &mut Vec<i32>) {
        out.clear();
        let y_max = self.canvas_h - h;
        let mut push = |v: i32| {
            if (0..=y_max).contains(&v) {
                out.push(v);
            }
        };
        for seg in self.right.segments_on(x) {
            push(seg.pos);
        }
        for seg in self.left.segments_on(x + w) {
            push(seg.pos);
        }
        for q in 0..=self.canvas_h {
            if self.up.overlap_on(q, x, w) > 0 {
                push(q);
            }
        }
        out.sort_unstable();
        out.dedup();
    }

    /// Candidate x positions for row `y`, mirroring [`Self::column_events`]:
    /// the left corner pinned to a segment start on the lines the horizontal
    /// sides ride on, or butted against a line giving left-side contact.
    fn row_events(&self, y: i32, w: i32, h: i32, out: &mut Vec<i32>) {
        out.clear();
        let x_max = self.canvas_w - w;
        let mut push = |v: i32| {
            if (0..=x_max).contains(&v) {
                out.push(v);
            }
        };
        for seg in self.up.segments_on(y) {
            push(seg.pos);
        }
        for seg in self.down.segments_on(y + h) {
            push(seg.pos);
        }
        for l in 0..=self.canvas_w {
            if self.right.overlap_on(l, y, h) > 0 {
                push(l);
            }
        }
        out.sort_unstable();
        out.dedup();
    }

    fn walk_column(&self, x: i32, w: i32, h: i32, events: &[i32], best: &mut Option<Candidate>) {
        let y_max = self.canvas_h - h;
        let mut idx = 0;
        let mut y = match events.first() {
            Some(&first) => first,
            None => return,
        };
        loop {
            if y > y_max {
                return;
            }
            let score = self.contact_score(x, y, w, h);
            if score > best.map_or(0, |b: Candidate| b.score) {
                match self.blocked_skip(x, y, w, h, Axis::Y) {
                    Some(skip) => {
                        y += skip;
                        continue;
                    }
                    None => *best = Some(Candidate { x, y, score }),
                }
            }
            while idx < events.len() && events[idx] <= y {
                idx += 1;
            }
            match events.get(idx) {
                Some(&next) => y = next,
                None => return,
            }
        }
    }

    fn walk_row(&self, y: i32, w: i32, h: i32, events: &[i32], best: &mut Option<Candidate>) {
        let x_max = self.canvas_w - w;
        let mut idx = 0;
        let mut x = match events.first() {
            Some(&first) => first,
            None => return,
        };
        loop {
            if x > x_max {
                return;
            }
            let score = self.contact_score(x, y, w, h);
            if score > best.map_or(0, |b: Candidate| b.score) {
                match self.blocked_skip(x, y, w, h, Axis::X) {
                    Some(skip) => {
                        x += skip;
                        continue;
                    }
                    None => *best = Some(Candidate { x, y, score }),
                }
            }
            while idx < events.len() && events[idx] <= x {
                idx += 1;
            }
            match events.get(idx) {
                Some(&next) => x = next,
                None => return,
            }
        }
    }

    /// Blocker test: a segment with positive-length overlap strictly inside
    /// the candidate invalidates the position. Returns the minimum scan
    /// advance along `axis` that clears every blocker, or `None` when the
    /// position is free.
    fn blocked_skip(&self, x: i32, y: i32, w: i32, h: i32, axis: Axis) -> Option<i32> {
        let mut skip = 0;
        for line in x + 1..x + w {
            for map in [&self.right, &self.left] {
                for seg in map.segments_on(line) {
                    if seg.pos < y + h && seg.end() > y {
                        skip = skip.max(match axis {
                            Axis::Y => seg.end() - y,
                            Axis::X => line - x,
                        });
                    }
                }
            }
        }
        for line in y + 1..y + h {
            for map in [&self.up, &self.down] {
                for seg in map.segments_on(line) {
                    if seg.pos < x + w && seg.end() > x {
                        skip = skip.max(match axis {
                            Axis::Y => line - y,
                            Axis::X => seg.end() - x,
                        });
                    }
                }
            }
        }
        (skip > 0).then_some(skip)
    }
}
