//! # Edgepack
//!
//! A 2D rectangle packer built around contact-perimeter scoring: each new
//! rectangle is placed where its sides touch as much already-occupied space
//! (or canvas boundary) as possible. This tends to produce tighter layouts
//! than skyline packers, at the cost of more search work per rectangle.
//!
//! The packer supports one-by-one insertion, batch insertion with internal
//! reordering, optional 90° rotation, and growing the canvas while keeping
//! everything already placed.
//!
//! ## Quick Start
//!
//! ```rust
//! use edgepack::Packer;
//!
//! let mut packer = Packer::new(64, 64, false);
//!
//! for &(w, h) in &[(12, 20), (30, 14), (9, 9)] {
//!     if let Some((x, y)) = packer.pack(w, h) {
//!         println!("{}x{} placed at ({}, {})", w, h, x, y);
//!     }
//! }
//! ```
//!
//! ## Batch packing with rotation
//!
//! ```rust
//! use edgepack::{Packer, Rect};
//!
//! let mut rects: Vec<Rect> = [(8, 3), (5, 5), (3, 11)]
//!     .iter()
//!     .map(|&(w, h)| Rect::new(w, h))
//!     .collect();
//!
//! let mut packer = Packer::new(16, 16, false);
//! let placed = packer.pack_batch(&mut rects, true);
//! assert_eq!(placed, 3);
//! ```
//!
//! ## Growing the canvas
//!
//! If a rectangle does not fit, enlarge the canvas and retry; placements
//! survive the resize. Construct the packer with `open = true` when you plan
//! to enlarge, so placements avoid hugging walls that will later move.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod edge_map;
mod packer;
mod scan;

pub use edge_map::{EdgeMap, Orientation, Segment};
pub use edgepack_core::{range_overlap, Error, PackStats, Placement, Rect, Result};
pub use packer::Packer;
