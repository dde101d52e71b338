//! # Edgepack Core
//!
//! Shared data model for the edgepack rectangle packer.
//!
//! This crate provides the input/output types consumed and produced by the
//! placement engine in the `edgepack` crate:
//!
//! - [`Rect`] — a rectangle request, filled in with its position on success
//! - [`Placement`] — a chosen position including the rotation flag
//! - [`PackStats`] — canvas occupancy bookkeeping
//! - [`Error`] / [`Result`] — input validation failures
//!
//! All coordinates are non-negative integers; a rectangle of size `(w, h)`
//! placed at `(x, y)` occupies the half-open region `[x, x + w) × [y, y + h)`.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod error;
pub mod rect;
pub mod stats;

pub use error::{Error, Result};
pub use rect::{range_overlap, Placement, Rect};
pub use stats::PackStats;
