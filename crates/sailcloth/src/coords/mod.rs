//! Geometry value types.
//!
//! Canonical space:
//! - CSS pixels (the viewport scales to device pixels itself)
//! - Origin top-left
//! - +X right, +Y down

mod rect;
mod size;
mod vector;

pub use rect::{Bounds, Rect};
pub use size::Size;
pub use vector::{Point, Vector};
