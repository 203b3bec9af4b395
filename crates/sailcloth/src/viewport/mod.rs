//! Viewports: a canvas, its render queue, and its frame loop.
//!
//! [`Viewport`] draws in screen space. [`WorldViewport`] adds a movable
//! origin, visibility culling, and a static layer drawn on top.

mod base;
mod config;
mod ctx;
mod id;
mod pixel_ratio;
mod sizing;
mod world;

pub use base::{RedrawHook, Viewport};
pub use config::ViewportConfig;
pub use ctx::{RenderCtx, ViewInfo};
pub use id::ViewportId;
pub use pixel_ratio::PixelRatio;
pub use sizing::{SharedSize, SizingElement};
pub use world::WorldViewport;
