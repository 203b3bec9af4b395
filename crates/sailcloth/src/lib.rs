//! Sailcloth: render queues and frame scheduling for 2D canvas viewports.
//!
//! The crate owns ordering, culling, and frame pacing. Drawing, sizing, and
//! animation frames are supplied by the host through [`surface::Surface`],
//! [`viewport::SizingElement`], and [`schedule::FrameScheduler`].

pub mod coords;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod schedule;
pub mod surface;
pub mod time;
pub mod viewport;

#[cfg(test)]
mod testing;

pub use scene::{PositionType, RenderState, Renderable, SharedRenderable, ViewportObject, ZIndex};
pub use viewport::{RenderCtx, ViewInfo, Viewport, ViewportConfig, WorldViewport};
