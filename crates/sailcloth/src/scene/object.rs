use crate::coords::Point;
use crate::viewport::RenderCtx;

use super::{RenderState, Renderable};

/// A positioned renderable whose frame step is `update(elapsed_ms)`.
///
/// Domain objects embed a `ViewportObject` for their position and queue
/// state, forward `state`/`state_mut`/`position` to it, and in their own
/// `render` advance themselves by elapsed time before drawing:
///
/// ```ignore
/// fn render(&mut self, ctx: &mut RenderCtx<'_>, elapsed_ms: f64) {
///     self.update(elapsed_ms);
///     ctx.surface.fill_rect(self.object.x, self.object.y, 4.0, 4.0);
/// }
/// ```
///
/// `x`/`y` are world coordinates in a world viewport when the position type
/// is `World`, screen coordinates otherwise.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewportObject {
    pub x: f64,
    pub y: f64,
    state: RenderState,
}

impl ViewportObject {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            state: RenderState::default(),
        }
    }

    pub fn with_state(mut self, state: RenderState) -> Self {
        self.state = state;
        self
    }

    #[inline]
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Frame step. A bare object does not move.
    pub fn update(&mut self, elapsed_ms: f64) {
        let _ = elapsed_ms;
    }
}

impl Renderable for ViewportObject {
    fn state(&self) -> &RenderState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut RenderState {
        &mut self.state
    }

    fn render(&mut self, _ctx: &mut RenderCtx<'_>, elapsed_ms: f64) {
        self.update(elapsed_ms);
    }

    fn position(&self) -> Option<Point> {
        Some(self.point())
    }
}
