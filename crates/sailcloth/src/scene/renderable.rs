use std::cell::RefCell;
use std::rc::Rc;

use crate::coords::{Point, Rect};
use crate::viewport::{RenderCtx, ViewInfo, ViewportId};

use super::ZIndex;

/// Coordinate space a renderable draws in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum PositionType {
    /// Scrolls with the world; translated by the viewport origin and culled.
    #[default]
    World,
    /// Fixed to the screen; drawn after all world objects.
    Static,
}

/// Queue bookkeeping carried by every renderable.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct RenderState {
    /// Set to drop the object from its queues on the next redraw.
    /// Adding the object again clears it.
    pub rendering_finished: bool,
    pub position_type: PositionType,
    pub z_index: ZIndex,
    /// The first viewport the object was added to. Set once, never reassigned.
    pub viewport: Option<ViewportId>,
}

impl RenderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_z_index(mut self, z: i32) -> Self {
        self.z_index = ZIndex(z);
        self
    }

    pub fn with_position_type(mut self, position_type: PositionType) -> Self {
        self.position_type = position_type;
        self
    }
}

/// Shared handle to a queued object.
///
/// The application keeps one clone to mutate the object between frames; the
/// viewport keeps another in its render queue.
pub type SharedRenderable = Rc<RefCell<dyn Renderable>>;

/// Something a viewport can draw.
///
/// Only `render` and access to the [`RenderState`] are required. The other
/// hooks are optional capabilities with inert defaults:
///
/// - `on_resize`: called when the object is added and whenever the viewport
///   is resized
/// - `position`: enables visibility culling in a world viewport
/// - `bounds`: refines culling from a point test to a corner test
pub trait Renderable {
    fn state(&self) -> &RenderState;
    fn state_mut(&mut self) -> &mut RenderState;

    /// Draws the object. `elapsed_ms` is the time since the previous frame.
    fn render(&mut self, ctx: &mut RenderCtx<'_>, elapsed_ms: f64);

    /// Objects returning `false` are refused by `Viewport::add`.
    fn can_render(&self) -> bool {
        true
    }

    fn on_resize(&mut self, width: f64, height: f64, view: &ViewInfo) {
        let _ = (width, height, view);
    }

    fn position(&self) -> Option<Point> {
        None
    }

    fn bounds(&self) -> Option<Rect> {
        None
    }

    #[inline]
    fn z_index(&self) -> ZIndex {
        self.state().z_index
    }

    #[inline]
    fn position_type(&self) -> PositionType {
        self.state().position_type
    }

    #[inline]
    fn rendering_finished(&self) -> bool {
        self.state().rendering_finished
    }

    /// Marks the object for removal on the next redraw.
    #[inline]
    fn finish_rendering(&mut self) {
        self.state_mut().rendering_finished = true;
    }

    #[inline]
    fn viewport(&self) -> Option<ViewportId> {
        self.state().viewport
    }
}
