use anyhow::Result;

use crate::coords::{Bounds, Point, Rect, Size};
use crate::scene::{PositionType, Renderable, SharedRenderable};
use crate::schedule::{FrameScheduler, Redraw};
use crate::surface::Surface;

use super::base::{render_pass, Culling, RedrawHook};
use super::ctx::half_size;
use super::{ViewInfo, Viewport, ViewportConfig, ViewportId};

/// Viewport onto a scrollable world.
///
/// World-positioned objects are drawn translated by `-origin` and skipped when
/// they fall outside the visible region. Static objects are drawn afterwards
/// in screen space, so they always sit on top of the world.
///
/// The render queue is split into a world and a static partition; the split
/// is rebuilt only on frames where queue membership changed.
pub struct WorldViewport<S: Surface> {
    base: Viewport<S>,
    world_queue: Vec<SharedRenderable>,
    static_queue: Vec<SharedRenderable>,
    on_redraw: Option<RedrawHook<WorldViewport<S>>>,
}

impl<S: Surface> WorldViewport<S> {
    /// Creates a world viewport; `config.origin` sets the initial origin.
    pub fn new(
        surface: S,
        scheduler: impl FrameScheduler + 'static,
        mut config: ViewportConfig,
    ) -> Result<Self> {
        let origin = config.origin.take();
        let mut vp = Self {
            base: Viewport::new(surface, scheduler, config)?,
            world_queue: Vec::new(),
            static_queue: Vec::new(),
            on_redraw: None,
        };

        if let Some(o) = origin {
            vp.set_origin(o.x, o.y);
        }
        Ok(vp)
    }

    /// Registers the redraw hook, replacing any previous one.
    pub fn on_redraw(&mut self, hook: impl FnMut(&mut WorldViewport<S>) + 'static) -> &mut Self {
        self.on_redraw = Some(Box::new(hook));
        self
    }

    /// The underlying screen-space viewport.
    #[inline]
    pub fn viewport(&self) -> &Viewport<S> {
        &self.base
    }

    // ── origin ────────────────────────────────────────────────────────────

    #[inline]
    pub fn origin(&self) -> Point {
        self.base.origin
    }

    /// Moves the world coordinate shown at the canvas's top-left corner.
    /// Non-finite coordinates are ignored.
    pub fn set_origin(&mut self, x: f64, y: f64) -> &mut Self {
        let origin = Point::new(x, y);
        if !origin.is_finite() {
            log::warn!("viewport {}: ignoring non-finite origin ({x}, {y})", self.id().get());
            return self;
        }
        self.base.origin = origin;
        self
    }

    /// Moves the origin so that `(x, y)` is shown at the middle of the canvas.
    pub fn set_center(&mut self, x: f64, y: f64) -> &mut Self {
        let half = half_size(self.base.width(), self.base.height());
        self.set_origin(x - half.x, y - half.y)
    }

    /// World coordinate shown at the middle of the canvas.
    #[inline]
    pub fn center(&self) -> Point {
        self.base.center()
    }

    /// Visible region in world coordinates.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.base.rect()
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.base.bounds()
    }

    #[inline]
    pub fn point_visible(&self, p: Point) -> bool {
        self.view_info().point_visible(p)
    }

    /// See [`ViewInfo::object_visible`].
    #[inline]
    pub fn object_visible(&self, object: &dyn Renderable) -> bool {
        self.view_info().object_visible(object)
    }

    #[inline]
    pub fn canvas_to_viewport(&self, x: f64, y: f64) -> Point {
        self.base.canvas_to_viewport(x, y)
    }

    #[inline]
    pub fn window_to_viewport(&self, x: f64, y: f64) -> Point {
        self.base.window_to_viewport(x, y)
    }

    // ── delegated ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> ViewportId {
        self.base.id()
    }

    #[inline]
    pub fn surface(&self) -> &S {
        self.base.surface()
    }

    #[inline]
    pub fn surface_mut(&mut self) -> &mut S {
        self.base.surface_mut()
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.base.width()
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.base.height()
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.base.size()
    }

    #[inline]
    pub fn scale(&self) -> f64 {
        self.base.scale()
    }

    #[inline]
    pub fn tick(&self) -> u64 {
        self.base.tick()
    }

    #[inline]
    pub fn object_count(&self) -> usize {
        self.base.object_count()
    }

    #[inline]
    pub fn is_waiting_for_frame(&self) -> bool {
        self.base.is_waiting_for_frame()
    }

    #[inline]
    pub fn is_auto_redraw(&self) -> bool {
        self.base.is_auto_redraw()
    }

    #[inline]
    pub fn average_frame_duration(&self) -> Option<f64> {
        self.base.average_frame_duration()
    }

    #[inline]
    pub fn view_info(&self) -> ViewInfo {
        self.base.view_info()
    }

    pub fn set_scale(&mut self, scale: f64) {
        self.base.set_scale(scale);
    }

    pub fn update_dimensions(&mut self) {
        self.base.update_dimensions();
    }

    pub fn set_canvas_size(&mut self, width: f64, height: f64) -> Result<()> {
        self.base.set_canvas_size(width, height)
    }

    pub fn autosize(&mut self) -> Result<()> {
        self.base.autosize()
    }

    pub fn add(&mut self, object: SharedRenderable) -> &mut Self {
        self.base.add(object);
        self
    }

    pub fn start_rendering(&mut self, object: Option<SharedRenderable>) -> &mut Self {
        self.base.start_rendering(object);
        self
    }

    pub fn start(&mut self) -> &mut Self {
        self.base.start();
        self
    }

    pub fn stop(&mut self) -> &mut Self {
        self.base.stop();
        self
    }

    pub fn refresh(&mut self, auto_redraw: bool) -> &mut Self {
        self.base.refresh(auto_redraw);
        self
    }

    pub fn clear(&mut self) {
        self.base.clear();
    }

    // ── frame ─────────────────────────────────────────────────────────────

    /// Draws one frame: world objects under the origin translation with
    /// culling, then static objects in screen space.
    pub fn redraw(&mut self) {
        self.base.begin_frame();
        self.run_redraw_hook();
        let frame = self.base.settle_queue();
        self.render_objects(frame.elapsed_ms);
        self.base.finish_frame();
    }

    fn run_redraw_hook(&mut self) {
        if let Some(mut hook) = self.on_redraw.take() {
            hook(self);
            if self.on_redraw.is_none() {
                self.on_redraw = Some(hook);
            }
        }
    }

    /// Rebuilds the world/static partitions from the render queue, keeping
    /// z-order, when membership changed since the last frame.
    fn update_queues(&mut self) {
        if !self.base.queue.changed() {
            return;
        }

        self.world_queue.clear();
        self.static_queue.clear();

        for object in self.base.queue.iter() {
            // An object borrowed elsewhere right now is treated as world-positioned.
            let position_type = object
                .try_borrow()
                .map(|o| o.position_type())
                .unwrap_or_default();

            match position_type {
                PositionType::World => self.world_queue.push(object.clone()),
                PositionType::Static => self.static_queue.push(object.clone()),
            }
        }

        log::trace!(
            "viewport {}: repartitioned into {} world / {} static",
            self.id().get(),
            self.world_queue.len(),
            self.static_queue.len()
        );
    }

    fn render_objects(&mut self, elapsed_ms: f64) {
        self.update_queues();

        let (surface, view) = self.base.render_target();
        let scale = view.scale;

        surface.save();
        surface.scale(scale, scale);
        surface.translate(-view.origin.x, -view.origin.y);
        render_pass(surface, view, &self.world_queue, elapsed_ms, Culling::World);
        surface.restore();

        surface.save();
        surface.scale(scale, scale);
        render_pass(surface, view, &self.static_queue, elapsed_ms, Culling::Off);
        surface.restore();
    }
}

impl<S: Surface> Redraw for WorldViewport<S> {
    fn redraw(&mut self) {
        WorldViewport::redraw(self);
    }
}
