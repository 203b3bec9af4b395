use anyhow::{Context, Result};

use crate::coords::{Bounds, Point, Rect, Size, Vector};
use crate::scene::{PositionType, RenderQueue, Renderable, SharedRenderable};
use crate::schedule::{FrameScheduler, Redraw};
use crate::surface::Surface;
use crate::time::{FrameTime, FrameTimer};

use super::ctx::half_size;
use super::{PixelRatio, RenderCtx, SizingElement, ViewInfo, ViewportConfig, ViewportId};

/// Hook run once per frame after the canvas is cleared and before anything
/// is drawn. Applications update object state here.
pub type RedrawHook<V> = Box<dyn FnMut(&mut V)>;

/// Screen-space viewport: one canvas, one render queue, one frame loop.
///
/// Drawing modes:
/// - on demand: `refresh(false)` asks the host for a single frame; repeated
///   calls before it fires are coalesced
/// - continuous: `start()` keeps requesting a frame from inside every redraw
///   until `stop()`; a frame already requested still fires
///
/// Each redraw:
/// 1. bumps the tick and clears the whole backing store
/// 2. runs the redraw hook
/// 3. drops objects marked `rendering_finished`
/// 4. measures the time since the previous frame (`0` on the first)
/// 5. renders the queue in z-order under the pixel-ratio scale
/// 6. requests the next frame when continuous
pub struct Viewport<S: Surface> {
    id: ViewportId,
    surface: S,
    scheduler: Box<dyn FrameScheduler>,
    timer: FrameTimer,
    pub(super) queue: RenderQueue,
    sizing_element: Option<Box<dyn SizingElement>>,
    on_redraw: Option<RedrawHook<Viewport<S>>>,

    /// World coordinate of the canvas's top-left corner. Only a world
    /// viewport moves it.
    pub(super) origin: Point,
    scale: f64,
    width: f64,
    height: f64,

    tick: u64,
    waiting_for_frame: bool,
    auto_redraw: bool,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(super) enum Culling {
    Off,
    /// Skip world-positioned objects outside the visible region.
    World,
}

impl<S: Surface> Viewport<S> {
    /// Creates a viewport over `surface`.
    ///
    /// The pixel ratio is read from the surface once, here. With a sizing
    /// element the canvas is sized to it immediately, which also requests a
    /// first frame.
    pub fn new(
        surface: S,
        scheduler: impl FrameScheduler + 'static,
        config: ViewportConfig,
    ) -> Result<Self> {
        let ViewportConfig {
            origin,
            sizing_element,
            clock,
        } = config;

        if origin.is_some() {
            log::debug!("origin only applies to world viewports; ignoring it");
        }

        let ratio = PixelRatio::from_hints(
            surface.device_pixel_ratio(),
            surface.backing_store_pixel_ratio(),
        );

        let mut vp = Self {
            id: ViewportId::next(),
            surface,
            scheduler: Box::new(scheduler),
            timer: clock.map(FrameTimer::new).unwrap_or_default(),
            queue: RenderQueue::new(),
            sizing_element,
            on_redraw: None,
            origin: Point::zero(),
            scale: 1.0,
            width: 0.0,
            height: 0.0,
            tick: 0,
            waiting_for_frame: false,
            auto_redraw: false,
        };
        vp.set_scale(ratio.value());

        if vp.sizing_element.is_some() {
            vp.autosize()
                .context("failed to size canvas to its sizing element")?;
        }

        log::debug!(
            "viewport {} ready: {}x{} css px at scale {}",
            vp.id.get(),
            vp.width,
            vp.height,
            vp.scale
        );
        Ok(vp)
    }

    /// Registers the redraw hook, replacing any previous one.
    pub fn on_redraw(&mut self, hook: impl FnMut(&mut Viewport<S>) + 'static) -> &mut Self {
        self.on_redraw = Some(Box::new(hook));
        self
    }

    #[inline]
    pub fn id(&self) -> ViewportId {
        self.id
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[inline]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Canvas width in CSS pixels.
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Canvas height in CSS pixels.
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Number of redraws so far.
    #[inline]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    #[inline]
    pub fn object_count(&self) -> usize {
        self.queue.len()
    }

    /// Queued objects in paint order.
    pub fn objects(&self) -> impl Iterator<Item = &SharedRenderable> {
        self.queue.iter()
    }

    #[inline]
    pub fn is_waiting_for_frame(&self) -> bool {
        self.waiting_for_frame
    }

    #[inline]
    pub fn is_auto_redraw(&self) -> bool {
        self.auto_redraw
    }

    /// Smoothed interval between frames in milliseconds, once two frames ran.
    #[inline]
    pub fn average_frame_duration(&self) -> Option<f64> {
        self.timer.average_frame_duration()
    }

    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn view_info(&self) -> ViewInfo {
        ViewInfo {
            id: self.id,
            width: self.width,
            height: self.height,
            scale: self.scale,
            origin: self.origin,
            tick: self.tick,
        }
    }

    /// Middle of the canvas, half-sizes rounded.
    pub fn center(&self) -> Point {
        self.origin + half_size(self.width, self.height)
    }

    /// The visible region: `Rect(origin.x, origin.y, width, height)`.
    pub fn rect(&self) -> Rect {
        Rect::new(self.origin.x, self.origin.y, self.width, self.height)
    }

    pub fn bounds(&self) -> Bounds {
        self.rect().bounds()
    }

    /// Converts a position inside the canvas element to viewport coordinates.
    pub fn canvas_to_viewport(&self, x: f64, y: f64) -> Point {
        self.origin + Vector::new(x, y)
    }

    /// Converts a position inside the window to viewport coordinates.
    pub fn window_to_viewport(&self, x: f64, y: f64) -> Point {
        let offset = self.surface.offset();
        self.canvas_to_viewport(x - offset.x, y - offset.y)
    }

    // ── sizing ────────────────────────────────────────────────────────────

    /// Sets device pixels per CSS pixel. Non-finite or non-positive values
    /// are ignored.
    pub fn set_scale(&mut self, scale: f64) {
        if !(scale.is_finite() && scale > 0.0) {
            log::warn!("viewport {}: ignoring invalid scale {scale}", self.id.get());
            return;
        }
        self.scale = scale;
        self.update_dimensions();
    }

    /// Re-reads the backing store size.
    pub fn update_dimensions(&mut self) {
        let (w, h) = self.surface.backing_size();
        self.width = w as f64 / self.scale;
        self.height = h as f64 / self.scale;
    }

    /// Sizes the canvas to `width x height` CSS pixels.
    ///
    /// Above a scale of 1 the backing store is enlarged by the scale and the
    /// CSS size pinned, so drawing stays in CSS pixel units but sharp.
    pub fn set_canvas_size(&mut self, width: f64, height: f64) -> Result<()> {
        let (bw, bh) = if self.scale > 1.0 {
            ((width * self.scale).floor() as u32, (height * self.scale).floor() as u32)
        } else {
            (width as u32, height as u32)
        };

        self.surface
            .set_backing_size(bw, bh)
            .with_context(|| format!("failed to resize canvas backing store to {bw}x{bh}"))?;

        if self.scale > 1.0 {
            self.surface.set_css_size(width, height);
        }

        self.update_dimensions();
        Ok(())
    }

    /// Fits the canvas to the sizing element's content box, notifies every
    /// queued object's `on_resize`, and requests a redraw.
    ///
    /// Hosts call this from their window-resize listener. Without a sizing
    /// element it does nothing.
    pub fn autosize(&mut self) -> Result<()> {
        let Some(element) = &self.sizing_element else {
            return Ok(());
        };

        let mut size = element.client_size();
        if !size.is_valid() {
            log::debug!(
                "viewport {}: sizing element reports {}x{}",
                self.id.get(),
                size.width,
                size.height
            );
            let sane = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
            size = Size::new(sane(size.width), sane(size.height));
        }
        self.set_canvas_size(size.width, size.height)?;

        let view = self.view_info();
        for object in self.queue.iter() {
            match object.try_borrow_mut() {
                Ok(mut o) => o.on_resize(self.width, self.height, &view),
                Err(_) => log::warn!("viewport {}: object busy during resize", self.id.get()),
            }
        }

        log::debug!(
            "viewport {} resized to {}x{} css px",
            self.id.get(),
            self.width,
            self.height
        );

        self.refresh(false);
        Ok(())
    }

    // ── queue ─────────────────────────────────────────────────────────────

    /// Queues `object` for rendering. See [`start_rendering`](Self::start_rendering).
    pub fn add(&mut self, object: SharedRenderable) -> &mut Self {
        self.start_rendering(Some(object))
    }

    /// Queues `object` for rendering.
    ///
    /// `None` and objects whose `can_render()` is false are ignored. Adding
    /// clears `rendering_finished`, records this viewport on the object if it
    /// has none yet, and calls `on_resize` with the current size.
    pub fn start_rendering(&mut self, object: Option<SharedRenderable>) -> &mut Self {
        let Some(object) = object else {
            log::debug!("viewport {}: ignoring empty renderable", self.id.get());
            return self;
        };

        {
            let Ok(mut o) = object.try_borrow_mut() else {
                log::warn!("viewport {}: cannot queue an object that is in use", self.id.get());
                return self;
            };

            if !o.can_render() {
                log::debug!("viewport {}: ignoring object that cannot render", self.id.get());
                return self;
            }

            let id = self.id;
            let state = o.state_mut();
            state.rendering_finished = false;
            if state.viewport.is_none() {
                state.viewport = Some(id);
            }

            let view = self.view_info();
            o.on_resize(self.width, self.height, &view);
        }

        self.queue.push(object);
        log::debug!(
            "viewport {}: {} object(s) queued",
            self.id.get(),
            self.queue.len()
        );
        self
    }

    // ── frame loop ────────────────────────────────────────────────────────

    /// Switches to continuous redrawing.
    pub fn start(&mut self) -> &mut Self {
        self.refresh(true)
    }

    /// Leaves continuous mode. A frame already requested still fires.
    pub fn stop(&mut self) -> &mut Self {
        if self.auto_redraw {
            log::debug!("viewport {}: continuous redraw off", self.id.get());
        }
        self.auto_redraw = false;
        self
    }

    /// Requests a redraw unless one is pending or the viewport is already
    /// redrawing continuously. With `auto_redraw`, switches to continuous
    /// mode; a pending frame then starts the chain.
    pub fn refresh(&mut self, auto_redraw: bool) -> &mut Self {
        if !self.waiting_for_frame && !self.auto_redraw {
            self.request_frame();
        }

        if auto_redraw && !self.auto_redraw {
            self.auto_redraw = true;
            log::debug!("viewport {}: continuous redraw on", self.id.get());
        }
        self
    }

    /// Clears the whole backing store.
    pub fn clear(&mut self) {
        let (w, h) = self.surface.backing_size();
        self.surface.clear_rect(0.0, 0.0, w as f64, h as f64);
    }

    /// Draws one frame. Hosts call this when a requested frame fires.
    pub fn redraw(&mut self) {
        self.begin_frame();
        self.run_redraw_hook();
        let frame = self.settle_queue();
        self.render_objects(frame.elapsed_ms);
        self.finish_frame();
    }

    fn run_redraw_hook(&mut self) {
        if let Some(mut hook) = self.on_redraw.take() {
            hook(self);
            // The hook may have installed a replacement for itself.
            if self.on_redraw.is_none() {
                self.on_redraw = Some(hook);
            }
        }
    }

    fn render_objects(&mut self, elapsed_ms: f64) {
        let view = self.view_info();
        let scale = self.scale;
        let surface: &mut dyn Surface = &mut self.surface;

        surface.save();
        surface.scale(scale, scale);
        render_pass(surface, view, self.queue.iter(), elapsed_ms, Culling::Off);
        surface.restore();
    }

    pub(super) fn begin_frame(&mut self) {
        self.tick += 1;
        self.waiting_for_frame = false;
        self.clear();
    }

    /// Drops finished objects and measures the frame interval.
    pub(super) fn settle_queue(&mut self) -> FrameTime {
        let removed = self.queue.retain_unfinished();
        if removed > 0 {
            log::debug!(
                "viewport {}: dropped {removed} finished object(s), {} left",
                self.id.get(),
                self.queue.len()
            );
        }

        let frame = self.timer.tick();
        log::trace!(
            "viewport {} frame {}: {:.2} ms since last, {} object(s)",
            self.id.get(),
            self.tick,
            frame.elapsed_ms,
            self.queue.len()
        );
        frame
    }

    pub(super) fn finish_frame(&mut self) {
        // A hook that called `start()` this frame has already requested the next one.
        if self.auto_redraw && !self.waiting_for_frame {
            self.request_frame();
        }
        self.queue.mark_clean();
    }

    /// Surface and geometry for a render pass.
    pub(super) fn render_target(&mut self) -> (&mut dyn Surface, ViewInfo) {
        let view = self.view_info();
        let surface: &mut dyn Surface = &mut self.surface;
        (surface, view)
    }

    fn request_frame(&mut self) {
        let handle = self.scheduler.request_frame();
        self.waiting_for_frame = true;
        log::trace!("viewport {}: requested frame {:?}", self.id.get(), handle);
    }
}

impl<S: Surface> Redraw for Viewport<S> {
    fn redraw(&mut self) {
        Viewport::redraw(self);
    }
}

/// Renders `objects` in order onto `surface` as it is currently transformed.
pub(super) fn render_pass<'q>(
    surface: &mut dyn Surface,
    view: ViewInfo,
    objects: impl IntoIterator<Item = &'q SharedRenderable>,
    elapsed_ms: f64,
    culling: Culling,
) {
    let mut ctx = RenderCtx { surface, view };

    for object in objects {
        let Ok(mut o) = object.try_borrow_mut() else {
            log::warn!("viewport {}: skipping object that is in use", view.id.get());
            continue;
        };

        if culling == Culling::World
            && o.position_type() == PositionType::World
            && !view.object_visible(&*o)
        {
            continue;
        }

        o.render(&mut ctx, elapsed_ms);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::schedule::ManualScheduler;
    use crate::surface::{RecordingSurface, SurfaceCmd};
    use crate::testing::{Probe, RenderLog};
    use crate::time::ManualClock;
    use crate::viewport::SharedSize;

    struct Rig {
        vp: Viewport<RecordingSurface>,
        frames: ManualScheduler,
        clock: ManualClock,
    }

    fn rig_with(surface: RecordingSurface) -> Rig {
        let frames = ManualScheduler::new();
        let clock = ManualClock::new(0.0);
        let vp = Viewport::new(
            surface,
            frames.clone(),
            ViewportConfig::new().with_clock(clock.clone()),
        )
        .unwrap();
        Rig { vp, frames, clock }
    }

    fn rig() -> Rig {
        rig_with(RecordingSurface::new(200, 100))
    }

    fn texts(cmds: &[SurfaceCmd]) -> Vec<String> {
        cmds.iter()
            .filter_map(|c| match c {
                SurfaceCmd::FillText { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn dimensions_come_from_backing_store() {
        let r = rig();
        assert_eq!(r.vp.size(), Size::new(200.0, 100.0));
        assert_eq!(r.vp.scale(), 1.0);
        assert_eq!(r.frames.pending(), 0);
    }

    #[test]
    fn pixel_ratio_scales_dimensions() {
        let r = rig_with(RecordingSurface::new(400, 200).with_pixel_ratios(2.0, 1.0));
        assert_eq!(r.vp.scale(), 2.0);
        assert_eq!(r.vp.size(), Size::new(200.0, 100.0));
    }

    #[test]
    fn viewports_get_distinct_ids() {
        assert_ne!(rig().vp.id(), rig().vp.id());
    }

    // ── add ───────────────────────────────────────────────────────────────

    #[test]
    fn add_ignores_empty_and_undrawable_objects() {
        let mut r = rig();
        r.vp.start_rendering(None);
        r.vp.add(Probe::new("ghost").not_drawable().shared());
        assert_eq!(r.vp.object_count(), 0);

        r.vp.add(Probe::new("real").shared());
        assert_eq!(r.vp.object_count(), 1);
    }

    #[test]
    fn add_revives_finished_object_and_reports_size() {
        let mut r = rig();
        let p = Probe::new("p").rc();
        p.borrow_mut().finish_rendering();

        r.vp.add(p.clone());
        let probe = p.borrow();
        assert!(!probe.rendering_finished());
        assert_eq!(probe.resizes, vec![(200.0, 100.0)]);
    }

    #[test]
    fn viewport_association_is_set_once() {
        let mut first = rig();
        let mut second = rig();
        let p = Probe::new("p").rc();

        first.vp.add(p.clone());
        second.vp.add(p.clone());

        assert_eq!(p.borrow().viewport(), Some(first.vp.id()));
        assert_eq!(first.vp.object_count(), 1);
        assert_eq!(second.vp.object_count(), 1);
    }

    #[test]
    fn renders_in_z_order() {
        let mut r = rig();
        let log = RenderLog::default();
        r.vp.add(Probe::new("five").z(5).logging_to(&log).shared());
        r.vp.add(Probe::new("one").z(1).logging_to(&log).shared());
        r.vp.add(Probe::new("three").z(3).logging_to(&log).shared());

        let queued: Vec<i32> = r.vp.objects().map(|o| o.borrow().z_index().0).collect();
        assert_eq!(queued, vec![1, 3, 5]);

        r.vp.refresh(false);
        r.frames.run(&mut r.vp, 10);

        assert_eq!(*log.borrow(), vec!["one", "three", "five"]);
    }

    // ── redraw ────────────────────────────────────────────────────────────

    #[test]
    fn redraw_clears_then_renders_under_scale() {
        let mut r = rig_with(RecordingSurface::new(400, 200).with_pixel_ratios(2.0, 1.0));
        r.vp.add(Probe::new("p").shared());
        r.vp.surface_mut().take_commands();

        r.vp.redraw();

        assert_eq!(
            r.vp.surface().commands(),
            &[
                SurfaceCmd::ClearRect { x: 0.0, y: 0.0, width: 400.0, height: 200.0 },
                SurfaceCmd::Save,
                SurfaceCmd::Scale { x: 2.0, y: 2.0 },
                SurfaceCmd::FillText { text: "p".to_string(), x: 0.0, y: 0.0 },
                SurfaceCmd::Restore,
            ]
        );
        assert_eq!(r.vp.tick(), 1);
    }

    #[test]
    fn finished_object_is_dropped_on_next_redraw() {
        let mut r = rig();
        let a = Probe::new("a").rc();
        r.vp.add(a.clone());
        r.vp.add(Probe::new("b").shared());
        r.vp.redraw();
        assert_eq!(r.vp.object_count(), 2);

        a.borrow_mut().finish_rendering();
        assert_eq!(r.vp.object_count(), 2);

        r.vp.redraw();
        assert_eq!(r.vp.object_count(), 1);
        assert_eq!(a.borrow().renders, 1);
    }

    #[test]
    fn elapsed_time_is_zero_on_first_frame() {
        let mut r = rig();
        let p = Probe::new("p").rc();
        r.vp.add(p.clone());

        r.clock.set(500.0);
        r.vp.redraw();
        r.clock.advance(16.0);
        r.vp.redraw();
        r.clock.advance(20.0);
        r.vp.redraw();

        assert_eq!(p.borrow().elapsed, vec![0.0, 16.0, 20.0]);
    }

    #[test]
    fn average_frame_duration_is_smoothed() {
        let mut r = rig();
        r.vp.redraw();
        assert_eq!(r.vp.average_frame_duration(), None);

        r.clock.advance(10.0);
        r.vp.redraw();
        assert_eq!(r.vp.average_frame_duration(), Some(10.0));

        r.clock.advance(30.0);
        r.vp.redraw();
        let avg = r.vp.average_frame_duration().unwrap();
        assert!((avg - (0.1 * 30.0 + 0.9 * 10.0)).abs() < 1e-9);
    }

    #[test]
    fn hook_runs_before_finished_filter_and_render() {
        let mut r = rig();
        let doomed = Probe::new("doomed").rc();
        r.vp.add(doomed.clone());

        let late: Rc<RefCell<Option<SharedRenderable>>> =
            Rc::new(RefCell::new(Some(Probe::new("late").shared())));
        let hook_doomed = doomed.clone();
        let hook_late = late.clone();
        r.vp.on_redraw(move |vp| {
            hook_doomed.borrow_mut().finish_rendering();
            if let Some(o) = hook_late.borrow_mut().take() {
                vp.add(o);
            }
        });

        r.vp.surface_mut().take_commands();
        r.vp.redraw();

        assert_eq!(doomed.borrow().renders, 0);
        assert_eq!(r.vp.object_count(), 1);
        assert_eq!(texts(r.vp.surface().commands()), vec!["late"]);
    }

    #[test]
    fn hook_persists_across_frames() {
        let mut r = rig();
        let calls = Rc::new(RefCell::new(0));
        let c = calls.clone();
        r.vp.on_redraw(move |_| *c.borrow_mut() += 1);

        r.vp.redraw();
        r.vp.redraw();
        assert_eq!(*calls.borrow(), 2);
    }

    // ── scheduling ────────────────────────────────────────────────────────

    #[test]
    fn refresh_coalesces_into_one_frame() {
        let mut r = rig();
        r.vp.refresh(false).refresh(false).refresh(false);
        assert_eq!(r.frames.pending(), 1);
        assert!(r.vp.is_waiting_for_frame());

        assert_eq!(r.frames.run(&mut r.vp, 10), 1);
        assert_eq!(r.vp.tick(), 1);
        assert!(!r.vp.is_waiting_for_frame());
        assert_eq!(r.frames.pending(), 0);
    }

    #[test]
    fn start_redraws_continuously_until_stopped() {
        let mut r = rig();
        r.vp.start();
        assert!(r.vp.is_auto_redraw());
        assert_eq!(r.frames.run(&mut r.vp, 5), 5);
        assert_eq!(r.frames.pending(), 1);

        // Already continuous: no extra request.
        r.vp.refresh(false);
        r.vp.start();
        assert_eq!(r.frames.pending(), 1);

        r.vp.stop();
        // The frame already requested still fires, and nothing follows it.
        assert_eq!(r.frames.run(&mut r.vp, 5), 1);
        assert_eq!(r.vp.tick(), 6);
        assert_eq!(r.frames.pending(), 0);
    }

    #[test]
    fn start_while_a_frame_is_pending_continues_from_it() {
        let mut r = rig();
        r.vp.refresh(false);
        r.vp.start();
        assert_eq!(r.frames.pending(), 1);

        r.frames.step(&mut r.vp);
        assert_eq!(r.frames.pending(), 1);
    }

    #[test]
    fn starting_from_the_hook_runs_a_single_frame_chain() {
        let mut r = rig();
        let started = Rc::new(RefCell::new(false));
        let flag = started.clone();
        r.vp.on_redraw(move |vp| {
            if !*flag.borrow() {
                *flag.borrow_mut() = true;
                vp.start();
            }
        });

        r.vp.refresh(false);
        r.frames.step(&mut r.vp);
        assert!(r.vp.is_auto_redraw());
        assert_eq!(r.frames.pending(), 1);

        assert_eq!(r.frames.run(&mut r.vp, 4), 4);
        assert_eq!(r.frames.pending(), 1);
        assert_eq!(r.vp.tick(), 5);
    }

    #[test]
    fn refresh_after_stop_waits_for_the_pending_frame() {
        let mut r = rig();
        r.vp.start();
        r.vp.stop();
        r.vp.refresh(false);
        assert_eq!(r.frames.pending(), 1);
    }

    // ── sizing ────────────────────────────────────────────────────────────

    #[test]
    fn autosize_fills_sizing_element_with_scaled_backing_store() {
        let element = SharedSize::new(300.0, 150.0);
        let frames = ManualScheduler::new();
        let vp = Viewport::new(
            RecordingSurface::new(10, 10).with_pixel_ratios(2.0, 1.0),
            frames.clone(),
            ViewportConfig::new().with_sizing_element(element.clone()),
        )
        .unwrap();

        assert_eq!(vp.surface().backing_size(), (600, 300));
        assert_eq!(vp.surface().css_size(), Some((300.0, 150.0)));
        assert_eq!(vp.size(), Size::new(300.0, 150.0));
        // Sizing requests a first frame.
        assert_eq!(frames.pending(), 1);
    }

    #[test]
    fn autosize_notifies_queued_objects() {
        let element = SharedSize::new(100.0, 50.0);
        let frames = ManualScheduler::new();
        let mut vp = Viewport::new(
            RecordingSurface::new(10, 10),
            frames.clone(),
            ViewportConfig::new().with_sizing_element(element.clone()),
        )
        .unwrap();
        frames.run(&mut vp, 1);

        let p = Probe::new("p").rc();
        vp.add(p.clone());

        element.set(640.0, 480.0);
        vp.autosize().unwrap();

        assert_eq!(vp.surface().backing_size(), (640, 480));
        assert_eq!(p.borrow().resizes, vec![(100.0, 50.0), (640.0, 480.0)]);
        assert_eq!(frames.pending(), 1);
    }

    #[test]
    fn autosize_without_sizing_element_is_a_no_op() {
        let mut r = rig();
        r.vp.autosize().unwrap();
        assert_eq!(r.vp.surface().backing_size(), (200, 100));
        assert_eq!(r.frames.pending(), 0);
    }

    #[test]
    fn unusable_element_size_collapses_to_zero() {
        let element = SharedSize::new(f64::NAN, -20.0);
        let vp = Viewport::new(
            RecordingSurface::new(10, 10),
            ManualScheduler::new(),
            ViewportConfig::new().with_sizing_element(element),
        )
        .unwrap();
        assert_eq!(vp.surface().backing_size(), (0, 0));
        assert_eq!(vp.size(), Size::new(0.0, 0.0));
    }

    #[test]
    fn refused_backing_store_fails_construction() {
        let result = Viewport::new(
            RecordingSurface::new(10, 10).with_max_backing_size(100, 100),
            ManualScheduler::new(),
            ViewportConfig::new().with_sizing_element(SharedSize::new(500.0, 50.0)),
        );
        let err = result.err().unwrap();
        assert!(format!("{err:#}").contains("500x50"));
    }

    #[test]
    fn invalid_scale_is_ignored() {
        let mut r = rig();
        r.vp.set_scale(0.0);
        r.vp.set_scale(f64::NAN);
        assert_eq!(r.vp.scale(), 1.0);
        r.vp.set_scale(2.0);
        assert_eq!(r.vp.size(), Size::new(100.0, 50.0));
    }

    // ── geometry ──────────────────────────────────────────────────────────

    #[test]
    fn center_and_rect_in_screen_space() {
        let r = rig_with(RecordingSurface::new(201, 100));
        assert_eq!(r.vp.center(), Point::new(101.0, 50.0));
        assert_eq!(
            r.vp.bounds(),
            Bounds { top: 0.0, left: 0.0, bottom: 100.0, right: 201.0 }
        );
    }

    #[test]
    fn window_coordinates_subtract_canvas_offset() {
        let r = rig_with(RecordingSurface::new(200, 100).with_offset(8.0, 30.0));
        assert_eq!(r.vp.canvas_to_viewport(5.0, 6.0), Point::new(5.0, 6.0));
        assert_eq!(r.vp.window_to_viewport(18.0, 40.0), Point::new(10.0, 10.0));
    }
}
