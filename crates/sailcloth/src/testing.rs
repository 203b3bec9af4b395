//! Test doubles shared by the unit tests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::coords::{Point, Rect};
use crate::scene::{PositionType, RenderState, Renderable, SharedRenderable};
use crate::viewport::{RenderCtx, ViewInfo};

/// Names of rendered probes, in render order.
pub(crate) type RenderLog = Rc<RefCell<Vec<&'static str>>>;

/// Configurable renderable that records what happens to it.
///
/// Each render also writes `fill_text(name, x, y)` to the surface so tests can
/// see where in the transform stack it was drawn.
pub(crate) struct Probe {
    pub name: &'static str,
    pub state: RenderState,
    pub position: Option<Point>,
    pub bounds: Option<Rect>,
    pub drawable: bool,
    pub log: Option<RenderLog>,
    pub renders: u32,
    pub elapsed: Vec<f64>,
    pub resizes: Vec<(f64, f64)>,
}

impl Probe {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: RenderState::default(),
            position: None,
            bounds: None,
            drawable: true,
            log: None,
            renders: 0,
            elapsed: Vec::new(),
            resizes: Vec::new(),
        }
    }

    pub fn z(mut self, z: i32) -> Self {
        self.state = self.state.with_z_index(z);
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Some(Point::new(x, y));
        self
    }

    pub fn bounds(mut self, rect: Rect) -> Self {
        self.bounds = Some(rect);
        self
    }

    pub fn screen(mut self) -> Self {
        self.state = self.state.with_position_type(PositionType::Static);
        self
    }

    pub fn not_drawable(mut self) -> Self {
        self.drawable = false;
        self
    }

    pub fn logging_to(mut self, log: &RenderLog) -> Self {
        self.log = Some(log.clone());
        self
    }

    pub fn rc(self) -> Rc<RefCell<Probe>> {
        Rc::new(RefCell::new(self))
    }

    pub fn shared(self) -> SharedRenderable {
        self.rc()
    }
}

impl Renderable for Probe {
    fn state(&self) -> &RenderState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut RenderState {
        &mut self.state
    }

    fn render(&mut self, ctx: &mut RenderCtx<'_>, elapsed_ms: f64) {
        self.renders += 1;
        self.elapsed.push(elapsed_ms);
        if let Some(log) = &self.log {
            log.borrow_mut().push(self.name);
        }
        let p = self.position.unwrap_or_default();
        ctx.surface.fill_text(self.name, p.x, p.y);
    }

    fn can_render(&self) -> bool {
        self.drawable
    }

    fn on_resize(&mut self, width: f64, height: f64, _view: &ViewInfo) {
        self.resizes.push((width, height));
    }

    fn position(&self) -> Option<Point> {
        self.position
    }

    fn bounds(&self) -> Option<Rect> {
        self.bounds
    }
}
