use crate::coords::Point;
use crate::time::Clock;

use super::SizingElement;

/// Viewport construction options.
///
/// The redraw hook is registered separately with `on_redraw`, so it can be
/// typed to the concrete viewport.
#[derive(Default)]
pub struct ViewportConfig {
    /// World coordinate of the canvas's top-left corner. World viewports only.
    pub origin: Option<Point>,
    /// Element the canvas fills; enables `autosize`.
    pub sizing_element: Option<Box<dyn SizingElement>>,
    /// Frame time source. Defaults to [`SystemClock`](crate::time::SystemClock).
    pub clock: Option<Box<dyn Clock>>,
}

impl ViewportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_origin(mut self, x: f64, y: f64) -> Self {
        self.origin = Some(Point::new(x, y));
        self
    }

    pub fn with_sizing_element(mut self, element: impl SizingElement + 'static) -> Self {
        self.sizing_element = Some(Box::new(element));
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }
}

impl core::fmt::Debug for ViewportConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ViewportConfig")
            .field("origin", &self.origin)
            .field("sizing_element", &self.sizing_element.is_some())
            .field("clock", &self.clock.is_some())
            .finish()
    }
}
