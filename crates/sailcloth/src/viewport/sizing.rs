use std::cell::Cell;
use std::rc::Rc;

use crate::coords::Size;

/// Element whose content box the canvas should fill.
pub trait SizingElement {
    /// Content-box size in CSS pixels.
    fn client_size(&self) -> Size;
}

/// Sizing element backed by a shared cell; hosts update it from their
/// layout and then call `autosize()` on the viewport.
#[derive(Debug, Clone, Default)]
pub struct SharedSize(Rc<Cell<Size>>);

impl SharedSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self(Rc::new(Cell::new(Size::new(width, height))))
    }

    pub fn set(&self, width: f64, height: f64) {
        self.0.set(Size::new(width, height));
    }
}

impl SizingElement for SharedSize {
    fn client_size(&self) -> Size {
        self.0.get()
    }
}
