//! Drawing surface abstraction.
//!
//! A [`Surface`] is the host's 2D context plus the canvas element it draws
//! into: transform stack, path and fill operations, backing-store sizing and
//! the pixel-density hints the viewport reads once at construction.
//!
//! [`RecordingSurface`] is the headless implementation; it records every call
//! so a frame can be inspected or replayed.

mod recording;

use crate::coords::Point;
use crate::paint::Color;

pub use recording::{RecordingSurface, SurfaceCmd};

/// Host 2D drawing context bound to one canvas.
///
/// Coordinates passed to drawing calls are in the current transform's space;
/// the viewport applies its own scale and translation before handing the
/// surface to renderables.
pub trait Surface {
    /// Backing-store size in device pixels.
    fn backing_size(&self) -> (u32, u32);

    /// Resizes the backing store. Hosts may refuse sizes they cannot allocate.
    fn set_backing_size(&mut self, width: u32, height: u32) -> anyhow::Result<()>;

    /// Sets the on-page (CSS) size when it differs from the backing store.
    fn set_css_size(&mut self, width: f64, height: f64) {
        let _ = (width, height);
    }

    /// Position of the canvas inside its window, for window-to-canvas conversion.
    fn offset(&self) -> Point {
        Point::zero()
    }

    fn device_pixel_ratio(&self) -> f64 {
        1.0
    }

    fn backing_store_pixel_ratio(&self) -> f64 {
        1.0
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn save(&mut self);
    fn restore(&mut self);
    fn scale(&mut self, x: f64, y: f64);
    fn translate(&mut self, x: f64, y: f64);
    fn rotate(&mut self, angle: f64);

    fn set_fill_style(&mut self, color: Color);
    fn set_stroke_style(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64);
    fn fill(&mut self);
    fn stroke(&mut self);

    fn fill_text(&mut self, text: &str, x: f64, y: f64);
}
