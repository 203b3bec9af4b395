use anyhow::bail;

use crate::coords::Point;
use crate::paint::Color;

use super::Surface;

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCmd {
    SetBackingSize { width: u32, height: u32 },
    SetCssSize { width: f64, height: f64 },
    ClearRect { x: f64, y: f64, width: f64, height: f64 },
    Save,
    Restore,
    Scale { x: f64, y: f64 },
    Translate { x: f64, y: f64 },
    Rotate { angle: f64 },
    FillStyle(Color),
    StrokeStyle(Color),
    LineWidth(f64),
    FillRect { x: f64, y: f64, width: f64, height: f64 },
    StrokeRect { x: f64, y: f64, width: f64, height: f64 },
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Arc { x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64 },
    Fill,
    Stroke,
    FillText { text: String, x: f64, y: f64 },
}

/// Headless [`Surface`] recording every call in order.
///
/// Pixel ratios, canvas offset and a maximum backing-store size can be set to
/// stand in for what a browser would report.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    css_size: Option<(f64, f64)>,
    offset: Point,
    device_pixel_ratio: f64,
    backing_store_pixel_ratio: f64,
    max_backing_size: Option<(u32, u32)>,
    commands: Vec<SurfaceCmd>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            css_size: None,
            offset: Point::zero(),
            device_pixel_ratio: 1.0,
            backing_store_pixel_ratio: 1.0,
            max_backing_size: None,
            commands: Vec::new(),
        }
    }

    pub fn with_pixel_ratios(mut self, device: f64, backing_store: f64) -> Self {
        self.device_pixel_ratio = device;
        self.backing_store_pixel_ratio = backing_store;
        self
    }

    pub fn with_offset(mut self, x: f64, y: f64) -> Self {
        self.offset = Point::new(x, y);
        self
    }

    /// Backing-store sizes above this are refused by `set_backing_size`.
    pub fn with_max_backing_size(mut self, width: u32, height: u32) -> Self {
        self.max_backing_size = Some((width, height));
        self
    }

    pub fn css_size(&self) -> Option<(f64, f64)> {
        self.css_size
    }

    /// Calls recorded so far, oldest first.
    #[inline]
    pub fn commands(&self) -> &[SurfaceCmd] {
        &self.commands
    }

    /// Drains the recorded calls.
    pub fn take_commands(&mut self) -> Vec<SurfaceCmd> {
        std::mem::take(&mut self.commands)
    }

    #[inline]
    fn record(&mut self, cmd: SurfaceCmd) {
        self.commands.push(cmd);
    }
}

impl Surface for RecordingSurface {
    fn backing_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn set_backing_size(&mut self, width: u32, height: u32) -> anyhow::Result<()> {
        if let Some((max_w, max_h)) = self.max_backing_size {
            if width > max_w || height > max_h {
                bail!("backing store {width}x{height} exceeds the {max_w}x{max_h} limit");
            }
        }
        self.width = width;
        self.height = height;
        self.record(SurfaceCmd::SetBackingSize { width, height });
        Ok(())
    }

    fn set_css_size(&mut self, width: f64, height: f64) {
        self.css_size = Some((width, height));
        self.record(SurfaceCmd::SetCssSize { width, height });
    }

    fn offset(&self) -> Point {
        self.offset
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }

    fn backing_store_pixel_ratio(&self) -> f64 {
        self.backing_store_pixel_ratio
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.record(SurfaceCmd::ClearRect { x, y, width, height });
    }

    fn save(&mut self) {
        self.record(SurfaceCmd::Save);
    }

    fn restore(&mut self) {
        self.record(SurfaceCmd::Restore);
    }

    fn scale(&mut self, x: f64, y: f64) {
        self.record(SurfaceCmd::Scale { x, y });
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.record(SurfaceCmd::Translate { x, y });
    }

    fn rotate(&mut self, angle: f64) {
        self.record(SurfaceCmd::Rotate { angle });
    }

    fn set_fill_style(&mut self, color: Color) {
        self.record(SurfaceCmd::FillStyle(color));
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.record(SurfaceCmd::StrokeStyle(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.record(SurfaceCmd::LineWidth(width));
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.record(SurfaceCmd::FillRect { x, y, width, height });
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.record(SurfaceCmd::StrokeRect { x, y, width, height });
    }

    fn begin_path(&mut self) {
        self.record(SurfaceCmd::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.record(SurfaceCmd::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.record(SurfaceCmd::LineTo { x, y });
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) {
        self.record(SurfaceCmd::Arc { x, y, radius, start_angle, end_angle });
    }

    fn fill(&mut self) {
        self.record(SurfaceCmd::Fill);
    }

    fn stroke(&mut self) {
        self.record(SurfaceCmd::Stroke);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.record(SurfaceCmd::FillText { text: text.to_string(), x, y });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_calls_in_order() {
        let mut s = RecordingSurface::new(10, 10);
        s.save();
        s.translate(1.0, 2.0);
        s.fill_rect(0.0, 0.0, 3.0, 3.0);
        s.restore();
        assert_eq!(
            s.commands(),
            &[
                SurfaceCmd::Save,
                SurfaceCmd::Translate { x: 1.0, y: 2.0 },
                SurfaceCmd::FillRect { x: 0.0, y: 0.0, width: 3.0, height: 3.0 },
                SurfaceCmd::Restore,
            ]
        );
        assert_eq!(s.take_commands().len(), 4);
        assert!(s.commands().is_empty());
    }

    #[test]
    fn refuses_oversized_backing_store() {
        let mut s = RecordingSurface::new(10, 10).with_max_backing_size(100, 100);
        assert!(s.set_backing_size(100, 100).is_ok());
        let err = s.set_backing_size(101, 50).unwrap_err();
        assert!(err.to_string().contains("101x50"));
        assert_eq!(s.backing_size(), (100, 100));
    }
}
