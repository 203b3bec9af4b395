use crate::coords::{Bounds, Point, Rect, Size, Vector};
use crate::scene::Renderable;
use crate::surface::Surface;

use super::ViewportId;

/// Snapshot of a viewport's geometry, handed to renderables.
///
/// `width`/`height` are CSS pixels (backing store divided by `scale`).
/// `origin` is the world coordinate of the canvas's top-left corner; it is
/// always `(0, 0)` for a plain viewport.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewInfo {
    pub id: ViewportId,
    pub width: f64,
    pub height: f64,
    pub scale: f64,
    pub origin: Point,
    pub tick: u64,
}

impl ViewInfo {
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Visible region in world coordinates.
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.origin.x, self.origin.y, self.width, self.height)
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.rect().bounds()
    }

    /// World coordinate shown at the middle of the canvas, half-sizes rounded.
    pub fn center(&self) -> Point {
        self.origin + half_size(self.width, self.height)
    }

    /// Half-open test against the visible region.
    #[inline]
    pub fn point_visible(&self, p: Point) -> bool {
        self.rect().contains(p)
    }

    /// Whether a world-positioned object may show on the canvas.
    ///
    /// - no position: always visible
    /// - position inside the visible region: visible
    /// - position more than one viewport size outside it on either axis: not visible
    /// - otherwise any corner of `bounds()` inside the region makes it visible;
    ///   objects without bounds, or with a zero-sized side, are tested as a point
    pub fn object_visible(&self, o: &dyn Renderable) -> bool {
        let Some(p) = o.position() else {
            return true;
        };

        if self.point_visible(p) {
            return true;
        }

        let d = p - self.origin;
        if d.x > self.width * 2.0 || d.x < -self.width {
            return false;
        }
        if d.y > self.height * 2.0 || d.y < -self.height {
            return false;
        }

        match o.bounds() {
            None => false,
            Some(b) if b.is_degenerate() => self.point_visible(b.origin()),
            Some(b) => b.corners().into_iter().any(|c| self.point_visible(c)),
        }
    }
}

#[inline]
pub(crate) fn half_size(width: f64, height: f64) -> Vector {
    Vector::new((width / 2.0).round(), (height / 2.0).round())
}

/// Per-object render context.
///
/// The surface already carries the viewport's scale (and, for world objects,
/// the origin translation); renderables draw in their own coordinate space.
pub struct RenderCtx<'a> {
    pub surface: &'a mut dyn Surface,
    pub view: ViewInfo,
}
