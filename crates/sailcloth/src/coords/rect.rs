use super::{Point, Size};

/// Edges of a rectangle.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

/// Immutable axis-aligned rectangle.
///
/// Argument order is `(top, left, width, height)`, but `top` is the
/// horizontal coordinate and `left` the vertical one:
///
/// - `bounds()` is `{ top: left, left: top, bottom: left + height, right: top + width }`
/// - `origin()` is `(top, left)`
/// - `center()` is `(top + width / 2, left + height / 2)`
///
/// Viewports build their rects as `Rect::new(origin.x, origin.y, width, height)`,
/// which reads naturally with that mapping.
///
/// Derived values are computed once at construction; the rect cannot change
/// afterwards.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    size: Size,
    origin: Point,
    center: Point,
    bounds: Bounds,
}

impl Rect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            origin: Point::new(top, left),
            center: Point::new(top + width / 2.0, left + height / 2.0),
            bounds: Bounds {
                top: left,
                left: top,
                bottom: left + height,
                right: top + width,
            },
        }
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// True when either side is zero (or NaN); such rects are tested as points.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.size.width == 0.0
            || self.size.height == 0.0
            || self.size.width.is_nan()
            || self.size.height.is_nan()
    }

    /// The four corners, clockwise from the origin.
    pub fn corners(&self) -> [Point; 4] {
        let Point { x, y } = self.origin;
        let Size { width, height } = self.size;
        [
            Point::new(x, y),
            Point::new(x + width, y),
            Point::new(x + width, y + height),
            Point::new(x, y + height),
        ]
    }

    /// Half-open containment: [origin, origin + size).
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.origin.x
            && p.y >= self.origin.y
            && p.x < self.origin.x + self.size.width
            && p.y < self.origin.y + self.size.height
    }
}
