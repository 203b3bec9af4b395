/// Device pixels per CSS pixel for a canvas backing store.
///
/// `device / backing_store`, where each hint that is missing, non-finite or
/// non-positive counts as `1`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PixelRatio(f64);

impl PixelRatio {
    pub const ONE: PixelRatio = PixelRatio(1.0);

    pub fn from_hints(device: f64, backing_store: f64) -> Self {
        let sane = |v: f64| if v.is_finite() && v > 0.0 { v } else { 1.0 };
        Self(sane(device) / sane(backing_store))
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for PixelRatio {
    fn default() -> Self {
        Self::ONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divides_device_by_backing_store() {
        assert_eq!(PixelRatio::from_hints(2.0, 1.0).value(), 2.0);
        assert_eq!(PixelRatio::from_hints(3.0, 2.0).value(), 1.5);
    }

    #[test]
    fn bad_hints_fall_back_to_one() {
        assert_eq!(PixelRatio::from_hints(0.0, 1.0).value(), 1.0);
        assert_eq!(PixelRatio::from_hints(f64::NAN, 2.0).value(), 0.5);
        assert_eq!(PixelRatio::from_hints(2.0, -1.0).value(), 2.0);
    }
}
