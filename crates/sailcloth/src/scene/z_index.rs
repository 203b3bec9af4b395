use core::cmp::Ordering;

/// Render order of a queued object.
///
/// Lower values are rendered first, so higher values appear on top.
/// Defaults to `100`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ZIndex(pub i32);

impl ZIndex {
    pub const DEFAULT: ZIndex = ZIndex(100);
}

impl Default for ZIndex {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Ord for ZIndex {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for ZIndex {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_100() {
        assert_eq!(ZIndex::default(), ZIndex(100));
    }

    #[test]
    fn negative_sorts_first() {
        assert!(ZIndex(-1) < ZIndex::DEFAULT);
    }
}
