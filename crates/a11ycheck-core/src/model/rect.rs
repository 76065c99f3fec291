//! Screen-space rectangles derived from the bounding rectangle property

/// Rectangle in physical screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const EMPTY: Rect = Rect {
        left: 0.0,
        top: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Build from the platform's `[left, top, width, height]` encoding
    ///
    /// Returns `None` unless exactly four values are present.
    pub fn from_doubles(values: &[f64]) -> Option<Self> {
        match values {
            [left, top, width, height] => Some(Self::new(*left, *top, *width, *height)),
            _ => None,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// All four components are zero
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// True when `self` covers every edge of `other`
    pub fn completely_obscures(&self, other: &Rect) -> bool {
        self.left <= other.left
            && self.top <= other.top
            && self.right() >= other.right()
            && self.bottom() >= other.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_doubles_requires_four_values() {
        assert_eq!(
            Rect::from_doubles(&[1.0, 2.0, 3.0, 4.0]),
            Some(Rect::new(1.0, 2.0, 3.0, 4.0))
        );
        assert_eq!(Rect::from_doubles(&[1.0, 2.0, 3.0]), None);
    }

    #[test]
    fn test_edges_and_area() {
        let r = Rect::new(10.0, 20.0, 5.0, 6.0);
        assert_eq!(r.right(), 15.0);
        assert_eq!(r.bottom(), 26.0);
        assert_eq!(r.area(), 30.0);
        assert!(!r.is_empty());
        assert!(Rect::default().is_empty());
    }

    #[test]
    fn test_completely_obscures() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(10.0, 10.0, 20.0, 20.0);

        assert!(outer.completely_obscures(&inner));
        assert!(!inner.completely_obscures(&outer));
        assert!(outer.completely_obscures(&outer));
    }
}
