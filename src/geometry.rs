//! Framework-independent geometry used by the reveal and parallax logic.
//!
//! The desktop layer converts gpui bounds into [`Rect`] at the boundary so
//! the core never depends on gpui types.

/// An axis-aligned rectangle in logical pixels, origin top-left.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Shrink (positive) or grow (negative) the bottom edge.
    pub fn inset_bottom(&self, amount: f32) -> Self {
        Self {
            height: (self.height - amount).max(0.0),
            ..*self
        }
    }

    /// Overlapping region, if the rectangles touch at all.
    ///
    /// Edge-adjacent rectangles yield a zero-area intersection rather than `None`.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right < left || bottom < top {
            return None;
        }
        Some(Rect::new(left, top, right - left, bottom - top))
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }
}

/// A point in logical pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[cfg(feature = "desktop")]
mod gpui_conversions {
    use super::{Point, Rect};
    use gpui::{Bounds, Pixels};

    impl From<Bounds<Pixels>> for Rect {
        fn from(bounds: Bounds<Pixels>) -> Self {
            Rect::new(
                f32::from(bounds.origin.x),
                f32::from(bounds.origin.y),
                f32::from(bounds.size.width),
                f32::from(bounds.size.height),
            )
        }
    }

    impl From<gpui::Point<Pixels>> for Point {
        fn from(point: gpui::Point<Pixels>) -> Self {
            Point::new(f32::from(point.x), f32::from(point.y))
        }
    }
}
