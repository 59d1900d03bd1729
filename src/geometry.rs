use ratatui::prelude::Rect;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        self.offset(rhs.x, rhs.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point {
            x: self.x.saturating_sub(rhs.x),
            y: self.y.saturating_sub(rhs.y),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Screen-space rectangle with a signed origin, so windows may hang off the
/// left/top of the screen while being dragged.
///
/// `right()` and `bottom()` are inclusive, matching the floating-window math
/// elsewhere in the crate: a rect at `x = 0` with `width = 10` has
/// `right() == 9`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl WindowRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_parts(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn right(&self) -> i32 {
        self.x + self.width - 1
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height - 1
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn area(&self) -> i64 {
        if self.is_empty() {
            return 0;
        }
        self.width as i64 * self.height as i64
    }

    pub fn contains(&self, point: Point) -> bool {
        if self.is_empty() {
            return false;
        }
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Moves the left edge so the rect is `width` wide while the right edge
    /// stays where it is.
    pub fn with_width_from_right(&self, width: i32) -> Self {
        let right_exclusive = self.x + self.width;
        Self {
            x: right_exclusive - width,
            width,
            ..*self
        }
    }

    /// Moves the top edge so the rect is `height` tall while the bottom edge
    /// stays where it is.
    pub fn with_height_from_bottom(&self, height: i32) -> Self {
        let bottom_exclusive = self.y + self.height;
        Self {
            y: bottom_exclusive - height,
            height,
            ..*self
        }
    }

    /// Grows (positive) or shrinks (negative) every side by the given amounts.
    pub fn adjusted(&self, dx1: i32, dy1: i32, dx2: i32, dy2: i32) -> Self {
        Self {
            x: self.x + dx1,
            y: self.y + dy1,
            width: self.width - dx1 + dx2,
            height: self.height - dy1 + dy2,
        }
    }

    pub fn intersection(&self, other: &WindowRect) -> Option<WindowRect> {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = (self.x + self.width).min(other.x + other.width);
        let y2 = (self.y + self.height).min(other.y + other.height);
        if x2 <= x1 || y2 <= y1 {
            return None;
        }
        Some(WindowRect::new(x1, y1, x2 - x1, y2 - y1))
    }

    pub fn union(&self, other: &WindowRect) -> WindowRect {
        let x1 = self.x.min(other.x);
        let y1 = self.y.min(other.y);
        let x2 = (self.x + self.width).max(other.x + other.width);
        let y2 = (self.y + self.height).max(other.y + other.height);
        WindowRect::new(x1, y1, x2 - x1, y2 - y1)
    }

    /// Clips to the terminal's unsigned cell space. Returns `None` when
    /// nothing of the rect remains visible.
    pub fn to_cell_rect(&self, bounds: Rect) -> Option<Rect> {
        let clipped = self.intersection(&WindowRect::from(bounds))?;
        Some(Rect {
            x: clipped.x as u16,
            y: clipped.y as u16,
            width: clipped.width as u16,
            height: clipped.height as u16,
        })
    }
}

impl From<Rect> for WindowRect {
    fn from(rect: Rect) -> Self {
        WindowRect::new(
            rect.x as i32,
            rect.y as i32,
            rect.width as i32,
            rect.height as i32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inclusive_far_edges() {
        let r = WindowRect::new(0, 0, 10, 4);
        assert_eq!(r.right(), 9);
        assert_eq!(r.bottom(), 3);
    }

    #[test]
    fn width_from_right_keeps_right_edge() {
        let r = WindowRect::new(100, 50, 300, 200);
        let grown = r.with_width_from_right(350);
        assert_eq!(grown.x, 50);
        assert_eq!(grown.right(), r.right());
        let shrunk = r.with_height_from_bottom(120);
        assert_eq!(shrunk.y, 130);
        assert_eq!(shrunk.bottom(), r.bottom());
    }

    #[test]
    fn intersection_of_disjoint_rects_is_none() {
        let a = WindowRect::new(0, 0, 10, 10);
        let b = WindowRect::new(10, 0, 10, 10);
        assert!(a.intersection(&b).is_none());
        assert_eq!(a.union(&b), WindowRect::new(0, 0, 20, 10));
    }

    #[test]
    fn cell_rect_clips_negative_origin() {
        let bounds = Rect {
            x: 0,
            y: 0,
            width: 80,
            height: 24,
        };
        let r = WindowRect::new(-5, 2, 20, 5);
        assert_eq!(
            r.to_cell_rect(bounds),
            Some(Rect {
                x: 0,
                y: 2,
                width: 15,
                height: 5
            })
        );
        assert!(WindowRect::new(-30, 0, 10, 10).to_cell_rect(bounds).is_none());
    }
}
