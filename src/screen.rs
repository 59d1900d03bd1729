use crate::geometry::WindowRect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Landscape,
    Portrait,
}

impl Orientation {
    /// Square screens count as landscape.
    pub fn of(geometry: WindowRect) -> Self {
        if geometry.height > geometry.width {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }
}

/// The screen a window currently sits on, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screen {
    pub geometry: WindowRect,
    pub orientation: Orientation,
}

impl Screen {
    pub fn new(geometry: WindowRect, orientation: Orientation) -> Self {
        Self {
            geometry,
            orientation,
        }
    }

    pub fn from_geometry(geometry: WindowRect) -> Self {
        Self::new(geometry, Orientation::of(geometry))
    }

    pub fn is_portrait(&self) -> bool {
        self.orientation == Orientation::Portrait
    }

    pub fn is_landscape(&self) -> bool {
        self.orientation == Orientation::Landscape
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    Entire,
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// The nine snap targets of one screen.
///
/// Halves are exactly half of the screen dimension (integer division); the
/// far halves start at that midpoint and take the remainder, so
/// `left ∪ right` and `top ∪ bottom` always cover the whole screen. Each
/// quadrant is the intersection of its two halves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenRegions {
    pub entire: WindowRect,
    pub top: WindowRect,
    pub bottom: WindowRect,
    pub left: WindowRect,
    pub right: WindowRect,
    pub top_left: WindowRect,
    pub top_right: WindowRect,
    pub bottom_left: WindowRect,
    pub bottom_right: WindowRect,
}

impl ScreenRegions {
    pub fn partition(screen: WindowRect) -> Self {
        let half_w = screen.width / 2;
        let half_h = screen.height / 2;

        let left = WindowRect {
            width: half_w,
            ..screen
        };
        let right = WindowRect {
            x: screen.x + half_w,
            width: screen.width - half_w,
            ..screen
        };
        let top = WindowRect {
            height: half_h,
            ..screen
        };
        let bottom = WindowRect {
            y: screen.y + half_h,
            height: screen.height - half_h,
            ..screen
        };

        let quadrant = |a: WindowRect, b: WindowRect| {
            a.intersection(&b)
                .unwrap_or(WindowRect::new(a.x.max(b.x), a.y.max(b.y), 0, 0))
        };

        Self {
            entire: screen,
            top,
            bottom,
            left,
            right,
            top_left: quadrant(top, left),
            top_right: quadrant(top, right),
            bottom_left: quadrant(bottom, left),
            bottom_right: quadrant(bottom, right),
        }
    }

    pub fn get(&self, kind: RegionKind) -> WindowRect {
        match kind {
            RegionKind::Entire => self.entire,
            RegionKind::Top => self.top,
            RegionKind::Bottom => self.bottom,
            RegionKind::Left => self.left,
            RegionKind::Right => self.right,
            RegionKind::TopLeft => self.top_left,
            RegionKind::TopRight => self.top_right,
            RegionKind::BottomLeft => self.bottom_left,
            RegionKind::BottomRight => self.bottom_right,
        }
    }
}
