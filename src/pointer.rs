use crate::geometry::{Point, WindowRect};
use crate::screen::{RegionKind, Screen, ScreenRegions};

/// Distance from a screen edge, in pixels, inside which a dragged pointer
/// arms a gesture.
pub const DEFAULT_EDGE_MARGIN: i32 = 5;

/// Screen edge or corner a pointer is pressed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Side {
    pub fn is_corner(self) -> bool {
        matches!(
            self,
            Side::TopLeft | Side::TopRight | Side::BottomLeft | Side::BottomRight
        )
    }

    /// Sides touching the right or bottom screen edge.
    pub fn is_far_horizontal(self) -> bool {
        matches!(self, Side::Right | Side::TopRight | Side::BottomRight)
    }

    pub fn is_far_vertical(self) -> bool {
        matches!(self, Side::Bottom | Side::BottomLeft | Side::BottomRight)
    }

    /// Default snap target. The bottom edge has none.
    pub fn default_region(self) -> Option<RegionKind> {
        match self {
            Side::Top => Some(RegionKind::Entire),
            Side::Left => Some(RegionKind::Left),
            Side::Right => Some(RegionKind::Right),
            Side::Bottom => None,
            Side::TopLeft => Some(RegionKind::TopLeft),
            Side::TopRight => Some(RegionKind::TopRight),
            Side::BottomLeft => Some(RegionKind::BottomLeft),
            Side::BottomRight => Some(RegionKind::BottomRight),
        }
    }

    fn from_flags(left: bool, right: bool, top: bool, bottom: bool) -> Option<Side> {
        match (left, right, top, bottom) {
            (_, true, true, _) => Some(Side::TopRight),
            (_, true, _, true) => Some(Side::BottomRight),
            (true, _, true, _) => Some(Side::TopLeft),
            (true, _, _, true) => Some(Side::BottomLeft),
            (_, true, _, _) => Some(Side::Right),
            (true, _, _, _) => Some(Side::Left),
            (_, _, true, _) => Some(Side::Top),
            (_, _, _, true) => Some(Side::Bottom),
            _ => None,
        }
    }
}

/// One classified pointer event. Always rebuilt from the current event and
/// the current window/screen geometry, never patched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    /// Position inside the window when the event was delivered.
    pub local: Point,
    /// Absolute screen position.
    pub point: Point,
    /// `local` as a fraction of the window width/height. An axis with zero
    /// extent reports `0.0`.
    pub relative: (f64, f64),
    pub side: Option<Side>,
    pub region: Option<WindowRect>,
    pub screen: Screen,
}

impl PointerSample {
    pub fn classify(
        window: WindowRect,
        screen: Screen,
        regions: &ScreenRegions,
        local: Point,
        margin: i32,
    ) -> Self {
        let point = local + window.origin();
        let relative = (
            fraction(local.x, window.width),
            fraction(local.y, window.height),
        );

        let geo = screen.geometry;
        let near_left = point.x < geo.left() + margin;
        let near_right = !near_left && point.x > geo.right() - margin;
        let near_top = point.y < geo.top() + margin;
        let near_bottom = !near_top && point.y > geo.bottom() - margin;

        let side = Side::from_flags(near_left, near_right, near_top, near_bottom);
        let region = side
            .and_then(Side::default_region)
            .map(|kind| regions.get(kind));

        Self {
            local,
            point,
            relative,
            side,
            region,
            screen,
        }
    }

    /// Re-runs classification of the same in-window position against new
    /// window geometry.
    pub fn reclassify(&self, window: WindowRect, regions: &ScreenRegions, margin: i32) -> Self {
        Self::classify(window, self.screen, regions, self.local, margin)
    }
}

fn fraction(value: i32, extent: i32) -> f64 {
    if extent <= 0 {
        return 0.0;
    }
    value as f64 / extent as f64
}
