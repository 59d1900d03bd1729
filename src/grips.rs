use crate::geometry::{Point, Size, WindowRect};
use crate::host::{CursorShape, HostWindow};

/// Grips thinner than this cannot be hit reliably.
pub const MIN_GRIP_SIZE: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    Left,
    Top,
    Right,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeCorner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl ResizeCorner {
    /// Horizontal and vertical edge a corner drags.
    pub fn edges(self) -> (ResizeEdge, ResizeEdge) {
        match self {
            ResizeCorner::TopLeft => (ResizeEdge::Left, ResizeEdge::Top),
            ResizeCorner::TopRight => (ResizeEdge::Right, ResizeEdge::Top),
            ResizeCorner::BottomRight => (ResizeEdge::Right, ResizeEdge::Bottom),
            ResizeCorner::BottomLeft => (ResizeEdge::Left, ResizeEdge::Bottom),
        }
    }
}

type ResizeFn = fn(&mut dyn HostWindow, Point);

fn resize_left(window: &mut dyn HostWindow, delta: Point) {
    let width = window
        .minimum_size()
        .width
        .max(window.size().width - delta.x);
    let geo = window.geometry().with_width_from_right(width);
    window.set_geometry(geo);
}

fn resize_top(window: &mut dyn HostWindow, delta: Point) {
    let height = window
        .minimum_size()
        .height
        .max(window.size().height - delta.y);
    let geo = window.geometry().with_height_from_bottom(height);
    window.set_geometry(geo);
}

fn resize_right(window: &mut dyn HostWindow, delta: Point) {
    let size = window.size();
    let width = window.minimum_size().width.max(size.width + delta.x);
    window.resize(Size::new(width, size.height));
}

fn resize_bottom(window: &mut dyn HostWindow, delta: Point) {
    let size = window.size();
    let height = window.minimum_size().height.max(size.height + delta.y);
    window.resize(Size::new(size.width, height));
}

impl ResizeEdge {
    fn resize_fn(self) -> ResizeFn {
        match self {
            ResizeEdge::Left => resize_left,
            ResizeEdge::Top => resize_top,
            ResizeEdge::Right => resize_right,
            ResizeEdge::Bottom => resize_bottom,
        }
    }

    pub fn cursor(self) -> CursorShape {
        match self {
            ResizeEdge::Left | ResizeEdge::Right => CursorShape::ResizeHorizontal,
            ResizeEdge::Top | ResizeEdge::Bottom => CursorShape::ResizeVertical,
        }
    }
}

/// Resizes the window by dragging one of its edges. Pointer positions are
/// local to the grip, so the delta is measured against where the grip
/// currently is.
#[derive(Debug, Clone)]
pub struct SideGrip {
    edge: ResizeEdge,
    resize: ResizeFn,
    pressed_at: Option<Point>,
}

impl SideGrip {
    pub fn new(edge: ResizeEdge) -> Self {
        Self {
            edge,
            resize: edge.resize_fn(),
            pressed_at: None,
        }
    }

    pub fn edge(&self) -> ResizeEdge {
        self.edge
    }

    pub fn cursor(&self) -> CursorShape {
        self.edge.cursor()
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed_at.is_some()
    }

    pub fn press(&mut self, local: Point) {
        self.pressed_at = Some(local);
    }

    pub fn drag(&mut self, window: &mut dyn HostWindow, local: Point) {
        if let Some(start) = self.pressed_at {
            (self.resize)(window, local - start);
        }
    }

    pub fn release(&mut self) {
        self.pressed_at = None;
    }
}

/// Corner slot resizing along both adjacent edges at once.
#[derive(Debug, Clone)]
pub struct CornerGrip {
    corner: ResizeCorner,
    horizontal: ResizeFn,
    vertical: ResizeFn,
    pressed_at: Option<Point>,
}

impl CornerGrip {
    pub fn new(corner: ResizeCorner) -> Self {
        let (h, v) = corner.edges();
        Self {
            corner,
            horizontal: h.resize_fn(),
            vertical: v.resize_fn(),
            pressed_at: None,
        }
    }

    pub fn corner(&self) -> ResizeCorner {
        self.corner
    }

    pub fn cursor(&self) -> CursorShape {
        match self.corner {
            ResizeCorner::TopLeft | ResizeCorner::BottomRight => CursorShape::ResizeMainDiagonal,
            ResizeCorner::TopRight | ResizeCorner::BottomLeft => CursorShape::ResizeAntiDiagonal,
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed_at.is_some()
    }

    pub fn press(&mut self, local: Point) {
        self.pressed_at = Some(local);
    }

    pub fn drag(&mut self, window: &mut dyn HostWindow, local: Point) {
        if let Some(start) = self.pressed_at {
            let delta = local - start;
            (self.horizontal)(window, delta);
            (self.vertical)(window, delta);
        }
    }

    pub fn release(&mut self) {
        self.pressed_at = None;
    }
}

/// Window-local rectangles of the four edge grips and four corner slots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GripLayout {
    pub left: WindowRect,
    pub top: WindowRect,
    pub right: WindowRect,
    pub bottom: WindowRect,
    pub top_left: WindowRect,
    pub top_right: WindowRect,
    pub bottom_right: WindowRect,
    pub bottom_left: WindowRect,
}

impl GripLayout {
    /// Derives every grip from the window's outer rect and the rect inset
    /// by the grip thickness on all sides.
    pub fn compute(size: Size, grip: i32) -> Self {
        let outer = WindowRect::from_parts(Point::default(), size);
        let inner = outer.adjusted(grip, grip, -grip, -grip);
        let inner_w = inner.width.max(0);
        let inner_h = inner.height.max(0);
        let far_x = inner.x + inner_w;
        let far_y = inner.y + inner_h;

        Self {
            left: WindowRect::new(outer.x, inner.y, grip, inner_h),
            top: WindowRect::new(inner.x, outer.y, inner_w, grip),
            right: WindowRect::new(far_x, inner.y, grip, inner_h),
            bottom: WindowRect::new(inner.x, far_y, inner_w, grip),
            top_left: WindowRect::new(outer.x, outer.y, grip, grip),
            top_right: WindowRect::new(far_x, outer.y, grip, grip),
            bottom_right: WindowRect::new(far_x, far_y, grip, grip),
            bottom_left: WindowRect::new(outer.x, far_y, grip, grip),
        }
    }

    pub fn edge(&self, edge: ResizeEdge) -> WindowRect {
        match edge {
            ResizeEdge::Left => self.left,
            ResizeEdge::Top => self.top,
            ResizeEdge::Right => self.right,
            ResizeEdge::Bottom => self.bottom,
        }
    }

    pub fn corner(&self, corner: ResizeCorner) -> WindowRect {
        match corner {
            ResizeCorner::TopLeft => self.top_left,
            ResizeCorner::TopRight => self.top_right,
            ResizeCorner::BottomRight => self.bottom_right,
            ResizeCorner::BottomLeft => self.bottom_left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::Screen;

    struct Plain {
        rect: WindowRect,
        min: Size,
    }

    impl HostWindow for Plain {
        fn geometry(&self) -> WindowRect {
            self.rect
        }

        fn set_geometry(&mut self, rect: WindowRect) {
            self.rect = rect;
        }

        fn minimum_size(&self) -> Size {
            self.min
        }

        fn screen(&self) -> Screen {
            Screen::from_geometry(WindowRect::new(0, 0, 1920, 1080))
        }

        fn set_cursor(&mut self, _cursor: CursorShape) {}
    }

    fn window() -> Plain {
        Plain {
            rect: WindowRect::new(100, 100, 400, 300),
            min: Size::new(200, 150),
        }
    }

    #[test]
    fn left_grip_keeps_right_edge() {
        let mut w = window();
        let mut grip = SideGrip::new(ResizeEdge::Left);
        grip.press(Point::new(3, 40));
        grip.drag(&mut w, Point::new(-7, 40));
        assert_eq!(w.rect, WindowRect::new(90, 100, 410, 300));
        assert_eq!(w.rect.right(), 499);
    }

    #[test]
    fn left_grip_clamps_to_minimum() {
        let mut w = window();
        let mut grip = SideGrip::new(ResizeEdge::Left);
        grip.press(Point::new(0, 0));
        grip.drag(&mut w, Point::new(350, 0));
        assert_eq!(w.rect, WindowRect::new(300, 100, 200, 300));
    }

    #[test]
    fn top_grip_keeps_bottom_edge() {
        let mut w = window();
        let mut grip = SideGrip::new(ResizeEdge::Top);
        grip.press(Point::new(10, 2));
        grip.drag(&mut w, Point::new(10, 22));
        assert_eq!(w.rect, WindowRect::new(100, 120, 400, 280));
        grip.drag(&mut w, Point::new(10, 500));
        assert_eq!(w.rect.height, 150);
        assert_eq!(w.rect.bottom(), 399);
    }

    #[test]
    fn right_and_bottom_grips_resize_in_place() {
        let mut w = window();
        let mut right = SideGrip::new(ResizeEdge::Right);
        right.press(Point::new(1, 1));
        right.drag(&mut w, Point::new(51, 1));
        assert_eq!(w.rect, WindowRect::new(100, 100, 450, 300));

        let mut bottom = SideGrip::new(ResizeEdge::Bottom);
        bottom.press(Point::new(1, 1));
        bottom.drag(&mut w, Point::new(1, -500));
        assert_eq!(w.rect, WindowRect::new(100, 100, 450, 150));
    }

    #[test]
    fn released_grip_ignores_drags() {
        let mut w = window();
        let mut grip = SideGrip::new(ResizeEdge::Right);
        grip.press(Point::new(0, 0));
        grip.release();
        grip.drag(&mut w, Point::new(40, 0));
        assert_eq!(w.rect, WindowRect::new(100, 100, 400, 300));
    }

    #[test]
    fn corner_grip_drags_both_edges() {
        let mut w = window();
        let mut grip = CornerGrip::new(ResizeCorner::TopLeft);
        assert_eq!(grip.cursor(), CursorShape::ResizeMainDiagonal);
        grip.press(Point::new(2, 2));
        grip.drag(&mut w, Point::new(-8, -18));
        assert_eq!(w.rect, WindowRect::new(90, 80, 410, 320));
    }

    #[test]
    fn layout_tiles_the_border() {
        let layout = GripLayout::compute(Size::new(400, 300), 12);
        assert_eq!(layout.top_left, WindowRect::new(0, 0, 12, 12));
        assert_eq!(layout.top, WindowRect::new(12, 0, 376, 12));
        assert_eq!(layout.top_right, WindowRect::new(388, 0, 12, 12));
        assert_eq!(layout.left, WindowRect::new(0, 12, 12, 276));
        assert_eq!(layout.right, WindowRect::new(388, 12, 12, 276));
        assert_eq!(layout.bottom_left, WindowRect::new(0, 288, 12, 12));
        assert_eq!(layout.bottom, WindowRect::new(12, 288, 376, 12));
        assert_eq!(layout.bottom_right, WindowRect::new(388, 288, 12, 12));

        let border: i64 = [
            layout.left,
            layout.top,
            layout.right,
            layout.bottom,
            layout.top_left,
            layout.top_right,
            layout.bottom_right,
            layout.bottom_left,
        ]
        .iter()
        .map(WindowRect::area)
        .sum();
        assert_eq!(border, 400 * 300 - 376 * 276);
    }

    #[test]
    fn edge_cursors() {
        assert_eq!(
            SideGrip::new(ResizeEdge::Left).cursor(),
            CursorShape::ResizeHorizontal
        );
        assert_eq!(
            SideGrip::new(ResizeEdge::Bottom).cursor(),
            CursorShape::ResizeVertical
        );
    }
}
