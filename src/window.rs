//! The frameless window: a title bar and eight grips laid around the border,
//! with pointer events routed to whichever part captured the press.

use crate::config::WindowConfig;
use crate::drag::{TitleBar, title_bar_rect};
use crate::geometry::{Point, Size, WindowRect};
use crate::grips::{CornerGrip, GripLayout, MIN_GRIP_SIZE, ResizeCorner, ResizeEdge, SideGrip};
use crate::host::{CursorShape, HostWindow, Overlay};
use crate::modes::GestureModes;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Press,
    Move,
    Release,
}

/// Pointer event with a position relative to the window's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub position: Point,
}

impl PointerEvent {
    pub fn press(x: i32, y: i32) -> Self {
        Self {
            kind: PointerKind::Press,
            position: Point::new(x, y),
        }
    }

    pub fn moved(x: i32, y: i32) -> Self {
        Self {
            kind: PointerKind::Move,
            position: Point::new(x, y),
        }
    }

    pub fn release(x: i32, y: i32) -> Self {
        Self {
            kind: PointerKind::Release,
            position: Point::new(x, y),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Edge(ResizeEdge),
    Corner(ResizeCorner),
    TitleBar,
    Content,
}

const EDGES: [ResizeEdge; 4] = [
    ResizeEdge::Left,
    ResizeEdge::Top,
    ResizeEdge::Right,
    ResizeEdge::Bottom,
];

const CORNERS: [ResizeCorner; 4] = [
    ResizeCorner::TopLeft,
    ResizeCorner::TopRight,
    ResizeCorner::BottomRight,
    ResizeCorner::BottomLeft,
];

fn edge_index(edge: ResizeEdge) -> usize {
    match edge {
        ResizeEdge::Left => 0,
        ResizeEdge::Top => 1,
        ResizeEdge::Right => 2,
        ResizeEdge::Bottom => 3,
    }
}

fn corner_index(corner: ResizeCorner) -> usize {
    match corner {
        ResizeCorner::TopLeft => 0,
        ResizeCorner::TopRight => 1,
        ResizeCorner::BottomRight => 2,
        ResizeCorner::BottomLeft => 3,
    }
}

#[derive(Debug)]
pub struct FramelessWindow<O> {
    config: WindowConfig,
    title_bar: TitleBar<O>,
    side_grips: [SideGrip; 4],
    corner_grips: [CornerGrip; 4],
    layout: GripLayout,
    layout_size: Option<Size>,
    captured: Option<HitTarget>,
}

impl<O: Overlay> FramelessWindow<O> {
    /// `overlay` becomes the snap preview, owned by the title bar.
    pub fn new(config: WindowConfig, overlay: O) -> Self {
        let title_bar = TitleBar::new(overlay, config.modes).with_edge_margin(config.edge_margin);
        Self {
            config,
            title_bar,
            side_grips: EDGES.map(SideGrip::new),
            corner_grips: CORNERS.map(CornerGrip::new),
            layout: GripLayout::default(),
            layout_size: None,
            captured: None,
        }
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    pub fn title_bar(&self) -> &TitleBar<O> {
        &self.title_bar
    }

    pub fn grip_layout(&self) -> &GripLayout {
        &self.layout
    }

    pub fn captured(&self) -> Option<HitTarget> {
        self.captured
    }

    pub fn grip_size(&self) -> i32 {
        self.config.grip_size
    }

    pub fn set_grip_size(&mut self, size: i32) {
        let size = size.max(MIN_GRIP_SIZE);
        if size == self.config.grip_size {
            return;
        }
        self.config.grip_size = size;
        if let Some(current) = self.layout_size {
            self.layout = GripLayout::compute(current, size);
        }
    }

    pub fn set_modes(&mut self, modes: GestureModes) {
        self.config.modes = modes;
        self.title_bar.set_modes(modes);
    }

    /// Window-local rectangle of the title bar for the given window size.
    pub fn title_bar_rect(&self, size: Size) -> WindowRect {
        title_bar_rect(size, self.config.grip_size, self.config.titlebar_height)
    }

    /// Recomputes the grip layout; call whenever the window has been resized.
    pub fn update_grips(&mut self, size: Size) {
        if self.layout_size == Some(size) {
            return;
        }
        self.layout = GripLayout::compute(size, self.config.grip_size);
        self.layout_size = Some(size);
    }

    pub fn hit_test(&self, size: Size, local: Point) -> HitTarget {
        if let Some(corner) = CORNERS
            .into_iter()
            .find(|&c| self.layout.corner(c).contains(local))
        {
            return HitTarget::Corner(corner);
        }
        if let Some(edge) = EDGES
            .into_iter()
            .find(|&e| self.layout.edge(e).contains(local))
        {
            return HitTarget::Edge(edge);
        }
        if self.title_bar_rect(size).contains(local) {
            return HitTarget::TitleBar;
        }
        HitTarget::Content
    }

    pub fn cursor_for(&self, target: HitTarget) -> CursorShape {
        match target {
            HitTarget::Edge(edge) => edge.cursor(),
            HitTarget::Corner(corner) => self.corner_grips[corner_index(corner)].cursor(),
            HitTarget::TitleBar | HitTarget::Content => CursorShape::Arrow,
        }
    }

    /// Routes one pointer event. Returns `true` when the window chrome
    /// consumed it; content presses and hover moves are left to the caller.
    pub fn handle_pointer<W: HostWindow>(&mut self, window: &mut W, event: PointerEvent) -> bool {
        let size = window.size();
        self.update_grips(size);
        let local = event.position;

        match event.kind {
            PointerKind::Press => {
                let target = self.hit_test(size, local);
                match target {
                    HitTarget::Edge(edge) => {
                        let origin = self.layout.edge(edge).origin();
                        self.side_grips[edge_index(edge)].press(local - origin);
                        window.set_cursor(edge.cursor());
                    }
                    HitTarget::Corner(corner) => {
                        let origin = self.layout.corner(corner).origin();
                        let grip = &mut self.corner_grips[corner_index(corner)];
                        grip.press(local - origin);
                        window.set_cursor(grip.cursor());
                    }
                    HitTarget::TitleBar => self.title_bar.press(window, local),
                    HitTarget::Content => return false,
                }
                self.captured = Some(target);
                true
            }
            PointerKind::Move => match self.captured {
                Some(HitTarget::Edge(edge)) => {
                    let origin = self.layout.edge(edge).origin();
                    self.side_grips[edge_index(edge)].drag(&mut *window, local - origin);
                    self.update_grips(window.size());
                    true
                }
                Some(HitTarget::Corner(corner)) => {
                    let origin = self.layout.corner(corner).origin();
                    self.corner_grips[corner_index(corner)].drag(&mut *window, local - origin);
                    self.update_grips(window.size());
                    true
                }
                Some(HitTarget::TitleBar) => {
                    self.title_bar.pointer_move(window, local);
                    true
                }
                Some(HitTarget::Content) | None => {
                    let hover = self.hit_test(size, local);
                    window.set_cursor(self.cursor_for(hover));
                    false
                }
            },
            PointerKind::Release => {
                let consumed = match self.captured.take() {
                    Some(HitTarget::Edge(edge)) => {
                        self.side_grips[edge_index(edge)].release();
                        window.set_cursor(CursorShape::Arrow);
                        true
                    }
                    Some(HitTarget::Corner(corner)) => {
                        self.corner_grips[corner_index(corner)].release();
                        window.set_cursor(CursorShape::Arrow);
                        true
                    }
                    Some(HitTarget::TitleBar) => {
                        self.title_bar.release(window, local);
                        true
                    }
                    Some(HitTarget::Content) | None => false,
                };
                self.update_grips(window.size());
                consumed
            }
        }
    }

    /// The host lost the pointer grab without delivering a release.
    pub fn pointer_capture_lost<W: HostWindow>(&mut self, window: &mut W) {
        match self.captured.take() {
            Some(HitTarget::Edge(edge)) => {
                self.side_grips[edge_index(edge)].release();
                window.set_cursor(CursorShape::Arrow);
            }
            Some(HitTarget::Corner(corner)) => {
                self.corner_grips[corner_index(corner)].release();
                window.set_cursor(CursorShape::Arrow);
            }
            Some(HitTarget::TitleBar) => self.title_bar.cancel(window),
            Some(HitTarget::Content) | None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Overlay that never shows anything; these tests only exercise layout.
    struct NoPreview;

    impl Overlay for NoPreview {
        fn show(&mut self, _rect: WindowRect) {}

        fn hide(&mut self) {}

        fn is_visible(&self) -> bool {
            false
        }

        fn geometry(&self) -> Option<WindowRect> {
            None
        }
    }

    fn frame() -> FramelessWindow<NoPreview> {
        let mut w = FramelessWindow::new(WindowConfig::default(), NoPreview);
        w.update_grips(Size::new(400, 300));
        w
    }

    #[test]
    fn hit_test_prefers_corners_then_edges_then_title_bar() {
        let w = frame();
        let size = Size::new(400, 300);
        assert_eq!(
            w.hit_test(size, Point::new(1, 1)),
            HitTarget::Corner(ResizeCorner::TopLeft)
        );
        assert_eq!(
            w.hit_test(size, Point::new(395, 150)),
            HitTarget::Edge(ResizeEdge::Right)
        );
        assert_eq!(w.hit_test(size, Point::new(200, 20)), HitTarget::TitleBar);
        assert_eq!(w.hit_test(size, Point::new(200, 200)), HitTarget::Content);
    }

    #[test]
    fn grip_size_change_relayouts() {
        let mut w = frame();
        w.set_grip_size(0);
        assert_eq!(w.grip_size(), 1);
        assert_eq!(w.grip_layout().left, WindowRect::new(0, 1, 1, 298));
    }

    #[test]
    fn set_modes_reaches_title_bar() {
        let mut w = frame();
        let modes = GestureModes::default()
            .with_resize(crate::modes::GestureResizeMode::Never);
        w.set_modes(modes);
        assert_eq!(w.title_bar().modes(), modes);
        assert_eq!(w.config().modes, modes);
    }
}
