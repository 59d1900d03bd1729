//! Capabilities the engine needs from the windowing toolkit hosting it.

use crate::geometry::{Point, Size, WindowRect};
use crate::screen::Screen;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CursorShape {
    #[default]
    Arrow,
    Grabbing,
    ResizeHorizontal,
    ResizeVertical,
    /// Top-left to bottom-right diagonal.
    ResizeMainDiagonal,
    /// Top-right to bottom-left diagonal.
    ResizeAntiDiagonal,
}

pub trait HostWindow {
    /// Screen-space geometry of the whole frameless window.
    fn geometry(&self) -> WindowRect;
    fn set_geometry(&mut self, rect: WindowRect);
    fn minimum_size(&self) -> Size;
    /// The screen the window currently sits on.
    fn screen(&self) -> Screen;
    fn set_cursor(&mut self, cursor: CursorShape);

    fn position(&self) -> Point {
        self.geometry().origin()
    }

    fn size(&self) -> Size {
        self.geometry().size()
    }

    fn move_to(&mut self, position: Point) {
        let size = self.size();
        self.set_geometry(WindowRect::from_parts(position, size));
    }

    fn resize(&mut self, size: Size) {
        let position = self.position();
        self.set_geometry(WindowRect::from_parts(position, size));
    }

    fn request_repaint(&mut self) {}
}

impl<T: HostWindow + ?Sized> HostWindow for &mut T {
    fn geometry(&self) -> WindowRect {
        (**self).geometry()
    }

    fn set_geometry(&mut self, rect: WindowRect) {
        (**self).set_geometry(rect)
    }

    fn minimum_size(&self) -> Size {
        (**self).minimum_size()
    }

    fn screen(&self) -> Screen {
        (**self).screen()
    }

    fn set_cursor(&mut self, cursor: CursorShape) {
        (**self).set_cursor(cursor)
    }

    fn move_to(&mut self, position: Point) {
        (**self).move_to(position)
    }

    fn resize(&mut self, size: Size) {
        (**self).resize(size)
    }

    fn request_repaint(&mut self) {
        (**self).request_repaint()
    }
}

/// Translucent, non-interactive preview of a snap target. Its visibility is
/// the only record of whether a gesture is armed.
pub trait Overlay {
    fn show(&mut self, rect: WindowRect);
    fn hide(&mut self);
    fn is_visible(&self) -> bool;
    /// Geometry last passed to [`Overlay::show`].
    fn geometry(&self) -> Option<WindowRect>;
}
