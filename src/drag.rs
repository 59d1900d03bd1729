//! Title-bar press/move/release handling.
//!
//! A press starts a session. Moves classify the pointer and show or hide
//! the snap preview. On release, a visible preview is committed verbatim;
//! otherwise the window is moved by the drag delta and, if it was sitting in
//! a snapped geometry, restored to the size it had before the first snap.

use crate::geometry::{Point, Size, WindowRect};
use crate::host::{CursorShape, HostWindow, Overlay};
use crate::modes::GestureModes;
use crate::pointer::{DEFAULT_EDGE_MARGIN, PointerSample};
use crate::policy;
use crate::screen::{Screen, ScreenRegions};

/// State carried between the events of a title-bar drag.
///
/// `gestured` and `normal_size` outlive a single press: they persist across
/// consecutive snaps until a plain release restores the window.
#[derive(Debug, Clone, Default)]
pub struct DragSession {
    press: Option<PointerSample>,
    release: Option<PointerSample>,
    gestured: bool,
    normal_size: Option<Size>,
}

impl DragSession {
    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    pub fn is_gestured(&self) -> bool {
        self.gestured
    }

    /// Window size right before the first snap of the current gesture run.
    pub fn normal_size(&self) -> Option<Size> {
        self.normal_size
    }

    pub fn press_sample(&self) -> Option<&PointerSample> {
        self.press.as_ref()
    }

    pub fn last_release(&self) -> Option<&PointerSample> {
        self.release.as_ref()
    }
}

#[derive(Debug)]
pub struct TitleBar<O> {
    overlay: O,
    session: DragSession,
    modes: GestureModes,
    edge_margin: i32,
    bound: Option<(Screen, ScreenRegions)>,
}

impl<O: Overlay> TitleBar<O> {
    pub fn new(overlay: O, modes: GestureModes) -> Self {
        Self {
            overlay,
            session: DragSession::default(),
            modes,
            edge_margin: DEFAULT_EDGE_MARGIN,
            bound: None,
        }
    }

    pub fn with_edge_margin(mut self, margin: i32) -> Self {
        self.edge_margin = margin;
        self
    }

    pub fn modes(&self) -> GestureModes {
        self.modes
    }

    pub fn set_modes(&mut self, modes: GestureModes) {
        self.modes = modes;
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    pub fn overlay(&self) -> &O {
        &self.overlay
    }

    pub fn is_previewing(&self) -> bool {
        self.overlay.is_visible()
    }

    /// Regions of the screen the title bar is currently bound to.
    pub fn regions(&self) -> Option<&ScreenRegions> {
        self.bound.as_ref().map(|(_, regions)| regions)
    }

    /// Recomputes the screen regions when the host reports a different
    /// screen than the one they were computed for.
    pub fn bind_screen(&mut self, screen: Screen) -> (Screen, ScreenRegions) {
        match self.bound {
            Some((bound, regions)) if bound == screen => (bound, regions),
            _ => {
                tracing::debug!(geometry = ?screen.geometry, orientation = ?screen.orientation, "binding screen");
                let regions = ScreenRegions::partition(screen.geometry);
                self.bound = Some((screen, regions));
                (screen, regions)
            }
        }
    }

    fn classify<W: HostWindow + ?Sized>(&mut self, window: &W, local: Point) -> PointerSample {
        let (screen, regions) = match self.bound {
            Some(bound) => bound,
            None => self.bind_screen(window.screen()),
        };
        PointerSample::classify(window.geometry(), screen, &regions, local, self.edge_margin)
    }

    pub fn press<W: HostWindow + ?Sized>(&mut self, window: &mut W, local: Point) {
        self.bind_screen(window.screen());
        let sample = self.classify(window, local);
        tracing::debug!(point = ?sample.point, relative = ?sample.relative, "title bar pressed");
        self.session.press = Some(sample);
        window.set_cursor(CursorShape::Grabbing);
    }

    pub fn pointer_move<W: HostWindow + ?Sized>(&mut self, window: &W, local: Point) {
        if !self.session.is_pressed() {
            return;
        }
        let sample = self.classify(window, local);
        tracing::trace!(point = ?sample.point, side = ?sample.side, "title bar drag");
        let target = self
            .bound
            .as_ref()
            .and_then(|(_, regions)| {
                policy::snap_target(&self.modes, &sample, regions, window.minimum_size())
            });
        match target {
            Some(rect) => self.overlay.show(rect),
            None => self.overlay.hide(),
        }
    }

    pub fn release<W: HostWindow + ?Sized>(&mut self, window: &mut W, local: Point) {
        let release = self.classify(window, local);
        self.session.release = Some(release);
        window.set_cursor(CursorShape::Arrow);

        let Some(press) = self.session.press.take() else {
            return;
        };

        if self.overlay.is_visible() {
            self.commit(window);
            return;
        }

        self.move_by_drag(window, &press, &release);
        if self.session.gestured {
            self.restore_normal_size(window, &press);
            self.session.gestured = false;
        }
    }

    /// Ends the session without touching the window geometry, for when the
    /// pointer grab is lost without a release.
    pub fn cancel<W: HostWindow + ?Sized>(&mut self, window: &mut W) {
        if self.session.press.take().is_some() {
            tracing::debug!("title bar drag cancelled");
        }
        self.overlay.hide();
        window.set_cursor(CursorShape::Arrow);
    }

    fn commit<W: HostWindow + ?Sized>(&mut self, window: &mut W) {
        let target = self.overlay.geometry();
        self.overlay.hide();
        let Some(target) = target else {
            return;
        };
        if !self.session.gestured {
            self.session.normal_size = Some(window.size());
        }
        self.session.gestured = true;
        tracing::debug!(rect = ?target, "snap committed");
        window.set_geometry(target);
        window.request_repaint();
    }

    fn move_by_drag<W: HostWindow + ?Sized>(
        &mut self,
        window: &mut W,
        press: &PointerSample,
        release: &PointerSample,
    ) {
        let delta = release.point - press.point;
        let position = window.position();
        window.move_to(position + delta);
    }

    /// Puts the window back to its pre-snap size, keeping the grabbed point
    /// of the title bar under the pointer when the window gets narrower.
    fn restore_normal_size<W: HostWindow + ?Sized>(
        &mut self,
        window: &mut W,
        press: &PointerSample,
    ) {
        let (Some(normal), Some(&release)) =
            (self.session.normal_size, self.session.last_release())
        else {
            return;
        };
        let width = window.size().width;
        tracing::debug!(size = ?normal, "restoring size");
        window.resize(normal);
        if width <= normal.width {
            window.request_repaint();
            return;
        }

        let restored = window.geometry();
        let shift = if release.point.x > press.point.x {
            press.local.x - scale(restored.width, press.relative.0)
        } else {
            let after = match self.bound.as_ref() {
                Some((_, regions)) => release.reclassify(restored, regions, self.edge_margin),
                None => release,
            };
            let drift = (press.relative.0 - after.relative.0).abs();
            scale(restored.width, drift)
        };
        window.move_to(restored.origin().offset(shift, 0));
        window.request_repaint();
    }
}

/// Whole pixels covered by `fraction` of `width`, truncated toward zero.
fn scale(width: i32, fraction: f64) -> i32 {
    (width as f64 * fraction) as i32
}

/// Where the title bar sits inside a window of the given size.
pub fn title_bar_rect(window: Size, inset: i32, height: i32) -> WindowRect {
    WindowRect::new(
        inset,
        inset,
        (window.width - 2 * inset).max(0),
        height.min((window.height - 2 * inset).max(0)),
    )
}
