//! Reference host running the engine inside a terminal: the terminal is the
//! screen, cells are pixels, and the window is drawn with ratatui.

use std::io;
use std::time::Duration;

use clap::ValueEnum;
use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use indoc::indoc;
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::buffer::Buffer;
use ratatui::prelude::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph, Widget};

use crate::config::WindowConfig;
use crate::geometry::{Point, Size, WindowRect};
use crate::host::{CursorShape, HostWindow, Overlay};
use crate::screen::Screen;
use crate::window::{FramelessWindow, HitTarget, PointerEvent, PointerKind};

const HELP: &str = indoc! {"
    Drag the title bar to a screen edge or corner to snap.
    Drag it away again to restore the previous size.
    Drag the border to resize. Press q to quit.
"};

/// Snap preview drawn as a filled block of `color`.
#[derive(Debug, Clone)]
pub struct ShadowOverlay {
    color: Color,
    rect: Option<WindowRect>,
    visible: bool,
}

impl ShadowOverlay {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            rect: None,
            visible: false,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl Overlay for ShadowOverlay {
    fn show(&mut self, rect: WindowRect) {
        self.rect = Some(rect);
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn geometry(&self) -> Option<WindowRect> {
        self.rect
    }
}

#[derive(Debug, Clone)]
pub struct TerminalWindow {
    title: String,
    geometry: WindowRect,
    minimum: Size,
    screen: Screen,
    cursor: CursorShape,
    dirty: bool,
}

impl TerminalWindow {
    pub fn new(
        title: impl Into<String>,
        geometry: WindowRect,
        minimum: Size,
        screen: Screen,
    ) -> Self {
        Self {
            title: title.into(),
            geometry,
            minimum,
            screen,
            cursor: CursorShape::Arrow,
            dirty: true,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn cursor(&self) -> CursorShape {
        self.cursor
    }

    pub fn set_screen(&mut self, screen: Screen) {
        self.screen = screen;
        self.dirty = true;
    }

    /// Returns whether the window changed since the last call.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl HostWindow for TerminalWindow {
    fn geometry(&self) -> WindowRect {
        self.geometry
    }

    /// The window never gets smaller than its minimum size.
    fn set_geometry(&mut self, rect: WindowRect) {
        self.geometry = WindowRect {
            width: rect.width.max(self.minimum.width),
            height: rect.height.max(self.minimum.height),
            ..rect
        };
    }

    fn minimum_size(&self) -> Size {
        self.minimum
    }

    fn screen(&self) -> Screen {
        self.screen
    }

    fn set_cursor(&mut self, cursor: CursorShape) {
        self.cursor = cursor;
    }

    fn request_repaint(&mut self) {
        self.dirty = true;
    }
}

/// Maps a left-button terminal mouse event to a window-local pointer event.
pub fn pointer_event(mouse: &MouseEvent, origin: Point) -> Option<PointerEvent> {
    let kind = match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => PointerKind::Press,
        MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => PointerKind::Move,
        MouseEventKind::Up(MouseButton::Left) => PointerKind::Release,
        _ => return None,
    };
    Some(PointerEvent {
        kind,
        position: Point::new(mouse.column as i32, mouse.row as i32) - origin,
    })
}

pub enum ControlFlow {
    Continue,
    Quit,
}

pub struct App {
    window: TerminalWindow,
    frame: FramelessWindow<ShadowOverlay>,
}

impl App {
    /// Opens a window of `initial` size (at least `minimum`) centered on a
    /// screen covering `area`.
    pub fn new(config: WindowConfig, minimum: Size, initial: Size, area: Rect) -> Self {
        let screen = Screen::from_geometry(WindowRect::from(area));
        let width = initial.width.max(minimum.width);
        let height = initial.height.max(minimum.height);
        let geo = WindowRect::new(
            (area.width as i32 - width) / 2,
            (area.height as i32 - height) / 2,
            width,
            height,
        );
        let window = TerminalWindow::new("snap-frame", geo, minimum, screen);
        let mut frame = FramelessWindow::new(config, ShadowOverlay::new(Color::Blue));
        frame.update_grips(geo.size());
        Self { window, frame }
    }

    pub fn window(&self) -> &TerminalWindow {
        &self.window
    }

    pub fn frame(&self) -> &FramelessWindow<ShadowOverlay> {
        &self.frame
    }

    pub fn handle_event(&mut self, event: &Event) -> ControlFlow {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let ctrl_c = key.code == KeyCode::Char('c')
                    && key.modifiers.contains(KeyModifiers::CONTROL);
                if ctrl_c || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                    return ControlFlow::Quit;
                }
            }
            Event::Mouse(mouse) => {
                if let Some(pointer) = pointer_event(mouse, self.window.position()) {
                    self.frame.handle_pointer(&mut self.window, pointer);
                    // cursor and session state are shown in the window body
                    self.window.request_repaint();
                }
            }
            Event::Resize(width, height) => {
                let area = Rect::new(0, 0, *width, *height);
                tracing::debug!(?area, "terminal resized");
                self.window
                    .set_screen(Screen::from_geometry(WindowRect::from(area)));
            }
            Event::FocusLost => {
                self.frame.pointer_capture_lost(&mut self.window);
                self.window.request_repaint();
            }
            _ => {}
        }
        ControlFlow::Continue
    }

    fn status_lines(&self) -> Vec<Line<'static>> {
        let config = self.frame.config();
        let session = self.frame.title_bar().session();
        let modes = format!(
            "resize: {}  sides: {}  orientation: {}",
            mode_name(config.modes.resize),
            mode_name(config.modes.sides),
            mode_name(config.modes.orientation),
        );
        let normal = session
            .normal_size()
            .map(|s| format!("{}x{}", s.width, s.height))
            .unwrap_or_else(|| "-".to_string());
        let geo = self.window.geometry();
        let state = format!(
            "geometry: {}x{}+{}+{}  gestured: {}  restore: {}  cursor: {:?}",
            geo.width,
            geo.height,
            geo.x,
            geo.y,
            if session.is_gestured() { "yes" } else { "no" },
            normal,
            self.window.cursor(),
        );
        let mut lines = vec![Line::from(modes), Line::from(state), Line::from("")];
        lines.extend(HELP.lines().map(|l| Line::from(l.to_string())));
        lines
    }
}

fn mode_name<T: ValueEnum>(value: T) -> String {
    value
        .to_possible_value()
        .map(|v| v.get_name().to_string())
        .unwrap_or_default()
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let overlay = self.frame.title_bar().overlay();
        if overlay.is_visible()
            && let Some(rect) = overlay.geometry().and_then(|r| r.to_cell_rect(area))
        {
            Block::new()
                .style(Style::default().bg(overlay.color()))
                .render(rect, buf);
        }

        let geo = self.window.geometry();
        let Some(outer) = geo.to_cell_rect(area) else {
            return;
        };
        Clear.render(outer, buf);

        let grabbed = self.frame.captured().is_some_and(|t| t != HitTarget::TitleBar);
        let border_style = if grabbed {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Block::bordered().border_style(border_style).render(outer, buf);

        let bar = self.frame.title_bar_rect(geo.size()).translated(geo.x, geo.y);
        if let Some(bar) = bar.to_cell_rect(area) {
            let style = Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD);
            Paragraph::new(self.window.title())
                .centered()
                .style(style)
                .render(bar, buf);
        }

        let grip = self.frame.grip_size();
        let bar_height = self.frame.config().titlebar_height;
        let content = WindowRect::new(
            geo.x + grip,
            geo.y + grip + bar_height,
            geo.width - 2 * grip,
            geo.height - 2 * grip - bar_height,
        );
        if let Some(content) = content.to_cell_rect(area) {
            Paragraph::new(self.status_lines()).render(content, buf);
        }
    }
}

/// Drives `app` until the user quits, redrawing after each batch of events
/// that changed something on screen.
pub fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    poll_interval: Duration,
) -> io::Result<()> {
    loop {
        if app.window.take_dirty() {
            terminal
                .draw(|frame| frame.render_widget(&*app, frame.area()))
                .map_err(|e| io::Error::other(e.to_string()))?;
        }
        if !event::poll(poll_interval)? {
            continue;
        }
        // Drain bursts of mouse motion before redrawing.
        loop {
            let event = event::read()?;
            if let ControlFlow::Quit = app.handle_event(&event) {
                return Ok(());
            }
            if !event::poll(Duration::from_millis(0))? {
                break;
            }
        }
    }
}
