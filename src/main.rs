use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{
    DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::Rect;
use tracing::Level;

use snap_frame::terminal::{App, run};
use snap_frame::tracing_sub::{self, LogTarget};
use snap_frame::{
    GestureModes, GestureResizeMode, ScreenOrientationMode, SidesUsingMode, Size, WindowConfig,
};

#[derive(Parser, Debug)]
#[command(
    name = "snap-frame",
    version = env!("CARGO_PKG_VERSION"),
    about = "Frameless window with snap gestures, running in the terminal"
)]
struct Cli {
    /// How the snap target reacts to the window's minimum size.
    #[arg(long, value_enum, default_value_t = GestureResizeMode::Acceptable)]
    resize_mode: GestureResizeMode,

    /// Which screen sides take part in gestures.
    #[arg(long, value_enum, default_value_t = SidesUsingMode::Whole)]
    sides_mode: SidesUsingMode,

    /// How portrait screens change the gestures.
    #[arg(long, value_enum, default_value_t = ScreenOrientationMode::NoDifference)]
    orientation_mode: ScreenOrientationMode,

    /// Resize grip thickness, in cells.
    #[arg(long, default_value_t = 1)]
    grip_size: i32,

    /// Title bar height, in cells.
    #[arg(long, default_value_t = 1)]
    titlebar_height: i32,

    /// Distance from the terminal border that arms a snap, in cells.
    #[arg(long, default_value_t = 1)]
    edge_margin: i32,

    #[arg(long, default_value_t = 24)]
    min_width: i32,

    #[arg(long, default_value_t = 8)]
    min_height: i32,

    /// Append debug logs to this file.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn window_config(&self) -> WindowConfig {
        WindowConfig::default()
            .with_modes(GestureModes::new(
                self.resize_mode,
                self.sides_mode,
                self.orientation_mode,
            ))
            .with_grip_size(self.grip_size)
            .with_titlebar_height(self.titlebar_height)
            .with_edge_margin(self.edge_margin)
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let config = cli.window_config();
    config.validate().map_err(io::Error::other)?;

    let log_target = match &cli.log_file {
        Some(path) => LogTarget::file(path)?,
        None => LogTarget::Discard,
    };
    tracing_sub::init_default(log_target, Level::DEBUG);

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableFocusChange)?;
    terminal::enable_raw_mode()?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let area = terminal.size()?;
    let minimum = Size::new(cli.min_width, cli.min_height);
    let initial = Size::new(area.width as i32 / 2, area.height as i32 / 2);
    let screen = Rect::new(0, 0, area.width, area.height);
    let mut app = App::new(config, minimum, initial, screen);

    let result = run(&mut terminal, &mut app, Duration::from_millis(16));

    terminal::disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}
