//! Window-manipulation engine for frameless top-level windows: title-bar
//! dragging, edge and corner resize grips, and snap-to-screen-region
//! gestures with a translucent preview.
//!
//! The engine never talks to a windowing toolkit directly. Hosts implement
//! [`host::HostWindow`] and [`host::Overlay`] and feed pointer events into a
//! [`window::FramelessWindow`]. [`terminal`] is a complete host that runs in
//! a terminal.

pub mod config;
pub mod drag;
pub mod error;
pub mod geometry;
pub mod grips;
pub mod host;
pub mod modes;
pub mod pointer;
pub mod policy;
pub mod screen;
pub mod terminal;
pub mod tracing_sub;
pub mod window;

pub use config::WindowConfig;
pub use error::ConfigError;
pub use geometry::{Point, Size, WindowRect};
pub use host::{CursorShape, HostWindow, Overlay};
pub use modes::{GestureModes, GestureResizeMode, ScreenOrientationMode, SidesUsingMode};
pub use window::{FramelessWindow, PointerEvent, PointerKind};
