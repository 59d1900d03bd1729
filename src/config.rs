//! Settings fixed by the owning application before the window is used.

use crate::error::ConfigError;
use crate::grips::MIN_GRIP_SIZE;
use crate::modes::GestureModes;
use crate::pointer::DEFAULT_EDGE_MARGIN;

pub const DEFAULT_GRIP_SIZE: i32 = 12;
pub const DEFAULT_TITLEBAR_HEIGHT: i32 = 44;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowConfig {
    pub modes: GestureModes,
    /// Thickness of the resize grips around the window border.
    pub grip_size: i32,
    pub titlebar_height: i32,
    /// Distance from a screen edge that arms a snap gesture.
    pub edge_margin: i32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            modes: GestureModes::default(),
            grip_size: DEFAULT_GRIP_SIZE,
            titlebar_height: DEFAULT_TITLEBAR_HEIGHT,
            edge_margin: DEFAULT_EDGE_MARGIN,
        }
    }
}

impl WindowConfig {
    pub fn with_modes(mut self, modes: GestureModes) -> Self {
        self.modes = modes;
        self
    }

    /// Values below [`MIN_GRIP_SIZE`] are raised to it.
    pub fn with_grip_size(mut self, size: i32) -> Self {
        self.grip_size = size.max(MIN_GRIP_SIZE);
        self
    }

    pub fn with_titlebar_height(mut self, height: i32) -> Self {
        self.titlebar_height = height;
        self
    }

    pub fn with_edge_margin(mut self, margin: i32) -> Self {
        self.edge_margin = margin;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grip_size < 1 {
            return Err(ConfigError::GripSize(self.grip_size));
        }
        if self.titlebar_height <= 0 {
            return Err(ConfigError::TitlebarHeight(self.titlebar_height));
        }
        if self.edge_margin <= 0 {
            return Err(ConfigError::EdgeMargin(self.edge_margin));
        }
        Ok(())
    }
}
