//! Gesture behaviour settings.
//!
//! The three axes are independent: every combination is valid, and the
//! decision functions in [`crate::policy`] combine them.

use std::str::FromStr;

use clap::ValueEnum;

use crate::error::ConfigError;

/// How a snap target reacts to the window's minimum size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum GestureResizeMode {
    /// Always apply the previewed geometry, ignoring the minimum size.
    Always,
    /// Offer only regions that already satisfy the minimum size.
    #[default]
    Acceptable,
    /// Grow undersized regions up to the minimum size.
    ShrinkAsPossible,
    /// Never offer snap gestures.
    Never,
}

/// Which screen sides take part in gestures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SidesUsingMode {
    #[default]
    Whole,
    IgnoreCorners,
    FullscreenOnly,
}

/// How the screen's orientation changes the gestures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ScreenOrientationMode {
    #[default]
    NoDifference,
    /// Portrait screens rotate the gesture set: left/right edges become the
    /// fullscreen gesture and top/bottom edges snap to halves.
    UseSpecial,
    /// Portrait screens only accept the fullscreen gesture.
    IgnorePortrait,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GestureModes {
    pub resize: GestureResizeMode,
    pub sides: SidesUsingMode,
    pub orientation: ScreenOrientationMode,
}

impl GestureModes {
    pub fn new(
        resize: GestureResizeMode,
        sides: SidesUsingMode,
        orientation: ScreenOrientationMode,
    ) -> Self {
        Self {
            resize,
            sides,
            orientation,
        }
    }

    pub fn with_resize(mut self, resize: GestureResizeMode) -> Self {
        self.resize = resize;
        self
    }

    pub fn with_sides(mut self, sides: SidesUsingMode) -> Self {
        self.sides = sides;
        self
    }

    pub fn with_orientation(mut self, orientation: ScreenOrientationMode) -> Self {
        self.orientation = orientation;
        self
    }
}

fn parse_mode<T: ValueEnum>(axis: &'static str, value: &str) -> Result<T, ConfigError> {
    let name = value.trim().replace('_', "-");
    T::from_str(&name, true).map_err(|_| ConfigError::UnknownMode {
        axis,
        value: value.to_string(),
    })
}

impl FromStr for GestureResizeMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_mode("resize", s)
    }
}

impl FromStr for SidesUsingMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_mode("sides", s)
    }
}

impl FromStr for ScreenOrientationMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_mode("orientation", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let modes = GestureModes::default();
        assert_eq!(modes.resize, GestureResizeMode::Acceptable);
        assert_eq!(modes.sides, SidesUsingMode::Whole);
        assert_eq!(modes.orientation, ScreenOrientationMode::NoDifference);
    }

    #[test]
    fn parses_kebab_and_snake_case_names() {
        assert_eq!(
            "shrink-as-possible".parse::<GestureResizeMode>(),
            Ok(GestureResizeMode::ShrinkAsPossible)
        );
        assert_eq!(
            "Ignore-Corners".parse::<SidesUsingMode>(),
            Ok(SidesUsingMode::IgnoreCorners)
        );
        assert_eq!(
            " use-special ".parse::<ScreenOrientationMode>(),
            Ok(ScreenOrientationMode::UseSpecial)
        );
        assert_eq!(
            "no_difference".parse::<ScreenOrientationMode>(),
            Ok(ScreenOrientationMode::NoDifference)
        );
    }

    #[test]
    fn unknown_mode_reports_axis() {
        let err = "sideways".parse::<ScreenOrientationMode>().unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownMode {
                axis: "orientation",
                value: "sideways".into()
            }
        );
        assert_eq!(err.to_string(), "unknown orientation mode: \"sideways\"");
    }
}
