use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown {axis} mode: {value:?}")]
    UnknownMode { axis: &'static str, value: String },
    #[error("title bar height must be positive, got {0}")]
    TitlebarHeight(i32),
    #[error("edge margin must be positive, got {0}")]
    EdgeMargin(i32),
    #[error("grip size must be at least 1, got {0}")]
    GripSize(i32),
}
