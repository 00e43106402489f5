//! Crate-level error types.

use std::fmt;

/// Errors produced by the pioneer crate.
#[derive(Debug)]
pub enum PioneerError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Demo preset file could not be parsed.
    PresetParse(String),
    /// A configuration value was rejected at its setter.
    InvalidOption(String),
    /// The frame exporter failed to write a frame.
    Export(String),
}

impl fmt::Display for PioneerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::PresetParse(msg) => write!(f, "preset parse error: {msg}"),
            // Shown verbatim in the status bar.
            Self::InvalidOption(msg) => f.write_str(msg),
            Self::Export(msg) => write!(f, "frame export error: {msg}"),
        }
    }
}

impl std::error::Error for PioneerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PioneerError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
