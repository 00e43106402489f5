//! Numbered frame output for rendered animations.
//!
//! The engine never encodes images itself. While animating it produces one
//! [`FrameRequest`] per tick and hands it to the host through
//! [`PlaybackListener::export_frame`](crate::animation::PlaybackListener::export_frame).

use std::path::{Path, PathBuf};

use crate::error::PioneerError;

/// File extension of exported frames.
pub const FRAME_EXTENSION: &str = "png";

/// Capture the current rendered frame and write it to `path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameRequest {
    /// Sequential frame number, also the file stem.
    pub index: u64,
    /// Capture size in pixels (width, height).
    pub resolution: [u32; 2],
    /// Destination file, `<directory>/<index>.png`.
    pub path: PathBuf,
}

impl FrameRequest {
    /// Request for frame `index` inside `directory`.
    pub fn new(directory: &Path, index: u64, resolution: [u32; 2]) -> Self {
        Self {
            index,
            resolution,
            path: frame_path(directory, index),
        }
    }
}

/// Path of frame `index` inside `directory`.
pub fn frame_path(directory: &Path, index: u64) -> PathBuf {
    directory.join(format!("{index}.{FRAME_EXTENSION}"))
}

/// Index to give the next exported frame so existing output is never
/// overwritten: one past the highest numbered `.png` in `directory`, or 0.
///
/// Files whose stem is not a plain number are ignored.
pub fn next_frame_index(directory: &Path) -> Result<u64, PioneerError> {
    let mut next = 0;
    for entry in std::fs::read_dir(directory)? {
        let path = entry?.path();
        if !path.extension().is_some_and(|ext| ext == FRAME_EXTENSION) {
            continue;
        }
        let index = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .and_then(|stem| stem.parse::<u64>().ok());
        if let Some(index) = index {
            next = next.max(index.saturating_add(1));
        }
    }
    Ok(next)
}
