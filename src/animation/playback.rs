//! Preview/animate state machine driven by one `tick` per rendered frame.

use std::fmt;
use std::path::PathBuf;

use super::path::CameraPath;
use super::waypoints::WaypointStore;
use crate::camera::CameraPose;
use crate::error::PioneerError;
use crate::export::{next_frame_index, FrameRequest};
use crate::options::OutputOptions;

// ── States and events ────────────────────────────────────────────────────

/// Which kind of playback a session runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackMode {
    /// Real-time preview, nothing written to disk.
    Preview,
    /// Frame-by-frame render with one exported image per tick.
    Animate,
}

/// Externally visible controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// No session; waypoints may be edited.
    #[default]
    Idle,
    /// A preview session is running.
    Previewing,
    /// An animate session is running.
    Animating,
}

impl From<PlaybackMode> for PlaybackState {
    fn from(mode: PlaybackMode) -> Self {
        match mode {
            PlaybackMode::Preview => Self::Previewing,
            PlaybackMode::Animate => Self::Animating,
        }
    }
}

/// End of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// Elapsed time reached the target duration.
    Finished(PlaybackMode),
    /// The session was cancelled before finishing.
    Cancelled(PlaybackMode),
}

impl PlaybackEvent {
    /// Mode of the session that ended.
    pub fn mode(self) -> PlaybackMode {
        match self {
            Self::Finished(mode) | Self::Cancelled(mode) => mode,
        }
    }
}

impl fmt::Display for PlaybackEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Finished(PlaybackMode::Preview) => "Preview complete",
            Self::Finished(PlaybackMode::Animate) => "Animation complete",
            Self::Cancelled(PlaybackMode::Preview) => "Preview cancelled",
            Self::Cancelled(PlaybackMode::Animate) => "Animation cancelled",
        })
    }
}

/// Observer the controller calls synchronously from `tick` and `cancel`.
///
/// Every method has a no-op default, so a host implements only what it
/// wires up. `()` is the listener that ignores everything.
pub trait PlaybackListener {
    /// A new camera pose was sampled.
    fn pose_changed(&mut self, _pose: &CameraPose) {}

    /// Progress or result text for a status bar.
    fn status_changed(&mut self, _status: &str) {}

    /// A session finished or was cancelled.
    fn playback_event(&mut self, _event: PlaybackEvent) {}

    /// Capture the current rendered frame. Called once per animate tick,
    /// after `pose_changed` for the same tick.
    fn export_frame(
        &mut self,
        _request: &FrameRequest,
    ) -> Result<(), PioneerError> {
        Ok(())
    }
}

impl PlaybackListener for () {}

// ── Session ──────────────────────────────────────────────────────────────

/// State of one running preview or animation. Created when playback
/// starts, dropped when the controller returns to idle.
#[derive(Debug, Clone)]
pub struct PlaybackSession {
    mode: PlaybackMode,
    begin_keyframe: i64,
    current_keyframe: i64,
    path: CameraPath,
    target_fps: f64,
    target_duration: f64,
    resolution: [u32; 2],
    directory: PathBuf,
    next_frame: u64,
}

impl PlaybackSession {
    /// Mode this session runs in.
    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    /// Camera path snapshot taken when the session started.
    pub fn path(&self) -> &CameraPath {
        &self.path
    }

    /// Ticks since the session started.
    pub fn frames(&self) -> i64 {
        self.current_keyframe - self.begin_keyframe
    }

    /// Playback time at the current keyframe in milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.frames() as f64 * 1000.0 / self.target_fps
    }

    /// Target duration in milliseconds.
    pub fn duration_ms(&self) -> f64 {
        self.target_duration * 1000.0
    }

    /// Index the next exported frame will get.
    pub fn next_frame(&self) -> u64 {
        self.next_frame
    }

    /// Pose at `elapsed_ms`, paced so the whole path takes the target
    /// duration at constant speed.
    pub fn sample(&self, elapsed_ms: f64) -> CameraPose {
        let total = self.path.length();
        let per_ms = total / self.target_duration / 1000.0;
        let s = (elapsed_ms * per_ms).min(total).max(0.0);
        self.path.sample_at_arc_length(s)
    }

    fn take_frame_request(&mut self) -> FrameRequest {
        let request =
            FrameRequest::new(&self.directory, self.next_frame, self.resolution);
        self.next_frame += 1;
        request
    }
}

// ── Controller ───────────────────────────────────────────────────────────

/// Owns the recorded waypoints and at most one playback session.
///
/// Waypoints are locked while a session runs. Starting playback snapshots
/// them into a [`CameraPath`] (splines plus a freshly built arc-length
/// table) that stays fixed until the session ends.
#[derive(Debug, Default)]
pub struct PlaybackController {
    waypoints: WaypointStore,
    keyframe: i64,
    session: Option<PlaybackSession>,
    pose: CameraPose,
}

impl PlaybackController {
    /// Idle controller with no waypoints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded waypoints.
    pub fn waypoints(&self) -> &WaypointStore {
        &self.waypoints
    }

    /// Mutable access for recording; mutations are rejected while playing.
    pub fn waypoints_mut(&mut self) -> &mut WaypointStore {
        &mut self.waypoints
    }

    /// Current state.
    pub fn state(&self) -> PlaybackState {
        self.session
            .as_ref()
            .map_or(PlaybackState::Idle, |s| s.mode.into())
    }

    /// Whether no session is running.
    pub fn is_idle(&self) -> bool {
        self.session.is_none()
    }

    /// Running session, if any.
    pub fn session(&self) -> Option<&PlaybackSession> {
        self.session.as_ref()
    }

    /// Most recently sampled pose.
    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    /// Keyframe counter, advanced once per tick while playing.
    pub fn keyframe(&self) -> i64 {
        self.keyframe
    }

    /// Start a real-time preview. Returns false, leaving the controller
    /// unchanged, if a session is already running, fewer than two
    /// waypoints exist, or the output timing is unusable.
    pub fn preview(&mut self, output: &OutputOptions) -> bool {
        self.start(PlaybackMode::Preview, output)
    }

    /// Start rendering frames into `output.directory`, continuing after
    /// the highest numbered frame already there. Same preconditions as
    /// [`Self::preview`].
    pub fn animate(&mut self, output: &OutputOptions) -> bool {
        self.start(PlaybackMode::Animate, output)
    }

    fn start(&mut self, mode: PlaybackMode, output: &OutputOptions) -> bool {
        if let Some(session) = &self.session {
            log::debug!("{mode:?} ignored: {:?} already running", session.mode);
            return false;
        }
        if !(output.target_fps > 0.0 && output.target_duration > 0.0) {
            log::warn!(
                "{mode:?} refused: fps {} / duration {}",
                output.target_fps,
                output.target_duration
            );
            return false;
        }
        let Some(path) = CameraPath::new(&self.waypoints) else {
            log::debug!(
                "{mode:?} needs at least 2 waypoints, have {}",
                self.waypoints.len()
            );
            return false;
        };

        let next_frame = match mode {
            PlaybackMode::Preview => 0,
            PlaybackMode::Animate => next_frame_index(&output.directory)
                .unwrap_or_else(|e| {
                    log::error!(
                        "Cannot scan {} for frames, starting at 0: {e}",
                        output.directory.display()
                    );
                    0
                }),
        };

        let session = PlaybackSession {
            mode,
            begin_keyframe: self.keyframe,
            current_keyframe: self.keyframe,
            path,
            target_fps: output.target_fps,
            target_duration: output.target_duration,
            resolution: output.resolution,
            directory: output.directory.clone(),
            next_frame,
        };
        self.pose = session.sample(0.0);
        log::debug!(
            "{mode:?} started: {} waypoints, length {:.3}, {} frames from {next_frame}",
            self.waypoints.len(),
            session.path.length(),
            output.frame_count()
        );
        self.waypoints.set_locked(true);
        self.session = Some(session);
        true
    }

    /// Stop the running session immediately. Returns `None` when idle.
    pub fn cancel(
        &mut self,
        listener: &mut impl PlaybackListener,
    ) -> Option<PlaybackEvent> {
        let session = self.end_session()?;
        let event = PlaybackEvent::Cancelled(session.mode);
        log::info!("{event} after {} frames", session.frames());
        listener.playback_event(event);
        Some(event)
    }

    /// Advance the running session by one frame.
    ///
    /// Samples and reports the pose for the new keyframe, requests a frame
    /// export when animating, then either reports progress or ends the
    /// session once the target duration is reached. Does nothing when idle.
    pub fn tick(
        &mut self,
        listener: &mut impl PlaybackListener,
    ) -> Option<PlaybackEvent> {
        let session = self.session.as_mut()?;
        self.keyframe += 1;
        session.current_keyframe = self.keyframe;

        let elapsed = session.elapsed_ms();
        self.pose = session.sample(elapsed);
        listener.pose_changed(&self.pose);

        if session.mode == PlaybackMode::Animate {
            let request = session.take_frame_request();
            if let Err(e) = listener.export_frame(&request) {
                log::error!("Failed to export frame {}: {e}", request.index);
            }
        }

        if elapsed < session.duration_ms() {
            listener.status_changed(&format!(
                "Animating keyframes: {:.2} / {:.2} (s)",
                elapsed / 1000.0,
                session.target_duration
            ));
            return None;
        }

        let session = self.end_session()?;
        let event = PlaybackEvent::Finished(session.mode);
        log::info!("{event} after {} frames", session.frames());
        listener.playback_event(event);
        Some(event)
    }

    fn end_session(&mut self) -> Option<PlaybackSession> {
        let session = self.session.take()?;
        self.waypoints.set_locked(false);
        Some(session)
    }
}
