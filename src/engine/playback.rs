//! Playback and demo methods for PioneerEngine

use super::PioneerEngine;
use crate::animation::{PlaybackEvent, PlaybackListener, PlaybackMode};
use crate::demo::{DemoSequencer, Preset};
use crate::error::PioneerError;
use crate::options::wrap_keyframe;

impl PioneerEngine {
    /// Start playback requested directly by the user; a running demo is
    /// abandoned only if the new session actually starts.
    pub(super) fn start_manual(
        &mut self,
        mode: PlaybackMode,
        listener: &mut impl PlaybackListener,
    ) -> bool {
        let started = self.start(mode, listener);
        if started {
            self.demo = None;
        }
        started
    }

    /// Start a session over the current waypoints and snap the camera to
    /// the path start.
    fn start(
        &mut self,
        mode: PlaybackMode,
        listener: &mut impl PlaybackListener,
    ) -> bool {
        let output = &self.options.output;
        let started = match mode {
            PlaybackMode::Preview => self.playback.preview(output),
            PlaybackMode::Animate => self.playback.animate(output),
        };
        if started {
            let _ = self.camera.set_pose(self.playback.pose());
            listener.pose_changed(&self.camera.pose());
        }
        started
    }

    /// Stop the running session and any demo.
    pub(super) fn cancel(&mut self, listener: &mut impl PlaybackListener) -> bool {
        self.demo = None;
        let Some(event) = self.playback.cancel(listener) else {
            return false;
        };
        listener.status_changed(&event.to_string());
        true
    }

    /// Report a session that ended during `tick` and chain the next demo
    /// preset after a finished one.
    pub(super) fn finish_session(
        &mut self,
        event: PlaybackEvent,
        listener: &mut impl PlaybackListener,
    ) {
        listener.status_changed(&event.to_string());
        match event {
            PlaybackEvent::Finished(_) if self.demo.is_some() => {
                let _ = self.advance_demo(listener);
            }
            PlaybackEvent::Finished(_) => {}
            PlaybackEvent::Cancelled(_) => self.demo = None,
        }
    }

    /// Begin the built-in demo from its first preset.
    pub(super) fn play_demo(
        &mut self,
        mode: PlaybackMode,
        listener: &mut impl PlaybackListener,
    ) -> bool {
        if !self.playback.is_idle() {
            return false;
        }
        match DemoSequencer::builtin(mode) {
            Ok(mut demo) => {
                log::info!("Playing {} demo presets ({mode:?})", demo.len());
                let first = demo.start().cloned();
                self.demo = Some(demo);
                match first {
                    Some(preset) if self.play_preset(&preset, mode, listener) => true,
                    _ => self.advance_demo(listener),
                }
            }
            Err(e) => {
                log::error!("Failed to load demo presets: {e}");
                listener.status_changed(&e.to_string());
                false
            }
        }
    }

    /// Load and start the next demo preset, skipping any that cannot play.
    /// Ends the demo when no preset is left.
    fn advance_demo(&mut self, listener: &mut impl PlaybackListener) -> bool {
        loop {
            let Some(demo) = self.demo.as_mut() else {
                return false;
            };
            let mode = demo.mode();
            let Some(preset) = demo.next_preset().cloned() else {
                log::info!("Demo complete");
                self.demo = None;
                return false;
            };

            if self.play_preset(&preset, mode, listener) {
                return true;
            }
        }
    }

    /// Load `preset` and start it in `mode`. Logs and returns `false` when
    /// either step fails so the demo can skip it.
    fn play_preset(
        &mut self,
        preset: &Preset,
        mode: PlaybackMode,
        listener: &mut impl PlaybackListener,
    ) -> bool {
        if let Err(e) = self.apply_preset(preset) {
            log::warn!("Skipping preset '{}': {e}", preset.name);
            return false;
        }
        if self.start(mode, listener) {
            return true;
        }
        log::warn!("Skipping preset '{}': playback refused", preset.name);
        false
    }

    /// Load a preset's waypoints and scene settings.
    pub(super) fn apply_preset(
        &mut self,
        preset: &Preset,
    ) -> Result<(), PioneerError> {
        preset.apply(self.playback.waypoints_mut(), &mut self.options)?;
        self.keyframe = wrap_keyframe(preset.keyframe);
        log::info!(
            "Loaded preset '{}' ({} waypoints)",
            preset.name,
            preset.waypoints.len()
        );
        Ok(())
    }
}
