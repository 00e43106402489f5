//! Command-driven façade over the camera, playback and scene options.
//!
//! The host calls [`PioneerEngine::execute`] for user actions and
//! [`PioneerEngine::tick`] once per rendered frame. Everything the renderer
//! needs (camera pose, fractal rotation, light direction) is read back
//! through accessors; nothing here touches the GPU.

mod command;
mod playback;

pub use command::PioneerCommand;

use crate::animation::{
    PlaybackController, PlaybackEvent, PlaybackListener, PlaybackMode,
    PlaybackState, WaypointStore,
};
use crate::camera::{CameraPose, FlyCamera, MovementInput};
use crate::demo::DemoSequencer;
use crate::error::PioneerError;
use crate::options::{wrap_keyframe, Options};

/// Owns every piece of viewer state that changes from frame to frame.
#[derive(Debug)]
pub struct PioneerEngine {
    options: Options,
    camera: FlyCamera,
    playback: PlaybackController,
    demo: Option<DemoSequencer>,
    /// Fractal animation clock, wrapped into one wobble period.
    keyframe: i64,
    movement: MovementInput,
}

impl PioneerEngine {
    /// Engine with the camera at the configured start pose and no
    /// waypoints.
    pub fn new(options: Options) -> Self {
        let camera = FlyCamera::new(&options.camera);
        log::debug!("engine start pose: {:?}", camera.pose());
        Self {
            options,
            camera,
            playback: PlaybackController::new(),
            demo: None,
            keyframe: 0,
            movement: MovementInput::default(),
        }
    }

    // ── Accessors ───────────────────────────────────────────────────

    /// Current options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace all options after validating them. The camera keeps its
    /// pose; only its speeds follow the new options.
    pub fn set_options(&mut self, options: Options) -> Result<(), PioneerError> {
        options.validate()?;
        let pose = self.camera.pose();
        self.camera = FlyCamera::new(&options.camera);
        let _ = self.camera.set_pose(pose);
        self.options = options;
        Ok(())
    }

    /// The fly camera.
    pub fn camera(&self) -> &FlyCamera {
        &self.camera
    }

    /// Camera pose to render this frame.
    pub fn pose(&self) -> CameraPose {
        self.camera.pose()
    }

    /// Playback state machine.
    pub fn playback(&self) -> &PlaybackController {
        &self.playback
    }

    /// Current playback state.
    pub fn state(&self) -> PlaybackState {
        self.playback.state()
    }

    /// Recorded waypoints.
    pub fn waypoints(&self) -> &WaypointStore {
        self.playback.waypoints()
    }

    /// Running demo, if any.
    pub fn demo(&self) -> Option<&DemoSequencer> {
        self.demo.as_ref()
    }

    /// Fractal animation clock.
    pub fn fractal_keyframe(&self) -> i64 {
        self.keyframe
    }

    /// Fractal fold rotation for the current keyframe.
    pub fn fractal_rotation(&self) -> [f32; 3] {
        self.options.fractal.animated_rotation(self.keyframe)
    }

    // ── Per-frame ───────────────────────────────────────────────────

    /// Advance one frame.
    ///
    /// While idle the held movement input flies the camera. While playing,
    /// the controller samples the path and the camera follows it; a
    /// finished session hands over to the next demo preset, if any. The
    /// fractal clock advances last in either case.
    pub fn tick(
        &mut self,
        listener: &mut impl PlaybackListener,
    ) -> Option<PlaybackEvent> {
        let event = if self.playback.is_idle() {
            if !self.movement.is_idle() && self.camera.update(&self.movement) {
                listener.pose_changed(&self.camera.pose());
            }
            None
        } else {
            let event = self.playback.tick(listener);
            let _ = self.camera.set_pose(self.playback.pose());
            if let Some(event) = event {
                self.finish_session(event, listener);
            }
            event
        };

        self.keyframe = wrap_keyframe(self.keyframe + 1);
        event
    }

    // ── Commands ────────────────────────────────────────────────────

    /// Apply one command. Returns false when the command was refused;
    /// rejected configuration values are also reported as status text.
    pub fn execute(
        &mut self,
        command: PioneerCommand,
        listener: &mut impl PlaybackListener,
    ) -> bool {
        match command {
            PioneerCommand::SetMovement { input } => {
                self.movement = input;
                true
            }
            PioneerCommand::SetCameraPose { pose } => {
                if !self.playback.is_idle() {
                    return false;
                }
                if self.camera.set_pose(pose) {
                    listener.pose_changed(&self.camera.pose());
                }
                true
            }
            PioneerCommand::AddWaypoint => {
                let pose = self.camera.pose();
                self.add_waypoint(pose)
            }
            PioneerCommand::AddWaypointAt { pose } => self.add_waypoint(pose),
            PioneerCommand::RemoveLastWaypoint => {
                self.playback.waypoints_mut().remove_last()
            }
            PioneerCommand::ClearWaypoints => self.playback.waypoints_mut().clear(),
            PioneerCommand::ApplyPreset { preset } => {
                let applied = self.apply_preset(&preset);
                report(applied, listener)
            }
            PioneerCommand::Preview => {
                self.start_manual(PlaybackMode::Preview, listener)
            }
            PioneerCommand::Animate => {
                self.start_manual(PlaybackMode::Animate, listener)
            }
            PioneerCommand::Cancel => self.cancel(listener),
            PioneerCommand::PlayDemo { mode } => self.play_demo(mode, listener),
            PioneerCommand::AlignLight => {
                self.options.scene.align_light(self.camera.look_direction());
                true
            }
            PioneerCommand::SetFractalKeyframe { keyframe } => {
                self.keyframe = wrap_keyframe(keyframe);
                true
            }
            PioneerCommand::SetFractalColor { rgb } => {
                self.options.fractal.set_color_rgb8(rgb);
                true
            }
            PioneerCommand::SetTargetFps { fps } => {
                let result = self.options.output.set_target_fps(fps);
                report(result, listener)
            }
            PioneerCommand::SetTargetDuration { seconds } => {
                let result = self.options.output.set_target_duration(seconds);
                report(result, listener)
            }
            PioneerCommand::SetResolution { resolution } => {
                let result = self.options.output.set_resolution(resolution);
                report(result, listener)
            }
            PioneerCommand::SetOutputDirectory { path } => {
                let result = self.options.output.set_directory(&path);
                report(result, listener)
            }
        }
    }

    fn add_waypoint(&mut self, pose: CameraPose) -> bool {
        let added = self
            .playback
            .waypoints_mut()
            .append(pose.position, pose.rotation);
        if added {
            log::debug!(
                "waypoint {} at {} / {}",
                self.playback.waypoints().len(),
                pose.position,
                pose.rotation
            );
        }
        added
    }
}

/// Surface a rejected value as status text.
fn report(
    result: Result<(), PioneerError>,
    listener: &mut impl PlaybackListener,
) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            log::warn!("{e}");
            listener.status_changed(&e.to_string());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::{DVec2, DVec3};

    use super::*;
    use crate::camera::look_direction;
    use crate::options::KEYFRAME_PERIOD;

    #[derive(Default)]
    struct Statuses(Vec<String>);

    impl PlaybackListener for Statuses {
        fn status_changed(&mut self, status: &str) {
            self.0.push(status.to_owned());
        }
    }

    fn engine_with_path() -> PioneerEngine {
        let mut engine = PioneerEngine::new(Options::default());
        for z in [0.0, 1.0, 2.0] {
            let pose = CameraPose::new(DVec3::new(0.0, 0.0, z), DVec3::ZERO);
            assert!(engine.execute(PioneerCommand::AddWaypointAt { pose }, &mut ()));
        }
        engine
    }

    #[test]
    fn starts_at_configured_pose() {
        let engine = PioneerEngine::new(Options::default());
        assert_eq!(engine.pose().position, DVec3::new(2.8, 1.32, 3.46));
        assert_eq!(engine.state(), PlaybackState::Idle);
    }

    #[test]
    fn idle_tick_flies_the_camera() {
        let mut engine = PioneerEngine::new(Options::default());
        let start = engine.pose().position;
        let input = MovementInput {
            forward: 1.0,
            ..MovementInput::default()
        };
        assert!(engine.execute(PioneerCommand::SetMovement { input }, &mut ()));
        let _ = engine.tick(&mut ());
        assert!((engine.pose().position.distance(start) - 0.01).abs() < 1e-4);
    }

    #[test]
    fn preview_drives_the_camera_and_finishes() {
        let mut engine = engine_with_path();
        assert!(engine.execute(PioneerCommand::SetTargetFps { fps: 10.0 }, &mut ()));
        assert!(engine.execute(
            PioneerCommand::SetTargetDuration { seconds: 1.0 },
            &mut ()
        ));
        assert!(engine.execute(PioneerCommand::Preview, &mut ()));
        assert_eq!(engine.state(), PlaybackState::Previewing);

        // Movement input is ignored while playing.
        let input = MovementInput {
            look_delta: DVec2::new(40.0, 0.0),
            ..MovementInput::default()
        };
        assert!(engine.execute(PioneerCommand::SetMovement { input }, &mut ()));

        let mut last = None;
        for _ in 0..10 {
            last = engine.tick(&mut ());
        }
        assert_eq!(last, Some(PlaybackEvent::Finished(PlaybackMode::Preview)));
        assert_eq!(engine.state(), PlaybackState::Idle);
        assert!(engine.pose().position.z > 1.9);
        assert_eq!(engine.pose().rotation, DVec3::ZERO);
    }

    #[test]
    fn waypoint_edits_refused_while_playing() {
        let mut engine = engine_with_path();
        assert!(engine.execute(PioneerCommand::Preview, &mut ()));
        assert!(!engine.execute(PioneerCommand::AddWaypoint, &mut ()));
        assert!(!engine.execute(PioneerCommand::ClearWaypoints, &mut ()));
        assert!(!engine.execute(PioneerCommand::Preview, &mut ()));
        assert!(engine.execute(PioneerCommand::Cancel, &mut ()));
        assert!(engine.execute(PioneerCommand::RemoveLastWaypoint, &mut ()));
        assert_eq!(engine.waypoints().len(), 2);
    }

    #[test]
    fn invalid_values_become_status_text() {
        let mut engine = PioneerEngine::new(Options::default());
        let mut statuses = Statuses::default();
        assert!(!engine.execute(
            PioneerCommand::SetTargetFps { fps: -5.0 },
            &mut statuses
        ));
        assert!(!engine.execute(
            PioneerCommand::SetResolution { resolution: [0, 720] },
            &mut statuses
        ));
        assert_eq!(
            statuses.0,
            [
                "Cannot set output target FPS to a non-positive value",
                "Cannot set output resolution to a non-positive value",
            ]
        );
        assert_eq!(engine.options().output.target_fps, 60.0);
    }

    #[test]
    fn cancel_reports_status() {
        let mut engine = engine_with_path();
        let mut statuses = Statuses::default();
        assert!(!engine.execute(PioneerCommand::Cancel, &mut statuses));
        assert!(engine.execute(PioneerCommand::Preview, &mut statuses));
        let _ = engine.tick(&mut statuses);
        assert!(engine.execute(PioneerCommand::Cancel, &mut statuses));
        assert_eq!(statuses.0.last().map(String::as_str), Some("Preview cancelled"));
    }

    #[test]
    fn align_light_follows_camera() {
        let mut engine = PioneerEngine::new(Options::default());
        let pose = CameraPose::new(DVec3::ZERO, DVec3::new(0.2, 1.1, 0.0));
        assert!(engine.execute(PioneerCommand::SetCameraPose { pose }, &mut ()));
        assert!(engine.execute(PioneerCommand::AlignLight, &mut ()));
        assert_eq!(
            engine.options().scene.light_direction,
            look_direction(pose.rotation).to_array()
        );
    }

    #[test]
    fn fractal_clock_wraps() {
        let mut engine = PioneerEngine::new(Options::default());
        assert!(engine.execute(
            PioneerCommand::SetFractalKeyframe {
                keyframe: KEYFRAME_PERIOD - 1
            },
            &mut ()
        ));
        let _ = engine.tick(&mut ());
        assert_eq!(engine.fractal_keyframe(), 0);
        assert_eq!(engine.fractal_rotation(), engine.options().fractal.rotation);
    }

    #[test]
    fn set_options_validates() {
        let mut engine = PioneerEngine::new(Options::default());
        let mut bad = Options::default();
        bad.output.target_duration = 0.0;
        assert!(engine.set_options(bad).is_err());

        let mut good = Options::default();
        good.camera.move_speed = 0.5;
        let pose = engine.pose();
        engine.set_options(good).unwrap();
        assert_eq!(engine.pose(), pose);
    }
}
