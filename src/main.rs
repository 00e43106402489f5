//! Headless fly-through runner.
//!
//! ```text
//! pioneer preview <presets.toml> [name]       play a preset in real time
//! pioneer animate <presets.toml> <dir> [name] sample every frame into <dir>/poses.json
//! pioneer demo                                preview the built-in presets
//! ```
//!
//! An optional `pioneer.toml` in the working directory supplies the
//! options. Without a renderer attached, "exporting" a frame records the
//! camera pose it would have been rendered from.

use std::path::{Path, PathBuf};

use pioneer::animation::{PlaybackEvent, PlaybackListener, PlaybackMode};
use pioneer::camera::CameraPose;
use pioneer::demo::{Preset, PresetLibrary};
use pioneer::engine::{PioneerCommand, PioneerEngine};
use pioneer::export::FrameRequest;
use pioneer::options::Options;
use pioneer::util::FrameTiming;
use pioneer::PioneerError;
use serde::Serialize;

const OPTIONS_FILE: &str = "pioneer.toml";
const POSES_FILE: &str = "poses.json";

const USAGE: &str = "Usage: pioneer preview <presets.toml> [name] | \
                     pioneer animate <presets.toml> <dir> [name] | pioneer demo";

/// Pose an exported frame would have been rendered from.
#[derive(Debug, Serialize)]
struct FramePose {
    index: u64,
    path: PathBuf,
    position: [f64; 3],
    rotation: [f64; 3],
}

/// Forwards playback output to the log and collects "exported" frames.
#[derive(Default)]
struct Recorder {
    pose: CameraPose,
    frames: Vec<FramePose>,
}

impl PlaybackListener for Recorder {
    fn pose_changed(&mut self, pose: &CameraPose) {
        self.pose = *pose;
    }

    fn status_changed(&mut self, status: &str) {
        log::debug!("{status}");
    }

    fn playback_event(&mut self, event: PlaybackEvent) {
        log::info!("{event}");
    }

    fn export_frame(
        &mut self,
        request: &FrameRequest,
    ) -> Result<(), PioneerError> {
        self.frames.push(FramePose {
            index: request.index,
            path: request.path.clone(),
            position: self.pose.position.to_array(),
            rotation: self.pose.rotation.to_array(),
        });
        Ok(())
    }
}

fn load_options() -> Result<Options, PioneerError> {
    let path = Path::new(OPTIONS_FILE);
    if path.exists() {
        log::info!("Loading options from {OPTIONS_FILE}");
        Options::load(path)
    } else {
        Ok(Options::default())
    }
}

fn load_preset(path: &str, name: Option<&str>) -> Result<Preset, PioneerError> {
    let library = PresetLibrary::load(Path::new(path))?;
    let preset = match name {
        Some(name) => library.get(name),
        None => library.presets().first(),
    };
    preset.cloned().ok_or_else(|| {
        PioneerError::PresetParse(format!(
            "no preset {} in {path}",
            name.unwrap_or("at all")
        ))
    })
}

/// Execute a command, turning a refusal into an error.
fn run_command(
    engine: &mut PioneerEngine,
    recorder: &mut Recorder,
    command: PioneerCommand,
) -> Result<(), PioneerError> {
    let description = format!("{command:?}");
    if engine.execute(command, recorder) {
        Ok(())
    } else {
        Err(PioneerError::InvalidOption(format!(
            "command refused: {description}"
        )))
    }
}

/// Tick until playback (and any demo) has ended, paced to the target FPS.
fn run_paced(engine: &mut PioneerEngine, recorder: &mut Recorder) {
    let mut timing = FrameTiming::new(engine.options().output.target_fps);
    let mut frames = 0_u64;
    while engine.demo().is_some() || !engine.playback().is_idle() {
        timing.wait();
        let _ = engine.tick(recorder);
        timing.end_frame();
        frames += 1;
        if frames % 60 == 0 {
            log::debug!("{:.1} fps", timing.fps());
        }
    }
}

fn preview(path: &str, name: Option<&str>) -> Result<(), PioneerError> {
    let mut engine = PioneerEngine::new(load_options()?);
    let mut recorder = Recorder::default();
    let preset = load_preset(path, name)?;
    run_command(&mut engine, &mut recorder, PioneerCommand::ApplyPreset { preset })?;
    run_command(&mut engine, &mut recorder, PioneerCommand::Preview)?;
    run_paced(&mut engine, &mut recorder);
    Ok(())
}

fn animate(
    path: &str,
    dir: &str,
    name: Option<&str>,
) -> Result<(), PioneerError> {
    let dir = PathBuf::from(dir);
    std::fs::create_dir_all(&dir)?;

    let mut engine = PioneerEngine::new(load_options()?);
    let mut recorder = Recorder::default();
    let preset = load_preset(path, name)?;
    run_command(
        &mut engine,
        &mut recorder,
        PioneerCommand::SetOutputDirectory { path: dir.clone() },
    )?;
    run_command(&mut engine, &mut recorder, PioneerCommand::ApplyPreset { preset })?;
    run_command(&mut engine, &mut recorder, PioneerCommand::Animate)?;

    while !engine.playback().is_idle() {
        let _ = engine.tick(&mut recorder);
    }

    let json = serde_json::to_string_pretty(&recorder.frames)
        .map_err(|e| PioneerError::Export(e.to_string()))?;
    let out = dir.join(POSES_FILE);
    std::fs::write(&out, json)?;
    log::info!(
        "Wrote {} of {} frame poses to {}",
        recorder.frames.len(),
        engine.options().output.frame_count(),
        out.display()
    );
    Ok(())
}

fn demo() -> Result<(), PioneerError> {
    let mut engine = PioneerEngine::new(load_options()?);
    let mut recorder = Recorder::default();
    run_command(
        &mut engine,
        &mut recorder,
        PioneerCommand::PlayDemo {
            mode: PlaybackMode::Preview,
        },
    )?;
    run_paced(&mut engine, &mut recorder);
    Ok(())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    let result = match args.as_slice() {
        ["preview", path] => preview(path, None),
        ["preview", path, name] => preview(path, Some(*name)),
        ["animate", path, dir] => animate(path, dir, None),
        ["animate", path, dir, name] => animate(path, dir, Some(*name)),
        ["demo"] => demo(),
        _ => {
            log::error!("{USAGE}");
            std::process::exit(2);
        }
    };

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}
