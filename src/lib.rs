// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Camera path recording and constant-speed playback for fractal
//! fly-throughs.
//!
//! The user flies a first-person camera through a ray-marched scene, drops
//! waypoints, and then previews or renders a smooth path through them at a
//! fixed duration and frame rate. Rendering itself lives outside this crate;
//! the engine only produces camera poses, status text and frame export
//! requests.
//!
//! # Key entry points
//!
//! - [`engine::PioneerEngine`] - command-driven façade with one `tick` per
//!   rendered frame
//! - [`animation::PlaybackController`] - the preview/animate state machine
//! - [`animation::CameraPath`] - position and rotation splines with a
//!   constant-speed reparametrization
//! - [`options::Options`] - TOML-backed scene and output configuration
//! - [`demo::DemoSequencer`] - scripted playback of preset fly-throughs
//!
//! # Pipeline
//!
//! Waypoints → Catmull-Rom position spline and SQUAD rotation spline →
//! arc-length table (Gauss-Legendre quadrature) → inverse lookup from
//! elapsed time to spline parameter → sampled camera pose.

pub mod animation;
pub mod camera;
pub mod demo;
pub mod engine;
pub mod error;
pub mod export;
pub mod options;
pub mod util;

pub use error::PioneerError;
