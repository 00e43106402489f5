//! Lighting and shading section.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::fractal::rgb8;
use crate::error::PioneerError;

/// Lighting, shading and post-processing parameters of the ray marcher.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scene", inline)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct SceneOptions {
    /// Step used when sampling ambient occlusion.
    #[schemars(title = "AO Delta", range(min = 0.0, max = 2.0), extend("step" = 0.01))]
    pub ambient_occlusion_delta: f32,
    /// Strength of the ambient occlusion term.
    #[schemars(title = "AO Strength", range(min = 0.0, max = 0.1), extend("step" = 0.001))]
    pub ambient_occlusion_strength: f32,
    /// Anti-aliasing samples per pixel axis.
    #[schemars(title = "Anti-aliasing", range(min = 0.0, max = 8.0), extend("step" = 1.0))]
    pub anti_aliasing_samples: f32,
    /// Background (space) color.
    #[schemars(skip)]
    pub background_color: [f32; 3],
    /// Diffuse lighting toggle.
    pub diffuse_lighting: bool,
    /// Filtering toggle.
    pub filtering: bool,
    /// Focal distance, i.e. the angle of view.
    #[schemars(title = "Focal Distance", range(min = 0.5, max = 4.0), extend("step" = 0.01))]
    pub focal_distance: f32,
    /// Fog toggle.
    pub fog: bool,
    /// Light source color.
    #[schemars(skip)]
    pub light_color: [f32; 3],
    /// Light source direction.
    #[schemars(skip)]
    pub light_direction: [f64; 3],
    /// Shadow toggle.
    pub shadows: bool,
    /// Shadow darkness in `[0, inf)`.
    #[schemars(title = "Shadow Darkness", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub shadow_darkness: f32,
    /// Shadow sharpness in `[0, inf)`.
    #[schemars(title = "Shadow Sharpness", range(min = 1.0, max = 50.0), extend("step" = 0.5))]
    pub shadow_sharpness: f32,
    /// Specular highlight exponent.
    #[schemars(title = "Specular", range(min = 1.0, max = 100.0), extend("step" = 1.0))]
    pub specular_highlight: f32,
    /// Specular highlight multiplier.
    #[schemars(title = "Specular Multiplier", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub specular_multiplier: f32,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            ambient_occlusion_delta: 0.7,
            ambient_occlusion_strength: 0.008,
            anti_aliasing_samples: 2.0,
            background_color: rgb8([31, 31, 31]),
            diffuse_lighting: true,
            filtering: true,
            focal_distance: 3.0_f32.sqrt(),
            fog: true,
            light_color: rgb8([255, 255, 126]),
            light_direction: [-0.36, 0.8, 0.48],
            shadows: true,
            shadow_darkness: 0.9,
            shadow_sharpness: 10.0,
            specular_highlight: 40.0,
            specular_multiplier: 0.25,
        }
    }
}

impl SceneOptions {
    /// Set the anti-aliasing sample count; negative counts are rejected.
    pub fn set_anti_aliasing_samples(
        &mut self,
        samples: f32,
    ) -> Result<(), PioneerError> {
        if samples < 0.0 {
            return Err(PioneerError::InvalidOption(
                "Cannot set scene anti-aliasing to a negative value".to_owned(),
            ));
        }
        self.anti_aliasing_samples = samples;
        Ok(())
    }

    /// Point the light along `direction` (usually the camera's look
    /// direction).
    pub fn align_light(&mut self, direction: glam::DVec3) {
        self.light_direction = direction.to_array();
    }
}
