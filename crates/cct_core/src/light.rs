//! Light presets tinted by color temperature.
//!
//! A [`LightRig`] is a named list of lights, each carrying a Kelvin value
//! and an intensity. The renderer that owns the actual lights reads
//! [`LightPreset::packed`] or [`LightPreset::radiance`] and applies it.
//!
//! Rigs round-trip through JSON:
//!
//! ```json
//! {
//!   "name": "bedroom",
//!   "lights": [
//!     { "name": "ambient", "kind": "ambient", "kelvin": 6600.0, "intensity": 0.5 }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use cct_math::{kelvin_to_hex, kelvin_to_rgb, Rgb, Vec3, KELVIN_DOMAIN};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading or editing a rig.
#[derive(Error, Debug)]
pub enum RigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid rig JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Rig '{0}' has no lights")]
    Empty(String),

    #[error("Duplicate light name: {0}")]
    DuplicateLight(String),

    #[error("Light '{name}' has invalid intensity {intensity}")]
    InvalidIntensity { name: String, intensity: f32 },

    #[error("No light named '{0}'")]
    UnknownLight(String),
}

pub type RigResult<T> = Result<T, RigError>;

/// Which kind of scene light a preset drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightKind {
    /// Uniform fill, no direction
    Ambient,
    /// Parallel rays from a direction (sun-like)
    Directional,
    /// Omni light at a position
    Point,
}

/// One light's color temperature and strength.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightPreset {
    /// Unique name within the rig
    pub name: String,

    pub kind: LightKind,

    /// Color temperature in Kelvin (clamped to 1000-40000 on conversion)
    pub kelvin: f64,

    /// Scalar multiplier on the tint
    pub intensity: f32,
}

impl LightPreset {
    /// Create a new light preset.
    ///
    /// Non-finite temperatures are stored as the boundary they convert to.
    pub fn new(name: impl Into<String>, kind: LightKind, kelvin: f64, intensity: f32) -> Self {
        Self {
            name: name.into(),
            kind,
            kelvin: storable_kelvin(kelvin),
            intensity,
        }
    }

    /// The light's color.
    pub fn tint(&self) -> Rgb {
        kelvin_to_rgb(self.kelvin)
    }

    /// The light's color as `0xRRGGBB`.
    pub fn packed(&self) -> u32 {
        kelvin_to_hex(self.kelvin)
    }

    /// Tint (0-1 per channel) scaled by intensity.
    pub fn radiance(&self) -> Vec3 {
        self.tint().to_vec3() * self.intensity
    }
}

/// JSON has no NaN or infinity, so those are replaced by the clamped value
/// the converter would use anyway. The tint is unchanged.
fn storable_kelvin(kelvin: f64) -> f64 {
    if kelvin.is_finite() {
        kelvin
    } else {
        KELVIN_DOMAIN.clamp(kelvin)
    }
}

/// A named set of light presets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightRig {
    pub name: String,
    pub lights: Vec<LightPreset>,
}

/// Neutral white: the fit saturates every channel here.
pub const NEUTRAL_KELVIN: f64 = 6600.0;

impl LightRig {
    /// Create an empty rig.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lights: Vec::new(),
        }
    }

    /// Add a light (builder style).
    pub fn with_light(mut self, light: LightPreset) -> Self {
        self.lights.push(light);
        self
    }

    /// The bedroom scene's lights: ambient fill, a shadow-casting parallel
    /// light and a ceiling point light, all neutral white.
    pub fn bedroom() -> Self {
        Self::new("bedroom")
            .with_light(LightPreset::new(
                "ambient",
                LightKind::Ambient,
                NEUTRAL_KELVIN,
                0.5,
            ))
            .with_light(LightPreset::new(
                "parallel",
                LightKind::Directional,
                NEUTRAL_KELVIN,
                0.5,
            ))
            .with_light(LightPreset::new(
                "point",
                LightKind::Point,
                NEUTRAL_KELVIN,
                0.6,
            ))
    }

    /// Parse and validate a rig from JSON.
    pub fn from_json_str(json: &str) -> RigResult<Self> {
        let rig: LightRig = serde_json::from_str(json)?;
        rig.validate()?;
        log::debug!("Parsed rig '{}' with {} lights", rig.name, rig.lights.len());
        Ok(rig)
    }

    /// Load and validate a rig from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> RigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let rig = Self::from_json_str(&content)?;
        log::info!("Loaded rig '{}' from {}", rig.name, path.display());
        Ok(rig)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_string(&self) -> RigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the rig is usable by a scene.
    ///
    /// Kelvin values are never rejected; the converter clamps them.
    pub fn validate(&self) -> RigResult<()> {
        if self.lights.is_empty() {
            return Err(RigError::Empty(self.name.clone()));
        }

        let mut seen = HashSet::new();
        for light in &self.lights {
            if !seen.insert(light.name.as_str()) {
                return Err(RigError::DuplicateLight(light.name.clone()));
            }
            if !light.intensity.is_finite() || light.intensity < 0.0 {
                return Err(RigError::InvalidIntensity {
                    name: light.name.clone(),
                    intensity: light.intensity,
                });
            }
            if !KELVIN_DOMAIN.contains(light.kelvin) {
                log::warn!(
                    "Light '{}' at {} K is outside 1000-40000 K and will be clamped",
                    light.name,
                    light.kelvin
                );
            }
        }

        Ok(())
    }

    /// Find a light by name.
    pub fn find(&self, name: &str) -> Option<&LightPreset> {
        self.lights.iter().find(|light| light.name == name)
    }

    /// Re-tint one light, returning its new packed color.
    pub fn set_kelvin(&mut self, name: &str, kelvin: f64) -> RigResult<u32> {
        let light = self
            .lights
            .iter_mut()
            .find(|light| light.name == name)
            .ok_or_else(|| RigError::UnknownLight(name.to_string()))?;
        light.kelvin = storable_kelvin(kelvin);
        Ok(light.packed())
    }

    /// Number of lights in the rig.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }
}
