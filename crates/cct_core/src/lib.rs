//! CCT Core - consumers of the color temperature conversion.
//!
//! This crate provides:
//!
//! - **Light presets**: `LightPreset`, `LightRig` with JSON loading
//! - **Live tinting**: `TintCell`, a lock-free last-write-wins color slot
//! - **Ramps**: `KelvinRamp` sampling and `Swatch` PNG output
//!
//! # Example
//!
//! ```no_run
//! use cct_core::LightRig;
//!
//! let mut rig = LightRig::load("rig.json")?;
//! let packed = rig.set_kelvin("point", 2700.0)?;
//! println!("point light -> {:06X}", packed);
//! # Ok::<(), cct_core::RigError>(())
//! ```

pub mod light;
pub mod ramp;
pub mod tint;

// Re-export commonly used types
pub use light::{LightKind, LightPreset, LightRig, RigError, RigResult, NEUTRAL_KELVIN};
pub use ramp::{KelvinRamp, Swatch, SwatchError, SwatchResult};
pub use tint::TintCell;
