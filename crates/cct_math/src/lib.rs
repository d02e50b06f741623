//! CCT Math - color temperature and packed color types.
//!
//! - [`kelvin_to_hex`] / [`kelvin_to_rgb`]: Kelvin to `0xRRGGBB`
//! - [`Rgb`]: 8-bit RGB with packing and hex parsing
//! - [`Interval`]: closed ranges used for domain and channel clamping

// Re-export glam for convenience
pub use glam::*;

mod color;
mod interval;
mod kelvin;

pub use color::{ParseColorError, Rgb, PACKED_MAX};
pub use interval::Interval;
pub use kelvin::{kelvin_to_hex, kelvin_to_rgb, CHANNEL_RANGE, KELVIN_DOMAIN};
