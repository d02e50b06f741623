//! Warm-to-cool temperature ramps and swatch images.
//!
//! A [`KelvinRamp`] samples evenly between two temperatures; a [`Swatch`]
//! lays the samples out as image columns so a ramp can be eyeballed or
//! used as a lookup strip.

use std::path::Path;

use cct_math::{kelvin_to_rgb, Rgb, KELVIN_DOMAIN};
use rayon::prelude::*;
use thiserror::Error;

/// Errors that can occur while building or saving a swatch.
#[derive(Error, Debug)]
pub enum SwatchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Swatch would be empty ({width}x{height})")]
    Empty { width: u32, height: u32 },

    #[error("Swatch is too large ({width}x{height} pixels)")]
    TooLarge { width: usize, height: u32 },
}

pub type SwatchResult<T> = Result<T, SwatchError>;

/// Evenly spaced temperatures from `start` to `end`, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KelvinRamp {
    pub start: f64,
    pub end: f64,
    pub steps: usize,
}

impl KelvinRamp {
    pub fn new(start: f64, end: f64, steps: usize) -> Self {
        Self { start, end, steps }
    }

    /// The whole domain, one sample every 100 K.
    pub fn full() -> Self {
        Self::new(KELVIN_DOMAIN.min, KELVIN_DOMAIN.max, 391)
    }

    /// Sample temperatures in order. `steps == 1` yields only `start`.
    pub fn temperatures(&self) -> Vec<f64> {
        match self.steps {
            0 => Vec::new(),
            1 => vec![self.start],
            n => {
                let last = (n - 1) as f64;
                (0..n)
                    .map(|i| self.start + (self.end - self.start) * i as f64 / last)
                    .collect()
            }
        }
    }

    /// Colors for each sample, in the same order as [`Self::temperatures`].
    pub fn colors(&self) -> Vec<Rgb> {
        self.temperatures()
            .par_iter()
            .map(|&kelvin| kelvin_to_rgb(kelvin))
            .collect()
    }
}

/// An RGB8 image with one column per ramp sample.
#[derive(Debug, Clone)]
pub struct Swatch {
    pub width: u32,
    pub height: u32,
    /// Row-major pixels
    pub pixels: Vec<Rgb>,
}

impl Swatch {
    /// Build a `steps x height` strip from a ramp.
    pub fn from_ramp(ramp: &KelvinRamp, height: u32) -> SwatchResult<Self> {
        let too_large = || SwatchError::TooLarge {
            width: ramp.steps,
            height,
        };

        // Size is checked before sampling so oversized requests fail fast
        let width = u32::try_from(ramp.steps).map_err(|_| too_large())?;
        if width == 0 || height == 0 {
            return Err(SwatchError::Empty { width, height });
        }
        let pixel_count = width.checked_mul(height).ok_or_else(too_large)?;
        let pixel_count = usize::try_from(pixel_count).map_err(|_| too_large())?;

        let colors = ramp.colors();
        let mut pixels = Vec::with_capacity(pixel_count);
        for _ in 0..height {
            pixels.extend_from_slice(&colors);
        }

        log::debug!(
            "Built {}x{} swatch for {:.0}-{:.0} K",
            width,
            height,
            ramp.start,
            ramp.end
        );

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Get the pixel at (x, y), or `None` outside the image.
    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y as usize * self.width as usize + x as usize).copied()
    }

    /// Raw RGB8 bytes.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Write the swatch as a PNG, creating parent directories as needed.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> SwatchResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        image::save_buffer_with_format(
            path,
            self.as_bytes(),
            self.width,
            self.height,
            image::ColorType::Rgb8,
            image::ImageFormat::Png,
        )?;

        log::info!("Wrote swatch to {}", path.display());
        Ok(())
    }
}
