//! Shared light tint for live parameter editing.
//!
//! A UI thread writes a new temperature while the render loop keeps reading
//! the current color. The cell holds one packed `0xRRGGBB` value; the last
//! write wins.

use std::sync::atomic::{AtomicU32, Ordering};

use cct_math::{kelvin_to_hex, Rgb, PACKED_MAX};

use crate::light::NEUTRAL_KELVIN;

/// A packed light color shared between threads.
#[derive(Debug)]
pub struct TintCell {
    packed: AtomicU32,
}

impl TintCell {
    /// Create a cell holding the color for `kelvin`.
    pub fn new(kelvin: f64) -> Self {
        Self {
            packed: AtomicU32::new(kelvin_to_hex(kelvin)),
        }
    }

    /// Convert `kelvin` and store the result. Returns the stored color.
    pub fn set_kelvin(&self, kelvin: f64) -> u32 {
        let packed = kelvin_to_hex(kelvin);
        self.packed.store(packed, Ordering::Release);
        packed
    }

    /// Store a packed color directly (masked to 24 bits).
    pub fn store(&self, packed: u32) {
        self.packed.store(packed & PACKED_MAX, Ordering::Release);
    }

    /// The current packed color.
    pub fn packed(&self) -> u32 {
        self.packed.load(Ordering::Acquire)
    }

    /// The current color.
    pub fn rgb(&self) -> Rgb {
        Rgb::from_packed(self.packed())
    }
}

impl Default for TintCell {
    fn default() -> Self {
        Self::new(NEUTRAL_KELVIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_default_is_white() {
        let cell = TintCell::default();
        assert_eq!(cell.packed(), 0xFFFFFF);
        assert_eq!(cell.rgb(), Rgb::WHITE);
    }

    #[test]
    fn test_last_write_wins() {
        let cell = TintCell::new(1500.0);
        assert_eq!(cell.packed(), 0xFF6C00);

        assert_eq!(cell.set_kelvin(12000.0), 0xBFD3FF);
        assert_eq!(cell.set_kelvin(2700.0), 0xFFA757);
        assert_eq!(cell.packed(), 0xFFA757);
    }

    #[test]
    fn test_store_masks_high_bits() {
        let cell = TintCell::default();
        cell.store(0xFF12_3456);
        assert_eq!(cell.packed(), 0x123456);
    }

    #[test]
    fn test_concurrent_writers_leave_a_valid_color() {
        let cell = Arc::new(TintCell::default());
        let temperatures = [1000.0, 2700.0, 6600.0, 12000.0, 40000.0];

        let writers: Vec<_> = temperatures
            .iter()
            .map(|&kelvin| {
                let cell = Arc::clone(&cell);
                thread::spawn(move || {
                    for _ in 0..1000 {
                        cell.set_kelvin(kelvin);
                    }
                })
            })
            .collect();

        let reader = {
            let cell = Arc::clone(&cell);
            thread::spawn(move || {
                for _ in 0..1000 {
                    assert!(cell.packed() <= PACKED_MAX);
                }
            })
        };

        for handle in writers {
            handle.join().unwrap();
        }
        reader.join().unwrap();

        let expected: Vec<u32> = temperatures.iter().map(|&k| kelvin_to_hex(k)).collect();
        assert!(expected.contains(&cell.packed()));
    }
}
