/// A closed range of real values.
///
/// Used for the Kelvin input domain and the 0-255 channel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns true if x is within the interval [min, max] (inclusive).
    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    /// Returns true if x is strictly within the interval (min, max) (exclusive).
    pub fn surrounds(&self, x: f64) -> bool {
        self.min < x && x < self.max
    }

    /// Clamps x to be within the interval [min, max].
    ///
    /// NaN has no nearest bound and maps to `min`. Never panics, even for
    /// an inverted interval.
    pub fn clamp(&self, x: f64) -> f64 {
        if x.is_nan() || x < self.min {
            self.min
        } else if x > self.max {
            self.max
        } else {
            x
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_creation() {
        let interval = Interval::new(1000.0, 40000.0);
        assert_eq!(interval.min, 1000.0);
        assert_eq!(interval.max, 40000.0);
    }

    #[test]
    fn test_interval_contains() {
        let interval = Interval::new(0.0, 255.0);

        // Inclusive bounds
        assert!(interval.contains(0.0));
        assert!(interval.contains(255.0));
        assert!(interval.contains(128.0));

        assert!(!interval.contains(-0.1));
        assert!(!interval.contains(255.1));
        assert!(!interval.contains(f64::NAN));
    }

    #[test]
    fn test_interval_surrounds() {
        let interval = Interval::new(19.0, 66.0);

        // Exclusive bounds - endpoints NOT included
        assert!(!interval.surrounds(19.0));
        assert!(!interval.surrounds(66.0));

        assert!(interval.surrounds(19.01));
        assert!(interval.surrounds(65.99));
        assert!(!interval.surrounds(f64::NAN));
    }

    #[test]
    fn test_interval_clamp() {
        let interval = Interval::new(0.0, 10.0);

        assert_eq!(interval.clamp(-5.0), 0.0);
        assert_eq!(interval.clamp(0.0), 0.0);
        assert_eq!(interval.clamp(5.0), 5.0);
        assert_eq!(interval.clamp(10.0), 10.0);
        assert_eq!(interval.clamp(15.0), 10.0);
    }

    #[test]
    fn test_interval_clamp_non_finite() {
        let interval = Interval::new(1000.0, 40000.0);

        assert_eq!(interval.clamp(f64::INFINITY), 40000.0);
        assert_eq!(interval.clamp(f64::NEG_INFINITY), 1000.0);
        assert_eq!(interval.clamp(f64::NAN), 1000.0);
    }

    #[test]
    fn test_interval_inverted_clamp() {
        let inverted = Interval::new(10.0, 0.0);

        assert!(!inverted.contains(5.0));
        // f64::clamp would panic here
        assert_eq!(inverted.clamp(5.0), 10.0);
    }
}
