//! # Reveal Animations
//!
//! The winner of a spin is drawn before any animation starts. These state
//! machines only decide how the display travels to an already-known result:
//!
//! - **WheelSpin**: walks the highlight around the wheel for several laps,
//!   slowing down quadratically, and stops on the drawn index
//! - **SlotSpin**: rolls every reel, stopping them left to right on the
//!   drawn symbols
//!
//! Neither touches the terminal or sleeps; the caller owns the clock and asks
//! for the next delay.

pub mod reels;
pub mod wheel;

use std::time::Duration;

pub use reels::{ReelEvent, SlotSpin};
pub use wheel::{WheelEvent, WheelSpin};

use crate::constants::animation::{BASE_DELAY, MAX_EXTRA_DELAY};

/// Delay curve shared by the animations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinTiming {
    pub base_delay: Duration,
    pub max_extra_delay: Duration,
}

impl Default for SpinTiming {
    fn default() -> Self {
        Self {
            base_delay: BASE_DELAY,
            max_extra_delay: MAX_EXTRA_DELAY,
        }
    }
}

impl SpinTiming {
    /// Delay at `progress` in `[0, 1]`, eased as `base + extra * p²`
    pub fn delay_at(&self, progress: f64) -> Duration {
        let p = progress.clamp(0.0, 1.0);
        self.base_delay + self.max_extra_delay.mul_f64(p * p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_curve() {
        let timing = SpinTiming::default();

        assert_eq!(timing.delay_at(0.0), Duration::from_millis(50));
        assert_eq!(timing.delay_at(1.0), Duration::from_millis(300));
        assert_eq!(timing.delay_at(0.5), Duration::from_micros(112_500));
    }

    #[test]
    fn test_delay_curve_clamps() {
        let timing = SpinTiming::default();

        assert_eq!(timing.delay_at(-3.0), timing.delay_at(0.0));
        assert_eq!(timing.delay_at(7.0), timing.delay_at(1.0));
    }
}
