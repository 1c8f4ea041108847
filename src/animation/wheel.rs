use std::time::Duration;

use rand::Rng;
use rand::seq::IndexedRandom;

use super::SpinTiming;
use crate::constants::animation::{DICE_EMOJI, DICE_FACES, MAX_LAPS, MIN_LAPS};

/// Something the wheel did on one tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WheelEvent {
    /// The highlight moved; the centre die shows `dice_face`
    Tick {
        index: usize,
        dice_face: &'static str,
    },
    /// The highlight came to rest on the drawn winner
    Finished { index: usize },
}

/// Highlight walk from the current slot to a pre-drawn target slot
#[derive(Debug, Clone)]
pub struct WheelSpin {
    len: usize,
    current: usize,
    target: usize,
    lap_steps: usize,
    steps_remaining: usize,
    ticks: usize,
    timing: SpinTiming,
}

impl WheelSpin {
    /// Plan a spin over `len` slots that ends exactly on `target`
    ///
    /// The highlight first travels `4n..=7n` steps, then just enough extra
    /// steps to land on the target.
    pub fn start<R: Rng + ?Sized>(
        current: usize,
        target: usize,
        len: usize,
        timing: SpinTiming,
        rng: &mut R,
    ) -> Self {
        let len = len.max(1);
        let current = current % len;
        let target = target % len;

        let lap_steps = rng.random_range(len * MIN_LAPS..=len * MAX_LAPS);
        let landing = (current + lap_steps) % len;
        let offset = (target + len - landing) % len;

        Self {
            len,
            current,
            target,
            lap_steps,
            steps_remaining: lap_steps + offset,
            ticks: 0,
            timing,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn total_steps(&self) -> usize {
        self.ticks + self.steps_remaining
    }

    pub fn is_finished(&self) -> bool {
        self.steps_remaining == 0
    }

    /// Share of the lap phase already travelled
    pub fn progress(&self) -> f64 {
        if self.lap_steps == 0 {
            return 1.0;
        }
        1.0 - self.steps_remaining as f64 / self.lap_steps as f64
    }

    /// How long to wait before the next call to [`WheelSpin::advance`]
    pub fn next_delay(&self) -> Duration {
        if self.ticks == 0 {
            self.timing.base_delay
        } else {
            self.timing.delay_at(self.progress())
        }
    }

    /// Move the highlight one slot
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> WheelEvent {
        if self.is_finished() {
            return WheelEvent::Finished {
                index: self.current,
            };
        }

        self.current = (self.current + 1) % self.len;
        self.steps_remaining -= 1;
        self.ticks += 1;

        if self.is_finished() {
            return WheelEvent::Finished {
                index: self.current,
            };
        }

        let dice_face = DICE_FACES.choose(rng).copied().unwrap_or(DICE_EMOJI);
        WheelEvent::Tick {
            index: self.current,
            dice_face,
        }
    }
}
