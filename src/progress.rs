use console::{Term, style};
use indicatif::{ProgressBar, ProgressStyle};

use crate::constants::animation::{DICE_FACES, REVEAL_TICKS, TICK_INTERVAL};
use crate::core::Mode;

const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";

/// Short drumroll on stderr before a headless result is printed
///
/// Silent when stderr is not a terminal, so piped output stays clean.
pub struct DrawReporter {
    term: Term,
}

impl Default for DrawReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.term.is_term()
    }

    fn create_spinner(&self, message: String) -> ProgressBar {
        let mut frames: Vec<&str> = DICE_FACES.to_vec();
        frames.push("🎯");

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template(SPINNER_TEMPLATE)
                .expect("Spinner template should be valid")
                .tick_strings(&frames),
        );
        pb.set_message(message);
        pb
    }

    /// Spin the dice for a moment, then clear the line
    pub fn drumroll(&self, mode: Mode, entries: usize) {
        if !self.is_enabled() {
            return;
        }

        let message = match mode {
            Mode::Wheel => format!(
                "Spinning the wheel over {} {}...",
                style(entries).yellow().bold(),
                crate::utils::string::pluralize("name", entries)
            ),
            Mode::Slot => format!(
                "Pulling the lever on {} {}...",
                style(entries).yellow().bold(),
                crate::utils::string::pluralize("reel", entries)
            ),
        };

        let pb = self.create_spinner(message);
        for _ in 0..REVEAL_TICKS {
            pb.tick();
            std::thread::sleep(TICK_INTERVAL);
        }
        pb.finish_and_clear();
    }
}
