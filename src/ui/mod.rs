//! # Interactive display
//!
//! A session ([`WheelSession`] or [`SlotSession`]) holds all state and draws
//! itself with ratatui widgets; [`run`] owns the terminal and drives the
//! session from two sources on one thread:
//!
//! - key presses, polled with `crossterm::event`
//! - animation ticks, scheduled by a [`TickClock`] from the session's
//!   [`Session::next_tick`]
//!
//! The display lives on the alternate screen, so the user's scrollback is
//! back in place when a winner launches or the user quits.

pub mod clock;
pub mod events;
pub mod render;
pub mod session;
pub mod slot;
pub mod wheel;

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, warn};

pub use clock::TickClock;
pub use events::Action;
pub use render::render_to_text;
pub use session::{Flow, Session};
pub use slot::{SlotSession, SlotStatus};
pub use wheel::{WheelLayout, WheelSession, WheelStatus};

use crate::error::RogvibeError;

/// How long to wait for a key when nothing is animating
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Raw mode on the alternate screen; both are undone on drop
struct Screen {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Screen {
    fn open() -> Result<Self, RogvibeError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }

        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(err) => {
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                let _ = disable_raw_mode();
                Err(err.into())
            }
        }
    }

    fn restore(&mut self) -> Result<(), RogvibeError> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            warn!(error = %err, "failed to restore terminal");
        }
    }
}

/// Run `session` on the terminal until the user quits or picks a winner to
/// launch
///
/// The terminal is restored before this returns.
pub fn run<S: Session>(mut session: S) -> Result<Flow, RogvibeError> {
    let mut screen = Screen::open()?;
    let mut clock = TickClock::new();

    let flow = loop {
        screen.terminal.draw(|frame| session.render(frame))?;

        let timeout = clock.timeout(Instant::now(), IDLE_POLL);
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && let Some(action) = Action::from_key(&key)
        {
            debug!(?action, "action received");
            match session.on_action(action) {
                Flow::Continue => clock.arm(Instant::now(), session.next_tick()),
                done => break done,
            }
        }

        let now = Instant::now();
        if clock.is_due(now) {
            session.on_tick();
            clock.rearm(now, session.next_tick());
        }
    };

    drop(screen);
    Ok(flow)
}
