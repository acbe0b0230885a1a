//! Alternate-screen session for the viewer, restored on every exit path.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Duration;

const SIGNAL_GRACE: Duration = Duration::from_secs(2);

pub trait ScreenOps: Send + Sync + 'static {
    fn enter(&self) -> io::Result<()>;
    fn leave(&self) -> io::Result<()>;
}

#[derive(Debug, Default)]
pub struct CrosstermScreen;

impl ScreenOps for CrosstermScreen {
    fn enter(&self) -> io::Result<()> {
        crossterm::terminal::enable_raw_mode()?;
        write_enter_sequence(&mut io::stdout())
    }

    fn leave(&self) -> io::Result<()> {
        // Best-effort: run every step, report the first failure.
        let raw = crossterm::terminal::disable_raw_mode();
        let screen = write_leave_sequence(&mut io::stdout());
        raw.and(screen)
    }
}

/// Alternate screen, mouse capture and focus reporting. Focus reports let the viewer end a
/// drag whose release happened outside the terminal.
fn write_enter_sequence<W: io::Write>(out: &mut W) -> io::Result<()> {
    use crossterm::{
        cursor,
        event::{EnableFocusChange, EnableMouseCapture},
        execute,
        terminal::EnterAlternateScreen,
    };

    execute!(
        out,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange,
        cursor::Hide
    )
}

fn write_leave_sequence<W: io::Write>(out: &mut W) -> io::Result<()> {
    use crossterm::{
        cursor,
        event::{DisableFocusChange, DisableMouseCapture},
        execute,
        terminal::LeaveAlternateScreen,
    };

    execute!(
        out,
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen,
        cursor::Show
    )
}

/// Cloneable handle that leaves the screen at most once, from any thread.
#[derive(Clone)]
pub struct ScreenRestorer {
    left: Arc<AtomicBool>,
    ops: Arc<dyn ScreenOps>,
}

impl ScreenRestorer {
    pub fn restore(&self) -> io::Result<()> {
        if self.left.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.ops.leave()
    }
}

pub struct ScreenGuard {
    restorer: ScreenRestorer,
}

impl ScreenGuard {
    pub fn enter() -> io::Result<Self> {
        Self::with_ops(Arc::new(CrosstermScreen))
    }

    pub fn with_ops(ops: Arc<dyn ScreenOps>) -> io::Result<Self> {
        ops.enter()?;
        Ok(Self {
            restorer: ScreenRestorer {
                left: Arc::new(AtomicBool::new(false)),
                ops,
            },
        })
    }

    pub fn restorer(&self) -> ScreenRestorer {
        self.restorer.clone()
    }
}

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        let _ = self.restorer.restore();
    }
}

/// Forwards SIGINT/SIGTERM to the main loop as an exit code. If the loop does not wind down
/// within the grace period the screen is restored here and the process exits.
#[cfg(unix)]
pub fn watch_termination_signals(
    restorer: ScreenRestorer,
    tx: Sender<i32>,
) -> io::Result<std::thread::JoinHandle<()>> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    Ok(std::thread::spawn(move || {
        if let Some(sig) = signals.forever().next() {
            let code = 128 + sig;
            let _ = tx.send(code);

            std::thread::sleep(SIGNAL_GRACE);
            let _ = restorer.restore();
            std::process::exit(code);
        }
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/tui/screen_guard.rs"]
mod tests;
