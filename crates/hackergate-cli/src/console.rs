// ─────────────────────────────────────────────────────────────────────
// Hackergate — Console Reporter
// ─────────────────────────────────────────────────────────────────────
//! Prints status lines and pauses after each one so a run reads at
//! human speed.

use std::io::{self, Stdout, Write};
use std::thread;
use std::time::Duration;

use parking_lot::Mutex;

use hackergate_core::Reporter;

pub struct ConsoleReporter<W: Write + Send> {
    out: Mutex<W>,
    pace: Duration,
}

impl ConsoleReporter<Stdout> {
    pub fn stdout(pace: Duration) -> Self {
        Self::new(io::stdout(), pace)
    }
}

impl<W: Write + Send> ConsoleReporter<W> {
    pub fn new(out: W, pace: Duration) -> Self {
        Self {
            out: Mutex::new(out),
            pace,
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write + Send> Reporter for ConsoleReporter<W> {
    fn report(&self, line: &str) {
        {
            let mut out = self.out.lock();
            if let Err(e) = writeln!(out, "{line}").and_then(|()| out.flush()) {
                log::warn!("console write failed: {e}");
                return;
            }
        }
        if !self.pace.is_zero() {
            thread::sleep(self.pace);
        }
    }
}
