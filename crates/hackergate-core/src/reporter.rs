// ─────────────────────────────────────────────────────────────────────
// Hackergate — Reporter Interface
// ─────────────────────────────────────────────────────────────────────
//! Sink for the pipeline's status lines.
//!
//! The console front end paces and prints these lines; tests and
//! headless callers collect them. Emission is fire-and-forget.

use parking_lot::Mutex;

/// Receives status lines in pipeline order.
pub trait Reporter: Send + Sync {
    fn report(&self, line: &str);
}

/// Discards every line.
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&self, _line: &str) {}
}

/// Records every line for later inspection.
#[derive(Default)]
pub struct CollectingReporter {
    lines: Mutex<Vec<String>>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines reported so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Drain the recorded lines.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }
}

impl Reporter for CollectingReporter {
    fn report(&self, line: &str) {
        self.lines.lock().push(line.to_string());
    }
}

/// Reporter that forwards each line to a closure.
type ReportFn = Box<dyn Fn(&str) + Send + Sync>;

pub struct ExternalReporter {
    report_fn: ReportFn,
}

impl ExternalReporter {
    pub fn new(report_fn: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self {
            report_fn: Box::new(report_fn),
        }
    }
}

impl Reporter for ExternalReporter {
    fn report(&self, line: &str) {
        (self.report_fn)(line)
    }
}
