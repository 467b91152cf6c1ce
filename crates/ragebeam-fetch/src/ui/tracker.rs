use std::io::{self, Stdout, Write};

use indicatif::{ProgressBar, ProgressStyle};
use once_cell::sync::Lazy;

use crate::data::Progress;
use crate::error::{FetchError, Result};

/// Receives the size of every chunk written to disk.
pub trait Tracker {
    fn step(&mut self, len: u64);
    fn finish(self);
}

/// Creates a [`Tracker`] once the response headers are known.
pub trait TrackerBuilder {
    type Tracker: Tracker;

    /// `total` is the declared Content-Length, `None` when absent or malformed.
    fn build(self, total: Option<u64>) -> Result<Self::Tracker>;
}

/// Scope guard finishing its tracker exactly once, on whichever path leaves
/// the scope.
pub struct Reporting<T: Tracker> {
    tracker: Option<T>,
}

impl<T: Tracker> Reporting<T> {
    pub fn new(tracker: T) -> Self {
        Self {
            tracker: Some(tracker),
        }
    }

    pub fn step(&mut self, len: u64) {
        if let Some(t) = self.tracker.as_mut() {
            t.step(len);
        }
    }

    pub fn finish(mut self) {
        if let Some(t) = self.tracker.take() {
            t.finish();
        }
    }
}

impl<T: Tracker> Drop for Reporting<T> {
    fn drop(&mut self) {
        if let Some(t) = self.tracker.take() {
            t.finish();
        }
    }
}

/// No output at all; accepts responses without a Content-Length.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Tracker for Silent {
    fn step(&mut self, _len: u64) {}
    fn finish(self) {}
}

impl TrackerBuilder for Silent {
    type Tracker = Silent;

    fn build(self, _total: Option<u64>) -> Result<Silent> {
        Ok(Silent)
    }
}

/// Rewrites a single line with `Downloaded <n> of <total> bytes (<pct>%)`.
///
/// Finishing writes the trailing newline.
pub struct LineTracker<W: Write> {
    out: W,
    progress: Progress,
}

impl<W: Write> Tracker for LineTracker<W> {
    fn step(&mut self, len: u64) {
        self.progress.record(len);
        let _ = write!(
            self.out,
            "Downloaded {} of {} bytes ({:.2}%)\r",
            self.progress.bytes_downloaded,
            self.progress.total_bytes,
            self.progress.percentage()
        );
        let _ = self.out.flush();
    }

    fn finish(mut self) {
        let _ = self.out.write_all(b"\n");
        let _ = self.out.flush();
    }
}

#[derive(Debug, Clone)]
pub struct LineTrackerBuilder<W: Write> {
    out: W,
}

impl<W: Write> LineTrackerBuilder<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl LineTrackerBuilder<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TrackerBuilder for LineTrackerBuilder<W> {
    type Tracker = LineTracker<W>;

    /// Fails with [`FetchError::ContentLength`] when the total is unknown.
    fn build(self, total: Option<u64>) -> Result<LineTracker<W>> {
        let total = total.ok_or(FetchError::ContentLength)?;
        Ok(LineTracker {
            out: self.out,
            progress: Progress::new(total),
        })
    }
}

const BAR_TEMPLATE: &str =
    "{prefix:>12.green.bold} {bar:40.green/white} {bytes:>10}/{total_bytes} {bytes_per_sec} {msg}";

const BAR_CHARS: &str = "=> ";

static BAR_STYLE: Lazy<Option<ProgressStyle>> = Lazy::new(|| {
    ProgressStyle::with_template(BAR_TEMPLATE)
        .ok()
        .map(|style| style.progress_chars(BAR_CHARS))
});

/// indicatif bar; falls back to a spinner without a Content-Length.
pub struct BarTracker {
    pb: ProgressBar,
    finish: Option<String>,
}

impl Tracker for BarTracker {
    fn step(&mut self, len: u64) {
        self.pb.inc(len);
    }

    fn finish(self) {
        match self.finish {
            Some(msg) => self.pb.finish_with_message(msg),
            None => self.pb.finish(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BarTrackerBuilder {
    prefix: Option<String>,
    finish: Option<String>,
}

impl BarTrackerBuilder {
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = Some(prefix.to_string());
        self
    }

    pub fn with_finish(mut self, finish: &str) -> Self {
        self.finish = Some(finish.to_string());
        self
    }
}

impl TrackerBuilder for BarTrackerBuilder {
    type Tracker = BarTracker;

    fn build(self, total: Option<u64>) -> Result<BarTracker> {
        let pb = match total {
            Some(len) => ProgressBar::new(len),
            None => ProgressBar::new_spinner(),
        };
        let pb = match BAR_STYLE.as_ref() {
            Some(style) => pb.with_style(style.clone()),
            None => pb,
        };
        if let Some(prefix) = self.prefix {
            pb.set_prefix(prefix);
        }
        Ok(BarTracker {
            pb,
            finish: self.finish,
        })
    }
}
