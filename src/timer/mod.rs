mod elapsed;
mod report;

pub use self::elapsed::Elapsed;
pub use self::report::format_line;

use crate::config::TimedOptions;
use anyhow::Result;
use std::{
    io::{self, Stdout, Write},
    time::Duration,
};
use tracing::{debug, error};

/// A timing session.
///
/// The clock starts when the session is created. When the session goes out of
/// scope, including early returns and panics, the clock stops and one line is
/// written: the label padded to the configured width, then the elapsed seconds.
///
/// ```
/// use timed::Timed;
///
/// let _timer = Timed::start("load");
/// // ... work being measured ...
/// // prints "load                                    0.000s" when dropped
/// ```
pub struct Timed<W: Write = Stdout> {
    options: TimedOptions,
    elapsed: Elapsed,
    writer: W,
    reported: bool,
}

impl Timed<Stdout> {
    /// Starts a session that reports to standard output.
    pub fn start(options: impl Into<TimedOptions>) -> Self {
        Timed::with_writer(options, io::stdout())
    }
}

impl<W: Write> Timed<W> {
    /// Starts a session that reports to `writer`.
    pub fn with_writer(options: impl Into<TimedOptions>, writer: W) -> Self {
        let options = options.into();

        debug!(label = options.label, width = options.width, "timer started");

        Self {
            options,
            elapsed: Elapsed::start(),
            writer,
            reported: false,
        }
    }

    /// Accessor for the elapsed time, usable after the session ends.
    pub fn elapsed(&self) -> Elapsed {
        self.elapsed.clone()
    }

    pub fn options(&self) -> &TimedOptions {
        &self.options
    }

    /// Stops the session and writes the report line.
    /// # Errors
    /// Will return an error if the report line can not be written
    pub fn finish(mut self) -> Result<Duration> {
        self.report()
    }

    fn report(&mut self) -> Result<Duration> {
        // one line per session, even if writing fails
        self.reported = true;

        let elapsed = self.elapsed.stop();

        debug!(
            label = self.options.label,
            elapsed = elapsed.as_secs_f64(),
            "timer stopped"
        );

        report::write_line(
            &mut self.writer,
            &self.options.label,
            self.options.width,
            elapsed,
        )?;

        Ok(elapsed)
    }
}

impl<W: Write> Drop for Timed<W> {
    fn drop(&mut self) {
        if self.reported {
            return;
        }

        if let Err(e) = self.report() {
            error!("{:#}", e);
        }
    }
}

/// Runs `f` inside a session that reports to standard output.
pub fn timed<T, F>(options: impl Into<TimedOptions>, f: F) -> T
where
    F: FnOnce(&Elapsed) -> T,
{
    timed_with(options, io::stdout(), f)
}

/// Runs `f` inside a session that reports to `writer` and returns its value.
///
/// The report line is written before the value (or error) is handed back.
pub fn timed_with<W, T, F>(options: impl Into<TimedOptions>, writer: W, f: F) -> T
where
    W: Write,
    F: FnOnce(&Elapsed) -> T,
{
    let session = Timed::with_writer(options, writer);
    f(&session.elapsed)
}

/// Times a block and prints the report line to standard output.
///
/// ```
/// let sum: u64 = timed::timed!("sum", (1..=10u64).sum());
/// assert_eq!(sum, 55);
///
/// let sum: u64 = timed::timed!("sum", 12, { (1..=10u64).sum() });
/// assert_eq!(sum, 55);
/// ```
#[macro_export]
macro_rules! timed {
    ($label:expr, $width:expr, $block:expr) => {{
        let _timed = $crate::Timed::start($crate::TimedOptions::new($label).width($width));
        $block
    }};
    ($label:expr, $block:expr) => {{
        let _timed = $crate::Timed::start($crate::TimedOptions::new($label));
        $block
    }};
}
