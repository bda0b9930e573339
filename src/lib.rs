//! Scoped timing: measure a block of work with a monotonic clock and print
//! one labeled line with the elapsed seconds when the block is left.
//!
//! ```
//! use timed::{timed, Timed, TimedOptions};
//!
//! // closure form, the accessor is valid inside and after the block
//! let (value, elapsed) = timed("load", |elapsed| (21 * 2, elapsed.clone()));
//! assert_eq!(value, 42);
//! assert!(elapsed.is_stopped());
//!
//! // guard form
//! {
//!     let _timer = Timed::start(TimedOptions::new("parse").width(20));
//! }
//! ```

pub mod config;
pub mod telemetry;
pub mod timer;

pub use self::config::TimedOptions;
pub use self::timer::{format_line, timed, timed_with, Elapsed, Timed};
