//! # Core Traits (Ports)
//!
//! The seams between the interactive post unit and whatever hosts it.

use chrono::{DateTime, Utc};

/// Source of "now" for relative publication times.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant. Used for reproducible renders.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Receiver of submitted comment text.
///
/// The composer only ever talks to this trait, so a submission can be
/// observed (or asserted absent) without a real thread behind it.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait CommentSink {
    /// Appends a comment. Always succeeds.
    fn add(&mut self, text: String);
}
