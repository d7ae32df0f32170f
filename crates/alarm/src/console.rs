//! Console stand-in for the bedside alarm hardware.
//!
//! A critical alert prints its message and then flashes an asterisk back and
//! forth on one line, blocking the calling thread until the flasher has run
//! its configured number of cycles. Warnings print a single line and return.

use std::io::{self, Write};
use std::thread;

use vitals_core::{Notification, Notifier};

use crate::config::AlarmConfig;

/// Flasher frames, alternated once per half-period.
const FRAMES: [&str; 2] = ["\r* ", "\r *"];

/// Blocking console alarm writing to any [`Write`] sink (stdout by default).
#[derive(Debug)]
pub struct ConsoleAlarm<W = io::Stdout> {
    out: W,
    config: AlarmConfig,
}

impl ConsoleAlarm<io::Stdout> {
    pub fn stdout(config: AlarmConfig) -> Self {
        Self::new(io::stdout(), config)
    }
}

impl<W: Write> ConsoleAlarm<W> {
    pub fn new(out: W, config: AlarmConfig) -> Self {
        Self { out, config }
    }

    pub fn config(&self) -> &AlarmConfig {
        &self.config
    }

    /// Consume the alarm and return its sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn flash(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{message}")?;
        for _ in 0..self.config.cycles {
            for frame in FRAMES {
                write!(self.out, "{frame}")?;
                self.out.flush()?;
                thread::sleep(self.config.half_period());
            }
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}

impl<W: Write> Notifier for ConsoleAlarm<W> {
    fn on_critical(&mut self, notification: &Notification) {
        tracing::error!(
            vital = %notification.vital,
            value = %notification.display_value,
            raised_at = %notification.raised_at,
            cycles = self.config.cycles,
            "{}",
            notification.message,
        );
        let message = format!("{} ({})", notification.message, notification.display_value);
        if let Err(e) = self.flash(&message) {
            tracing::warn!(error = %e, "Failed to write critical alarm to console");
        }
    }

    fn on_warning(&mut self, notification: &Notification) {
        tracing::warn!(
            vital = %notification.vital,
            value = %notification.display_value,
            raised_at = %notification.raised_at,
            "{}",
            notification.message,
        );
        let written = writeln!(
            self.out,
            "{} ({})",
            notification.message, notification.display_value
        )
        .and_then(|()| self.out.flush());
        if let Err(e) = written {
            tracing::warn!(error = %e, "Failed to write warning to console");
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
