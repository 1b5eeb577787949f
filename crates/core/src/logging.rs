//! Log Verbosity Gate
//!
//! A shared, mutable verbosity threshold consulted before emitting log
//! events. Components that must silence expected noise for the duration of
//! one call take a `SuppressionGuard`, which restores the previous level when
//! dropped (normal return, `?` propagation, or a cancelled future alike).
//!
//! Emit gated events with `gated!(gate, info, "...", args)`.

use std::sync::atomic::{AtomicU8, Ordering};

use serde::{Deserialize, Serialize};

/// Verbosity threshold, ordered from silent to most verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn as_u8(self) -> u8 {
        match self {
            LogLevel::Off => 0,
            LogLevel::Error => 1,
            LogLevel::Warn => 2,
            LogLevel::Info => 3,
            LogLevel::Debug => 4,
            LogLevel::Trace => 5,
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            0 => LogLevel::Off,
            1 => LogLevel::Error,
            2 => LogLevel::Warn,
            3 => LogLevel::Info,
            4 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

/// Mutable verbosity threshold shared between a client context and its
/// transport.
#[derive(Debug)]
pub struct LogGate {
    level: AtomicU8,
}

impl LogGate {
    pub fn new(level: LogLevel) -> Self {
        Self {
            level: AtomicU8::new(level.as_u8()),
        }
    }

    /// Current threshold.
    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::SeqCst))
    }

    /// Replace the threshold, returning the previous one.
    pub fn set_level(&self, level: LogLevel) -> LogLevel {
        LogLevel::from_u8(self.level.swap(level.as_u8(), Ordering::SeqCst))
    }

    /// Whether an event at `level` should be emitted.
    pub fn enabled(&self, level: LogLevel) -> bool {
        level != LogLevel::Off && level <= self.level()
    }

    /// Lower the threshold to `level` until the returned guard is dropped.
    pub fn scoped(&self, level: LogLevel) -> SuppressionGuard<'_> {
        let previous = self.set_level(level);
        SuppressionGuard {
            gate: self,
            previous,
        }
    }

    /// Silence everything until the returned guard is dropped.
    pub fn suppress(&self) -> SuppressionGuard<'_> {
        self.scoped(LogLevel::Off)
    }
}

impl Default for LogGate {
    fn default() -> Self {
        Self::new(LogLevel::default())
    }
}

/// Restores the saved level on drop.
#[must_use = "the previous log level is restored as soon as the guard is dropped"]
#[derive(Debug)]
pub struct SuppressionGuard<'a> {
    gate: &'a LogGate,
    previous: LogLevel,
}

impl SuppressionGuard<'_> {
    /// Level that will be restored.
    pub fn previous(&self) -> LogLevel {
        self.previous
    }
}

impl Drop for SuppressionGuard<'_> {
    fn drop(&mut self) {
        self.gate.set_level(self.previous);
    }
}

/// Emit a `tracing` event only when `$gate` lets its level through.
///
/// `$gate` is anything that derefs to a `LogGate`.
#[macro_export]
macro_rules! gated {
    ($gate:expr, error, $($arg:tt)+) => {
        if $gate.enabled($crate::LogLevel::Error) {
            $crate::__tracing::error!($($arg)+);
        }
    };
    ($gate:expr, warn, $($arg:tt)+) => {
        if $gate.enabled($crate::LogLevel::Warn) {
            $crate::__tracing::warn!($($arg)+);
        }
    };
    ($gate:expr, info, $($arg:tt)+) => {
        if $gate.enabled($crate::LogLevel::Info) {
            $crate::__tracing::info!($($arg)+);
        }
    };
    ($gate:expr, debug, $($arg:tt)+) => {
        if $gate.enabled($crate::LogLevel::Debug) {
            $crate::__tracing::debug!($($arg)+);
        }
    };
    ($gate:expr, trace, $($arg:tt)+) => {
        if $gate.enabled($crate::LogLevel::Trace) {
            $crate::__tracing::trace!($($arg)+);
        }
    };
}
