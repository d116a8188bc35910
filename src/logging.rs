//! Logger wrapper honoring the per-topic debug switches
//!
//! The max log level is global, so turning on one debug topic would turn on
//! all of them. `SwitchedLogger` sits in front of the real backend and drops
//! records on a topic target whose switch is off.

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::input::INPUT_LOG_TARGET;
use crate::settings::Settings;
use crate::sim::body::{FORCE_LOG_TARGET, STATE_LOG_TARGET};

/// Which debug topics are let through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogSwitches {
    pub forces: bool,
    pub state: bool,
    pub keyboard: bool,
}

impl LogSwitches {
    /// Whether records on `target` may be emitted
    pub fn allows(&self, target: &str) -> bool {
        match target {
            FORCE_LOG_TARGET => self.forces,
            STATE_LOG_TARGET => self.state,
            INPUT_LOG_TARGET => self.keyboard,
            _ => true,
        }
    }
}

impl From<&Settings> for LogSwitches {
    fn from(settings: &Settings) -> Self {
        Self {
            forces: settings.log_forces,
            state: settings.log_state,
            keyboard: settings.log_keyboard,
        }
    }
}

/// Filters topic targets before handing records to `inner`
#[derive(Debug)]
pub struct SwitchedLogger<L> {
    inner: L,
    switches: LogSwitches,
}

impl<L: Log> SwitchedLogger<L> {
    pub fn new(inner: L, switches: LogSwitches) -> Self {
        Self { inner, switches }
    }

    pub fn inner(&self) -> &L {
        &self.inner
    }
}

impl<L: Log> Log for SwitchedLogger<L> {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.switches.allows(metadata.target()) && self.inner.enabled(metadata)
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            self.inner.log(record);
        }
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

/// Install `inner` behind the switches as the global logger
pub fn install<L: Log + 'static>(
    inner: L,
    switches: LogSwitches,
    max_level: LevelFilter,
) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(SwitchedLogger::new(inner, switches)))?;
    log::set_max_level(max_level);
    Ok(())
}

/// Browser console backend
#[cfg(target_arch = "wasm32")]
#[derive(Debug)]
pub struct ConsoleLogger;

#[cfg(target_arch = "wasm32")]
impl Log for ConsoleLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        console_log::log(record);
    }

    fn flush(&self) {}
}
