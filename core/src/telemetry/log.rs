use log::{debug, info};

/// Facade over the `log` crate for stage lifecycle messages.
///
/// Stages log when they are configured or reset, never per report; the
/// per-sample path stays free of I/O.
pub struct LogManager;

impl LogManager {
    pub fn new() -> Self {
        Self
    }

    pub fn record(&self, message: &str) {
        info!("{}", message);
    }

    pub fn record_debug(&self, message: &str) {
        debug!("{}", message);
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}
