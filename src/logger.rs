//! Per-client logging handle.

use crate::config::LoggingConfig;
use tracing::level_filters::LevelFilter;
use tracing::{Dispatch, Level};

/// Decides whether and where a client's log events go.
///
/// Every client owns its own `Logger`. When a destination dispatcher is
/// configured the events are delivered only to it, so two clients with
/// different destinations never see each other's traffic. Without one, events
/// go to whatever subscriber is the default at the call site.
#[derive(Debug, Clone)]
pub struct Logger {
    enabled: bool,
    level: LevelFilter,
    destination: Option<Dispatch>,
}

impl Logger {
    pub fn new(config: &LoggingConfig) -> Self {
        Self {
            enabled: config.enabled,
            level: config.level,
            destination: config.destination.clone(),
        }
    }

    /// Returns `true` if an event at `level` would be emitted.
    pub fn enabled_for(&self, level: Level) -> bool {
        self.enabled && level <= self.level
    }

    /// Runs `emit` (which is expected to fire one `tracing` event) against
    /// this logger's destination, or not at all when `level` is filtered out.
    pub(crate) fn emit(&self, level: Level, emit: impl FnOnce()) {
        if !self.enabled_for(level) {
            return;
        }

        match &self.destination {
            Some(dispatch) => tracing::dispatcher::with_default(dispatch, emit),
            None => emit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_threshold() {
        let logger = Logger::new(&LoggingConfig {
            enabled: true,
            level: LevelFilter::INFO,
            destination: None,
        });

        assert!(logger.enabled_for(Level::ERROR));
        assert!(logger.enabled_for(Level::INFO));
        assert!(!logger.enabled_for(Level::DEBUG));
        assert!(!logger.enabled_for(Level::TRACE));
    }

    #[test]
    fn test_disabled_ignores_level() {
        let logger = Logger::new(&LoggingConfig {
            enabled: false,
            level: LevelFilter::TRACE,
            destination: None,
        });

        assert!(!logger.enabled_for(Level::ERROR));
    }

    #[test]
    fn test_emit_skips_filtered_levels() {
        let logger = Logger::new(&LoggingConfig::default());
        let mut fired = Vec::new();

        logger.emit(Level::DEBUG, || fired.push("debug"));
        logger.emit(Level::WARN, || fired.push("warn"));

        assert_eq!(fired, vec!["warn"]);
    }
}
