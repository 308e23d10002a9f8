//! Per-call widget options
//!
//! The widget's debug switch is passed explicitly into every thread operation
//! instead of living in a global. Debug mode only controls extra `debug!`
//! tracing; it never changes the thread that is produced.

use crate::models::ChatConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChatOptions {
    pub debug_mode: bool,
}

impl ChatOptions {
    pub fn debug() -> Self {
        Self { debug_mode: true }
    }

    /// Options as configured by the backend, optionally forced into debug mode by the host
    pub fn from_config(config: &ChatConfig, force_debug: bool) -> Self {
        Self { debug_mode: config.debug_mode || force_debug }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_respects_backend_switch() {
        let mut config = ChatConfig::default();
        assert!(!ChatOptions::from_config(&config, false).debug_mode);
        assert!(ChatOptions::from_config(&config, true).debug_mode);

        config.debug_mode = true;
        assert_eq!(ChatOptions::from_config(&config, false), ChatOptions::debug());
    }
}
