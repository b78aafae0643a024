//! Time entry configuration

use lapse_core::Value;

/// Construction parameters for a [`TimeEntry`](crate::TimeEntry)
#[derive(Clone, Debug, Default)]
pub struct TimeEntryConfig {
    /// Marker identifying the entry; empty is treated as absent
    pub label: Option<String>,
    /// Start immediately. Only a strict `Value::Bool(true)` starts the entry,
    /// anything else leaves it ready.
    pub auto_start: Value,
}

impl TimeEntryConfig {
    /// Configuration for an entry that starts on construction
    pub fn started(label: impl Into<String>) -> Self {
        TimeEntryConfig {
            label: Some(label.into()),
            auto_start: Value::Bool(true),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_auto_start(mut self, flag: impl Into<Value>) -> Self {
        self.auto_start = flag.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_does_not_start() {
        let config = TimeEntryConfig::default();
        assert!(config.label.is_none());
        assert!(config.auto_start.is_undefined());
    }

    #[test]
    fn test_started_preset() {
        let config = TimeEntryConfig::started("build");
        assert_eq!(config.label.as_deref(), Some("build"));
        assert_eq!(config.auto_start, Value::Bool(true));
    }

    #[test]
    fn test_builders_override_fields() {
        let config = TimeEntryConfig::started("a")
            .with_label("b")
            .with_auto_start(Value::Null);

        assert_eq!(config.label.as_deref(), Some("b"));
        assert!(config.auto_start.is_null());
    }
}
