//! Logging configuration

use serde::{Deserialize, Serialize};

/// Crates whose events a bare level applies to
const THICKET_TARGETS: &[&str] = &["thicket", "thicket_core"];

/// Logging configuration
///
/// The library only emits `tracing` events; binaries read this to install a
/// subscriber.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error) or a full filter directive
    pub level: String,
    /// Log format (json, pretty, compact)
    pub format: String,
}

/// Output format of the installed subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Compact,
    Json,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Merge with another logging config
    pub fn merge(&mut self, other: LoggingConfig) {
        if !other.level.is_empty() {
            self.level = other.level;
        }

        if !other.format.is_empty() {
            self.format = other.format;
        }
    }

    /// `EnvFilter` directive for [`level`](Self::level)
    ///
    /// A bare level such as `debug` is scoped to the thicket crates, everything
    /// else stays at `warn`. Anything containing `=` or `,` is used verbatim.
    pub fn filter_directive(&self) -> String {
        let level = self.level.trim();
        if level.is_empty() {
            return "warn".to_string();
        }
        if level.contains(['=', ',']) {
            return level.to_string();
        }
        let scoped: Vec<String> = THICKET_TARGETS
            .iter()
            .map(|target| format!("{}={}", target, level))
            .collect();
        format!("warn,{}", scoped.join(","))
    }

    /// The configured format, falling back to pretty for unknown names
    pub fn log_format(&self) -> LogFormat {
        match self.format.to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            "compact" => LogFormat::Compact,
            _ => LogFormat::Pretty,
        }
    }
}
