// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Tracing subscriber installation for hosts.
//!
//! The library crates only emit events. A host process calls
//! [`init_tracing`] once at startup to print them. `RUST_LOG`, when set,
//! overrides the level passed in.

use std::io;

use serde::{Deserialize, Serialize};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

use crate::error::RewriteError;

/// Log level for tracing output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl LogLevel {
    pub fn to_tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Line format of the installed subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Install a global fmt subscriber writing to stderr.
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing(level: LogLevel, format: LogFormat) -> Result<(), RewriteError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_tracing_level().to_string()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_writer(io::stderr);

    let installed = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| RewriteError::internal(format!("tracing subscriber: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_map_to_tracing_levels() {
        assert_eq!(LogLevel::Trace.to_tracing_level(), tracing::Level::TRACE);
        assert_eq!(LogLevel::default().to_tracing_level(), tracing::Level::WARN);
    }

    #[test]
    fn settings_deserialize_from_lowercase_names() {
        let level: LogLevel = serde_json::from_str(r#""debug""#).unwrap();
        let format: LogFormat = serde_json::from_str(r#""json""#).unwrap();
        assert_eq!(level, LogLevel::Debug);
        assert_eq!(format, LogFormat::Json);
    }

    #[test]
    fn second_install_fails() {
        // Only one global subscriber per process; whichever test wins, the
        // second call must report an error rather than panic.
        let _ = init_tracing(LogLevel::Warn, LogFormat::Text);
        assert!(init_tracing(LogLevel::Warn, LogFormat::Json).is_err());
    }
}
