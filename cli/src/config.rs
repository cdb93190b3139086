use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::Level;

/// Verbosity for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "off" => LogLevel::Off,
            "error" => LogLevel::Error,
            "warn" => LogLevel::Warn,
            "debug" => LogLevel::Debug,
            "trace" => LogLevel::Trace,
            _ => LogLevel::Info,
        }
    }

    pub fn as_tracing_level(&self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    /// Sampling cadence in milliseconds. The sensor is polled once per tick.
    pub tick_ms: u64,
    /// Always use the simulated sensor, even when a battery is present.
    pub simulate: bool,
    /// Where exported CSVs land. Defaults to the platform Downloads folder.
    pub export_dir: Option<PathBuf>,
    pub log_level: LogLevel,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            tick_ms: 1000,
            simulate: false,
            export_dir: None,
            log_level: LogLevel::default(),
        }
    }
}

pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join("voltlog")
}

pub fn runtime_dir() -> PathBuf {
    dirs::runtime_dir()
        .or_else(dirs::cache_dir)
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("voltlog")
}

pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

pub fn ensure_dirs() -> std::io::Result<()> {
    fs::create_dir_all(config_dir())?;
    Ok(())
}

impl UserConfig {
    pub fn load() -> Self {
        let path = config_path();
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self) -> std::io::Result<()> {
        let _ = ensure_dirs();
        let path = config_path();
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        fs::write(path, content)
    }

    pub fn merge_with_args(
        &mut self,
        simulate: bool,
        tick_ms: Option<u64>,
        export_dir: Option<PathBuf>,
    ) {
        if simulate {
            self.simulate = true;
        }
        if let Some(ms) = tick_ms {
            self.tick_ms = ms;
        }
        if let Some(dir) = export_dir {
            self.export_dir = Some(dir);
        }
    }

    /// Destination directory for export files.
    ///
    /// Config override wins, then the platform Downloads folder, then the
    /// working directory. Write permission is the caller's problem.
    pub fn resolve_export_dir(&self) -> PathBuf {
        if let Some(dir) = &self.export_dir {
            return dir.clone();
        }
        dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_from_str() {
        assert_eq!(LogLevel::from_str("debug"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("OFF"), LogLevel::Off);
        assert_eq!(LogLevel::from_str("bogus"), LogLevel::Info);
    }

    #[test]
    fn test_merge_with_args() {
        let mut config = UserConfig::default();
        config.merge_with_args(true, Some(500), Some(PathBuf::from("/tmp/exports")));

        assert!(config.simulate);
        assert_eq!(config.tick_ms, 500);
        assert_eq!(config.export_dir, Some(PathBuf::from("/tmp/exports")));
    }

    #[test]
    fn test_explicit_export_dir_wins() {
        let config = UserConfig {
            export_dir: Some(PathBuf::from("/data/csv")),
            ..Default::default()
        };
        assert_eq!(config.resolve_export_dir(), PathBuf::from("/data/csv"));
    }
}
