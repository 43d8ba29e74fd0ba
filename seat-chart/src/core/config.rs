use std::path::PathBuf;

/// Seat chart configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | SEAT_CHART_SNAPSHOT | snapshot.json | seats + reservations snapshot |
/// | LOG_LEVEL | info | max tracing level |
/// | LOG_DIR | (unset) | directory for a daily rolling log file |
/// | ENVIRONMENT | development | development / production |
///
/// CLI flags override whatever is loaded here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Snapshot file read by the CLI
    pub snapshot_path: PathBuf,
    /// Max log level
    pub log_level: String,
    /// Optional log directory
    pub log_dir: Option<String>,
    /// development | production
    pub environment: String,
}

impl Config {
    /// Load from process environment, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            snapshot_path: lookup("SEAT_CHART_SNAPSHOT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("snapshot.json")),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: lookup("LOG_DIR").filter(|d| !d.is_empty()),
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".into()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.snapshot_path, PathBuf::from("snapshot.json"));
        assert_eq!(config.log_level, "info");
        assert!(config.log_dir.is_none());
        assert!(config.is_development());
    }

    #[test]
    fn test_lookup_overrides() {
        let vars: HashMap<&str, &str> = [
            ("SEAT_CHART_SNAPSHOT", "/data/today.json"),
            ("LOG_LEVEL", "debug"),
            ("LOG_DIR", "/var/log/seat-chart"),
            ("ENVIRONMENT", "production"),
        ]
        .into_iter()
        .collect();

        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.snapshot_path, PathBuf::from("/data/today.json"));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_dir.as_deref(), Some("/var/log/seat-chart"));
        assert!(config.is_production());
    }

    #[test]
    fn test_empty_log_dir_is_unset() {
        let config = Config::from_lookup(|key| (key == "LOG_DIR").then(String::new));
        assert!(config.log_dir.is_none());
    }
}
