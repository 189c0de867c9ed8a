use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    /// Initial theme mode, "light" or "dark". The session toggle starts here;
    /// the toggled value is never written back.
    #[serde(default = "default_theme_mode")]
    pub theme_mode: String,
    /// Path to a JSON theme file with light/dark variants. Empty means the
    /// built-in palettes are used.
    #[serde(default)]
    pub theme_file: String,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    /// Base tracing level for the file log (e.g. "info", "debug").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Per-module overrides appended to the filter, e.g. [("tui_blog_app", "debug")].
    #[serde(default)]
    pub module_levels: Vec<(String, String)>,
    /// Directory for the rolling log file. Defaults to "logs".
    #[serde(default)]
    pub log_directory: Option<String>,
    /// Emit render timing at debug level.
    #[serde(default)]
    pub enable_performance_metrics: bool,
}

fn default_theme_mode() -> String {
    "light".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
            theme_file: String::new(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            module_levels: Vec::new(),
            log_directory: None,
            enable_performance_metrics: false,
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        // Look for config.ron in current directory or next to executable
        let mut candidates = Vec::new();

        // 1. Current working directory
        candidates.push(PathBuf::from("config.ron"));

        // 2. Next to executable
        if let Ok(exe) = std::env::current_exe()
            && let Some(dir) = exe.parent()
        {
            candidates.push(dir.join("config.ron"));
        }

        for path in candidates {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match ron::from_str::<AppConfig>(&content) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {}", path.display());
                        return config;
                    }
                    Err(e) => {
                        tracing::error!("Failed to parse config at {}: {}", path.display(), e);
                    }
                }
            }
        }

        tracing::info!("No config file found, using defaults");
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_light_with_builtin_palette() {
        let config = AppConfig::default();
        assert_eq!(config.theme_mode, "light");
        assert!(config.theme_file.is_empty());
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.enable_performance_metrics);
    }

    #[test]
    fn partial_config_falls_back_per_field() {
        let config: AppConfig = ron::from_str(r#"(theme_mode: "dark")"#).unwrap();
        assert_eq!(config.theme_mode, "dark");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn logging_section_parses() {
        let config: AppConfig = ron::from_str(
            r#"(
                theme_file: "./themes/flexoki.json",
                logging: (
                    level: "debug",
                    module_levels: [("tui_blog_app", "trace")],
                    log_directory: Some("my-logs"),
                    enable_performance_metrics: true,
                ),
            )"#,
        )
        .unwrap();
        assert_eq!(config.theme_file, "./themes/flexoki.json");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.log_directory.as_deref(), Some("my-logs"));
        assert!(config.logging.enable_performance_metrics);
    }
}
