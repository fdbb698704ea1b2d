use super::AppConfig;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Load configuration from a TOML file, falling back to defaults when the
/// file is absent or unreadable. A malformed file is reported but never
/// fatal; the annotator should still get a working UI.
pub fn load_config(path: &Path) -> AppConfig {
    match fs::read_to_string(path) {
        Ok(data) => match toml::from_str::<AppConfig>(&data) {
            Ok(config) => {
                debug!(path = %path.display(), "Loaded configuration");
                config
            }
            Err(err) => {
                warn!(path = %path.display(), "Invalid configuration, using defaults: {err}");
                AppConfig::default()
            }
        },
        Err(_) => {
            debug!(path = %path.display(), "No configuration file, using defaults");
            AppConfig::default()
        }
    }
}
