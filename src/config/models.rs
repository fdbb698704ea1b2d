use serde::Deserialize;

/// High-level app configuration; deserializable from TOML.
#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub struct AppConfig {
    #[serde(default = "crate::config::defaults::default_server_url")]
    pub server_url: String,
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default = "crate::config::defaults::default_window_width")]
    pub window_width: f32,
    #[serde(default = "crate::config::defaults::default_window_height")]
    pub window_height: f32,
    #[serde(default)]
    pub window_pos_x: Option<f32>,
    #[serde(default)]
    pub window_pos_y: Option<f32>,
    /// Gap length (ms) above which interaction time stops accruing.
    #[serde(default = "crate::config::defaults::default_idle_threshold_ms")]
    pub idle_threshold_ms: u64,
    #[serde(default = "crate::config::defaults::default_slice_step")]
    pub slice_step: i64,
    /// Step used while shift is held.
    #[serde(default = "crate::config::defaults::default_slice_step_fast")]
    pub slice_step_fast: i64,
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
    #[serde(default = "crate::config::defaults::default_key_previous_slice")]
    pub key_previous_slice: String,
    #[serde(default = "crate::config::defaults::default_key_next_slice")]
    pub key_next_slice: String,
    #[serde(default = "crate::config::defaults::default_key_previous_slice_type")]
    pub key_previous_slice_type: String,
    #[serde(default = "crate::config::defaults::default_key_next_slice_type")]
    pub key_next_slice_type: String,
    #[serde(default = "crate::config::defaults::default_key_intensity_up")]
    pub key_intensity_up: String,
    #[serde(default = "crate::config::defaults::default_key_intensity_down")]
    pub key_intensity_down: String,
    #[serde(default = "crate::config::defaults::default_key_next_element")]
    pub key_next_element: String,
    #[serde(default = "crate::config::defaults::default_key_previous_element")]
    pub key_previous_element: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            server_url: crate::config::defaults::default_server_url(),
            theme: ThemeMode::Night,
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            window_pos_x: None,
            window_pos_y: None,
            idle_threshold_ms: crate::config::defaults::default_idle_threshold_ms(),
            slice_step: crate::config::defaults::default_slice_step(),
            slice_step_fast: crate::config::defaults::default_slice_step_fast(),
            log_level: crate::config::defaults::default_log_level(),
            key_previous_slice: crate::config::defaults::default_key_previous_slice(),
            key_next_slice: crate::config::defaults::default_key_next_slice(),
            key_previous_slice_type: crate::config::defaults::default_key_previous_slice_type(),
            key_next_slice_type: crate::config::defaults::default_key_next_slice_type(),
            key_intensity_up: crate::config::defaults::default_key_intensity_up(),
            key_intensity_down: crate::config::defaults::default_key_intensity_down(),
            key_next_element: crate::config::defaults::default_key_next_element(),
            key_previous_element: crate::config::defaults::default_key_previous_element(),
        }
    }
}

/// Theme mode.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Day,
    Night,
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Night
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Day => "Day",
            ThemeMode::Night => "Night",
        };
        write!(f, "{}", label)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        write!(f, "{}", label)
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
