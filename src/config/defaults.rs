pub(crate) fn default_server_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

pub(crate) fn default_window_width() -> f32 {
    1280.0
}

pub(crate) fn default_window_height() -> f32 {
    860.0
}

pub(crate) fn default_idle_threshold_ms() -> u64 {
    crate::interaction::DEFAULT_IDLE_THRESHOLD.as_millis() as u64
}

pub(crate) fn default_slice_step() -> i64 {
    1
}

pub(crate) fn default_slice_step_fast() -> i64 {
    10
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Info
}

pub(crate) fn default_key_previous_slice() -> String {
    "a".to_string()
}

pub(crate) fn default_key_next_slice() -> String {
    "d".to_string()
}

pub(crate) fn default_key_previous_slice_type() -> String {
    "w".to_string()
}

pub(crate) fn default_key_next_slice_type() -> String {
    "s".to_string()
}

pub(crate) fn default_key_intensity_up() -> String {
    "e".to_string()
}

pub(crate) fn default_key_intensity_down() -> String {
    "r".to_string()
}

pub(crate) fn default_key_next_element() -> String {
    "space".to_string()
}

pub(crate) fn default_key_previous_element() -> String {
    "u".to_string()
}
