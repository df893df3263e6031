pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

pub fn default_port() -> u16 {
    8080
}

pub fn default_environment() -> String {
    "development".to_string()
}

pub fn default_places_enabled() -> bool {
    true
}

pub fn default_places_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

pub fn default_places_user_agent() -> String {
    "swasthya-backend/0.1 (nearby-facilities)".to_string()
}

pub fn default_places_timeout_seconds() -> u64 {
    5
}

pub fn default_places_limit() -> u32 {
    10
}

pub fn default_places_radius_meters() -> u32 {
    5000
}

pub fn default_all_categories() -> Vec<String> {
    vec![
        "hospital".to_string(),
        "clinic".to_string(),
        "emergency".to_string(),
    ]
}

pub fn default_category_separator() -> String {
    "|".to_string()
}

pub fn default_cors_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".to_string()]
}

pub fn default_metrics_allow_private_only() -> bool {
    true
}

pub fn default_global_rate_limit_per_minute() -> u32 {
    300
}

pub fn default_global_rate_limit_burst_size() -> u32 {
    30
}

pub fn default_logging_level() -> String {
    "info".to_string()
}

pub fn default_logging_json_format() -> bool {
    true
}

pub fn normalize_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
