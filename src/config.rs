use std::collections::HashMap;
use std::time::Duration;

/// Bundled defaults, compiled in so web builds need no filesystem or env.
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_SEND_SOUND_URL: &str =
    "https://assets.mixkit.co/sfx/preview/mixkit-arrow-whoosh-1491.mp3";
const DEFAULT_GREETING_DELAY_MS: u64 = 500;
const DEFAULT_SEND_SOUND_VOLUME: f32 = 0.3;

#[cfg(not(target_arch = "wasm32"))]
const KEYS: &[&str] = &[
    "SOVA_API_URL",
    "SOVA_GREETING_DELAY_MS",
    "SOVA_SEND_SOUND_URL",
    "SOVA_SEND_SOUND_VOLUME",
];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct WidgetConfig {
    pub api_url: String,
    pub greeting_delay: Duration,
    pub send_sound_url: String,
    pub send_sound_volume: f32,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            greeting_delay: Duration::from_millis(DEFAULT_GREETING_DELAY_MS),
            send_sound_url: DEFAULT_SEND_SOUND_URL.to_string(),
            send_sound_volume: DEFAULT_SEND_SOUND_VOLUME,
        }
    }
}

impl WidgetConfig {
    /// Bundled config, then `.env` and the process environment on native builds.
    pub fn load() -> Self {
        let mut values = parse_env_text(BUNDLED_CONFIG);
        overlay_environment(&mut values);
        Self::load_from(&values)
    }

    /// Like [`from_values`](Self::from_values), but a bad value logs and yields the defaults.
    pub fn load_from(values: &HashMap<String, String>) -> Self {
        match Self::from_values(values) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("{err}; using default configuration");
                Self::default()
            }
        }
    }

    pub fn from_values(values: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(url) = values.get("SOVA_API_URL").filter(|v| !v.is_empty()) {
            config.api_url = url.trim_end_matches('/').to_string();
        }
        if let Some(raw) = values.get("SOVA_GREETING_DELAY_MS") {
            let millis = raw.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                key: "SOVA_GREETING_DELAY_MS",
                value: raw.clone(),
            })?;
            config.greeting_delay = Duration::from_millis(millis);
        }
        if let Some(url) = values.get("SOVA_SEND_SOUND_URL").filter(|v| !v.is_empty()) {
            config.send_sound_url = url.clone();
        }
        if let Some(raw) = values.get("SOVA_SEND_SOUND_VOLUME") {
            let volume = raw
                .parse::<f32>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| ConfigError::InvalidValue {
                    key: "SOVA_SEND_SOUND_VOLUME",
                    value: raw.clone(),
                })?;
            config.send_sound_volume = volume.clamp(0.0, 1.0);
        }

        Ok(config)
    }
}

/// Parses `KEY=VALUE` lines, skipping blanks and `#` comments.
pub fn parse_env_text(text: &str) -> HashMap<String, String> {
    let mut values = HashMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let value = value.trim().trim_matches('"');
            values.insert(key.trim().to_string(), value.to_string());
        }
    }
    values
}

#[cfg(not(target_arch = "wasm32"))]
fn overlay_environment(values: &mut HashMap<String, String>) {
    // .env is optional for desktop dev
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "loaded .env");
    }
    for key in KEYS {
        if let Ok(value) = std::env::var(key) {
            values.insert((*key).to_string(), value);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn overlay_environment(_values: &mut HashMap<String, String>) {}
