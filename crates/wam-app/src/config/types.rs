//! Configuration types

use serde::{Deserialize, Serialize};

/// Default simulated pairing delay, in milliseconds
pub const DEFAULT_PAIRING_DELAY_MS: u64 = 1500;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

pub const DEFAULT_API_KEY_ENV: &str = "API_KEY";

/// Settings from `.wam/config.toml`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub connect: ConnectSettings,

    #[serde(default)]
    pub generation: GenerationSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Connect overlay settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConnectSettings {
    /// Delay before the placeholder pairing code is shown
    #[serde(default = "default_pairing_delay_ms")]
    pub pairing_delay_ms: u64,
}

impl Default for ConnectSettings {
    fn default() -> Self {
        Self {
            pairing_delay_ms: default_pairing_delay_ms(),
        }
    }
}

fn default_pairing_delay_ms() -> u64 {
    DEFAULT_PAIRING_DELAY_MS
}

/// Text generation service settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GenerationSettings {
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the API, without the `/models/...` suffix
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Name of the environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            endpoint: default_endpoint(),
            api_key_env: default_api_key_env(),
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

/// Icon rendering mode
///
/// Controls whether the UI uses Nerd Font glyphs (requires a patched font)
/// or safe Unicode characters (works in all terminals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals
    #[default]
    Unicode,
    /// Nerd Font glyphs
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UiSettings {
    /// Icon mode: "unicode" (default) or "nerd_fonts"
    #[serde(default)]
    pub icons: IconMode,
}
