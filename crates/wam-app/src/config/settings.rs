//! Settings loading from `.wam/config.toml`

use std::path::{Path, PathBuf};

use wam_core::prelude::*;

use super::types::Settings;

pub const WAM_DIR: &str = ".wam";
pub const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_CONFIG: &str = r#"# WA Manager Configuration

[connect]
pairing_delay_ms = 1500   # Simulated wait before the pairing code appears

[generation]
model = "gemini-2.5-flash"
endpoint = "https://generativelanguage.googleapis.com/v1beta"
api_key_env = "API_KEY"   # Environment variable holding the API key

[ui]
icons = "unicode"         # "unicode" or "nerd_fonts"
"#;

/// Location of the config file under `base_path`
pub fn config_path(base_path: &Path) -> PathBuf {
    base_path.join(WAM_DIR).join(CONFIG_FILENAME)
}

/// Load settings from `.wam/config.toml`
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(base_path: &Path) -> Settings {
    let config_path = config_path(base_path);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create `.wam/config.toml` with commented defaults.
///
/// An existing file is left untouched. Returns the config file path.
pub fn init_config_dir(base_path: &Path) -> Result<PathBuf> {
    let wam_dir = base_path.join(WAM_DIR);

    if !wam_dir.exists() {
        std::fs::create_dir_all(&wam_dir)
            .map_err(|e| Error::config(format!("Failed to create .wam dir: {}", e)))?;
    }

    let config_path = wam_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        std::fs::write(&config_path, DEFAULT_CONFIG)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created {:?}", config_path);
    }

    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IconMode;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(temp.path());

        assert_eq!(settings.connect.pairing_delay_ms, 1500);
        assert_eq!(settings.generation.model, "gemini-2.5-flash");
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let wam_dir = temp.path().join(".wam");
        std::fs::create_dir_all(&wam_dir).unwrap();

        let config = r#"
[connect]
pairing_delay_ms = 10

[ui]
icons = "nerd_fonts"
"#;
        std::fs::write(wam_dir.join("config.toml"), config).unwrap();

        let settings = load_settings(temp.path());

        assert_eq!(settings.connect.pairing_delay_ms, 10);
        assert_eq!(settings.ui.icons, IconMode::NerdFonts);
        assert_eq!(settings.generation.api_key_env, "API_KEY");
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let wam_dir = temp.path().join(".wam");
        std::fs::create_dir_all(&wam_dir).unwrap();
        std::fs::write(wam_dir.join("config.toml"), "not [valid toml").unwrap();

        let settings = load_settings(temp.path());
        assert_eq!(settings.connect.pairing_delay_ms, 1500);
    }

    #[test]
    fn test_init_config_dir_writes_parseable_defaults() {
        let temp = tempdir().unwrap();
        let path = init_config_dir(temp.path()).unwrap();

        assert!(path.exists());
        let settings = load_settings(temp.path());
        assert_eq!(settings.connect.pairing_delay_ms, 1500);
        assert_eq!(settings.ui.icons, IconMode::Unicode);
    }

    #[test]
    fn test_init_config_dir_keeps_existing_file() {
        let temp = tempdir().unwrap();
        let wam_dir = temp.path().join(".wam");
        std::fs::create_dir_all(&wam_dir).unwrap();
        std::fs::write(wam_dir.join("config.toml"), "[connect]\npairing_delay_ms = 42\n").unwrap();

        init_config_dir(temp.path()).unwrap();

        assert_eq!(load_settings(temp.path()).connect.pairing_delay_ms, 42);
    }
}
