//! Configuration file parsing for WA Manager
//!
//! Supports `.wam/config.toml` under the base directory passed on the
//! command line. The file is optional and read-only at runtime.

pub mod settings;
pub mod types;

pub use settings::{config_path, init_config_dir, load_settings, CONFIG_FILENAME, WAM_DIR};
pub use types::*;
