//! Image path prompt, the terminal stand-in for a file picker

/// Extensions suggested to the user; nothing is enforced
pub const IMAGE_FORMAT_HINT: &str = "png, jpg, gif, webp";

#[derive(Debug, Clone, Default)]
pub struct ImagePathState {
    pub path: String,
}

impl ImagePathState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Path to upload, or `None` when nothing was entered
    pub fn submitted_path(&self) -> Option<std::path::PathBuf> {
        let trimmed = self.path.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(expand_home(trimmed))
        }
    }
}

/// Expand a leading `~/` to the home directory
fn expand_home(raw: &str) -> std::path::PathBuf {
    if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    std::path::PathBuf::from(raw)
}
