//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode` - safe characters that work in all terminals
//! - `IconMode::NerdFonts` - rich Nerd Font glyphs (requires Nerd Font installed)

use wam_app::config::IconMode;
use wam_core::StatIcon;

/// Braille spinner frames for loading states
const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn logo(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f1d8}", // nf-fa-paper_plane
            IconMode::Unicode => "\u{27a4}",   // ➤
        }
    }

    pub fn dashboard(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0e4}", // nf-fa-dashboard
            IconMode::Unicode => "\u{25a6}",   // ▦
        }
    }

    pub fn add(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f055}", // nf-fa-plus_circle
            IconMode::Unicode => "+",
        }
    }

    pub fn sparkle(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0d0}", // nf-fa-magic
            IconMode::Unicode => "\u{2726}",   // ✦
        }
    }

    pub fn image(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f03e}", // nf-fa-image
            IconMode::Unicode => "[img]",
        }
    }

    pub fn button(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0a6}", // nf-fa-hand_o_up
            IconMode::Unicode => "\u{25a2}",   // ▢
        }
    }

    pub fn link(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0c1}", // nf-fa-link
            IconMode::Unicode => "\u{2197}",   // ↗
        }
    }

    pub fn chart(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f080}", // nf-fa-bar_chart
            IconMode::Unicode => "\u{2587}\u{2583}\u{2585}\u{2582}\u{2586}", // ▇▃▅▂▆
        }
    }

    pub fn check(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f058}", // nf-fa-check_circle
            IconMode::Unicode => "\u{2713}",   // ✓
        }
    }

    pub fn stat(&self, icon: StatIcon) -> &'static str {
        match (icon, self.mode) {
            (StatIcon::Send, _) => self.logo(),
            (StatIcon::Delivered, _) => self.check(),
            (StatIcon::Responses, IconMode::NerdFonts) => "\u{f086}", // nf-fa-comments
            (StatIcon::Responses, IconMode::Unicode) => "\u{2709}",   // ✉
            (StatIcon::Trend, IconMode::NerdFonts) => "\u{f201}",     // nf-fa-line_chart
            (StatIcon::Trend, IconMode::Unicode) => "\u{2197}",       // ↗
        }
    }

    /// Spinner frame for an animation tick
    pub fn spinner(&self, tick: u64) -> &'static str {
        SPINNER_FRAMES[(tick % SPINNER_FRAMES.len() as u64) as usize]
    }
}
