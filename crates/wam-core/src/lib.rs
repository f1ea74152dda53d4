//! # wam-core - Core Domain Types
//!
//! Foundation crate for WA Manager. Provides the campaign domain model,
//! dashboard placeholder figures, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (thiserror, tracing, url).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`AppPhase`] - Application lifecycle phase (Running, Quitting)
//! - [`ViewSelector`] - Top-level view selected from the sidebar
//! - [`DashboardFilter`] - Cosmetic date-range toggle on the dashboard
//!
//! ### Campaign (`campaign`)
//! - [`CampaignDraft`] - In-memory, unsent campaign message
//! - [`CallToAction`] - Validated labeled link attached to a draft
//! - [`ImageAttachment`] - Image embedded as a data URL
//! - [`MessagePreview`] - Render-ready projection of a draft
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Infrastructure error enum (I/O, terminal, configuration)
//! - [`ValidationError`] - Inline, non-fatal user input errors
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use wam_core::prelude::*;
//! ```

pub mod campaign;
pub mod error;
pub mod logging;
pub mod stats;
pub mod types;

/// Prelude for common imports used throughout all WA Manager crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use campaign::{
    CallToAction, CampaignDraft, ImageAttachment, MessagePreview, MAX_BUTTONS,
    PREVIEW_PLACEHOLDER,
};
pub use error::{Error, Result, ValidationError};
pub use stats::{StatCard, StatIcon, CHART_PLACEHOLDER, DASHBOARD_STATS};
pub use types::{AppPhase, DashboardFilter, ViewSelector};
