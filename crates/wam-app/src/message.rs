//! Message types for the application (TEA pattern)

use std::path::PathBuf;

use wam_core::{DashboardFilter, ImageAttachment, ViewSelector};

use crate::add_button_dialog::AddButtonField;
use crate::composer::ComposerField;
use crate::input_key::InputKey;
use crate::request::RequestId;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Connect Overlay
    // ─────────────────────────────────────────────────────────
    /// The overlay has been displayed; arms the pairing timer once
    ConnectOverlayShown,
    /// Pairing timer fired
    PairingCodeReady,
    /// User confirmed the connection
    ConfirmConnect,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    SetView(ViewSelector),
    SetFilter(DashboardFilter),

    // ─────────────────────────────────────────────────────────
    // Composer
    // ─────────────────────────────────────────────────────────
    FocusNext,
    FocusPrev,
    /// Replace the full text of a composer field
    ComposerInput { field: ComposerField, text: String },
    OpenAiDialog,
    OpenAddButtonDialog,
    OpenImagePrompt,
    /// Demo only; nothing is delivered
    SendCampaign,
    /// Close whichever composer dialog is open
    CloseDialog,

    // ─────────────────────────────────────────────────────────
    // Image Upload
    // ─────────────────────────────────────────────────────────
    UploadImage { path: PathBuf },
    ImageLoaded {
        request_id: RequestId,
        image: ImageAttachment,
    },
    ImageLoadFailed {
        request_id: RequestId,
        error: String,
    },
    ImagePathInput { text: String },
    SubmitImagePath,

    // ─────────────────────────────────────────────────────────
    // AI Generation Dialog
    // ─────────────────────────────────────────────────────────
    AiPromptInput { text: String },
    GenerateRequested,
    GenerationCompleted { request_id: RequestId, text: String },
    GenerationFailed { request_id: RequestId, error: String },

    // ─────────────────────────────────────────────────────────
    // Add Button Dialog
    // ─────────────────────────────────────────────────────────
    AddButtonInput { field: AddButtonField, text: String },
    AddButtonNextField,
    SaveButton,
}
