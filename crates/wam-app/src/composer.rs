//! Campaign composer state
//!
//! Owns the [`CampaignDraft`] for as long as the composer view is mounted,
//! the keyboard focus ring, and at most one open dialog.

use wam_core::CampaignDraft;

use crate::add_button_dialog::AddButtonState;
use crate::ai_dialog::AiGeneratorState;
use crate::image_prompt::ImagePathState;
use crate::request::RequestId;

/// Focusable elements of the composer form, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComposerFocus {
    CampaignName,
    SheetLink,
    #[default]
    Message,
    GenerateAi,
    AddImage,
    AddButton,
    SendCampaign,
}

impl ComposerFocus {
    const ORDER: [ComposerFocus; 7] = [
        ComposerFocus::CampaignName,
        ComposerFocus::SheetLink,
        ComposerFocus::Message,
        ComposerFocus::GenerateAi,
        ComposerFocus::AddImage,
        ComposerFocus::AddButton,
        ComposerFocus::SendCampaign,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.index() + len - 1) % len]
    }

    /// Text input field behind this focus, if any
    pub fn text_field(self) -> Option<ComposerField> {
        match self {
            ComposerFocus::CampaignName => Some(ComposerField::CampaignName),
            ComposerFocus::SheetLink => Some(ComposerField::SheetLink),
            ComposerFocus::Message => Some(ComposerField::Message),
            _ => None,
        }
    }
}

/// Editable text fields of the composer form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposerField {
    CampaignName,
    SheetLink,
    Message,
}

/// Overlay dialog opened from the composer
#[derive(Debug, Clone)]
pub enum ComposerModal {
    AiGenerator(AiGeneratorState),
    AddButton(AddButtonState),
    ImagePath(ImagePathState),
}

#[derive(Debug, Clone, Default)]
pub struct ComposerState {
    pub draft: CampaignDraft,
    pub focus: ComposerFocus,
    pub modal: Option<ComposerModal>,
    pending_image: Option<RequestId>,
}

impl ComposerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field_value(&self, field: ComposerField) -> &str {
        match field {
            ComposerField::CampaignName => &self.draft.campaign_name,
            ComposerField::SheetLink => &self.draft.sheet_link,
            ComposerField::Message => self.draft.message_text(),
        }
    }

    pub fn set_field_value(&mut self, field: ComposerField, text: String) {
        match field {
            ComposerField::CampaignName => self.draft.campaign_name = text,
            ComposerField::SheetLink => self.draft.sheet_link = text,
            ComposerField::Message => self.draft.set_message_text(text),
        }
    }

    pub fn ai_dialog(&self) -> Option<&AiGeneratorState> {
        match &self.modal {
            Some(ComposerModal::AiGenerator(dialog)) => Some(dialog),
            _ => None,
        }
    }

    pub fn ai_dialog_mut(&mut self) -> Option<&mut AiGeneratorState> {
        match &mut self.modal {
            Some(ComposerModal::AiGenerator(dialog)) => Some(dialog),
            _ => None,
        }
    }

    pub fn add_button_dialog(&self) -> Option<&AddButtonState> {
        match &self.modal {
            Some(ComposerModal::AddButton(dialog)) => Some(dialog),
            _ => None,
        }
    }

    pub fn add_button_dialog_mut(&mut self) -> Option<&mut AddButtonState> {
        match &mut self.modal {
            Some(ComposerModal::AddButton(dialog)) => Some(dialog),
            _ => None,
        }
    }

    pub fn image_prompt(&self) -> Option<&ImagePathState> {
        match &self.modal {
            Some(ComposerModal::ImagePath(prompt)) => Some(prompt),
            _ => None,
        }
    }

    pub fn image_prompt_mut(&mut self) -> Option<&mut ImagePathState> {
        match &mut self.modal {
            Some(ComposerModal::ImagePath(prompt)) => Some(prompt),
            _ => None,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Image upload sequencing
    // ─────────────────────────────────────────────────────────

    /// Record `request_id` as the only image read whose result may apply
    pub fn start_image_upload(&mut self, request_id: RequestId) {
        self.pending_image = Some(request_id);
    }

    pub fn pending_image(&self) -> Option<RequestId> {
        self.pending_image
    }

    /// Clear the pending upload if `request_id` is the latest one.
    ///
    /// Returns `true` when the completion should be applied.
    pub fn finish_image_upload(&mut self, request_id: RequestId) -> bool {
        if self.pending_image == Some(request_id) {
            self.pending_image = None;
            true
        } else {
            false
        }
    }

    /// Whether a generation request is in flight inside the AI dialog
    pub fn has_generation_in_flight(&self) -> bool {
        self.ai_dialog().is_some_and(|d| d.is_loading())
    }
}
