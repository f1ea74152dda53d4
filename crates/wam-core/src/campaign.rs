//! Campaign draft model and live preview projection

use url::Url;

use crate::error::ValidationError;

/// Maximum number of call-to-action buttons on one message
pub const MAX_BUTTONS: usize = 3;

/// Shown in the preview while the message text is empty
pub const PREVIEW_PLACEHOLDER: &str = "Your message will appear here...";

/// A labeled link attached to a campaign message.
///
/// Can only be built through [`CallToAction::new`], so every instance has a
/// non-empty label and a URL with a scheme and a host. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallToAction {
    label: String,
    target_url: String,
}

impl CallToAction {
    /// Validate and construct a call-to-action.
    ///
    /// Emptiness is checked before URL structure, so an empty URL reports
    /// [`ValidationError::ButtonFieldsRequired`].
    pub fn new(
        label: impl Into<String>,
        target_url: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let label = label.into();
        let target_url = target_url.into();

        if label.is_empty() || target_url.is_empty() {
            return Err(ValidationError::ButtonFieldsRequired);
        }

        if !is_well_formed_url(&target_url) {
            return Err(ValidationError::InvalidUrl);
        }

        Ok(Self { label, target_url })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn target_url(&self) -> &str {
        &self.target_url
    }
}

/// Absolute URL with a scheme and an authority
fn is_well_formed_url(raw: &str) -> bool {
    Url::parse(raw).map(|u| u.has_host()).unwrap_or(false)
}

/// An image embedded in the draft as a `data:` URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    file_name: String,
    data_url: String,
    byte_len: usize,
}

impl ImageAttachment {
    pub fn new(file_name: impl Into<String>, data_url: impl Into<String>, byte_len: usize) -> Self {
        Self {
            file_name: file_name.into(),
            data_url: data_url.into(),
            byte_len,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn data_url(&self) -> &str {
        &self.data_url
    }

    /// Size of the decoded file in bytes
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    /// Media type taken from the data URL header
    pub fn mime(&self) -> &str {
        self.data_url
            .strip_prefix("data:")
            .and_then(|rest| rest.split(';').next())
            .unwrap_or("application/octet-stream")
    }

    /// Human-readable size, e.g. `"512 B"` or `"34.2 KB"`
    pub fn size_label(&self) -> String {
        const KB: f64 = 1024.0;
        const MB: f64 = KB * 1024.0;
        let len = self.byte_len as f64;
        if len >= MB {
            format!("{:.1} MB", len / MB)
        } else if len >= KB {
            format!("{:.1} KB", len / KB)
        } else {
            format!("{} B", self.byte_len)
        }
    }
}

/// In-memory, unsent campaign message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignDraft {
    /// Free-form name, not validated
    pub campaign_name: String,
    /// Link to the customer sheet, not validated
    pub sheet_link: String,
    message_text: String,
    image: Option<ImageAttachment>,
    buttons: Vec<CallToAction>,
}

impl CampaignDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message_text(&self) -> &str {
        &self.message_text
    }

    /// Replace the message text verbatim (empty allowed)
    pub fn set_message_text(&mut self, text: impl Into<String>) {
        self.message_text = text.into();
    }

    pub fn image(&self) -> Option<&ImageAttachment> {
        self.image.as_ref()
    }

    pub fn set_image(&mut self, image: ImageAttachment) {
        self.image = Some(image);
    }

    pub fn buttons(&self) -> &[CallToAction] {
        &self.buttons
    }

    /// Append a button while below [`MAX_BUTTONS`].
    ///
    /// Returns `false` and leaves the list untouched when at capacity.
    pub fn add_button(&mut self, cta: CallToAction) -> bool {
        if self.buttons.len() >= MAX_BUTTONS {
            return false;
        }
        self.buttons.push(cta);
        true
    }

    pub fn is_at_button_capacity(&self) -> bool {
        self.buttons.len() >= MAX_BUTTONS
    }

    /// Project the draft into what the phone preview displays
    pub fn preview(&self) -> MessagePreview<'_> {
        MessagePreview {
            text: if self.message_text.is_empty() {
                PREVIEW_PLACEHOLDER
            } else {
                &self.message_text
            },
            is_placeholder: self.message_text.is_empty(),
            image: self.image.as_ref(),
            buttons: &self.buttons,
        }
    }
}

/// Render-ready view of a [`CampaignDraft`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessagePreview<'a> {
    /// Message text, or [`PREVIEW_PLACEHOLDER`] when empty
    pub text: &'a str,
    pub is_placeholder: bool,
    pub image: Option<&'a ImageAttachment>,
    pub buttons: &'a [CallToAction],
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cta(label: &str) -> CallToAction {
        CallToAction::new(label, "https://example.com").unwrap()
    }

    #[test]
    fn test_cta_valid() {
        let button = CallToAction::new("Shop", "https://example.com").unwrap();
        assert_eq!(button.label(), "Shop");
        assert_eq!(button.target_url(), "https://example.com");
    }

    #[test]
    fn test_cta_requires_both_fields() {
        assert_eq!(
            CallToAction::new("", "https://example.com"),
            Err(ValidationError::ButtonFieldsRequired)
        );
        assert_eq!(
            CallToAction::new("Shop", ""),
            Err(ValidationError::ButtonFieldsRequired)
        );
        assert_eq!(
            CallToAction::new("", ""),
            Err(ValidationError::ButtonFieldsRequired)
        );
    }

    #[test]
    fn test_cta_rejects_malformed_url() {
        assert_eq!(
            CallToAction::new("Shop", "not-a-url"),
            Err(ValidationError::InvalidUrl)
        );
        assert_eq!(
            CallToAction::new("Shop", "example.com/path"),
            Err(ValidationError::InvalidUrl)
        );
        assert_eq!(
            CallToAction::new("Shop", "mailto:someone@example.com"),
            Err(ValidationError::InvalidUrl)
        );
    }

    #[test]
    fn test_cta_accepts_other_schemes_with_authority() {
        assert!(CallToAction::new("Docs", "http://localhost:8080/docs").is_ok());
        assert!(CallToAction::new("FTP", "ftp://files.example.com").is_ok());
    }

    #[test]
    fn test_add_button_caps_at_three() {
        let mut draft = CampaignDraft::new();
        assert!(draft.add_button(cta("One")));
        assert!(draft.add_button(cta("Two")));
        assert!(draft.add_button(cta("Three")));
        assert!(draft.is_at_button_capacity());

        assert!(!draft.add_button(cta("Four")));
        assert!(!draft.add_button(cta("Five")));

        let labels: Vec<&str> = draft.buttons().iter().map(|b| b.label()).collect();
        assert_eq!(labels, vec!["One", "Two", "Three"]);
    }

    #[test]
    fn test_add_button_sequences_never_exceed_capacity() {
        for n in 0..10 {
            let mut draft = CampaignDraft::new();
            for i in 0..n {
                draft.add_button(cta(&format!("B{i}")));
            }
            assert_eq!(draft.buttons().len(), n.min(MAX_BUTTONS));
        }
    }

    #[test]
    fn test_preview_placeholder_when_empty() {
        let mut draft = CampaignDraft::new();
        draft.set_message_text("hello");
        draft.set_message_text("");

        let preview = draft.preview();
        assert_eq!(preview.text, PREVIEW_PLACEHOLDER);
        assert!(preview.is_placeholder);
    }

    #[test]
    fn test_preview_reflects_text_verbatim() {
        let mut draft = CampaignDraft::new();
        draft.set_message_text("  Summer sale!\nUp to 50% off  ");

        let preview = draft.preview();
        assert_eq!(preview.text, "  Summer sale!\nUp to 50% off  ");
        assert!(!preview.is_placeholder);
    }

    #[test]
    fn test_preview_includes_image_and_buttons() {
        let mut draft = CampaignDraft::new();
        draft.set_image(ImageAttachment::new(
            "banner.png",
            "data:image/png;base64,AAAA",
            3,
        ));
        draft.add_button(cta("Shop"));

        let preview = draft.preview();
        assert_eq!(preview.image.map(|i| i.file_name()), Some("banner.png"));
        assert_eq!(preview.buttons.len(), 1);
    }

    #[test]
    fn test_set_image_replaces_previous() {
        let mut draft = CampaignDraft::new();
        draft.set_image(ImageAttachment::new("a.png", "data:image/png;base64,AA", 1));
        draft.set_image(ImageAttachment::new("b.jpg", "data:image/jpeg;base64,BB", 1));
        assert_eq!(draft.image().unwrap().file_name(), "b.jpg");
    }

    #[test]
    fn test_image_mime_and_size_label() {
        let img = ImageAttachment::new("a.webp", "data:image/webp;base64,AAAA", 2048);
        assert_eq!(img.mime(), "image/webp");
        assert_eq!(img.size_label(), "2.0 KB");

        let tiny = ImageAttachment::new("t.gif", "data:image/gif;base64,", 12);
        assert_eq!(tiny.size_label(), "12 B");
    }
}
