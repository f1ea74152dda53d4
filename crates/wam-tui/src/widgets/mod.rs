//! Widgets composing the WA Manager screens

mod add_button_dialog;
mod ai_dialog;
mod composer_form;
mod connect_overlay;
mod dashboard;
mod image_prompt;
mod message_preview;
pub mod modal_overlay;
mod page_header;
mod sidebar;
mod status_bar;
mod text_field;

pub use add_button_dialog::AddButtonDialog;
pub use ai_dialog::AiDialog;
pub use composer_form::ComposerForm;
pub use connect_overlay::ConnectOverlay;
pub use dashboard::Dashboard;
pub use image_prompt::ImagePrompt;
pub use message_preview::MessagePreview;
pub use page_header::PageHeader;
pub use sidebar::Sidebar;
pub use status_bar::StatusBar;
pub use text_field::TextField;
