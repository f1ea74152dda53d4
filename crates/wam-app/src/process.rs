//! Message processing
//!
//! Runs a message through the TEA update loop, following chained messages
//! and dispatching the resulting actions.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::actions::{handle_action, TaskRegistry};
use crate::genai::GenerationService;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<S>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    service: &Arc<S>,
    tasks: &mut TaskRegistry,
) where
    S: GenerationService + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), service, tasks);
        }

        msg = result.message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::input_key::InputKey;
    use crate::state::UiMode;
    use crate::test_utils::FakeGenerationService;
    use std::sync::atomic::Ordering;
    use std::time::Duration;
    use wam_core::ViewSelector;

    struct Harness {
        state: AppState,
        tx: mpsc::Sender<Message>,
        rx: mpsc::Receiver<Message>,
        service: Arc<FakeGenerationService>,
        tasks: TaskRegistry,
    }

    impl Harness {
        fn new(service: FakeGenerationService) -> Self {
            let (tx, rx) = mpsc::channel(16);
            Self {
                state: AppState::with_settings(Settings::default()),
                tx,
                rx,
                service: Arc::new(service),
                tasks: TaskRegistry::new(),
            }
        }

        fn send(&mut self, message: Message) {
            process_message(
                &mut self.state,
                message,
                &self.tx,
                &self.service,
                &mut self.tasks,
            );
        }

        fn type_text(&mut self, text: &str) {
            for c in text.chars() {
                self.send(Message::Key(InputKey::Char(c)));
            }
        }

        /// Feed the next background completion back into the loop
        async fn pump(&mut self) {
            let msg = self.rx.recv().await.expect("channel closed");
            self.send(msg);
        }

        fn open_composer(&mut self) {
            self.send(Message::ConfirmConnect);
            self.send(Message::SetView(ViewSelector::NewCampaign));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_connect_overlay_becomes_ready_once() {
        let mut h = Harness::new(FakeGenerationService::replying("x"));
        h.send(Message::ConnectOverlayShown);
        h.send(Message::ConnectOverlayShown);
        assert!(!h.state.connect_overlay.as_ref().unwrap().is_ready());

        tokio::time::sleep(Duration::from_millis(1600)).await;
        h.pump().await;
        assert!(h.state.connect_overlay.as_ref().unwrap().is_ready());

        // Second show did not arm another timer
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(h.rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_connect_before_ready_cancels_timer() {
        let mut h = Harness::new(FakeGenerationService::replying("x"));
        h.send(Message::ConnectOverlayShown);
        h.send(Message::Key(InputKey::Enter));

        assert!(h.state.is_connected());
        assert_eq!(h.state.ui_mode(), UiMode::Dashboard);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(h.rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_generate_flow_fills_message_and_closes() {
        let mut h = Harness::new(FakeGenerationService::replying("Shoes 20% off!"));
        h.open_composer();
        h.send(Message::OpenAiDialog);
        h.type_text("Diwali shoes");
        h.send(Message::Key(InputKey::Enter));

        assert!(h.state.composer.as_ref().unwrap().has_generation_in_flight());
        h.pump().await;

        let composer = h.state.composer.as_ref().unwrap();
        assert_eq!(composer.draft.message_text(), "Shoes 20% off!");
        assert!(composer.modal.is_none());
        assert_eq!(h.service.prompts(), vec!["Diwali shoes".to_string()]);
    }

    #[tokio::test]
    async fn test_empty_prompt_makes_no_call() {
        let mut h = Harness::new(FakeGenerationService::replying("x"));
        h.open_composer();
        h.send(Message::OpenAiDialog);
        h.send(Message::Key(InputKey::Enter));

        tokio::task::yield_now().await;
        assert_eq!(h.service.calls.load(Ordering::SeqCst), 0);
        let dialog = h.state.composer.as_ref().unwrap().ai_dialog().unwrap();
        assert_eq!(dialog.error(), Some("Please enter a prompt."));
    }

    #[tokio::test]
    async fn test_failed_generation_keeps_dialog_open() {
        let mut h = Harness::new(FakeGenerationService::failing());
        h.open_composer();
        h.send(Message::ComposerInput {
            field: crate::composer::ComposerField::Message,
            text: "original".to_string(),
        });
        h.send(Message::OpenAiDialog);
        h.type_text("promo");
        h.send(Message::GenerateRequested);
        h.pump().await;

        let composer = h.state.composer.as_ref().unwrap();
        assert_eq!(composer.draft.message_text(), "original");
        let dialog = composer.ai_dialog().unwrap();
        assert!(!dialog.is_loading());
        assert_eq!(
            dialog.error(),
            Some("Failed to generate content. Please try again.")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_closing_dialog_cancels_generation() {
        let mut h = Harness::new(
            FakeGenerationService::replying("late").with_delay(Duration::from_secs(2)),
        );
        h.open_composer();
        h.send(Message::OpenAiDialog);
        h.type_text("promo");
        h.send(Message::GenerateRequested);
        tokio::task::yield_now().await;

        h.send(Message::Key(InputKey::Esc));
        assert!(h.state.composer.as_ref().unwrap().modal.is_none());

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(h.rx.try_recv().is_err());
        assert_eq!(h.state.composer.as_ref().unwrap().draft.message_text(), "");
    }

    #[tokio::test]
    async fn test_image_upload_attaches_latest_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("promo.png");
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let mut h = Harness::new(FakeGenerationService::replying("x"));
        h.open_composer();
        h.send(Message::OpenImagePrompt);
        h.send(Message::ImagePathInput {
            text: path.display().to_string(),
        });
        h.send(Message::SubmitImagePath);
        assert!(h.state.composer.as_ref().unwrap().modal.is_none());

        h.pump().await;

        let image = h.state.composer.as_ref().unwrap().draft.image().unwrap();
        assert_eq!(image.file_name(), "promo.png");
        assert!(image.data_url().starts_with("data:image/png;base64,"));
    }

    #[tokio::test]
    async fn test_missing_image_is_silent() {
        let temp = tempfile::tempdir().unwrap();
        let mut h = Harness::new(FakeGenerationService::replying("x"));
        h.open_composer();
        h.send(Message::UploadImage {
            path: temp.path().join("nope.png"),
        });
        h.pump().await;

        let composer = h.state.composer.as_ref().unwrap();
        assert!(composer.draft.image().is_none());
        assert!(composer.pending_image().is_none());
    }
}
