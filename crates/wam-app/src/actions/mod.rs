//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::debug;

use crate::genai::GenerationService;
use crate::message::Message;
use crate::UpdateAction;

pub mod image;
pub mod tasks;

pub use tasks::{TaskKey, TaskRegistry};

/// Execute an action by spawning (or cancelling) a background task
pub fn handle_action<S>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    service: &Arc<S>,
    tasks: &mut TaskRegistry,
) where
    S: GenerationService + Sync + 'static,
{
    match action {
        UpdateAction::StartPairingTimer { delay_ms } => {
            tasks.spawn(TaskKey::PairingTimer, async move {
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                let _ = msg_tx.send(Message::PairingCodeReady).await;
            });
        }

        UpdateAction::ReadImage { request_id, path } => {
            tasks.spawn(TaskKey::ImageRead, async move {
                let msg = match image::read_image_attachment(&path).await {
                    Ok(image) => Message::ImageLoaded { request_id, image },
                    Err(e) => Message::ImageLoadFailed {
                        request_id,
                        error: e.to_string(),
                    },
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::GenerateMessage { request_id, prompt } => {
            let service = Arc::clone(service);
            tasks.spawn(TaskKey::Generation, async move {
                let msg = match service.generate_text(&prompt).await {
                    Ok(text) => Message::GenerationCompleted { request_id, text },
                    Err(e) => Message::GenerationFailed {
                        request_id,
                        error: e.to_string(),
                    },
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::CancelTasks(keys) => {
            for key in keys {
                if tasks.cancel(key) {
                    debug!("Cancelled {:?}", key);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::FakeGenerationService;
    use std::sync::atomic::Ordering;
    use tokio::sync::mpsc::error::TryRecvError;

    #[tokio::test(start_paused = true)]
    async fn test_pairing_timer_fires_after_delay() {
        let (tx, mut rx) = mpsc::channel(8);
        let service = Arc::new(FakeGenerationService::replying("unused"));
        let mut tasks = TaskRegistry::new();

        handle_action(
            UpdateAction::StartPairingTimer { delay_ms: 1500 },
            tx,
            &service,
            &mut tasks,
        );

        tokio::time::sleep(Duration::from_millis(1499)).await;
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(matches!(rx.recv().await, Some(Message::PairingCodeReady)));
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_pairing_timer_never_fires() {
        let (tx, mut rx) = mpsc::channel(8);
        let service = Arc::new(FakeGenerationService::replying("unused"));
        let mut tasks = TaskRegistry::new();

        handle_action(
            UpdateAction::StartPairingTimer { delay_ms: 1500 },
            tx,
            &service,
            &mut tasks,
        );
        handle_action(
            UpdateAction::CancelTasks(vec![TaskKey::PairingTimer]),
            mpsc::channel(1).0,
            &service,
            &mut tasks,
        );

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_generation_success_reports_text() {
        let (tx, mut rx) = mpsc::channel(8);
        let service = Arc::new(FakeGenerationService::replying("Big sale!"));
        let mut tasks = TaskRegistry::new();
        let request_id = crate::request::RequestSeq::new().next();

        handle_action(
            UpdateAction::GenerateMessage {
                request_id,
                prompt: "shoes".to_string(),
            },
            tx,
            &service,
            &mut tasks,
        );

        match rx.recv().await {
            Some(Message::GenerationCompleted { request_id: id, text }) => {
                assert_eq!(id, request_id);
                assert_eq!(text, "Big sale!");
            }
            other => panic!("unexpected message: {:?}", other),
        }
        assert_eq!(service.calls.load(Ordering::SeqCst), 1);
        assert_eq!(service.prompts(), vec!["shoes".to_string()]);
    }

    #[tokio::test]
    async fn test_generation_failure_reports_error() {
        let (tx, mut rx) = mpsc::channel(8);
        let service = Arc::new(FakeGenerationService::failing());
        let mut tasks = TaskRegistry::new();
        let request_id = crate::request::RequestSeq::new().next();

        handle_action(
            UpdateAction::GenerateMessage {
                request_id,
                prompt: "shoes".to_string(),
            },
            tx,
            &service,
            &mut tasks,
        );

        assert!(matches!(
            rx.recv().await,
            Some(Message::GenerationFailed { .. })
        ));
    }

    #[tokio::test]
    async fn test_image_read_failure_reports_error() {
        let (tx, mut rx) = mpsc::channel(8);
        let service = Arc::new(FakeGenerationService::replying("unused"));
        let mut tasks = TaskRegistry::new();
        let request_id = crate::request::RequestSeq::new().next();
        let temp = tempfile::tempdir().unwrap();

        handle_action(
            UpdateAction::ReadImage {
                request_id,
                path: temp.path().join("missing.png"),
            },
            tx,
            &service,
            &mut tasks,
        );

        assert!(matches!(
            rx.recv().await,
            Some(Message::ImageLoadFailed { .. })
        ));
    }
}
