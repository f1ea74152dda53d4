//! Main TUI runner - entry point and event loop

use std::path::Path;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{error, info};
use wam_app::message::Message;
use wam_app::signals;
use wam_app::state::AppState;
use wam_app::{process_message, GeminiClient, GenerationService, TaskRegistry};
use wam_core::{Error, Result};

use super::startup::{self, Startup};
use super::{event, render, terminal};

/// Run the TUI with configuration from `base_path`
pub async fn run(base_path: &Path) -> Result<()> {
    terminal::install_panic_hook();

    let Startup {
        mut state,
        messages,
    } = startup::startup(base_path);

    let service = GeminiClient::new(state.settings.generation.clone())
        .map_err(|e| Error::config(format!("Failed to create generation client: {}", e)))?;
    let service = Arc::new(service);

    let mut term = ratatui::init();

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    let signal_task = signals::spawn_signal_handler(msg_tx.clone());
    let mut tasks = TaskRegistry::new();

    let result = run_loop(
        &mut term,
        &mut state,
        messages,
        msg_rx,
        &msg_tx,
        &service,
        &mut tasks,
    );

    tasks.abort_all();
    signal_task.abort();
    ratatui::restore();

    if let Err(ref e) = result {
        error!("Event loop failed: {}", e);
    }
    result
}

/// Main event loop
///
/// `startup_messages` are processed right after the first frame is drawn.
fn run_loop<S>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    startup_messages: Vec<Message>,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: &mpsc::Sender<Message>,
    service: &Arc<S>,
    tasks: &mut TaskRegistry,
) -> Result<()>
where
    S: GenerationService + Sync + 'static,
{
    terminal.draw(|frame| render::view(frame, state))?;
    for msg in startup_messages {
        process_message(state, msg, msg_tx, service, tasks);
    }

    while !state.should_quit() {
        // Completions from background tasks and the signal handler
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, msg_tx, service, tasks);
        }
        if state.should_quit() {
            break;
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, msg_tx, service, tasks);
        }
    }

    info!("Shutting down");
    Ok(())
}
