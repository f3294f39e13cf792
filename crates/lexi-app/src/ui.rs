use std::io::{BufRead, Write};
use std::sync::{Arc, Mutex};

use kanal::{AsyncReceiver, AsyncSender};
use lexi_types::{AppEvent, UiEvent};
use tokio_util::sync::CancellationToken;

use crate::command::{Command, HELP, parse_command};
use crate::render::{render_favorites, render_theme, render_view};

/// Terminal-side state (separate from AppState)
#[derive(Default)]
pub struct UiState {
    /// Last list shown by `:favs`, used to resolve `:pick <n>`
    pub favorites: Arc<Mutex<Vec<String>>>,
}

pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let ui_state = UiState::default();

    spawn_input_thread(ui_to_app_tx, ui_state.favorites.clone());

    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = app_to_ui_rx.recv() => event?,
        };

        if let Some(text) = handle_ui_event(event, &ui_state) {
            print_block(&text);
        }
    }

    tracing::info!("Terminal loop stopping");
    Ok(())
}

/// Turn a backend event into printable text
pub fn handle_ui_event(event: AppEvent, ui_state: &UiState) -> Option<String> {
    match event {
        AppEvent::BackendReady => Some(format!("{HELP}\n")),
        AppEvent::ShowView(view) => Some(render_view(&view)),
        AppEvent::ShowFavorites(favorites) => {
            let text = render_favorites(&favorites);
            *ui_state.favorites.lock().unwrap_or_else(|e| e.into_inner()) = favorites;
            Some(text)
        }
        AppEvent::ThemeChanged { dark_mode } => Some(render_theme(dark_mode)),
        AppEvent::StatusUpdate(status) => Some(format!("{status}\n")),
        AppEvent::UiEvent(_) => None,
    }
}

/// Blocking stdin reader. Runs outside the runtime so shutdown never waits
/// on a pending read.
fn spawn_input_thread(ui_to_app_tx: AsyncSender<AppEvent>, favorites: Arc<Mutex<Vec<String>>>) {
    let handle = tokio::runtime::Handle::current();

    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    tracing::error!("Failed to read stdin: {}", e);
                    break;
                }
            };

            let command = {
                let favorites = favorites.lock().unwrap_or_else(|e| e.into_inner());
                parse_command(&line, &favorites)
            };

            match command {
                Command::Send(event) => {
                    let closing = event == UiEvent::Close;
                    if handle
                        .block_on(ui_to_app_tx.send(AppEvent::UiEvent(event)))
                        .is_err()
                    {
                        return;
                    }
                    if closing {
                        return;
                    }
                }
                Command::Help => print_block(&format!("{HELP}\n")),
                Command::Invalid(message) => print_block(&format!("{message}\n")),
            }
        }

        tracing::debug!("stdin closed");
        let _ = handle.block_on(ui_to_app_tx.send(AppEvent::UiEvent(UiEvent::Close)));
    });
}

fn print_block(text: &str) {
    let mut stdout = std::io::stdout().lock();
    let _ = writeln!(stdout, "{text}");
    let _ = stdout.flush();
}
