use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lexi_types::{AppEvent, UiEvent};
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub mod favorites;
pub mod lookup;
pub mod theme;

use favorites::{handle_favorites_list, handle_favorite_toggle};
use lookup::spawn_lookup;
use theme::handle_theme_toggle;

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    app_to_ui_tx.send(AppEvent::BackendReady).await?;

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] Cancelled");
                return Ok(());
            }
            event = ui_to_app_rx.recv() => event?,
        };

        tracing::debug!(
            "[EVENT_LOOP] EVENT RECEIVED: {:?}",
            std::mem::discriminant(&event)
        );
        handle_events(state.clone(), &app_to_ui_tx, &cancel, event).await?;
    }
}

async fn handle_events(
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    cancel: &CancellationToken,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::UiEvent(UiEvent::Submit(query)) => {
            // Lookups run detached so a slow one never blocks new input
            spawn_lookup(state, query, app_to_ui_tx.clone());
        }
        AppEvent::UiEvent(UiEvent::SelectFavorite(word)) => {
            tracing::debug!("Recalling favorite '{}'", word);
            spawn_lookup(state, word, app_to_ui_tx.clone());
        }
        AppEvent::UiEvent(UiEvent::ToggleFavorite) => {
            handle_favorite_toggle(state, app_to_ui_tx).await?;
        }
        AppEvent::UiEvent(UiEvent::ListFavorites) => {
            handle_favorites_list(state, app_to_ui_tx).await?;
        }
        AppEvent::UiEvent(UiEvent::ToggleTheme) => {
            handle_theme_toggle(state, app_to_ui_tx).await?;
        }
        AppEvent::UiEvent(UiEvent::Close) => {
            tracing::info!("Close requested");
            cancel.cancel();
        }
        AppEvent::ShowView(_)
        | AppEvent::ShowFavorites(_)
        | AppEvent::ThemeChanged { .. }
        | AppEvent::StatusUpdate(_)
        | AppEvent::BackendReady => {
            // UI-only events, ignore in backend
        }
    }

    Ok(())
}
