use std::sync::Arc;

use kanal::AsyncSender;
use lexi_types::AppEvent;

use crate::state::AppState;

pub async fn handle_favorite_toggle(
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    match state.engine.toggle_favorite().await {
        Ok(Some(now_favorite)) => {
            tracing::info!("Favorite toggled: {}", now_favorite);
            let view = state.engine.snapshot().await;
            app_to_ui_tx.send(AppEvent::ShowView(view)).await?;
        }
        Ok(None) => {
            app_to_ui_tx
                .send(AppEvent::StatusUpdate(
                    "Look up a word before marking it".to_string(),
                ))
                .await?;
        }
        Err(e) => {
            tracing::error!("Failed to persist favorites: {}", e);
            app_to_ui_tx
                .send(AppEvent::StatusUpdate("Could not save favorite".to_string()))
                .await?;
        }
    }

    Ok(())
}

pub async fn handle_favorites_list(
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let favorites = state.engine.favorites().await;
    tracing::debug!("Listing {} favorites", favorites.len());
    app_to_ui_tx.send(AppEvent::ShowFavorites(favorites)).await?;
    Ok(())
}
