use std::sync::Arc;

use kanal::AsyncSender;
use lexi_core::LookupOutcome;
use lexi_types::AppEvent;

use crate::state::AppState;

pub fn spawn_lookup(state: Arc<AppState>, query: String, app_to_ui_tx: AsyncSender<AppEvent>) {
    tokio::spawn(async move {
        if let Err(e) = handle_lookup(state, query, &app_to_ui_tx).await {
            tracing::error!("Failed to deliver lookup result: {}", e);
        }
    });
}

pub async fn handle_lookup(
    state: Arc<AppState>,
    query: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    match state.engine.submit(&query).await {
        LookupOutcome::Stale => {
            tracing::debug!("Lookup for '{}' superseded, nothing to show", query);
        }
        LookupOutcome::Success(_) | LookupOutcome::Error(_) => {
            let view = state.engine.snapshot().await;
            app_to_ui_tx.send(AppEvent::ShowView(view)).await?;
        }
    }

    Ok(())
}
