use std::sync::Arc;

use kanal::AsyncSender;
use lexi_types::AppEvent;

use crate::state::AppState;

pub async fn handle_theme_toggle(
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let toggled = state.theme.lock().await.toggle();

    match toggled {
        Ok(dark_mode) => {
            app_to_ui_tx
                .send(AppEvent::ThemeChanged { dark_mode })
                .await?;
        }
        Err(e) => {
            tracing::error!("Failed to persist theme: {}", e);
        }
    }

    Ok(())
}
