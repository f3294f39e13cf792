use lexi_core::LookupOutcome;
use lexi_types::LookupError;

use crate::render::{render_json, render_view};
use crate::state::AppState;

/// Look up one word and return the text to print. Failed lookups are errors
/// so the process exits non-zero.
pub async fn lookup_once(state: &AppState, word: &str, json: bool) -> anyhow::Result<String> {
    match state.engine.submit(word).await {
        LookupOutcome::Success(result) if json => Ok(format!("{}\n", render_json(&result)?)),
        LookupOutcome::Success(_) => Ok(render_view(&state.engine.snapshot().await)),
        LookupOutcome::Error(LookupError::EmptyQuery) => anyhow::bail!("{}", LookupError::EmptyQuery),
        LookupOutcome::Error(error) => anyhow::bail!("{}: {}", word.trim(), error),
        LookupOutcome::Stale => anyhow::bail!("Lookup for '{}' was superseded", word.trim()),
    }
}
