//! Shapes provider entries into a `LookupResult`.
//!
//! Only the first entry is read. Its sense groups are flattened in order and
//! capped at `MAX_DEFINITIONS`; the pronunciation comes from the phonetic
//! variant at `AUDIO_PHONETIC_INDEX`.

use lexi_provider::{RawDefinition, RawEntry};
use lexi_types::{Definition, LookupError, LookupResult};

/// Fixed display bound, not configurable
pub const MAX_DEFINITIONS: usize = 5;

/// Phonetic variant whose audio is surfaced
pub const AUDIO_PHONETIC_INDEX: usize = 1;

pub fn normalize(word: &str, entries: &[RawEntry]) -> Result<LookupResult, LookupError> {
    let entry = entries.first().ok_or(LookupError::Unusable)?;
    let meanings = entry.meanings.as_ref().ok_or(LookupError::Unusable)?;

    let definitions: Vec<Definition> = meanings
        .iter()
        .flat_map(|meaning| meaning.definitions.iter().flatten())
        .filter_map(to_definition)
        .take(MAX_DEFINITIONS)
        .collect();

    let audio_url = entry
        .phonetics
        .as_ref()
        .and_then(|phonetics| phonetics.get(AUDIO_PHONETIC_INDEX))
        .and_then(|phonetic| non_empty(phonetic.audio.as_deref()));

    Ok(LookupResult {
        word: word.to_string(),
        definitions,
        audio_url,
    })
}

/// Senses without text are skipped
fn to_definition(raw: &RawDefinition) -> Option<Definition> {
    Some(Definition {
        text: non_empty(raw.definition.as_deref())?,
        example: non_empty(raw.example.as_deref()),
    })
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
