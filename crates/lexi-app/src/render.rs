use std::fmt::Write;

use lexi_types::{LookupResult, LookupStatus, ViewSnapshot};

pub fn render_view(view: &ViewSnapshot) -> String {
    let mut out = String::new();

    match &view.status {
        LookupStatus::Idle => {}
        LookupStatus::Searching => {
            let _ = writeln!(out, "Searching for '{}'...", view.query.trim());
        }
        LookupStatus::Error(error) => {
            let _ = writeln!(out, "{error}");
        }
        LookupStatus::Success(result) => {
            let marker = if view.is_favorite { " ★" } else { "" };
            let _ = writeln!(out, "{}{}", result.word, marker);

            if let Some(audio_url) = &result.audio_url {
                let _ = writeln!(out, "Pronunciation: {audio_url}");
            }

            if result.definitions.is_empty() {
                let _ = writeln!(out, "No definitions listed");
            } else {
                let _ = writeln!(out, "Definitions:");
                for (index, definition) in result.definitions.iter().enumerate() {
                    let _ = writeln!(out, "{}: {}", index + 1, definition.text);
                    if let Some(example) = &definition.example {
                        let _ = writeln!(out, "   Example. {example}");
                    }
                }
            }
        }
    }

    out
}

pub fn render_favorites(favorites: &[String]) -> String {
    if favorites.is_empty() {
        return "No favorites yet\n".to_string();
    }

    let mut out = String::from("Favorites:\n");
    for (index, word) in favorites.iter().enumerate() {
        let _ = writeln!(out, "{}: {}", index + 1, word);
    }
    out
}

pub fn render_theme(dark_mode: bool) -> String {
    format!("Theme: {}\n", if dark_mode { "dark" } else { "light" })
}

pub fn render_json(result: &LookupResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}
