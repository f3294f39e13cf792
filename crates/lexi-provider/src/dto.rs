//! Wire types for the entries endpoint.
//!
//! Every field is optional so that a reply with an odd shape still decodes
//! and the normalizer gets to decide whether it is usable.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawEntry {
    #[serde(default)]
    pub word: Option<String>,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub phonetics: Option<Vec<RawPhonetic>>,
    #[serde(default)]
    pub meanings: Option<Vec<RawMeaning>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPhonetic {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub audio: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMeaning {
    #[serde(rename = "partOfSpeech", default)]
    pub part_of_speech: Option<String>,
    #[serde(default)]
    pub definitions: Option<Vec<RawDefinition>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawDefinition {
    #[serde(default)]
    pub definition: Option<String>,
    #[serde(default)]
    pub example: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_provider_payload() {
        let json = r#"[{
            "word": "hello",
            "phonetics": [
                {"text": "/həˈləʊ/", "audio": ""},
                {"text": "/həˈloʊ/", "audio": "https://audio.example/hello-us.mp3"}
            ],
            "meanings": [{
                "partOfSpeech": "noun",
                "definitions": [
                    {"definition": "\"Hello!\" or an equivalent greeting.", "synonyms": [], "antonyms": []}
                ]
            }],
            "license": {"name": "CC BY-SA 3.0"}
        }]"#;

        let entries: Vec<RawEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.word.as_deref(), Some("hello"));

        let phonetics = entry.phonetics.as_ref().unwrap();
        assert_eq!(
            phonetics[1].audio.as_deref(),
            Some("https://audio.example/hello-us.mp3")
        );

        let meaning = &entry.meanings.as_ref().unwrap()[0];
        assert_eq!(meaning.part_of_speech.as_deref(), Some("noun"));
        let definition = &meaning.definitions.as_ref().unwrap()[0];
        assert!(definition.example.is_none());
    }

    #[test]
    fn test_decode_entry_without_meanings() {
        let entries: Vec<RawEntry> = serde_json::from_str(r#"[{"word": "odd"}]"#).unwrap();
        assert!(entries[0].meanings.is_none());
        assert!(entries[0].phonetics.is_none());
    }
}
