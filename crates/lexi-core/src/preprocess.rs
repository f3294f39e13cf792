pub trait Preprocessor: Send + Sync {
    /// Canonical form of a raw query. An empty result means there is
    /// nothing to look up.
    fn process(&self, text: &str) -> String {
        text.replace(['\n', '\r'], "").trim().to_string()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_keeps_case() {
        assert_eq!(DefaultPreprocessor.process("  Word \n"), "Word");
        assert_eq!(DefaultPreprocessor.process("ice cream"), "ice cream");
    }

    #[test]
    fn test_blank_input_is_empty() {
        assert!(DefaultPreprocessor.process("").is_empty());
        assert!(DefaultPreprocessor.process(" ").is_empty());
        assert!(DefaultPreprocessor.process("\t\r\n  ").is_empty());
    }
}
