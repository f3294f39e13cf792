use lexi_types::UiEvent;

pub const HELP: &str = "\
Type a word and press enter to look it up.
  :fav          toggle favorite for the word on display
  :favs         list favorites
  :pick <n|w>   look up favorite number n (from :favs) or word w
  :theme        toggle dark mode
  :help         show this help
  :quit         exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Send(UiEvent),
    Help,
    Invalid(String),
}

/// Parse one input line. Anything that is not a `:` command is a query,
/// including blank lines, which the engine rejects itself.
pub fn parse_command(line: &str, favorites: &[String]) -> Command {
    let trimmed = line.trim();
    let Some(rest) = trimmed.strip_prefix(':') else {
        return Command::Send(UiEvent::Submit(line.to_string()));
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };

    match name {
        "fav" => Command::Send(UiEvent::ToggleFavorite),
        "favs" => Command::Send(UiEvent::ListFavorites),
        "theme" => Command::Send(UiEvent::ToggleTheme),
        "help" | "h" => Command::Help,
        "quit" | "q" => Command::Send(UiEvent::Close),
        "pick" => parse_pick(arg, favorites),
        other => Command::Invalid(format!("Unknown command ':{other}', try :help")),
    }
}

fn parse_pick(arg: &str, favorites: &[String]) -> Command {
    if arg.is_empty() {
        return Command::Invalid("Usage: :pick <number|word>".to_string());
    }

    match arg.parse::<usize>() {
        Ok(n) => match n.checked_sub(1).and_then(|i| favorites.get(i)) {
            Some(word) => Command::Send(UiEvent::SelectFavorite(word.clone())),
            None => Command::Invalid(format!("No favorite #{n}, run :favs first")),
        },
        Err(_) => Command::Send(UiEvent::SelectFavorite(arg.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn favorites() -> Vec<String> {
        vec!["word".to_string(), "cat".to_string()]
    }

    #[test]
    fn test_plain_text_is_submitted_verbatim() {
        assert_eq!(
            parse_command(" word ", &[]),
            Command::Send(UiEvent::Submit(" word ".to_string()))
        );
        assert_eq!(
            parse_command("", &[]),
            Command::Send(UiEvent::Submit(String::new()))
        );
    }

    #[test]
    fn test_commands() {
        assert_eq!(parse_command(":fav", &[]), Command::Send(UiEvent::ToggleFavorite));
        assert_eq!(parse_command(":favs", &[]), Command::Send(UiEvent::ListFavorites));
        assert_eq!(parse_command(" :theme ", &[]), Command::Send(UiEvent::ToggleTheme));
        assert_eq!(parse_command(":q", &[]), Command::Send(UiEvent::Close));
        assert_eq!(parse_command(":help", &[]), Command::Help);
        assert!(matches!(parse_command(":nope", &[]), Command::Invalid(_)));
    }

    #[test]
    fn test_pick_by_number_and_word() {
        assert_eq!(
            parse_command(":pick 2", &favorites()),
            Command::Send(UiEvent::SelectFavorite("cat".to_string()))
        );
        assert_eq!(
            parse_command(":pick word", &favorites()),
            Command::Send(UiEvent::SelectFavorite("word".to_string()))
        );
        assert!(matches!(parse_command(":pick 0", &favorites()), Command::Invalid(_)));
        assert!(matches!(parse_command(":pick 3", &favorites()), Command::Invalid(_)));
        assert!(matches!(parse_command(":pick", &favorites()), Command::Invalid(_)));
    }
}
