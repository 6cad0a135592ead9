//! Command parsing for the practice prompt
//!
//! Parses one line of user input, supporting:
//! - `:q` or `:quit` → Quit command
//! - `:h` or `:help` → Help command
//! - `:n` or `:next` → Next sentence
//! - `:s` or `:stats` → Show statistics
//! - `:show` → Show the current sentence again
//! - `@filename.txt` or `@filename.pdf` → Load sentence library
//! - `@@` → Load library from clipboard
//! - `+text|translation` → Practise a single typed sentence
//! - anything else → Recognized text of an attempt

use crate::app::AppEvent;

/// Commands that can be parsed from prompt input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Help,
    Next,
    Stats,
    Show,
    LoadFile(String),
    LoadClipboard,
    ManualEntry(String),
    Attempt(String),
    Unknown(String),
}

/// Parse prompt input string into a Command
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();

    if input.is_empty() {
        return Command::Unknown(input.to_string());
    }

    if let Some(cmd) = input.strip_prefix(':') {
        match cmd.trim() {
            "q" | "quit" => Command::Quit,
            "h" | "help" => Command::Help,
            "n" | "next" => Command::Next,
            "s" | "stats" => Command::Stats,
            "show" => Command::Show,
            _ => Command::Unknown(input.to_string()),
        }
    } else if let Some(rest) = input.strip_prefix('@') {
        let filename = rest.trim();
        if filename.is_empty() || filename == "@" {
            Command::LoadClipboard
        } else {
            Command::LoadFile(filename.to_string())
        }
    } else if let Some(entry) = input.strip_prefix('+') {
        Command::ManualEntry(entry.trim().to_string())
    } else {
        Command::Attempt(input.to_string())
    }
}

/// Convert a parsed command into an AppEvent
pub fn command_to_app_event(command: Command) -> AppEvent {
    match command {
        Command::Quit => AppEvent::Quit,
        Command::Help => AppEvent::Help,
        Command::Next => AppEvent::NextSentence,
        Command::Stats => AppEvent::ShowStats,
        Command::Show => AppEvent::ShowSentence,
        Command::LoadFile(path) => AppEvent::LoadFile(path),
        Command::LoadClipboard => AppEvent::LoadClipboard,
        Command::ManualEntry(entry) => AppEvent::ManualEntry(entry),
        Command::Attempt(text) => AppEvent::Attempt(text),
        Command::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}

pub const HELP_TEXT: &str = "\
Type what the recognizer heard to score it against the current sentence.
  :n, :next        next sentence
  :show            show the current sentence again
  :s, :stats       practice statistics
  @file            load a library (.txt or .pdf)
  @@               load a library from the clipboard
  +text|meaning    practise a single sentence
  :h, :help        this help
  :q, :quit        quit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quit_variants() {
        assert_eq!(parse_command(":q"), Command::Quit);
        assert_eq!(parse_command(":quit"), Command::Quit);
    }

    #[test]
    fn test_parse_help_variants() {
        assert_eq!(parse_command(":h"), Command::Help);
        assert_eq!(parse_command(":help"), Command::Help);
    }

    #[test]
    fn test_parse_navigation_and_stats() {
        assert_eq!(parse_command(":n"), Command::Next);
        assert_eq!(parse_command(":next"), Command::Next);
        assert_eq!(parse_command(":s"), Command::Stats);
        assert_eq!(parse_command(":stats"), Command::Stats);
        assert_eq!(parse_command(":show"), Command::Show);
    }

    #[test]
    fn test_parse_load_file_with_spaces() {
        assert_eq!(
            parse_command("@  lessons.txt"),
            Command::LoadFile("lessons.txt".to_string())
        );
    }

    #[test]
    fn test_parse_load_clipboard() {
        assert_eq!(parse_command("@@"), Command::LoadClipboard);
        assert_eq!(parse_command("@"), Command::LoadClipboard);
    }

    #[test]
    fn test_parse_manual_entry() {
        assert_eq!(
            parse_command("+ Thank you.|감사합니다."),
            Command::ManualEntry("Thank you.|감사합니다.".to_string())
        );
    }

    #[test]
    fn test_parse_plain_text_is_attempt() {
        assert_eq!(
            parse_command("  I am learning Engrish "),
            Command::Attempt("I am learning Engrish".to_string())
        );
    }

    #[test]
    fn test_parse_empty_and_unknown() {
        assert!(matches!(parse_command(""), Command::Unknown(_)));
        assert!(matches!(parse_command("   "), Command::Unknown(_)));
        assert!(matches!(parse_command(":bogus"), Command::Unknown(_)));
    }

    #[test]
    fn test_command_to_app_event() {
        assert_eq!(command_to_app_event(Command::Quit), AppEvent::Quit);
        assert_eq!(command_to_app_event(Command::Next), AppEvent::NextSentence);
        assert_eq!(
            command_to_app_event(Command::Attempt("hi".to_string())),
            AppEvent::Attempt("hi".to_string())
        );
        assert!(matches!(
            command_to_app_event(Command::Unknown("x".to_string())),
            AppEvent::InvalidCommand(_)
        ));
    }
}
