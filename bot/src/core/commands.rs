//! Recognition of commands and main menu buttons

use super::texts;

const RENAME_COMMANDS: &[&str] = &["/ім'я", "/ім’я", "/імʼя", "/name"];

/// What an idle user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    /// Rename; `None` when no new name followed the command
    Rename(Option<String>),
    Profile,
    Measure,
    Leaderboard,
    Unrecognized,
}

impl Command {
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        match trimmed {
            texts::MENU_PROFILE => return Command::Profile,
            texts::MENU_MEASURE => return Command::Measure,
            texts::MENU_TOP => return Command::Leaderboard,
            _ => {}
        }

        let mut words = trimmed.split_whitespace();
        let Some(head) = words.next() else {
            return Command::Unrecognized;
        };
        // Group chats address commands as /command@bot_name
        let command = head.split('@').next().unwrap_or(head).to_lowercase();

        if command == "/start" {
            Command::Start
        } else if RENAME_COMMANDS.contains(&command.as_str()) {
            let name = words.collect::<Vec<_>>().join(" ");
            Command::Rename((!name.is_empty()).then_some(name))
        } else {
            Command::Unrecognized
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_buttons() {
        assert_eq!(Command::parse(texts::MENU_PROFILE), Command::Profile);
        assert_eq!(Command::parse(texts::MENU_MEASURE), Command::Measure);
        assert_eq!(Command::parse(texts::MENU_TOP), Command::Leaderboard);
    }

    #[test]
    fn test_start() {
        assert_eq!(Command::parse("/start"), Command::Start);
        assert_eq!(Command::parse("/start@slim_tracker_bot"), Command::Start);
    }

    #[test]
    fn test_rename() {
        assert_eq!(
            Command::parse("/ім'я  Марія   Петрівна "),
            Command::Rename(Some("Марія Петрівна".to_string()))
        );
        assert_eq!(
            Command::parse("/name Max"),
            Command::Rename(Some("Max".to_string()))
        );
        assert_eq!(Command::parse("/ім’я"), Command::Rename(None));
    }

    #[test]
    fn test_unrecognized() {
        assert_eq!(Command::parse("привіт"), Command::Unrecognized);
        assert_eq!(Command::parse("   "), Command::Unrecognized);
        assert_eq!(Command::parse("/help"), Command::Unrecognized);
    }
}
