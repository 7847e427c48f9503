//! Fixed menu commands recognised by the bot

/// A menu command. Matching is exact and case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Welcome message with the command menu
    Start,
    /// Vocabulary and grammar learning
    Learn,
    /// Exam preparation
    Exam,
    /// Speaking practice
    Speaking,
}

impl Command {
    /// Every command, in matching priority order
    pub const ALL: [Command; 4] = [
        Command::Start,
        Command::Learn,
        Command::Exam,
        Command::Speaking,
    ];

    /// The literal a user types to invoke the command
    pub fn literal(self) -> &'static str {
        match self {
            Command::Start => "/start",
            Command::Learn => "/learn",
            Command::Exam => "/exam",
            Command::Speaking => "/speaking",
        }
    }

    /// Match `text` against the command literals after trimming whitespace
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        Self::ALL.into_iter().find(|c| c.literal() == trimmed)
    }
}
