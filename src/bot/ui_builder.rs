//! UI Builder module for composing canned replies in the active markup dialect

use crate::markup::MarkupDialect;

use super::command::Command;

/// Menu lines shown under the welcome message
const MENU_ENTRIES: [(Command, &str, &str); 3] = [
    (Command::Learn, "📚", "Deutsch lernen"),
    (Command::Exam, "📝", "Prüfungsvorbereitung"),
    (Command::Speaking, "🗣", "Sprechpraxis"),
];

/// Builds a reply from plain-text pieces, escaping each one for the dialect
struct ReplyBuilder {
    dialect: MarkupDialect,
    lines: Vec<String>,
}

impl ReplyBuilder {
    fn new(dialect: MarkupDialect) -> Self {
        Self {
            dialect,
            lines: Vec::new(),
        }
    }

    fn title(mut self, text: &str) -> Self {
        let escaped = self.dialect.escape(text);
        self.lines.push(self.dialect.bold(&escaped));
        self
    }

    fn line(mut self, text: &str) -> Self {
        self.lines.push(self.dialect.escape(text));
        self
    }

    fn hint(mut self, text: &str) -> Self {
        let escaped = self.dialect.escape(text);
        self.lines.push(self.dialect.italic(&escaped));
        self
    }

    fn blank(mut self) -> Self {
        self.lines.push(String::new());
        self
    }

    fn build(self) -> String {
        self.lines.join("\n")
    }
}

/// Compose the canned reply for `command`
pub fn canned_reply(command: Command, dialect: MarkupDialect) -> String {
    match command {
        Command::Start => welcome_menu(dialect),
        Command::Learn => ReplyBuilder::new(dialect)
            .title("📚 Deutsch lernen")
            .blank()
            .line("Schick mir ein Wort, einen Satz oder eine Grammatikfrage.")
            .line("Ich erkläre dir Bedeutung, Beispiele und typische Fehler.")
            .blank()
            .hint("Beispiel: Was ist der Unterschied zwischen \"seit\" und \"seid\"?")
            .build(),
        Command::Exam => ReplyBuilder::new(dialect)
            .title("📝 Prüfungsvorbereitung")
            .blank()
            .line("Wir üben für Goethe, telc und TestDaF (A1 bis C1).")
            .line("Schreib mir dein Niveau und den Prüfungsteil, z. B. \"B1 Schreiben\".")
            .blank()
            .hint("Ich stelle dir dann passende Aufgaben und korrigiere deine Antworten.")
            .build(),
        Command::Speaking => ReplyBuilder::new(dialect)
            .title("🗣 Sprechpraxis")
            .blank()
            .line("Lass uns ein Gespräch auf Deutsch führen!")
            .line("Schreib einfach den ersten Satz, ich antworte und korrigiere dich.")
            .blank()
            .hint("Tipp: Wähle ein Alltagsthema wie Einkaufen, Arbeit oder Reisen.")
            .build(),
    }
}

/// Welcome message followed by the command menu
pub fn welcome_menu(dialect: MarkupDialect) -> String {
    let mut builder = ReplyBuilder::new(dialect)
        .title("👋 Willkommen beim NemisUz Gemini-Bot!")
        .blank()
        .line("Ich helfe dir beim Deutschlernen. Wähle eine Option:")
        .blank();

    for (command, icon, label) in MENU_ENTRIES {
        builder = builder.line(&format!("{icon} {} – {label}", command.literal()));
    }

    builder
        .blank()
        .hint("Oder schreib mir einfach deine Frage!")
        .build()
}
