//! # Markup Module
//!
//! Formatting dialects understood by Telegram and the sanitizer that keeps
//! user and model text from being rendered as markup.

use std::str::FromStr;

use teloxide::types::ParseMode;

/// Characters reserved by Telegram's MarkdownV2 dialect
const MARKDOWN_V2_RESERVED: [char; 19] = [
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
    '\\',
];

/// Output formatting dialect, fixed for a deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkupDialect {
    /// No markup; text is sent verbatim
    Plain,
    /// Telegram MarkdownV2
    Markdown,
    /// Telegram HTML subset
    #[default]
    Html,
}

impl MarkupDialect {
    /// Telegram `parse_mode` for this dialect, `None` for plain text
    pub fn parse_mode(self) -> Option<ParseMode> {
        match self {
            MarkupDialect::Plain => None,
            MarkupDialect::Markdown => Some(ParseMode::MarkdownV2),
            MarkupDialect::Html => Some(ParseMode::Html),
        }
    }

    /// Escape every character that is significant in this dialect
    pub fn escape(self, text: &str) -> String {
        match self {
            MarkupDialect::Plain => text.to_string(),
            MarkupDialect::Html => escape_html(text),
            MarkupDialect::Markdown => escape_markdown_v2(text),
        }
    }

    /// Render already-escaped text in bold
    pub fn bold(self, escaped: &str) -> String {
        match self {
            MarkupDialect::Plain => escaped.to_string(),
            MarkupDialect::Markdown => format!("*{escaped}*"),
            MarkupDialect::Html => format!("<b>{escaped}</b>"),
        }
    }

    /// Render already-escaped text in italics
    pub fn italic(self, escaped: &str) -> String {
        match self {
            MarkupDialect::Plain => escaped.to_string(),
            MarkupDialect::Markdown => format!("_{escaped}_"),
            MarkupDialect::Html => format!("<i>{escaped}</i>"),
        }
    }
}

impl FromStr for MarkupDialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" | "text" => Ok(MarkupDialect::Plain),
            "markdown" | "markdownv2" => Ok(MarkupDialect::Markdown),
            "html" => Ok(MarkupDialect::Html),
            other => Err(format!("unknown reply format '{other}' (expected plain, markdown or html)")),
        }
    }
}

/// Escape the three characters Telegram's HTML parser treats specially.
pub fn escape_html(text: &str) -> String {
    // `&` goes first so the entities produced below are not re-escaped
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Backslash-escape every MarkdownV2 reserved character.
pub fn escape_markdown_v2(text: &str) -> String {
    let mut result = String::with_capacity(text.len() * 2);

    for ch in text.chars() {
        if MARKDOWN_V2_RESERVED.contains(&ch) {
            result.push('\\');
        }
        result.push(ch);
    }

    result
}
