// components/cover_fetcher/src/parse.rs
use std::borrow::Cow;

use crate::types::{AlbumEntry, ParseError};

/// Escape every unquoted `#` so it stays part of a field.
///
/// `shell_words` treats a word-leading `#` as a comment; album lines have no
/// comments, so `"Big Star" #1 Record` must keep `#1`.
fn escape_comment_marks(text: &str) -> Cow<'_, str> {
    if !text.contains('#') {
        return Cow::Borrowed(text);
    }

    #[derive(Clone, Copy, PartialEq)]
    enum Quote {
        None,
        Single,
        Double,
    }

    let mut escaped = String::with_capacity(text.len() + 4);
    let mut quote = Quote::None;
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        match (quote, c) {
            (Quote::None, '#') => escaped.push_str("\\#"),
            (Quote::None | Quote::Double, '\\') => {
                escaped.push(c);
                if let Some(next) = chars.next() {
                    escaped.push(next);
                }
            }
            (Quote::None, '\'') => {
                quote = Quote::Single;
                escaped.push(c);
            }
            (Quote::None, '"') => {
                quote = Quote::Double;
                escaped.push(c);
            }
            (Quote::Single, '\'') | (Quote::Double, '"') => {
                quote = Quote::None;
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Parse one line of the albums file.
///
/// The line is split with POSIX shell quoting rules, so `"The Beatles" "Abbey Road"`
/// yields two fields. Fields past the second are ignored. `#` is ordinary text.
pub fn parse_line(line: usize, text: &str) -> Result<AlbumEntry, ParseError> {
    let fields = shell_words::split(&escape_comment_marks(text)).map_err(|e| ParseError::Tokenize {
        line,
        text: text.to_string(),
        reason: e.to_string(),
    })?;

    let mut fields = fields.into_iter();
    let (artist, album) = match (fields.next(), fields.next()) {
        (Some(artist), Some(album)) => (artist, album),
        (first, _) => {
            return Err(ParseError::MissingField {
                line,
                text: text.to_string(),
                found: usize::from(first.is_some()),
            })
        }
    };

    let extra = fields.count();
    if extra > 0 {
        tracing::debug!("line {}: ignoring {} extra field(s)", line, extra);
    }

    Ok(AlbumEntry { artist, album })
}

/// Lazily parse every non-blank line, paired with its 1-based line number.
///
/// Parsing is deferred so a caller can act on earlier entries before a
/// malformed line further down is reached.
pub fn entries(text: &str) -> impl Iterator<Item = Result<(usize, AlbumEntry), ParseError>> + '_ {
    text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(number, line)| parse_line(number, line).map(|entry| (number, entry)))
}
