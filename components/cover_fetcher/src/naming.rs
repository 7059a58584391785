// components/cover_fetcher/src/naming.rs
use std::path::PathBuf;

pub const COVER_EXTENSION: &str = "jpg";

/// Album title with runs of whitespace collapsed into single hyphens.
///
/// `/` and NUL cannot appear in a filename and become hyphens too, so the
/// cover always lands directly in the output directory. Every other
/// character is kept as the tool would receive it.
pub fn album_basename(album: &str) -> String {
    album
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .replace(&['/', '\0'][..], "-")
}

/// Filename the cover for `album` is saved under.
///
/// The basename is a single path component and the extension is always
/// appended, so the result is never `.` or `..`.
pub fn cover_filename(album: &str) -> PathBuf {
    PathBuf::from(format!("{}.{}", album_basename(album), COVER_EXTENSION))
}
