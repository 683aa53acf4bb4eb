use crate::models::SourceType;

/// Maximum title length for note-derived items
const NOTE_TITLE_LEN: usize = 60;
/// Maximum title length for url-derived items
const URL_TITLE_LEN: usize = 80;

/// Derive a short display title from an item's raw content.
///
/// - `Note`: first 60 characters, trimmed, with `...` appended if truncated.
/// - `Url`: the text after the first `Title: ` marker (up to 80 characters);
///   else the first line whose trimmed length exceeds 10 characters (up to 80
///   characters); else `"Untitled"`.
///
/// Truncation counts characters, never splitting a code point.
pub fn derive_title(content: &str, source: SourceType) -> String {
    if source == SourceType::Note {
        let prefix: String = content.chars().take(NOTE_TITLE_LEN).collect();
        let mut title = prefix.trim().to_string();
        if content.chars().count() > NOTE_TITLE_LEN {
            title.push_str("...");
        }
        return title;
    }

    // Fetched pages are stored as plain text with an optional "Title: " line.
    if let Some(pos) = content.find("Title: ") {
        let captured = content[pos + "Title: ".len()..].lines().next().unwrap_or("");
        if !captured.is_empty() {
            return captured.chars().take(URL_TITLE_LEN).collect();
        }
    }

    content
        .lines()
        .find(|line| line.trim().chars().count() > 10)
        .map(|line| line.chars().take(URL_TITLE_LEN).collect())
        .unwrap_or_else(|| "Untitled".to_string())
}
