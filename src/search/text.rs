/// Longest snippet, in characters, before truncation kicks in.
pub const SNIPPET_MAX_CHARS: usize = 140;

/// Appended to every truncated snippet.
pub const ELLIPSIS: &str = "...";

/// Trims surrounding whitespace and case-folds the text.
///
/// Always returns a fresh `String`; the input is never modified.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Builds the display excerpt for a document body.
///
/// Bodies of at most `SNIPPET_MAX_CHARS` characters are returned unchanged.
/// Longer bodies are cut at that many characters (never inside a code point),
/// stripped of trailing whitespace and suffixed with `ELLIPSIS`.
pub fn make_snippet(body: &str) -> String {
    match body.char_indices().nth(SNIPPET_MAX_CHARS) {
        None => body.to_string(),
        Some((cut, _)) => {
            let mut snippet = body[..cut].trim_end().to_string();
            snippet.push_str(ELLIPSIS);
            snippet
        }
    }
}
