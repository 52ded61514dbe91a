//! Result previews.

use earth_corpus::strip_emphasis;

/// Marker appended to every preview.
pub const ELLIPSIS: &str = "...";

/// Plain-text preview of a body: markup removed, cut to `max_chars`
/// characters, always followed by the ellipsis marker.
pub fn preview(text: &str, max_chars: usize) -> String {
    let plain = strip_emphasis(text);
    let mut out: String = plain.chars().take(max_chars).collect();
    out.push_str(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_truncates_by_characters() {
        let text = "ж".repeat(120);
        let out = preview(&text, 90);
        assert_eq!(out.chars().count(), 93);
        assert!(out.ends_with("ж..."));
    }

    #[test]
    fn test_preview_short_text_still_gets_ellipsis() {
        assert_eq!(preview("Средняя глубина **3 800 м**", 90), "Средняя глубина 3 800 м...");
    }

    #[test]
    fn test_preview_strips_before_cutting() {
        let out = preview("**abc**def", 4);
        assert_eq!(out, "abcd...");
    }
}
