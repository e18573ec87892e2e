//! Text helpers shared by the segmenter, the builder and the statistics.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LINE_BREAKS: Regex = Regex::new(r"\r\n?").expect("valid line break pattern");
    static ref EXCESS_NEWLINES: Regex = Regex::new(r"\n{3,}").expect("valid newline pattern");
    static ref INLINE_SPACES: Regex = Regex::new(r"[ \t]+").expect("valid space pattern");
}

/// Count whitespace-separated words.
///
/// Every word count in the crate goes through this function so chunk
/// sizes, quality labels and statistics agree with each other.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Normalize whitespace while keeping paragraph breaks.
///
/// Line breaks become `\n`, runs of three or more newlines collapse to a
/// blank line, runs of spaces and tabs collapse to one space, and the
/// result is trimmed. Applying it twice gives the same result as once.
pub fn normalize_text(text: &str) -> String {
    let text = LINE_BREAKS.replace_all(text, "\n");
    let text = EXCESS_NEWLINES.replace_all(&text, "\n\n");
    let text = INLINE_SPACES.replace_all(&text, " ");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_count_words() {
        assert_eq!(count_words("  hola   mundo  "), 2);
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words(" \n\t "), 0);
        assert_eq!(count_words("uno\ndos\tTres. cuatro"), 4);
    }

    #[test]
    fn test_normalize_line_breaks_and_paragraphs() {
        let raw = "Primera línea.\r\nSegunda.\rTercera.\n\n\n\n\nOtro párrafo.";
        assert_eq!(
            normalize_text(raw),
            "Primera línea.\nSegunda.\nTercera.\n\nOtro párrafo."
        );
    }

    #[test]
    fn test_normalize_spaces_and_trim() {
        assert_eq!(normalize_text("  \t hola \t\t  mundo   "), "hola mundo");
        assert_eq!(normalize_text(""), "");
        assert_eq!(normalize_text(" \r\n \n "), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            "a\r\n\r\n\r\nb   c",
            "  x.\n \n \n y\t\tz  ",
            "\n\n\n\nSolo texto\n\n\n",
            "ya normalizado.\n\nSegundo párrafo.",
        ];
        for input in inputs {
            let once = normalize_text(input);
            assert_eq!(normalize_text(&once), once, "input: {input:?}");
        }
    }
}
