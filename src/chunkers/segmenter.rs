//! Punctuation-based sentence segmentation for Spanish and English text.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

lazy_static! {
    /// Terminal punctuation followed by whitespace and a capital letter,
    /// or directly by a newline. The capital is consumed by the match but
    /// belongs to the next sentence; it can never start another match.
    static ref SENTENCE_BOUNDARY: Regex =
        Regex::new(r"[.!?](?:\s+[A-ZÁÉÍÓÚÑ]|\n)").expect("valid sentence boundary pattern");
}

/// Abbreviations whose trailing period must not end a sentence.
pub const DEFAULT_ABBREVIATIONS: &[&str] = &[
    "Sr.", "Sra.", "Dr.", "Dra.", "Prof.", "Profa.", "Mr.", "Mrs.", "etc.", "ej.", "p.ej.",
    "aprox.",
];

/// Splits normalized text into sentences.
///
/// Known limitation: dotted acronyms such as "U.S. Army" still break,
/// since only the configured abbreviations are protected.
#[derive(Debug, Clone)]
pub struct SentenceSegmenter {
    abbreviations: Vec<String>,
}

impl SentenceSegmenter {
    /// Create a segmenter protecting the default Spanish/English abbreviations.
    pub fn new() -> Self {
        Self::with_abbreviations(DEFAULT_ABBREVIATIONS.iter().copied())
    }

    /// Create a segmenter protecting a custom abbreviation list.
    pub fn with_abbreviations<I, S>(abbreviations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            abbreviations: abbreviations
                .into_iter()
                .map(Into::into)
                .filter(|a: &String| !a.is_empty())
                .collect(),
        }
    }

    /// Protected abbreviations, in substitution order.
    pub fn abbreviations(&self) -> &[String] {
        &self.abbreviations
    }

    /// Split text into trimmed, non-empty sentences.
    ///
    /// Terminal punctuation stays with the sentence it closes. Text without
    /// terminal punctuation comes back as a single sentence.
    pub fn split(&self, text: &str) -> Vec<String> {
        let protected = self.protect(text);

        let mut sentences = Vec::new();
        let mut start = 0;
        for boundary in SENTENCE_BOUNDARY.find_iter(&protected) {
            // punctuation is ASCII, so the sentence ends one byte after the match start
            let end = boundary.start() + 1;
            self.push_sentence(&mut sentences, &protected[start..end]);
            start = end;
        }
        self.push_sentence(&mut sentences, &protected[start..]);

        trace!(sentences = sentences.len(), "Segmented text");
        sentences
    }

    fn push_sentence(&self, sentences: &mut Vec<String>, fragment: &str) {
        let trimmed = fragment.trim();
        if !trimmed.is_empty() {
            sentences.push(self.restore(trimmed));
        }
    }

    fn placeholder(index: usize) -> String {
        format!("__ABBR{index}__")
    }

    fn protect(&self, text: &str) -> String {
        self.abbreviations
            .iter()
            .enumerate()
            .fold(text.to_string(), |acc, (index, abbr)| {
                acc.replace(abbr.as_str(), &Self::placeholder(index))
            })
    }

    fn restore(&self, sentence: &str) -> String {
        self.abbreviations
            .iter()
            .enumerate()
            .fold(sentence.to_string(), |acc, (index, abbr)| {
                acc.replace(&Self::placeholder(index), abbr)
            })
    }
}

impl Default for SentenceSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn split(text: &str) -> Vec<String> {
        SentenceSegmenter::new().split(text)
    }

    #[test]
    fn test_abbreviation_does_not_break() {
        assert_eq!(
            split("El Dr. Pérez llegó. Fue breve."),
            vec!["El Dr. Pérez llegó.", "Fue breve."]
        );
    }

    #[test]
    fn test_all_terminators() {
        assert_eq!(
            split("¿Qué pasó? Nada especial! Bueno. Adiós"),
            vec!["¿Qué pasó?", "Nada especial!", "Bueno.", "Adiós"]
        );
    }

    #[test]
    fn test_accented_capital_starts_sentence() {
        assert_eq!(
            split("Terminó la clase. Ésta es otra. Ñandú visto."),
            vec!["Terminó la clase.", "Ésta es otra.", "Ñandú visto."]
        );
    }

    #[test]
    fn test_lowercase_continuation_does_not_break() {
        assert_eq!(split("Son las 3 p.m. y llueve."), vec!["Son las 3 p.m. y llueve."]);
    }

    #[test]
    fn test_newline_after_punctuation_breaks() {
        assert_eq!(
            split("primera línea.\nsegunda línea sin mayúscula.\n\notra."),
            vec!["primera línea.", "segunda línea sin mayúscula.", "otra."]
        );
    }

    #[test]
    fn test_no_punctuation_is_single_sentence() {
        assert_eq!(
            split("una transcripción sin puntuación alguna"),
            vec!["una transcripción sin puntuación alguna"]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(split("").is_empty());
        assert!(split("   ").is_empty());
    }

    #[test]
    fn test_english_titles_and_etc() {
        assert_eq!(
            split("Mrs. Smith met Mr. Jones. They talked about books, films, etc. And then left."),
            vec!["Mrs. Smith met Mr. Jones.", "They talked about books, films, etc. And then left."]
        );
    }

    #[test]
    fn test_dotted_acronym_over_segments() {
        // documented heuristic limitation
        assert_eq!(split("He joined the U.S. Army."), vec!["He joined the U.S.", "Army."]);
    }

    #[test]
    fn test_custom_abbreviations() {
        let segmenter = SentenceSegmenter::with_abbreviations(["Dott."]);
        assert_eq!(
            segmenter.split("Il Dott. Rossi è arrivato. Bene."),
            vec!["Il Dott. Rossi è arrivato.", "Bene."]
        );
        assert_eq!(
            segmenter.split("El Dr. Pérez llegó."),
            vec!["El Dr.", "Pérez llegó."]
        );
    }
}
