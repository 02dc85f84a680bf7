//! Grapheme-safe text fragmentation for character reveals.
//!
//! Hero and preloader headings animate per character. Splitting must not
//! cut combining sequences or emoji apart, and inter-word spacing has to
//! survive as non-breaking spaces so the fragmented heading wraps at word
//! boundaries only.

use unicode_segmentation::UnicodeSegmentation;

/// Non-breaking space used between words of a fragmented heading.
pub const NBSP: char = '\u{00A0}';

/// One display fragment of a fragmented heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFragment {
    /// The fragment's text: a single grapheme cluster, or a non-breaking
    /// space joining two words.
    pub text: String,
    /// Index of the word this fragment belongs to.
    pub word: usize,
    /// True for the joining spaces; they are not animated.
    pub is_space: bool,
}

/// Split `text` into per-character display fragments.
///
/// Words are separated by single non-breaking-space fragments; characters
/// are Unicode grapheme clusters. Leading/trailing whitespace and runs of
/// internal whitespace collapse, matching how the headings are authored.
pub fn split_fragments(text: &str) -> Vec<TextFragment> {
    let mut fragments = Vec::new();
    let words: Vec<&str> = text.split_whitespace().collect();

    for (w, word) in words.iter().enumerate() {
        for grapheme in word.graphemes(true) {
            fragments.push(TextFragment {
                text: grapheme.to_string(),
                word: w,
                is_space: false,
            });
        }
        if w + 1 < words.len() {
            fragments.push(TextFragment {
                text: NBSP.to_string(),
                word: w,
                is_space: true,
            });
        }
    }

    fragments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_split() {
        let fragments = split_fragments("We Build");
        let joined: String = fragments.iter().map(|f| f.text.as_str()).collect();
        assert_eq!(joined, format!("We{NBSP}Build"));

        let animated = fragments.iter().filter(|f| !f.is_space).count();
        assert_eq!(animated, 7);
    }

    #[test]
    fn test_word_indices() {
        let fragments = split_fragments("ab cd");
        assert_eq!(fragments[0].word, 0);
        assert_eq!(fragments[1].word, 0);
        assert!(fragments[2].is_space);
        assert_eq!(fragments[3].word, 1);
    }

    #[test]
    fn test_grapheme_clusters_stay_whole() {
        // "é" as e + combining acute, and a family emoji (ZWJ sequence).
        let fragments = split_fragments("e\u{0301}x \u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F466}");
        let animated: Vec<&TextFragment> = fragments.iter().filter(|f| !f.is_space).collect();
        assert_eq!(animated.len(), 3);
        assert_eq!(animated[0].text, "e\u{0301}");
        assert_eq!(animated[2].text, "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F466}");
    }

    #[test]
    fn test_whitespace_collapses() {
        let fragments = split_fragments("  a   b  ");
        let joined: String = fragments.iter().map(|f| f.text.as_str()).collect();
        assert_eq!(joined, format!("a{NBSP}b"));
    }

    #[test]
    fn test_empty_input() {
        assert!(split_fragments("").is_empty());
        assert!(split_fragments("   ").is_empty());
    }
}
