use once_cell::sync::Lazy;
use std::collections::HashSet;

pub const STOPWORDS: [&str; 32] = [
    "the", "and", "of", "to", "a", "in", "is", "that", "it", "on", "for", "as", "with", "was",
    "by", "an", "be", "at", "from", "this", "or", "but", "so", "she", "he", "they", "you", "i",
    "we", "his", "her", "their",
];

static STOPWORD_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| STOPWORDS.into_iter().collect());

/// Whether a lowercased token survives the stopword filter.
pub fn keep(token: &str) -> bool {
    !STOPWORD_SET.contains(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_every_stopword_is_dropped() {
        for word in STOPWORDS {
            assert!(!keep(word), "{word} should be dropped");
        }
    }

    #[test]
    fn test_stopwords_are_distinct() {
        assert_eq!(STOPWORD_SET.len(), STOPWORDS.len());
    }

    #[test]
    fn test_content_words_are_kept() {
        for word in ["rabbit", "alice", "said", "don't", "thee", "'"] {
            assert!(keep(word), "{word} should be kept");
        }
    }

    #[test]
    fn test_lookup_is_against_lowercased_tokens() {
        assert!(keep("The"));
        assert!(!keep(&"The".to_ascii_lowercase()));
    }

    proptest! {
        #[test]
        fn keep_is_set_complement(token in "[a-z']{1,6}") {
            prop_assert_eq!(keep(&token), !STOPWORDS.contains(&token.as_str()));
        }
    }
}
