fn is_word_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '\''
}

/// Maximal runs of ASCII letters and apostrophes, as they appear in `line`.
pub fn words(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| !is_word_char(c))
        .filter(|w| !w.is_empty())
}

/// Lowercased [`words`].
pub fn tokenize(line: &str) -> impl Iterator<Item = String> + '_ {
    words(line).map(str::to_ascii_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tokens(line: &str) -> Vec<String> {
        tokenize(line).collect()
    }

    #[test]
    fn test_sentence() {
        assert_eq!(
            tokens("The Rabbit was late, said the Rabbit."),
            ["the", "rabbit", "was", "late", "said", "the", "rabbit"]
        );
    }

    #[test]
    fn test_apostrophes_are_kept() {
        assert_eq!(tokens("I don't know, 'tis ALICE's"), ["i", "don't", "know", "'tis", "alice's"]);
    }

    #[test]
    fn test_digits_and_punctuation_separate() {
        assert_eq!(tokens("chapter1--the_end;x2y"), ["chapter", "the", "end", "x", "y"]);
    }

    #[test]
    fn test_non_ascii_letters_separate() {
        assert_eq!(tokens("café naïve"), ["caf", "na", "ve"]);
    }

    #[test]
    fn test_empty_and_blank_lines() {
        assert!(tokens("").is_empty());
        assert!(tokens(" \t 123 ... ").is_empty());
    }

    proptest! {
        #[test]
        fn tokens_are_lowercase_word_chars(line in any::<String>()) {
            for token in tokenize(&line) {
                prop_assert!(!token.is_empty());
                prop_assert!(token.chars().all(|c| c.is_ascii_lowercase() || c == '\''));
            }
        }

        #[test]
        fn separators_are_exactly_the_dropped_chars(line in "[a-zA-Z' ,.0-9é!-]{0,64}") {
            let kept: String = words(&line).collect();
            let word_chars: String = line.chars().filter(|&c| is_word_char(c)).collect();
            prop_assert_eq!(kept, word_chars);

            let dropped: String = line.chars().filter(|&c| !is_word_char(c)).collect();
            let rebuilt: usize = words(&line).map(str::len).sum::<usize>() + dropped.len();
            prop_assert_eq!(rebuilt, line.len());
        }
    }
}
