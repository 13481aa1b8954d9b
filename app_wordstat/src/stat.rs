use common::Combine;

/// Occurrence count and character length of one word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordStat {
    pub count: u64,
    pub length: usize,
}

impl WordStat {
    /// A single occurrence of `word`.
    pub fn of(word: &str) -> Self {
        Self {
            count: 1,
            length: word.chars().count(),
        }
    }
}

impl Combine for WordStat {
    fn combine(&mut self, other: Self) {
        // both sides come from the same key, so the spelling and its length agree
        assert_eq!(
            self.length, other.length,
            "word length mismatch while combining {:?} with {:?}",
            self, other
        );
        self.count += other.count;
    }
}
