use crate::stat::WordStat;
use common::Table;
use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
    fmt::Display,
};

/// Number of words reported per run.
pub const TOP_K: usize = 20;

/// One line of the report.
///
/// Ordered by rank: a higher count ranks higher, and equal counts rank in
/// ascending alphabetical order so that reports are reproducible.
#[derive(Debug, Clone)]
pub struct RankedWord {
    pub word: String,
    pub stat: WordStat,
}

impl Display for RankedWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} : count={} : length={}",
            self.word, self.stat.count, self.stat.length
        )
    }
}

impl Ord for RankedWord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.stat
            .count
            .cmp(&other.stat.count)
            .then_with(|| other.word.cmp(&self.word))
    }
}

impl PartialOrd for RankedWord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for RankedWord {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RankedWord {}

/// The `k` highest ranked words of `table`, best first.
pub fn top_k(table: Table<WordStat>, k: usize) -> Vec<RankedWord> {
    if k == 0 {
        return Vec::new();
    }
    // min-heap holding the best k seen so far
    let mut heap = BinaryHeap::with_capacity(k + 1);
    for (word, stat) in table {
        heap.push(Reverse(RankedWord { word, stat }));
        if heap.len() > k {
            heap.pop();
        }
    }
    heap.into_sorted_vec()
        .into_iter()
        .map(|Reverse(ranked)| ranked)
        .collect()
}
