//! Word statistics: the most frequent non-stopword words of a text together
//! with their lengths.
//!
//! ```
//! let report = app_wordstat::analyze(["The Rabbit was late, said the Rabbit."]);
//! assert_eq!(report[0], "rabbit : count=2 : length=6");
//! ```

use common::{combine_per_key, App, KeyValue, Table};
use itertools::Itertools;

pub mod rank;
pub mod stat;
pub mod stopwords;
pub mod tokenizer;

pub use rank::{top_k, RankedWord, TOP_K};
pub use stat::WordStat;

#[derive(Debug, Default, Clone, Copy)]
pub struct WordStatApp;

impl App for WordStatApp {
    type Value = WordStat;

    fn name(&self) -> &'static str {
        "wordstat"
    }

    fn map(&self, line: &str) -> Vec<KeyValue<WordStat>> {
        tokenizer::tokenize(line)
            .filter(|w| stopwords::keep(w))
            .map(|w| {
                let stat = WordStat::of(&w);
                KeyValue::new(w, stat)
            })
            .collect_vec()
    }

    fn finish(&self, table: Table<WordStat>) -> Vec<String> {
        top_k(table, TOP_K)
            .into_iter()
            .map(|ranked| ranked.to_string())
            .collect_vec()
    }
}

/// Runs the whole pipeline in-process over raw input lines.
pub fn analyze<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let app = WordStatApp;
    let table = combine_per_key(lines.into_iter().flat_map(|line| app.map(line.as_ref())));
    app.finish(table)
}
