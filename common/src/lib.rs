use std::{collections::HashMap, fmt::Debug};

pub mod files;
mod logger;

pub use logger::init_logger;

/// Intermediate record emitted by [`App::map`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct KeyValue<V> {
    pub key: String,
    pub value: V,
}

impl<V> KeyValue<V> {
    pub fn new(key: impl Into<String>, value: V) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Merge of two values that share a key.
///
/// Implementations must be associative and commutative: runners combine
/// values pairwise in whatever grouping and order the tasks happen to
/// finish in.
pub trait Combine: Sized {
    fn combine(&mut self, other: Self);

    fn combined(mut self, other: Self) -> Self {
        self.combine(other);
        self
    }
}

/// Per-key aggregation result.
pub type Table<V> = HashMap<String, V>;

/// A map/combine application driven by the runners.
pub trait App: Send + Sync + 'static {
    type Value: Combine + Clone + Debug + Send + Sync + 'static;

    fn name(&self) -> &'static str;

    /// Emits the records for a single input line.
    fn map(&self, line: &str) -> Vec<KeyValue<Self::Value>>;

    /// Turns the finalized table into output lines, in output order.
    fn finish(&self, table: Table<Self::Value>) -> Vec<String>;
}

pub fn combine_per_key<V, I>(kvs: I) -> Table<V>
where
    V: Combine,
    I: IntoIterator<Item = KeyValue<V>>,
{
    let mut table = Table::new();
    for KeyValue { key, value } in kvs {
        insert_or_combine(&mut table, key, value);
    }
    table
}

/// Folds `other` into `table`.
pub fn merge_tables<V: Combine>(mut table: Table<V>, other: Table<V>) -> Table<V> {
    for (key, value) in other {
        insert_or_combine(&mut table, key, value);
    }
    table
}

fn insert_or_combine<V: Combine>(table: &mut Table<V>, key: String, value: V) {
    use std::collections::hash_map::Entry;

    match table.entry(key) {
        Entry::Occupied(mut o) => o.get_mut().combine(value),
        Entry::Vacant(v) => {
            v.insert(value);
        }
    }
}
