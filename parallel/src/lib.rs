use dashmap::DashMap;
use std::{fmt::Display, path::PathBuf};
use uuid::Uuid;

mod coordinator;
mod worker;

pub use coordinator::Coordinator;

pub const DEFAULT_WORKERS: usize = 4;

/// Table the workers fold their partial results into.
pub type SharedTable<V> = DashMap<String, V>;

/// One input file waiting to be mapped.
#[derive(Debug, Clone)]
pub struct MapTask {
    pub id: String,
    pub index: usize,
    pub path: PathBuf,
}

impl MapTask {
    pub fn new(index: usize, path: PathBuf) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            index,
            path,
        }
    }
}

impl Display for MapTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MapTask:{{ id: {}, index: {}, path: {} }}",
            self.id,
            self.index,
            self.path.display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_ids_are_unique() {
        let a = MapTask::new(0, PathBuf::from("a.txt"));
        let b = MapTask::new(0, PathBuf::from("a.txt"));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_task_display() {
        let task = MapTask::new(3, PathBuf::from("data/alice.txt"));
        let shown = task.to_string();
        assert!(shown.contains("index: 3"));
        assert!(shown.contains("data/alice.txt"));
        assert!(shown.contains(&task.id));
    }
}
