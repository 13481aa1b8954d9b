use crate::{MapTask, SharedTable};
use anyhow::{Context, Result};
use common::{combine_per_key, App, Combine, Table};
use crossbeam_queue::ArrayQueue;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;
use tracing::{debug, info};

pub(crate) struct Worker<A: App> {
    pub(crate) id: usize,
    pub(crate) app: Arc<A>,
    pub(crate) pending_tasks: Arc<ArrayQueue<MapTask>>,
    pub(crate) table: Arc<SharedTable<A::Value>>,
}

impl<A: App> Worker<A> {
    /// Drains the task queue. Returns how many tasks this worker completed.
    pub(crate) async fn run(self) -> Result<usize> {
        let mut done = 0;
        while let Some(task) = self.pending_tasks.pop() {
            debug!(worker = self.id, "task started: {}", task);
            let contents = tokio::fs::read_to_string(&task.path)
                .await
                .with_context(|| format!("cannot read {}", task.path.display()))?;

            let app = Arc::clone(&self.app);
            let partial = tokio::task::spawn_blocking(move || {
                combine_per_key(contents.lines().flat_map(|line| app.map(line)))
            })
            .await?;

            info!(worker = self.id, keys = partial.len(), "task done: {}", task);
            self.merge(partial);
            done += 1;
        }
        Ok(done)
    }

    fn merge(&self, partial: Table<A::Value>) {
        for (key, value) in partial {
            match self.table.entry(key) {
                Entry::Occupied(mut o) => o.get_mut().combine(value),
                Entry::Vacant(v) => {
                    v.insert(value);
                }
            }
        }
    }
}
