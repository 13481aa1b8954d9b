use crate::{worker::Worker, MapTask, SharedTable};
use anyhow::{anyhow, Result};
use common::App;
use crossbeam_queue::ArrayQueue;
use futures::future::join_all;
use itertools::Itertools;
use std::{path::PathBuf, sync::Arc};
use tracing::{info, warn};

/// Hands one map task per input file to a pool of workers, then finishes the
/// combined table once every worker has exited.
pub struct Coordinator<A: App> {
    app: Arc<A>,
    n_workers: usize,
    pending_tasks: Arc<ArrayQueue<MapTask>>,
    table: Arc<SharedTable<A::Value>>,
}

impl<A: App> Coordinator<A> {
    pub fn new(app: A, input_files: Vec<PathBuf>, n_workers: usize) -> Self {
        let this = Self {
            app: Arc::new(app),
            n_workers: n_workers.max(1),
            pending_tasks: Arc::new(ArrayQueue::new(input_files.len().max(1))),
            table: Arc::new(SharedTable::new()),
        };
        this.init_map(input_files);
        this
    }

    fn init_map(&self, input_files: Vec<PathBuf>) {
        for (index, path) in input_files.into_iter().enumerate() {
            let pushed = self.pending_tasks.push(MapTask::new(index, path));
            assert!(pushed.is_ok(), "task queue is sized to the input files");
        }
    }

    #[cfg(test)]
    fn pending_tasks(&self) -> usize {
        self.pending_tasks.len()
    }

    pub async fn run(self) -> Result<Vec<String>> {
        info!(
            app = self.app.name(),
            tasks = self.pending_tasks.len(),
            workers = self.n_workers,
            "map stage started"
        );

        let handles = (0..self.n_workers)
            .map(|id| {
                let worker = Worker {
                    id,
                    app: Arc::clone(&self.app),
                    pending_tasks: Arc::clone(&self.pending_tasks),
                    table: Arc::clone(&self.table),
                };
                tokio::spawn(worker.run())
            })
            .collect_vec();

        let mut failure = None;
        let mut done = 0;
        for result in join_all(handles).await {
            match result.map_err(anyhow::Error::from).and_then(|r| r) {
                Ok(n) => done += n,
                Err(e) => {
                    warn!("worker failed: {e:#}");
                    failure.get_or_insert(e);
                }
            }
        }
        if let Some(e) = failure {
            return Err(e);
        }
        assert!(self.pending_tasks.is_empty());
        info!(tasks = done, keys = self.table.len(), "map stage done");

        let Self { app, table, .. } = self;
        let table = Arc::try_unwrap(table)
            .map_err(|_| anyhow!("shared table still referenced after workers exited"))?;
        Ok(app.finish(table.into_iter().collect()))
    }
}
