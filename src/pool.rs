//! Bounded worker pool
//!
//! Runs a batch of independent [`Task`]s on a fixed number of workers. Tasks
//! are queued on a shared channel up front; each idle worker takes the next
//! one. [`WorkerPool::run`] returns only after every task has finished, with
//! outputs in submission order regardless of completion order.

use crate::config::PoolConfig;
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};
use tracing::debug;

/// A unit of work for the [`WorkerPool`]
///
/// Failures belong in `Output`; the pool never inspects it.
#[async_trait]
pub trait Task: Send + 'static {
    /// Result handed back to the caller
    type Output: Send + 'static;

    /// Execute the task
    async fn run(self) -> Self::Output;
}

/// Number of workers for `jobs` tasks: `min(max_workers, ceil(jobs / jobs_per_worker))`
///
/// Zero jobs need zero workers.
pub fn worker_count(jobs: usize, config: &PoolConfig) -> usize {
    if jobs == 0 {
        return 0;
    }
    let per_worker = config.jobs_per_worker.max(1);
    jobs.div_ceil(per_worker).min(config.max_workers.max(1))
}

/// Fixed-size pool of tokio workers sharing one task queue
#[derive(Debug, Clone, Copy)]
pub struct WorkerPool {
    workers: usize,
}

impl WorkerPool {
    /// Create a pool with `workers` workers (at least one)
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    /// Number of workers this pool runs
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Run every task exactly once and wait for all of them
    ///
    /// No more than `workers` tasks are active at any time. The returned vector
    /// holds one output per task, at the task's submission index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Internal`] if a worker panicked, since its tasks then
    /// have no recorded result.
    pub async fn run<T: Task>(&self, tasks: Vec<T>) -> Result<Vec<T::Output>> {
        let total = tasks.len();
        if total == 0 {
            return Ok(Vec::new());
        }

        let (tx, rx) = mpsc::channel(total);
        for (index, task) in tasks.into_iter().enumerate() {
            tx.try_send((index, task))
                .map_err(|_| Error::Internal(format!("task queue rejected task {index}")))?;
        }
        drop(tx);

        let queue = Arc::new(Mutex::new(rx));
        let workers = self.workers.min(total);
        debug!(workers, tasks = total, "starting worker pool");

        let handles: Vec<_> = (0..workers)
            .map(|worker_id| {
                let queue = Arc::clone(&queue);
                tokio::spawn(async move {
                    let mut finished = Vec::new();
                    loop {
                        let next = queue.lock().await.recv().await;
                        let Some((index, task)) = next else {
                            break;
                        };
                        finished.push((index, task.run().await));
                    }
                    debug!(worker_id, completed = finished.len(), "worker drained queue");
                    finished
                })
            })
            .collect();

        let mut slots: Vec<Option<T::Output>> = std::iter::repeat_with(|| None).take(total).collect();
        for joined in futures::future::join_all(handles).await {
            let finished = joined.map_err(|e| Error::Internal(format!("worker failed: {e}")))?;
            for (index, output) in finished {
                slots[index] = Some(output);
            }
        }

        slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                slot.ok_or_else(|| Error::Internal(format!("task {index} produced no result")))
            })
            .collect()
    }
}
