//! Registry of the tokio tasks forwarding upload events
//!
//! Each upload gets one tracked task. Finished tasks remove themselves, the
//! rest are aborted when the application shuts down.

use crate::model::app_action::UploadId;
use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::AbortHandle;

/// Unique identifier for a tracked task
pub type TaskId = u64;

type Tasks = Arc<Mutex<HashMap<TaskId, AbortHandle>>>;

pub struct TaskRegistry {
    next_id: AtomicU64,
    tasks: Tasks,
}

impl TaskRegistry {
    pub fn new() -> Self {
        TaskRegistry {
            next_id: AtomicU64::new(1),
            tasks: Tasks::default(),
        }
    }

    /// Spawns `future` for `upload` and keeps its abort handle until it ends
    pub async fn spawn_tracked<F>(&self, upload: UploadId, title: &str, future: F) -> TaskId
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let tasks = self.tasks.clone();

        // locked across the spawn so the task cannot remove itself before it is inserted
        let mut running = self.tasks.lock().await;
        let handle = tokio::spawn(async move {
            future.await;
            tasks.lock().await.remove(&id);
            tracing::debug!("Task {} of upload {} finished", id, upload);
        });
        running.insert(id, handle.abort_handle());
        tracing::info!("Started task {} for upload {} ({})", id, upload, title);
        id
    }

    /// Aborts every task still running, returns how many there were
    pub async fn cancel_all(&self) -> usize {
        let mut running = self.tasks.lock().await;
        let count = running.len();
        for (_, handle) in running.drain() {
            handle.abort();
        }
        count
    }
}

impl Default for TaskRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicBool;
    use tokio::time::{sleep, Duration};

    #[tokio::test]
    async fn test_finished_task_removes_itself() {
        let registry = TaskRegistry::new();
        registry.spawn_tracked(0, "a.png", async {}).await;

        sleep(Duration::from_millis(100)).await;
        assert_eq!(registry.cancel_all().await, 0);
    }

    #[tokio::test]
    async fn test_cancel_all_stops_running_tasks() {
        let registry = TaskRegistry::new();
        let finished = Arc::new(AtomicBool::new(false));

        for upload in 0..3 {
            let finished = finished.clone();
            registry
                .spawn_tracked(upload, "slow", async move {
                    sleep(Duration::from_millis(200)).await;
                    finished.store(true, Ordering::SeqCst);
                })
                .await;
        }

        assert_eq!(registry.cancel_all().await, 3);
        assert_eq!(registry.cancel_all().await, 0);
        sleep(Duration::from_millis(300)).await;
        assert!(!finished.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_task_ids_increase() {
        let registry = TaskRegistry::new();

        let first = registry.spawn_tracked(0, "a", async {}).await;
        let second = registry.spawn_tracked(1, "b", async {}).await;

        assert!(first < second);
    }
}
