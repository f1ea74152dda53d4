//! Background task tracking
//!
//! Each asynchronous operation has one slot. Spawning into an occupied slot
//! aborts the previous task, so at most one task per [`TaskKey`] runs.

use std::collections::HashMap;
use std::future::Future;

use tokio::task::JoinHandle;
use tracing::trace;

/// Owner of a background task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKey {
    /// Simulated pairing-code delay on the connect overlay
    PairingTimer,
    /// Composer image read
    ImageRead,
    /// AI dialog generation call
    Generation,
}

#[derive(Debug, Default)]
pub struct TaskRegistry {
    tasks: HashMap<TaskKey, JoinHandle<()>>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn `future` under `key`, aborting whatever ran there before
    pub fn spawn<F>(&mut self, key: TaskKey, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Some(previous) = self.tasks.insert(key, tokio::spawn(future)) {
            if !previous.is_finished() {
                trace!("Replacing running {:?} task", key);
            }
            previous.abort();
        }
    }

    /// Abort the task under `key`. Returns `true` if it was still running.
    pub fn cancel(&mut self, key: TaskKey) -> bool {
        match self.tasks.remove(&key) {
            Some(handle) => {
                let running = !handle.is_finished();
                handle.abort();
                if running {
                    trace!("Cancelled {:?} task", key);
                }
                running
            }
            None => false,
        }
    }

    pub fn is_running(&self, key: TaskKey) -> bool {
        self.tasks.get(&key).is_some_and(|h| !h.is_finished())
    }

    /// Abort every task; used on shutdown
    pub fn abort_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

impl Drop for TaskRegistry {
    fn drop(&mut self) {
        self.abort_all();
    }
}
