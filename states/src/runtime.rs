//! Bookkeeping behind [`StateCtx`](crate::StateCtx) for spawned commands.
//!
//! Each command type has a generation counter. Starting a new generation cancels
//! the task of the previous one, and updates are only kept while their generation
//! is still the latest.

use std::any::TypeId;
use std::collections::BTreeMap;

use flume::{Receiver, Sender};
use log::{debug, warn};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::updater::Update;
use crate::{LatestOnlyUpdater, TaskHandle, TaskId};

#[derive(Debug)]
struct Running {
    handle: TaskHandle,
    join: JoinHandle<()>,
}

/// Bookkeeping for spawned commands: the update channel, the latest generation
/// per command type, and the join handles of tasks still running.
#[derive(Debug)]
pub struct StateRuntime {
    send: Sender<Update>,
    recv: Receiver<Update>,

    generations: BTreeMap<TypeId, u64>,
    running: BTreeMap<TypeId, Running>,
}

impl Default for StateRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl StateRuntime {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            send,
            recv,
            generations: BTreeMap::new(),
            running: BTreeMap::new(),
        }
    }

    /// Opens the next generation for `type_id`, cancelling whatever ran before.
    pub(crate) fn begin(&mut self, type_id: TypeId) -> TaskHandle {
        if let Some(previous) = self.running.remove(&type_id) {
            debug!("Cancelling superseded task {:?}", previous.handle.id());
            previous.handle.cancel();
        }

        let generation = self.generations.entry(type_id).or_default();
        *generation += 1;

        TaskHandle::new(TaskId::new(type_id, *generation), CancellationToken::new())
    }

    pub(crate) fn updater(&self, handle: &TaskHandle) -> LatestOnlyUpdater {
        LatestOnlyUpdater::new(handle.id(), handle.cancellation_token(), self.send.clone())
    }

    pub(crate) fn track(&mut self, handle: TaskHandle, join: JoinHandle<()>) {
        self.running
            .insert(handle.id().type_id(), Running { handle, join });
    }

    pub(crate) fn drain(&self) -> Vec<Update> {
        self.recv.try_iter().collect()
    }

    /// True if `id` is the most recent dispatch of its command type.
    pub fn is_latest(&self, id: TaskId) -> bool {
        self.generations.get(&id.type_id()) == Some(&id.generation())
    }

    pub fn is_running(&self, type_id: TypeId) -> bool {
        self.running
            .get(&type_id)
            .is_some_and(|running| !running.join.is_finished())
    }

    /// Waits for every tracked task to finish.
    pub async fn join_all(&mut self) {
        let running = std::mem::take(&mut self.running);
        for (_, task) in running {
            let id = task.handle.id();
            if let Err(err) = task.join.await
                && !err.is_cancelled()
            {
                warn!("Task {id:?} panicked: {err}");
            }
        }
    }
}

impl Drop for StateRuntime {
    fn drop(&mut self) {
        for running in self.running.values() {
            running.handle.cancel();
        }
    }
}
