//! Channel from a running command back to the UI thread.
//!
//! Updates are closures over a single state type. They are queued on a flume
//! channel and applied by [`StateCtx::sync`](crate::StateCtx::sync).

use std::any::{Any, TypeId, type_name};
use std::fmt::{Debug, Formatter};

use flume::Sender;
use log::{debug, warn};
use tokio_util::sync::CancellationToken;

use crate::{State, TaskId};

pub(crate) type Apply = Box<dyn FnOnce(&mut (dyn Any + Send)) + Send>;

/// A state mutation produced by a command, applied on the UI thread by
/// [`StateCtx::sync`](crate::StateCtx::sync).
pub(crate) struct Update {
    pub(crate) task: TaskId,
    pub(crate) target: TypeId,
    pub(crate) target_name: &'static str,
    pub(crate) apply: Apply,
}

impl Debug for Update {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Update")
            .field("task", &self.task)
            .field("target", &self.target_name)
            .finish_non_exhaustive()
    }
}

/// Sends state updates from a running command back to the context.
///
/// Once the command is superseded by a newer dispatch, its updater stops sending,
/// and anything already queued is dropped at sync time.
#[derive(Clone)]
pub struct LatestOnlyUpdater {
    task: TaskId,
    cancel: CancellationToken,
    send: Sender<Update>,
}

impl LatestOnlyUpdater {
    pub(crate) fn new(task: TaskId, cancel: CancellationToken, send: Sender<Update>) -> Self {
        Self { task, cancel, send }
    }

    /// Replaces the whole state.
    pub fn set<T: State>(&self, value: T) -> bool {
        self.update::<T>(move |state| *state = value)
    }

    /// Queues `f` to run against the live state on the next sync.
    ///
    /// Returns false when nothing was queued, either because this task was
    /// cancelled or because the context is gone.
    pub fn update<T: State>(&self, f: impl FnOnce(&mut T) + Send + 'static) -> bool {
        if self.cancel.is_cancelled() {
            debug!(
                "Skipping update of {} from cancelled task {:?}",
                type_name::<T>(),
                self.task
            );
            return false;
        }

        let apply: Apply = Box::new(move |any| {
            if let Some(state) = any.downcast_mut::<T>() {
                f(state);
            }
        });

        let update = Update {
            task: self.task,
            target: TypeId::of::<T>(),
            target_name: type_name::<T>(),
            apply,
        };

        if self.send.send(update).is_err() {
            warn!("State context dropped before task {:?} finished", self.task);
            return false;
        }
        true
    }
}

impl Debug for LatestOnlyUpdater {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LatestOnlyUpdater")
            .field("task", &self.task)
            .field("cancelled", &self.cancel.is_cancelled())
            .finish()
    }
}
