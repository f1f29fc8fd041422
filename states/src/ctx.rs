//! The state context owned by the UI thread.
//!
//! - states are stored by type and read or mutated directly between frames
//! - commands are spawned with a snapshot of every state
//! - `sync` applies what finished commands sent back, skipping superseded ones

use std::any::{Any, TypeId, type_name};
use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};

use log::{debug, info, warn};

use crate::state::clone_state;
use crate::runtime::StateRuntime;
use crate::{Command, CommandSnapshot, Error, State, TaskId};

type SnapshotFn = fn(&(dyn Any + Send)) -> Option<Box<dyn Any + Send>>;

struct Slot {
    name: &'static str,
    value: Box<dyn Any + Send>,
    snapshot: SnapshotFn,
}

impl Debug for Slot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

/// Typed state container shared by the UI and the business layer.
///
/// The UI thread owns the context: it reads and mutates states directly, dispatches
/// commands, and calls [`StateCtx::sync`] once per frame to apply whatever the
/// commands produced in the meantime.
#[derive(Debug, Default)]
pub struct StateCtx {
    states: BTreeMap<TypeId, Slot>,
    runtime: StateRuntime,
}

impl StateCtx {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `state`, replacing any previous value of the same type.
    pub fn add_state<T: State>(&mut self, state: T) {
        self.states.insert(
            TypeId::of::<T>(),
            Slot {
                name: type_name::<T>(),
                value: Box::new(state),
                snapshot: clone_state::<T>,
            },
        );
    }

    pub fn state<T: State>(&self) -> Option<&T> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|slot| slot.value.downcast_ref::<T>())
    }

    pub fn state_mut<T: State>(&mut self) -> Option<&mut T> {
        self.states
            .get_mut(&TypeId::of::<T>())
            .and_then(|slot| slot.value.downcast_mut::<T>())
    }

    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) -> Result<(), Error> {
        let state = self
            .state_mut::<T>()
            .ok_or_else(|| Error::state_not_found::<T>("StateCtx::update"))?;
        f(state);
        Ok(())
    }

    /// Spawns `command` on the current tokio runtime with a snapshot of every state.
    ///
    /// A still running command of the same type is cancelled first.
    pub fn dispatch<C: Command>(&mut self, command: C) -> Result<TaskId, Error> {
        let handle = tokio::runtime::Handle::try_current().map_err(Error::no_runtime::<C>)?;

        let snapshot = self.snapshot();
        let task = self.runtime.begin(TypeId::of::<C>());
        let updater = self.runtime.updater(&task);
        let future = command.run(snapshot, updater, task.cancellation_token());

        let id = task.id();
        let join = handle.spawn(future);
        self.runtime.track(task, join);

        info!(
            "Dispatched {} (generation {})",
            type_name::<C>(),
            id.generation()
        );
        Ok(id)
    }

    pub fn is_running<C: Command>(&self) -> bool {
        self.runtime.is_running(TypeId::of::<C>())
    }

    /// Applies queued command updates. Updates from superseded tasks are dropped.
    ///
    /// Returns the number of updates applied.
    pub fn sync(&mut self) -> usize {
        let mut applied = 0;
        for update in self.runtime.drain() {
            if !self.runtime.is_latest(update.task) {
                debug!(
                    "Dropping stale update of {} from {:?}",
                    update.target_name, update.task
                );
                continue;
            }

            let Some(slot) = self.states.get_mut(&update.target) else {
                warn!(
                    "Update for unregistered state {} from {:?}",
                    update.target_name, update.task
                );
                continue;
            };

            (update.apply)(&mut *slot.value);
            applied += 1;
        }
        applied
    }

    /// Waits for all running commands, then syncs. Mostly useful in tests.
    pub async fn await_tasks(&mut self) -> usize {
        self.runtime.join_all().await;
        self.sync()
    }

    fn snapshot(&self) -> CommandSnapshot {
        let mut snapshot = CommandSnapshot::new();
        for (id, slot) in &self.states {
            if let Some(value) = (slot.snapshot)(&*slot.value) {
                snapshot.insert(*id, slot.name, value);
            }
        }
        snapshot
    }
}
