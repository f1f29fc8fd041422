//! Read-only copy of the context handed to a command when it is dispatched.

use std::any::{Any, TypeId};
use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};

use crate::{Error, State};

/// Owned copy of every registered state, taken at dispatch time.
///
/// Commands read their inputs from the snapshot instead of the live context, so a
/// long running request never observes a half-applied UI change.
#[derive(Default)]
pub struct CommandSnapshot {
    states: BTreeMap<TypeId, (&'static str, Box<dyn Any + Send>)>,
}

impl CommandSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, id: TypeId, name: &'static str, value: Box<dyn Any + Send>) {
        self.states.insert(id, (name, value));
    }

    pub fn state<T: State>(&self) -> Result<&T, Error> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|(_, boxed)| boxed.downcast_ref::<T>())
            .ok_or_else(|| Error::state_not_found::<T>("command snapshot"))
    }

    /// Same as [`CommandSnapshot::state`] but hands back an owned copy, handy for
    /// moving inputs into the command's future.
    pub fn cloned<T: State>(&self) -> Result<T, Error> {
        self.state::<T>().cloned()
    }
}

impl Debug for CommandSnapshot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.states.values().map(|(name, _)| name))
            .finish()
    }
}
