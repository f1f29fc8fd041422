//! Identity and cancellation for commands spawned by [`StateCtx`](crate::StateCtx).
//!
//! Every dispatch of a command type opens a new generation for that type. The
//! previous generation's [`TaskHandle`] is cancelled, and any update it still
//! manages to send is discarded because its [`TaskId`] is no longer the latest.

use std::any::TypeId;

use tokio_util::sync::CancellationToken;

/// Command type plus a per-type generation counter.
///
/// Two ids with the same `type_id` belong to the same latest-only slot; the one
/// with the higher generation supersedes the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId {
    type_id: TypeId,
    generation: u64,
}

impl TaskId {
    pub fn new(type_id: TypeId, generation: u64) -> Self {
        Self {
            type_id,
            generation,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Starts at 1 for the first dispatch of a command type.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns true if `self` was dispatched after `other` for the same command type.
    pub fn supersedes(&self, other: &Self) -> bool {
        self.type_id == other.type_id && self.generation > other.generation
    }
}

/// A spawned command's id and its cancellation token.
///
/// Cancellation is cooperative: the command future has to observe the token,
/// usually through `tokio::select!` on `token.cancelled()`.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    cancel_token: CancellationToken,
}

impl TaskHandle {
    pub fn new(id: TaskId, cancel_token: CancellationToken) -> Self {
        Self { id, cancel_token }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_generation_supersedes_older() {
        let type_id = TypeId::of::<String>();
        let first = TaskId::new(type_id, 1);
        let second = TaskId::new(type_id, 2);

        assert!(second.supersedes(&first));
        assert!(!first.supersedes(&second));
        assert!(!first.supersedes(&first));
    }

    #[test]
    fn different_command_types_never_supersede() {
        let a = TaskId::new(TypeId::of::<String>(), 5);
        let b = TaskId::new(TypeId::of::<i32>(), 1);

        assert!(!a.supersedes(&b));
        assert!(!b.supersedes(&a));
    }

    #[test]
    fn cancelling_a_handle_cancels_its_cloned_token() {
        let handle = TaskHandle::new(
            TaskId::new(TypeId::of::<String>(), 1),
            CancellationToken::new(),
        );
        let token = handle.cancellation_token();
        let clone = handle.clone();

        assert!(!token.is_cancelled());
        clone.cancel();

        assert!(handle.is_cancelled());
        assert!(token.is_cancelled());
    }
}
