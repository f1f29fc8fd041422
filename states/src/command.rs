//! Commands: async work with side effects, run only on explicit dispatch.

use std::future::Future;
use std::pin::Pin;

use tokio_util::sync::CancellationToken;

use crate::{CommandSnapshot, LatestOnlyUpdater};

pub type CommandFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Side-effecting work (network IO) that is only ever run when explicitly
/// dispatched through [`StateCtx::dispatch`](crate::StateCtx::dispatch).
///
/// At most one instance per command type is live: dispatching again cancels the
/// previous run.
pub trait Command: Send + 'static {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: LatestOnlyUpdater,
        cancel: CancellationToken,
    ) -> CommandFuture;
}
