use std::any::Any;

/// A value stored in [`StateCtx`](crate::StateCtx).
///
/// States are `Clone` so a dispatched command can work on a snapshot while the
/// UI thread keeps mutating the original.
pub trait State: Any + Clone + Send {}

/// Clones a type-erased state back into a box, used when taking command snapshots.
pub(crate) fn clone_state<T: State>(value: &(dyn Any + Send)) -> Option<Box<dyn Any + Send>> {
    value
        .downcast_ref::<T>()
        .map(|state| Box::new(state.clone()) as Box<dyn Any + Send>)
}
