//! Errors raised by the state context.

use std::any::{TypeId, type_name};

use thiserror::Error;
use tokio::runtime::TryCurrentError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("State not found: {name} ({id:?}), context: {context}")]
    StateNotFound {
        id: TypeId,
        name: &'static str,
        context: String,
    },
    #[error("No tokio runtime available to run {command}")]
    NoRuntime {
        command: &'static str,
        #[source]
        source: TryCurrentError,
    },
}

impl Error {
    pub fn state_not_found<T: 'static>(context: impl Into<String>) -> Self {
        Self::StateNotFound {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
            context: context.into(),
        }
    }

    pub fn no_runtime<C: 'static>(source: TryCurrentError) -> Self {
        Self::NoRuntime {
            command: type_name::<C>(),
            source,
        }
    }
}
