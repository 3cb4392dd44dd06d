// web_app/store/handle.rs - Reactive store handle
//
// Wraps `StoreState` in a signal. `dispatch` is the only write path; readers
// get a derived, read-only snapshot and re-render when it changes.

use leptos::prelude::*;

use super::{StoreAction, StoreState};

/// Shared wishlist/cart store
#[derive(Clone, Copy, Debug)]
pub struct Store {
    inner: RwSignal<StoreState>,
}

impl Store {
    pub fn new() -> Self {
        Self::with_state(StoreState::default())
    }

    pub fn with_state(state: StoreState) -> Self {
        Self {
            inner: RwSignal::new(state),
        }
    }

    /// Apply an intent; subscribers of `state()` are notified afterwards
    pub fn dispatch(&self, action: StoreAction) {
        tracing::debug!("dispatch {}", action);
        self.inner.update(|state| state.apply(action));
    }

    /// Read-only snapshot of the store
    pub fn state(&self) -> Signal<StoreState> {
        self.inner.read_only().into()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a store and make it available to descendants via context
pub fn provide_store() -> Store {
    let store = Store::new();
    provide_context(store);
    store
}

/// Fetch the store from context, falling back to a fresh one
pub fn use_store() -> Store {
    use_context::<Store>().unwrap_or_else(|| {
        tracing::warn!("No store in context; using a detached store");
        Store::new()
    })
}
