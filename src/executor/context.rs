//! Session context
//!
//! The explicit context object threaded through the REPL loop and the
//! command router. It owns the record store handle and the shared display
//! state; it is created when a front end starts and dropped when the
//! session closes. There is no process-global session state.

use crate::repl::SharedState;
use crate::store::RecordStore;

/// Context shared by all command executions in one session
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    /// Record store access handle
    store: RecordStore,

    /// Display state shared with the REPL
    shared_state: SharedState,
}

impl ExecutionContext {
    /// Create a new execution context
    ///
    /// # Arguments
    /// * `store` - Record store handle
    /// * `shared_state` - Shared display state
    ///
    /// # Returns
    /// * `Self` - New context
    pub fn new(store: RecordStore, shared_state: SharedState) -> Self {
        Self {
            store,
            shared_state,
        }
    }

    /// Get the record store
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Get the shared display state
    pub fn shared_state(&self) -> &SharedState {
        &self.shared_state
    }
}
