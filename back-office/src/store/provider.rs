//! Store provider and handles
//!
//! [`Store`] is owned by the application root. Components receive a
//! [`StoreHandle`]; once the root drops the store every handle fails with
//! `StoreNotProvided`.

use std::sync::{Arc, Weak};

use serde_json::Value;
use tokio::sync::watch;
use tracing::debug;

use super::{Action, AppState, reduce};
use crate::utils::{AppError, AppResult};

struct StoreInner {
    state: watch::Sender<Arc<AppState>>,
}

impl StoreInner {
    fn new(initial: AppState) -> Self {
        let (state, _) = watch::channel(Arc::new(initial));
        Self { state }
    }

    /// Compute and publish the next snapshot
    ///
    /// The watch lock is held for the whole transition, so dispatches are
    /// applied one at a time and readers only ever see committed snapshots.
    fn dispatch(&self, action: Action) {
        let tag = action.tag();
        self.state.send_modify(|current| {
            let next = reduce((**current).clone(), action);
            *current = Arc::new(next);
        });
        debug!(action = tag, subscribers = self.state.receiver_count(), "[Store] Published snapshot");
    }

    fn dispatch_json(&self, value: Value) -> AppResult<()> {
        if let Some(action) = Action::decode(value)? {
            self.dispatch(action);
        }
        Ok(())
    }

    fn snapshot(&self) -> Arc<AppState> {
        Arc::clone(&*self.state.borrow())
    }
}

/// Single owner of the application state
pub struct Store {
    inner: Arc<StoreInner>,
}

impl Store {
    /// Empty store: no session, no records
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    pub fn with_state(initial: AppState) -> Self {
        Self {
            inner: Arc::new(StoreInner::new(initial)),
        }
    }

    /// Apply an action and publish the resulting snapshot
    pub fn dispatch(&self, action: Action) {
        self.inner.dispatch(action);
    }

    /// Decode and apply a raw JSON action
    ///
    /// Unknown tags are ignored; a known tag with a malformed payload is an
    /// `InvalidAction` error and leaves the state untouched.
    pub fn dispatch_json(&self, value: Value) -> AppResult<()> {
        self.inner.dispatch_json(value)
    }

    /// Latest committed state
    pub fn snapshot(&self) -> Arc<AppState> {
        self.inner.snapshot()
    }

    /// Receiver notified once per dispatch
    pub fn subscribe(&self) -> watch::Receiver<Arc<AppState>> {
        self.inner.state.subscribe()
    }

    /// Handle for components below the application root
    pub fn handle(&self) -> StoreHandle {
        StoreHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

/// Non-owning access to a [`Store`]
#[derive(Clone)]
pub struct StoreHandle {
    inner: Weak<StoreInner>,
}

impl StoreHandle {
    fn provided(&self) -> AppResult<Arc<StoreInner>> {
        self.inner.upgrade().ok_or_else(AppError::store_not_provided)
    }

    pub fn dispatch(&self, action: Action) -> AppResult<()> {
        self.provided()?.dispatch(action);
        Ok(())
    }

    pub fn dispatch_json(&self, value: Value) -> AppResult<()> {
        self.provided()?.dispatch_json(value)
    }

    pub fn snapshot(&self) -> AppResult<Arc<AppState>> {
        Ok(self.provided()?.snapshot())
    }

    pub fn subscribe(&self) -> AppResult<watch::Receiver<Arc<AppState>>> {
        Ok(self.provided()?.state.subscribe())
    }
}
