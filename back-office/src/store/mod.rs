//! State store
//!
//! One [`AppState`] aggregate, changed only through [`Action`]s applied by
//! [`reduce`]. [`Store`] owns the current snapshot and publishes every new
//! one to its subscribers.

mod collection;

pub mod action;
pub mod provider;
pub mod reducer;
pub mod state;

pub use action::Action;
pub use provider::{Store, StoreHandle};
pub use reducer::{reduce, transition};
pub use state::{AppState, InitialData};
