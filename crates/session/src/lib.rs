//! # session
//!
//! Mutable per-user conversation state. [`SessionStore`] keeps the rolling
//! history window and last mood/domain in memory, sharded across users with a
//! per-user lock; [`PreferenceStore`] persists the sticky language preference
//! to a JSON file so it survives restarts and `/reset`.

mod prefs;
mod store;

pub use prefs::PreferenceStore;
pub use store::{Session, SessionStore, DEFAULT_HISTORY_CAP};
