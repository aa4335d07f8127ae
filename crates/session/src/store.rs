//! In-memory session map: one lazily-created [`Session`] per user.
//!
//! Concurrency: the map itself is a `DashMap` (sharded, no global lock across
//! users); each session sits behind its own `tokio::sync::Mutex`, so
//! append-then-trim is atomic per user and two concurrent messages from the
//! same user serialise instead of losing updates.

use dashmap::DashMap;
use ostaad_core::{ChatTurn, DomainTag, LanguageCode, MoodTag};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// History cap used by [`SessionStore::new`].
pub const DEFAULT_HISTORY_CAP: usize = 40;

/// Mutable state for one user. Created lazily on first message; only an
/// explicit reset clears it (and even that keeps the language preference).
#[derive(Debug, Default)]
pub struct Session {
    history: VecDeque<ChatTurn>,
    pub language: Option<LanguageCode>,
    pub last_mood: MoodTag,
    pub last_domain: DomainTag,
}

impl Session {
    pub fn history(&self) -> impl Iterator<Item = &ChatTurn> {
        self.history.iter()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    fn push_capped(&mut self, turn: ChatTurn, cap: usize) {
        self.history.push_back(turn);
        while self.history.len() > cap {
            self.history.pop_front();
        }
    }
}

/// Concurrent map of user id → session.
#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: Arc<DashMap<i64, Arc<Mutex<Session>>>>,
    cap: usize,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::with_cap(DEFAULT_HISTORY_CAP)
    }

    pub fn with_cap(cap: usize) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            cap,
        }
    }

    /// Returns the session for `user_id`, creating it on first use. The
    /// returned handle is the per-user critical section: hold the lock across
    /// any read-modify-write.
    pub fn session(&self, user_id: i64) -> Arc<Mutex<Session>> {
        self.sessions
            .entry(user_id)
            .or_insert_with(|| Arc::new(Mutex::new(Session::default())))
            .clone()
    }

    /// Appends a turn and trims the oldest entries past the cap (FIFO, never
    /// reordered).
    pub async fn append(&self, user_id: i64, turn: ChatTurn) {
        let session = self.session(user_id);
        let mut session = session.lock().await;
        session.push_capped(turn, self.cap);
        debug!(user_id, history_len = session.history_len(), "history appended");
    }

    pub async fn history(&self, user_id: i64) -> Vec<ChatTurn> {
        let session = self.session(user_id);
        let session = session.lock().await;
        session.history().cloned().collect()
    }

    /// Clears history and mood/domain state. The language preference is
    /// sticky: reset does not touch it.
    pub async fn clear(&self, user_id: i64) {
        let session = self.session(user_id);
        let mut session = session.lock().await;
        session.history.clear();
        session.last_mood = MoodTag::default();
        session.last_domain = DomainTag::default();
    }

    pub async fn set_language(&self, user_id: i64, code: LanguageCode) {
        let session = self.session(user_id);
        session.lock().await.language = Some(code);
    }

    pub async fn language(&self, user_id: i64) -> Option<LanguageCode> {
        let session = self.session(user_id);
        let lang = session.lock().await.language;
        lang
    }

    pub async fn record_classification(&self, user_id: i64, mood: MoodTag, domain: DomainTag) {
        let session = self.session(user_id);
        let mut session = session.lock().await;
        session.last_mood = mood;
        session.last_domain = domain;
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ostaad_core::ChatRole;

    #[tokio::test]
    async fn test_history_cap_is_fifo() {
        let store = SessionStore::with_cap(40);
        for i in 0..45 {
            store.append(7, ChatTurn::user(format!("msg-{i}"))).await;
        }
        let history = store.history(7).await;
        assert_eq!(history.len(), 40);
        // The first 5 entries were dropped; the tail is intact and ordered.
        assert_eq!(history[0].content, "msg-5");
        assert_eq!(history[39].content, "msg-44");
        for (i, turn) in history.iter().enumerate() {
            assert_eq!(turn.content, format!("msg-{}", i + 5));
        }
    }

    #[tokio::test]
    async fn test_clear_keeps_language() {
        let store = SessionStore::new();
        store.set_language(1, LanguageCode::Hi).await;
        store.append(1, ChatTurn::user("hello")).await;
        store
            .record_classification(1, MoodTag::Sad, DomainTag::Technology)
            .await;

        store.clear(1).await;

        assert!(store.history(1).await.is_empty());
        assert_eq!(store.language(1).await, Some(LanguageCode::Hi));
        let session = store.session(1);
        let session = session.lock().await;
        assert_eq!(session.last_mood, MoodTag::Neutral);
        assert_eq!(session.last_domain, DomainTag::General);
    }

    #[tokio::test]
    async fn test_sessions_are_independent() {
        let store = SessionStore::new();
        store.append(1, ChatTurn::user("a")).await;
        store.append(2, ChatTurn::assistant("b")).await;
        assert_eq!(store.history(1).await.len(), 1);
        assert_eq!(store.history(2).await.len(), 1);
        assert_eq!(store.history(2).await[0].role, ChatRole::Assistant);
    }

    #[tokio::test]
    async fn test_concurrent_appends_do_not_lose_updates() {
        let store = SessionStore::with_cap(200);
        let mut handles = Vec::new();
        for i in 0..50 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.append(9, ChatTurn::user(format!("m{i}"))).await;
            }));
        }
        for h in handles {
            h.await.unwrap();
        }
        assert_eq!(store.history(9).await.len(), 50);
    }
}
