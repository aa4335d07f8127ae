//! Language preference persistence: a small JSON file of user id → code,
//! loaded once at startup and written through on every change. A missing or
//! unreadable file starts empty; a failed write is logged and the in-memory
//! value kept, so preference persistence can never take a turn down.

use ostaad_core::LanguageCode;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
    languages: Arc<RwLock<HashMap<i64, LanguageCode>>>,
}

impl PreferenceStore {
    /// Opens the store at `path`, loading existing preferences if the file
    /// exists and parses.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let languages = load_file(&path).unwrap_or_default();
        Self {
            path,
            languages: Arc::new(RwLock::new(languages)),
        }
    }

    pub async fn language(&self, user_id: i64) -> Option<LanguageCode> {
        self.languages.read().await.get(&user_id).copied()
    }

    pub async fn set_language(&self, user_id: i64, code: LanguageCode) {
        let snapshot = {
            let mut languages = self.languages.write().await;
            languages.insert(user_id, code);
            languages.clone()
        };
        if let Err(e) = save_file(&self.path, &snapshot) {
            warn!(error = %e, path = %self.path.display(), "failed to persist language preferences");
        }
    }
}

fn load_file(path: &Path) -> Option<HashMap<i64, LanguageCode>> {
    let raw = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str::<HashMap<String, LanguageCode>>(&raw) {
        Ok(map) => Some(
            map.into_iter()
                .filter_map(|(k, v)| k.parse::<i64>().ok().map(|id| (id, v)))
                .collect(),
        ),
        Err(e) => {
            warn!(error = %e, path = %path.display(), "ignoring unreadable preference file");
            None
        }
    }
}

fn save_file(path: &Path, map: &HashMap<i64, LanguageCode>) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    // Keys as strings keeps the file shape stable for hand edits.
    let as_strings: HashMap<String, LanguageCode> =
        map.iter().map(|(k, v)| (k.to_string(), *v)).collect();
    let raw = serde_json::to_string_pretty(&as_strings)?;
    std::fs::write(path, raw)?;
    Ok(())
}
