use crate::domain::payment::ApprovalUrl;
use crate::domain::ports::{Navigator, TokenProvider, UserInteraction};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;

/// A thread-safe in-memory key-value store holding the auth token.
///
/// Stands in for the browser's persistent storage; the token is looked up
/// under `key` on every request.
#[derive(Clone)]
pub struct InMemoryTokenStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
    key: String,
}

impl InMemoryTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            entries: Arc::default(),
            key: key.into(),
        }
    }

    pub async fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.write().await.insert(key.into(), value.into());
    }

    pub async fn remove(&self, key: &str) {
        self.entries.write().await.remove(key);
    }
}

#[async_trait]
impl TokenProvider for InMemoryTokenStore {
    async fn token(&self) -> Result<Option<String>> {
        Ok(self.entries.read().await.get(&self.key).cloned())
    }
}

/// User interaction that answers prompts from a script and records
/// everything it was asked to show.
///
/// Once the script runs out every prompt is treated as cancelled.
#[derive(Default)]
pub struct ScriptedInteraction {
    answers: Mutex<VecDeque<Option<String>>>,
    prompts: Mutex<Vec<String>>,
    notifications: Mutex<Vec<String>>,
}

impl ScriptedInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_answers<S: Into<String>>(answers: impl IntoIterator<Item = Option<S>>) -> Self {
        Self {
            answers: Mutex::new(answers.into_iter().map(|a| a.map(Into::into)).collect()),
            ..Self::default()
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn notifications(&self) -> Vec<String> {
        self.notifications.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl UserInteraction for ScriptedInteraction {
    async fn ask_text(&self, prompt: &str) -> Option<String> {
        self.prompts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(prompt.to_string());
        self.answers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
            .flatten()
    }

    async fn notify(&self, message: &str) {
        self.notifications
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(message.to_string());
    }
}

/// Navigator that only remembers where it was sent.
#[derive(Default, Clone)]
pub struct RecordingNavigator {
    visited: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl Navigator for RecordingNavigator {
    async fn navigate(&self, url: &ApprovalUrl) -> Result<()> {
        self.visited
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(url.as_str().to_string());
        Ok(())
    }
}
