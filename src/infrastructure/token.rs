use crate::domain::ports::TokenProvider;
use crate::error::{CheckoutError, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::io;
use std::path::PathBuf;

/// Token fixed at construction time, e.g. from the command line.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenProvider {
    token: Option<String>,
}

impl StaticTokenProvider {
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn token(&self) -> Result<Option<String>> {
        Ok(self.token.clone())
    }
}

/// Persistent key-value storage backed by a JSON object on disk.
///
/// The file is re-read on every lookup so a token written by another process
/// (a login step, for instance) is picked up without restarting. A missing
/// file is an empty store.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
    key: String,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }
}

#[async_trait]
impl TokenProvider for FileTokenStore {
    async fn token(&self) -> Result<Option<String>> {
        let contents = match tokio::fs::read(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let entries: Value = serde_json::from_slice(&contents)?;
        let Value::Object(entries) = entries else {
            return Err(CheckoutError::StorageError(format!(
                "{} does not contain a JSON object",
                self.path.display()
            )));
        };

        match entries.get(&self.key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(token)) => Ok(Some(token.clone())),
            Some(other) => Err(CheckoutError::StorageError(format!(
                "value under '{}' is not a string: {other}",
                self.key
            ))),
        }
    }
}
