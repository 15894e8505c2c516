use std::{collections::BTreeMap, io::ErrorKind, path::PathBuf, sync::Arc};

use anyhow::Context;
use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};

pub const DEFAULT_RECIPIENTS_KEY: &str = "default_recipients";

/// Named string values persisted across runs.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    async fn load(&self, key: &str) -> anyhow::Result<Option<String>>;
    async fn save(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// Keeps all preferences in one JSON object on disk.
pub struct JsonFilePreferenceStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    async fn read_bytes(&self) -> anyhow::Result<Option<Vec<u8>>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error).with_context(|| format!("Could not read {}", self.path.display())),
        }
    }

    async fn read_all(&self) -> anyhow::Result<BTreeMap<String, String>> {
        match self.read_bytes().await? {
            Some(bytes) => serde_json::from_slice(&bytes)
                .with_context(|| format!("Could not parse {}", self.path.display())),
            None => Ok(BTreeMap::new()),
        }
    }

    /// Like `read_all`, but a corrupt file is replaced on the next write instead of blocking it.
    async fn read_all_for_update(&self) -> anyhow::Result<BTreeMap<String, String>> {
        let Some(bytes) = self.read_bytes().await? else {
            return Ok(BTreeMap::new());
        };

        match serde_json::from_slice(&bytes) {
            Ok(values) => Ok(values),
            Err(error) => {
                log::warn!(
                    "Discarding unreadable preferences in {}: {error}",
                    self.path.display()
                );
                Ok(BTreeMap::new())
            }
        }
    }
}

#[async_trait]
impl PreferenceStore for JsonFilePreferenceStore {
    async fn load(&self, key: &str) -> anyhow::Result<Option<String>> {
        let mut values = self.read_all().await?;
        Ok(values.remove(key))
    }

    async fn save(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut values = self.read_all_for_update().await?;
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let bytes = serde_json::to_vec_pretty(&values)?;
        tokio::fs::write(&self.path, bytes)
            .await
            .with_context(|| format!("Could not write {}", self.path.display()))?;

        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryPreferenceStore {
    values: RwLock<BTreeMap<String, String>>,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferenceStore for InMemoryPreferenceStore {
    async fn load(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn save(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The recipient string used to prefill new reminders.
///
/// Failures of the underlying store never reach the caller: reads fall back to
/// an empty string and writes are only logged.
#[derive(Clone)]
pub struct DefaultRecipientPreference {
    store: Arc<dyn PreferenceStore>,
}

impl DefaultRecipientPreference {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    pub async fn get(&self) -> String {
        match self.store.load(DEFAULT_RECIPIENTS_KEY).await {
            Ok(value) => value.unwrap_or_default(),
            Err(error) => {
                log::error!("Could not read default recipients: {error:#}");
                String::new()
            }
        }
    }

    pub async fn set(&self, value: &str) {
        match self.store.save(DEFAULT_RECIPIENTS_KEY, value).await {
            Ok(()) => log::info!("Saved default recipients"),
            Err(error) => log::error!("Could not save default recipients: {error:#}"),
        }
    }
}
