use anyhow::Context;
use gerador_core::{STORAGE_KEY, StoreDocument, StoreGateway};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Keeps the whole store as one JSON file named after the storage key.
#[derive(Debug, Clone)]
pub struct JsonFileGateway {
    path: PathBuf,
}

impl JsonFileGateway {
    /// Gateway for `<data_dir>/<key>.json`.
    #[must_use]
    pub fn new(data_dir: impl AsRef<Path>, key: &str) -> Self {
        let path = data_dir.as_ref().join(format!("{key}.json"));
        Self { path }
    }

    /// Gateway using the fixed default storage key.
    #[must_use]
    pub fn in_dir(data_dir: impl AsRef<Path>) -> Self {
        Self::new(data_dir, STORAGE_KEY)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file that is written in full, then renamed over the store file.
    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl StoreGateway for JsonFileGateway {
    fn load(&self) -> anyhow::Result<Option<StoreDocument>> {
        if !self.path.exists() {
            debug!("No stored data at {}", self.path.display());
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("cannot read {}", self.path.display()))?;
        let document = serde_json::from_str(&content)
            .with_context(|| format!("malformed store in {}", self.path.display()))?;
        Ok(Some(document))
    }

    fn save(&self, document: &StoreDocument) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("cannot create {}", parent.display()))?;
        }

        let content = serde_json::to_string(document)?;
        let staging = self.staging_path();
        std::fs::write(&staging, content)
            .with_context(|| format!("cannot write {}", staging.display()))?;
        std::fs::rename(&staging, &self.path)
            .with_context(|| format!("cannot replace {}", self.path.display()))?;
        debug!("Saved store to {}", self.path.display());
        Ok(())
    }
}
