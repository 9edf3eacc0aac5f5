//! Durable key-value storage seam.

use anyhow::Context;
use std::cell::{Cell, RefCell};

use crate::document::StoreDocument;

/// Fixed key under which the whole store is persisted.
pub const STORAGE_KEY: &str = "multiBankNameCpfGeneratorData_v3";

/// Loads and saves the entire store in one piece.
pub trait StoreGateway {
    /// Returns `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> anyhow::Result<Option<StoreDocument>>;

    fn save(&self, document: &StoreDocument) -> anyhow::Result<()>;
}

impl<G: StoreGateway + ?Sized> StoreGateway for &G {
    fn load(&self) -> anyhow::Result<Option<StoreDocument>> {
        (**self).load()
    }

    fn save(&self, document: &StoreDocument) -> anyhow::Result<()> {
        (**self).save(document)
    }
}

/// In-process gateway keeping the serialized store as a string.
#[derive(Debug, Default)]
pub struct MemoryGateway {
    contents: RefCell<Option<String>>,
    fail_saves: Cell<bool>,
}

impl MemoryGateway {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with raw stored text, which may be malformed.
    #[must_use]
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: RefCell::new(Some(contents.into())),
            fail_saves: Cell::new(false),
        }
    }

    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }

    /// Makes every following save fail, simulating unavailable storage.
    pub fn set_failing(&self, failing: bool) {
        self.fail_saves.set(failing);
    }
}

impl StoreGateway for MemoryGateway {
    fn load(&self) -> anyhow::Result<Option<StoreDocument>> {
        self.contents
            .borrow()
            .as_deref()
            .map(|raw| serde_json::from_str(raw).context("stored data is not a valid store"))
            .transpose()
    }

    fn save(&self, document: &StoreDocument) -> anyhow::Result<()> {
        if self.fail_saves.get() {
            anyhow::bail!("storage quota exceeded");
        }
        let raw = serde_json::to_string(document)?;
        *self.contents.borrow_mut() = Some(raw);
        Ok(())
    }
}
