//! Command API over a store and its persistence gateway.
//!
//! Every mutating command changes the in-memory store first and then saves
//! the full state. When the save fails the command returns
//! `StorageUnavailable`, but the in-memory change is kept.

use rand::Rng;
use tracing::{info, warn};

use crate::draw::Draw;
use crate::error::{BankError, Result};
use crate::gateway::StoreGateway;
use crate::model::{BankKey, BirthYearWindow, Record};
use crate::store::{DEFAULT_INITIAL_BANKS, Store};

/// Tunables for a [`BankService`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceSettings {
    /// Banks created for a fresh or reset store.
    pub initial_banks: usize,
    pub birth_years: BirthYearWindow,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            initial_banks: DEFAULT_INITIAL_BANKS,
            birth_years: BirthYearWindow::default(),
        }
    }
}

pub struct BankService<G: StoreGateway> {
    store: Store,
    gateway: G,
    settings: ServiceSettings,
}

impl<G: StoreGateway> BankService<G> {
    /// Loads the store through `gateway`.
    ///
    /// Absent or malformed data falls back to a default store. A loaded store
    /// without an active bank activates its first bank.
    pub fn open(gateway: G, settings: ServiceSettings) -> Self {
        let store = match gateway.load() {
            Ok(Some(document)) => match Store::from_document(document) {
                Ok(mut store) => {
                    store.activate_first_if_none();
                    info!("Loaded {} bank(s)", store.bank_count());
                    store
                }
                Err(e) => {
                    warn!("Stored data rejected ({e}); starting with default banks");
                    Store::new(settings.initial_banks)
                }
            },
            Ok(None) => {
                info!("No stored data; starting with {} bank(s)", settings.initial_banks);
                Store::new(settings.initial_banks)
            }
            Err(e) => {
                warn!("Failed to load stored data ({e:#}); starting with default banks");
                Store::new(settings.initial_banks)
            }
        };

        Self {
            store,
            gateway,
            settings,
        }
    }

    #[must_use]
    pub const fn store(&self) -> &Store {
        &self.store
    }

    #[must_use]
    pub const fn gateway(&self) -> &G {
        &self.gateway
    }

    #[must_use]
    pub const fn settings(&self) -> &ServiceSettings {
        &self.settings
    }

    /// Writes the full store through the gateway.
    pub fn persist(&self) -> Result<()> {
        self.gateway
            .save(&self.store.to_document())
            .map_err(|e| BankError::StorageUnavailable(format!("{e:#}")))
    }

    /// Applies `f` to the store and saves the result.
    pub fn transact<T>(&mut self, f: impl FnOnce(&mut Store) -> T) -> Result<T> {
        let value = f(&mut self.store);
        self.persist()?;
        Ok(value)
    }

    pub fn create_bank(&mut self) -> Result<BankKey> {
        self.transact(Store::create_bank)
    }

    pub fn reset_bank(&mut self, key: BankKey) -> Result<()> {
        self.store.reset_bank(key)?;
        self.persist()
    }

    pub fn delete_bank(&mut self, key: BankKey) -> Result<()> {
        self.store.delete_bank(key)?;
        self.persist()
    }

    /// Adds a record using the configured birth-year window.
    pub fn add_record(&mut self, key: BankKey, record: Record) -> Result<()> {
        let window = self.settings.birth_years;
        self.store.add_record_within(key, record, window)?;
        self.persist()
    }

    pub fn rename_profile(&mut self, key: BankKey, new_name: &str) -> Result<String> {
        let name = self.store.rename_profile(key, new_name)?;
        self.persist()?;
        Ok(name)
    }

    pub fn set_active_bank(&mut self, key: Option<BankKey>) -> Result<Option<BankKey>> {
        self.transact(|store| store.set_active_bank(key))
    }

    pub fn draw(&mut self, key: BankKey) -> Result<Draw> {
        self.draw_with(key, &mut rand::rng())
    }

    pub fn draw_with<R: Rng + ?Sized>(&mut self, key: BankKey, rng: &mut R) -> Result<Draw> {
        let outcome = self.store.draw(key, rng)?;
        self.persist()?;
        Ok(outcome)
    }

    /// Draws from the active bank.
    pub fn draw_active(&mut self) -> Result<Draw> {
        let key = self
            .store
            .active_bank_key()
            .ok_or(BankError::NoActiveBank)?;
        self.draw(key)
    }

    /// Replaces every bank and profile name with a fresh default store.
    pub fn reset_all(&mut self) -> Result<()> {
        self.store = Store::new(self.settings.initial_banks);
        info!("Reset all banks");
        self.persist()
    }

    /// Swaps in an already validated store, e.g. from a backup.
    pub fn replace_store(&mut self, store: Store) -> Result<()> {
        self.store = store;
        info!("Store replaced ({} bank(s))", self.store.bank_count());
        self.persist()
    }
}
