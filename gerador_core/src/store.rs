//! In-memory bank store.
//!
//! # Responsibility
//! - Own every bank and the active-bank pointer.
//! - Enforce per-bank dedup and the birth-year window on insert.
//! - Renumber banks after a deletion.
//!
//! # Invariants
//! - Banks are keyed `B-1..B-n` with no gaps, in storage order.
//! - The store always holds at least one bank.
//! - `active`, when set, references an existing bank.

use rand::Rng;
use tracing::{debug, info};

use crate::draw::{self, Draw};
use crate::error::{BankError, Result};
use crate::model::{Bank, BankKey, BirthYearWindow, Record};

/// Bank count used when no configuration says otherwise.
pub const DEFAULT_INITIAL_BANKS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    banks: Vec<Bank>,
    active: Option<BankKey>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(DEFAULT_INITIAL_BANKS)
    }
}

impl Store {
    /// Creates `initial_count` empty banks (at least one) with `B-1` active.
    #[must_use]
    pub fn new(initial_count: usize) -> Self {
        let banks: Vec<Bank> = (0..initial_count.max(1))
            .map(|i| Bank::empty(BankKey::from_index(i)))
            .collect();
        let active = banks.first().map(Bank::key);
        Self { banks, active }
    }

    /// Builds a store from already-numbered banks.
    ///
    /// An `active` key that does not exist is dropped.
    pub(crate) fn from_parts(banks: Vec<Bank>, active: Option<BankKey>) -> Self {
        let mut store = Self {
            banks,
            active: None,
        };
        store.renumber();
        store.set_active_bank(active);
        store
    }

    #[must_use]
    pub fn banks(&self) -> &[Bank] {
        &self.banks
    }

    #[must_use]
    pub fn bank(&self, key: BankKey) -> Option<&Bank> {
        self.banks.get(key.index())
    }

    #[must_use]
    pub fn bank_count(&self) -> usize {
        self.banks.len()
    }

    #[must_use]
    pub const fn active_bank_key(&self) -> Option<BankKey> {
        self.active
    }

    #[must_use]
    pub fn active_bank(&self) -> Option<&Bank> {
        self.active.and_then(|key| self.bank(key))
    }

    #[must_use]
    pub fn total_records(&self) -> usize {
        self.banks.iter().map(Bank::len).sum()
    }

    fn bank_mut(&mut self, key: BankKey) -> Result<&mut Bank> {
        self.banks
            .get_mut(key.index())
            .ok_or(BankError::BankNotFound(key))
    }

    /// Appends the next-numbered empty bank. The active bank is unchanged.
    pub fn create_bank(&mut self) -> BankKey {
        let key = BankKey::from_index(self.banks.len());
        self.banks.push(Bank::empty(key));
        self.check_invariants();
        info!("Created bank {key}");
        key
    }

    /// Clears a bank's records and draw history in place.
    pub fn reset_bank(&mut self, key: BankKey) -> Result<()> {
        self.bank_mut(key)?.clear();
        info!("Reset bank {key}");
        Ok(())
    }

    /// Removes a bank and shifts every higher-numbered bank down by one.
    ///
    /// If the deleted bank was active, the bank before it becomes active
    /// (or the first bank when there is none before it). An active bank
    /// numbered above the deleted one follows its renumbered key.
    pub fn delete_bank(&mut self, key: BankKey) -> Result<()> {
        if self.bank(key).is_none() {
            return Err(BankError::BankNotFound(key));
        }
        if self.banks.len() <= 1 {
            return Err(BankError::LastBank);
        }

        let previously_active = self.active;
        self.banks.remove(key.index());
        self.renumber();

        self.active = match previously_active {
            Some(active) if active == key => key
                .previous()
                .filter(|prev| self.bank(*prev).is_some())
                .or_else(|| self.banks.first().map(Bank::key)),
            Some(active) if active > key => active.previous(),
            other => other,
        };

        self.check_invariants();
        info!(
            "Deleted bank {key}; {} bank(s) left, active={:?}",
            self.banks.len(),
            self.active.map(|k| k.to_string())
        );
        Ok(())
    }

    /// Appends a record to a bank using the default birth-year window.
    pub fn add_record(&mut self, key: BankKey, record: Record) -> Result<()> {
        self.add_record_within(key, record, BirthYearWindow::default())
    }

    /// Appends a record unless its national id is not 11 digits, its birth
    /// year is outside `window` or its national id already exists in the
    /// target bank.
    pub fn add_record_within(
        &mut self,
        key: BankKey,
        record: Record,
        window: BirthYearWindow,
    ) -> Result<()> {
        let bank = self.bank_mut(key)?;

        if !record.has_valid_national_id() {
            return Err(BankError::InvalidNationalId(record.national_id));
        }
        if !window.contains(record.birth_year) {
            return Err(BankError::OutOfRange {
                year: record.birth_year,
                min: window.min,
                max: window.max,
            });
        }
        if bank.contains_national_id(&record.national_id) {
            return Err(BankError::Duplicate {
                national_id: record.national_id,
                bank: key,
            });
        }

        debug!("Adding record {} to {key}", record.national_id);
        bank.records.push(record);
        Ok(())
    }

    /// Sets a profile display name and returns the name actually stored.
    ///
    /// A blank name restores the default `Perfil n`.
    pub fn rename_profile(&mut self, key: BankKey, new_name: &str) -> Result<String> {
        let bank = self.bank_mut(key)?;
        let trimmed = new_name.trim();
        bank.display_name = if trimmed.is_empty() {
            key.default_display_name()
        } else {
            trimmed.to_string()
        };
        Ok(bank.display_name.clone())
    }

    /// Points the active bank at `key`.
    ///
    /// An unknown key clears the pointer instead of failing.
    pub fn set_active_bank(&mut self, key: Option<BankKey>) -> Option<BankKey> {
        self.active = key.filter(|k| self.bank(*k).is_some());
        self.active
    }

    /// Activates the lowest-numbered bank when nothing is active.
    pub fn activate_first_if_none(&mut self) {
        if self.active.is_none() {
            self.active = self.banks.first().map(Bank::key);
        }
    }

    /// Draws one record from `key`.
    pub fn draw<R: Rng + ?Sized>(&mut self, key: BankKey, rng: &mut R) -> Result<Draw> {
        let outcome = draw::draw(self.bank_mut(key)?, rng)?;
        if outcome.reshuffled {
            info!("All records of {key} were drawn; list restarted");
        }
        Ok(outcome)
    }

    fn renumber(&mut self) {
        for (i, bank) in self.banks.iter_mut().enumerate() {
            bank.key = BankKey::from_index(i);
        }
    }

    fn check_invariants(&self) {
        debug_assert!(!self.banks.is_empty(), "store must hold at least one bank");
        debug_assert!(
            self.banks
                .iter()
                .enumerate()
                .all(|(i, bank)| bank.key == BankKey::from_index(i)),
            "bank keys must be contiguous"
        );
        debug_assert!(
            self.active.is_none_or(|key| self.bank(key).is_some()),
            "active bank must exist"
        );
        debug_assert!(
            self.banks
                .iter()
                .all(|bank| bank.consumed.iter().all(|i| *i < bank.records.len())),
            "consumed indices must be in range"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(n: u32) -> BankKey {
        BankKey::new(n).unwrap()
    }

    #[test]
    fn new_store_activates_first_bank() {
        let store = Store::new(3);
        assert_eq!(store.bank_count(), 3);
        assert_eq!(store.active_bank_key(), Some(key(1)));
        assert_eq!(store.banks()[2].display_name(), "Perfil 3");
    }

    #[test]
    fn zero_initial_count_still_creates_one_bank() {
        assert_eq!(Store::new(0).bank_count(), 1);
    }

    #[test]
    fn create_bank_keeps_active_bank() {
        let mut store = Store::new(2);
        store.set_active_bank(Some(key(2)));
        assert_eq!(store.create_bank(), key(3));
        assert_eq!(store.active_bank_key(), Some(key(2)));
    }

    #[test]
    fn unknown_key_clears_active_bank() {
        let mut store = Store::new(2);
        assert_eq!(store.set_active_bank(Some(key(9))), None);
        assert_eq!(store.active_bank_key(), None);
        store.activate_first_if_none();
        assert_eq!(store.active_bank_key(), Some(key(1)));
    }

    #[test]
    fn rename_with_blank_name_restores_default() {
        let mut store = Store::new(2);
        assert_eq!(store.rename_profile(key(2), "  Trabalho ").unwrap(), "Trabalho");
        assert_eq!(store.rename_profile(key(2), "   ").unwrap(), "Perfil 2");
        assert_eq!(
            store.rename_profile(key(5), "x"),
            Err(BankError::BankNotFound(key(5)))
        );
    }

    #[test]
    fn delete_first_active_bank_falls_back_to_new_first() {
        let mut store = Store::new(3);
        store.delete_bank(key(1)).unwrap();
        assert_eq!(store.active_bank_key(), Some(key(1)));
        assert_eq!(store.banks()[0].display_name(), "Perfil 2");
    }

    #[test]
    fn cannot_delete_last_bank() {
        let mut store = Store::new(1);
        assert_eq!(store.delete_bank(key(1)), Err(BankError::LastBank));
        assert_eq!(store.bank_count(), 1);
    }
}
