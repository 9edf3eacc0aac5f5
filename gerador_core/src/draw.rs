//! Draw engine: random, non-repeating selection with reshuffle on exhaustion.
//!
//! # Invariants
//! - Each draw marks exactly one index as consumed.
//! - A bank of N records yields N distinct indices before any repeat.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::{BankError, Result};
use crate::model::{Bank, BankKey, Record};

/// Outcome of one draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    pub bank: BankKey,
    /// Position of the drawn record inside the bank.
    pub index: usize,
    pub record: Record,
    /// Set when the consumed set was exhausted and cleared before this draw.
    pub reshuffled: bool,
}

/// Picks a uniformly random record not yet drawn in the current cycle.
pub fn draw<R: Rng + ?Sized>(bank: &mut Bank, rng: &mut R) -> Result<Draw> {
    if bank.records.is_empty() {
        return Err(BankError::EmptyBank(bank.key));
    }

    let mut available = available_indices(bank);
    let reshuffled = available.is_empty();
    if reshuffled {
        bank.consumed.clear();
        available = (0..bank.records.len()).collect();
    }

    let index = *available
        .choose(rng)
        .ok_or(BankError::EmptyBank(bank.key))?;
    bank.consumed.insert(index);

    Ok(Draw {
        bank: bank.key,
        index,
        record: bank.records[index].clone(),
        reshuffled,
    })
}

fn available_indices(bank: &Bank) -> Vec<usize> {
    (0..bank.records.len())
        .filter(|i| !bank.consumed.contains(i))
        .collect()
}
