//! Fixed list of currency-note denominations offered by the note carousel.
//!
//! The list is validated once at construction: non-empty, every value
//! positive, strictly ascending. After that it is immutable for the session.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Notes printed by the reserve bank, smallest first
pub const DEFAULT_DENOMINATIONS: [u64; 9] = [2, 5, 10, 20, 50, 100, 200, 500, 2000];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DenominationError {
    #[error("denomination list is empty")]
    Empty,
    #[error("denomination {0} is not positive")]
    NonPositive(u64),
    #[error("denominations are not strictly ascending at index {index}")]
    NotAscending { index: usize },
    #[error("note index {index} is out of range for {len} denominations")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Validated, strictly ascending list of note values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u64>", into = "Vec<u64>")]
pub struct Denominations(Vec<u64>);

impl Denominations {
    pub fn new(values: Vec<u64>) -> Result<Self, DenominationError> {
        if values.is_empty() {
            return Err(DenominationError::Empty);
        }
        if let Some(&zero) = values.iter().find(|&&v| v == 0) {
            return Err(DenominationError::NonPositive(zero));
        }
        if let Some(pos) = values.windows(2).position(|pair| pair[0] >= pair[1]) {
            return Err(DenominationError::NotAscending { index: pos + 1 });
        }
        Ok(Self(values))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a validated list
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.0.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<u64> {
        self.0.get(index).copied()
    }

    /// Value at an index already known to be valid
    pub fn at(&self, index: usize) -> u64 {
        self.0[index.min(self.last_index())]
    }

    pub fn check_index(&self, index: usize) -> Result<usize, DenominationError> {
        if index < self.0.len() {
            Ok(index)
        } else {
            Err(DenominationError::IndexOutOfRange { index, len: self.0.len() })
        }
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }
}

impl Default for Denominations {
    fn default() -> Self {
        Self(DEFAULT_DENOMINATIONS.to_vec())
    }
}

impl TryFrom<Vec<u64>> for Denominations {
    type Error = DenominationError;

    fn try_from(values: Vec<u64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl From<Denominations> for Vec<u64> {
    fn from(denominations: Denominations) -> Self {
        denominations.0
    }
}
