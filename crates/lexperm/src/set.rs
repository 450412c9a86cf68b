use crate::{Error, Result};
use std::collections::HashSet;

/// A validated set of distinct, non-negative integers held in ascending
/// order.
///
/// This is the only entry point into permutation generation: a [`SortedSet`]
/// can always be permuted, so the engine itself carries no error paths. The
/// ascending arrangement is the lexicographically smallest permutation and
/// serves as the starting point of the successor chain.
///
/// The empty set is valid and simply has no successors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedSet(Vec<i64>);

impl SortedSet {
    /// Validates and sorts `values` into a set.
    ///
    /// # Errors
    ///
    /// - [`Error::NegativeElement`] if any value is negative.
    /// - [`Error::DuplicateElement`] if any value appears more than once.
    pub fn new(mut values: Vec<i64>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(values.len());
        for &value in &values {
            if value < 0 {
                return Err(Error::NegativeElement { value });
            }
            if !seen.insert(value) {
                return Err(Error::DuplicateElement { value });
            }
        }
        values.sort_unstable();
        Ok(Self(values))
    }

    /// Number of elements in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the set has no elements.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The elements in ascending order.
    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    /// Consumes the set, returning the ascending element vector.
    pub fn into_inner(self) -> Vec<i64> {
        self.0
    }
}

impl TryFrom<Vec<i64>> for SortedSet {
    type Error = Error;

    fn try_from(values: Vec<i64>) -> Result<Self> {
        Self::new(values)
    }
}

impl AsRef<[i64]> for SortedSet {
    fn as_ref(&self) -> &[i64] {
        self.as_slice()
    }
}
