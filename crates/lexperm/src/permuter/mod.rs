#[cfg(test)]
mod tests;

use crate::{PermuteStatus, SortedSet};

/// Rewrites `seq` in place into its lexicographic successor.
///
/// This is the textbook next-permutation step:
///
/// 1. Scan backward from the second-to-last position for the largest pivot
///    index `i` with `seq[i] < seq[i + 1]`. If none exists the sequence is
///    fully descending and therefore maximal.
/// 2. Reverse the suffix after `i`, putting it in ascending order.
/// 3. Swap `seq[i]` with the first suffix element strictly greater than it —
///    because the suffix is now ascending, this is the smallest element that
///    exceeds the pivot, yielding the minimal increase.
///
/// Sequences shorter than two elements have no successor.
///
/// # Returns
///
/// - [`PermuteStatus::Ready`] if `seq` now holds the next permutation.
/// - [`PermuteStatus::Exhausted`] if no successor exists; `seq` is left
///   unmodified.
pub fn next_permutation(seq: &mut [i64]) -> PermuteStatus {
    let n = seq.len();
    if n < 2 {
        return PermuteStatus::Exhausted;
    }

    let mut i = n - 2;
    while seq[i] > seq[i + 1] {
        if i == 0 {
            return PermuteStatus::Exhausted;
        }
        i -= 1;
    }

    seq[i + 1..].reverse();

    // The suffix is ascending, so this stops at the smallest element
    // exceeding the pivot. Elements are distinct, so `<` suffices.
    let mut j = i + 1;
    while seq[j] < seq[i] {
        j += 1;
    }
    seq.swap(i, j);

    PermuteStatus::Ready
}

/// Walks the lexicographic successor chain of a set, one step at a time.
///
/// The permuter starts at the ascending (smallest) arrangement and rewrites
/// it in place on every [`advance`](Self::advance). The starting arrangement
/// itself is never produced as a successor: a set of `n` elements yields
/// exactly `n! - 1` `Ready` steps before exhaustion.
#[derive(Debug, Clone)]
pub struct Permuter {
    seq: Vec<i64>,
}

impl Permuter {
    /// Creates a permuter positioned at the set's ascending arrangement.
    pub fn new(set: SortedSet) -> Self {
        Self {
            seq: set.into_inner(),
        }
    }

    /// The current arrangement.
    pub fn current(&self) -> &[i64] {
        &self.seq
    }

    /// Steps to the next permutation in lexicographic order.
    pub fn advance(&mut self) -> PermuteStatus {
        next_permutation(&mut self.seq)
    }
}

impl IntoIterator for Permuter {
    type Item = Vec<i64>;
    type IntoIter = IntoIter;

    /// Converts the permuter into an iterator over owned successor
    /// arrangements, in lexicographic order.
    fn into_iter(self) -> IntoIter {
        IntoIter {
            permuter: self,
            exhausted: false,
        }
    }
}

/// Iterator over the remaining successors of a [`Permuter`].
#[derive(Debug)]
pub struct IntoIter {
    permuter: Permuter,
    exhausted: bool,
}

impl Iterator for IntoIter {
    type Item = Vec<i64>;

    fn next(&mut self) -> Option<Vec<i64>> {
        if self.exhausted {
            return None;
        }
        match self.permuter.advance() {
            PermuteStatus::Ready => Some(self.permuter.current().to_vec()),
            PermuteStatus::Exhausted => {
                self.exhausted = true;
                None
            }
        }
    }
}
