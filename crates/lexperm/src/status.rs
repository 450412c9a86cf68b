/// Represents the result of attempting a single permutation step.
///
/// This type models the outcome of [`crate::next_permutation`] and
/// [`crate::Permuter::advance`]:
///
/// - [`PermuteStatus::Ready`] indicates the sequence was rewritten into its
///   lexicographic successor.
/// - [`PermuteStatus::Exhausted`] means the sequence was already the maximal
///   (fully descending) arrangement and no successor exists. Exhaustion is
///   terminal: every subsequent step reports `Exhausted` again.
///
/// # Example
///
/// ```
/// use lexperm::{next_permutation, PermuteStatus};
///
/// let mut seq = [1, 2];
/// assert_eq!(next_permutation(&mut seq), PermuteStatus::Ready);
/// assert_eq!(seq, [2, 1]);
/// assert_eq!(next_permutation(&mut seq), PermuteStatus::Exhausted);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermuteStatus {
    /// The sequence now holds the next permutation in lexicographic order.
    Ready,
    /// No successor exists. The sequence is left untouched.
    Exhausted,
}

impl PermuteStatus {
    /// Returns `true` if the step produced a successor.
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Returns `true` if the sequence has no further successors.
    pub const fn is_exhausted(self) -> bool {
        matches!(self, Self::Exhausted)
    }
}
