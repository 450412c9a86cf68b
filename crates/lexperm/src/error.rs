pub type Result<T> = core::result::Result<T, Error>;

/// All possible errors that `lexperm` can produce.
///
/// Permutation stepping itself is infallible once a [`crate::SortedSet`] has
/// been constructed; every variant here is a set-validation failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The input contained a negative value. Only non-negative integers form
    /// a valid set.
    #[error("invalid set: negative value {value}")]
    NegativeElement { value: i64 },

    /// The input contained the same value more than once. Permutations are
    /// defined over distinct elements only.
    #[error("invalid set: duplicate value {value}")]
    DuplicateElement { value: i64 },
}
