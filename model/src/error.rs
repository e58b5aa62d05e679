use thiserror::Error;

/// Rejection reasons for the ledger's mutating operations.
///
/// Every rejection leaves the ledger untouched; display strings are the
/// user-facing messages a host binding reports on failure.
#[derive(Error, Clone, Copy, Debug, Eq, PartialEq)]
pub enum JarError {
    /// `donate` called with a zero amount.
    #[error("Donation must be positive")]
    ZeroDonation,

    /// `take` called while the jar holds nothing.
    #[error("Jar is empty")]
    EmptyJar,

    /// `take` called with a zero amount.
    #[error("Take must be positive")]
    ZeroTake,

    /// `take` called with an amount over half of the current balance.
    #[error("Cannot take more than half of the jar balance")]
    ExceedsHalfBalance,
}
