//! Defines the crate level error type.

/// The errors that may occur when working with accounts.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The caller asked to withdraw an amount that is zero or negative.
    ///
    /// The string is the message shown to the caller. The account balance is
    /// never modified when this error is returned.
    #[error("{0}")]
    InvalidArgument(String),

    /// The text could not be parsed as a money amount.
    ///
    /// Amounts must be a whole number optionally followed by a decimal point
    /// and one or two digits, e.g. "1000", "-10" or "12.34".
    #[error("\"{0}\" is not a valid amount")]
    InvalidAmount(String),

    /// Could not acquire the lock on a shared account.
    ///
    /// This only happens when another thread panicked while holding the lock.
    #[error("could not acquire the account lock")]
    AccountLockError,
}
