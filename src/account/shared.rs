//! A thread-safe handle to an account.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{Error, Money, account::Account};

/// An [Account] that can be shared and withdrawn from across threads.
///
/// Cloning the handle shares the same underlying account. Each withdrawal
/// validates, reads and updates the balance while holding the lock, so
/// concurrent withdrawals never overwrite each other.
#[derive(Debug, Clone)]
pub struct SharedAccount {
    account: Arc<Mutex<Account>>,
}

impl SharedAccount {
    /// Create a shared account with an initial `balance`.
    pub fn new(balance: Money) -> Self {
        Self::from(Account::new(balance))
    }

    /// The amount of money currently in the account.
    ///
    /// # Errors
    ///
    /// Returns [Error::AccountLockError] if the lock is poisoned.
    pub fn balance(&self) -> Result<Money, Error> {
        Ok(self.lock()?.balance())
    }

    /// Withdraw `amount` from the account, see [Account::withdraw].
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidArgument] if `amount` is zero or negative, or
    /// [Error::AccountLockError] if the lock is poisoned.
    pub fn withdraw(&self, amount: Money) -> Result<(), Error> {
        self.lock()?.withdraw(amount)
    }

    /// A copy of the account as it is right now.
    ///
    /// # Errors
    ///
    /// Returns [Error::AccountLockError] if the lock is poisoned.
    pub fn snapshot(&self) -> Result<Account, Error> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Account>, Error> {
        self.account
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire account lock: {error}"))
            .map_err(|_| Error::AccountLockError)
    }
}

impl From<Account> for SharedAccount {
    fn from(account: Account) -> Self {
        Self {
            account: Arc::new(Mutex::new(account)),
        }
    }
}
