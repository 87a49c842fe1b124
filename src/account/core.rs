use serde::{Deserialize, Serialize};

use crate::{Error, Money};

/// The message carried by [Error::InvalidArgument] when a withdrawal amount is
/// zero or negative.
pub const WITHDRAWAL_AMOUNT_NOT_POSITIVE: &str = "Withdrawal amount must be greater than zero.";

/// A bank account holding a single balance.
///
/// The balance may be negative: withdrawals are not checked against the
/// available funds, so an account can be overdrawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// The amount of money currently in the account.
    balance: Money,
}

impl Account {
    /// Create an account with an initial `balance`.
    pub fn new(balance: Money) -> Self {
        Self { balance }
    }

    /// The amount of money currently in the account.
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Withdraw `amount` from the account.
    ///
    /// The balance is decremented even if `amount` exceeds it, leaving the
    /// account overdrawn. If the subtraction overflows, the failure is logged
    /// and the withdrawal is treated as complete with the balance unchanged.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidArgument] if `amount` is zero or negative, in
    /// which case the balance is not modified.
    pub fn withdraw(&mut self, amount: Money) -> Result<(), Error> {
        if !amount.is_positive() {
            tracing::warn!("Rejected withdrawal of {amount}: {WITHDRAWAL_AMOUNT_NOT_POSITIVE}");
            return Err(Error::InvalidArgument(
                WITHDRAWAL_AMOUNT_NOT_POSITIVE.to_owned(),
            ));
        }

        match self.balance.checked_sub(amount) {
            Some(new_balance) => {
                tracing::debug!("Withdrew {amount}, balance {} -> {new_balance}", self.balance);
                self.balance = new_balance;
            }
            None => {
                tracing::error!(
                    "An error occurred while withdrawing money: subtracting {amount} from {} overflows",
                    self.balance
                );
            }
        }

        Ok(())
    }
}



#[cfg(test)]
mod serde_tests {
    use crate::{Account, Money};

    #[test]
    fn serializes_balance_as_minor_units() {
        let account = Account::new(Money::from_major_units(1000));

        let json = serde_json::to_string(&account).unwrap();

        assert_eq!(json, r#"{"balance":100000}"#);
    }

    #[test]
    fn deserializes_negative_balance() {
        let account: Account = serde_json::from_str(r#"{"balance":-50000}"#).unwrap();

        assert_eq!(account.balance(), Money::from_major_units(-500));
    }
}
