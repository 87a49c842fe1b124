//! A bank account with a balance and a validated withdrawal operation.
//!
//! Balances are stored as whole cents ([Money]) and may go negative: a
//! withdrawal is only rejected when the amount is zero or negative.
//!
//! ```
//! use bank_account::{Account, Error, Money};
//!
//! let mut account = Account::new(Money::from_major_units(1000));
//!
//! account.withdraw(Money::from_major_units(400)).unwrap();
//! assert_eq!(account.balance(), Money::from_major_units(600));
//!
//! let result = account.withdraw(Money::from_major_units(-10));
//! assert!(matches!(result, Err(Error::InvalidArgument(_))));
//! ```

#![warn(missing_docs)]

mod account;
mod error;
mod money;

pub mod logging;

pub use account::{Account, SharedAccount, WITHDRAWAL_AMOUNT_NOT_POSITIVE};
pub use error::Error;
pub use money::{MINOR_UNITS_PER_MAJOR_UNIT, Money, format_currency};
