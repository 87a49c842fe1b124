mod core;
mod shared;

pub use self::core::{Account, WITHDRAWAL_AMOUNT_NOT_POSITIVE};
pub use shared::SharedAccount;
