//! A fixed-point money amount stored as whole cents.

use std::{fmt::Display, str::FromStr, sync::OnceLock};

use numfmt::{Formatter, Precision};
use serde::{Deserialize, Serialize};

use crate::Error;

/// The number of minor units (cents) in one major unit (dollar).
pub const MINOR_UNITS_PER_MAJOR_UNIT: i64 = 100;

/// An amount of money, positive or negative, counted in minor units.
///
/// Storing cents as an integer avoids the rounding drift that comes with
/// binary floating point.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero dollars.
    pub const ZERO: Money = Money(0);

    /// Create an amount from a count of cents.
    pub const fn from_minor_units(cents: i64) -> Self {
        Self(cents)
    }

    /// Create an amount from a count of whole dollars.
    ///
    /// Saturates at the bounds of `i64` for absurdly large inputs.
    pub const fn from_major_units(dollars: i64) -> Self {
        Self(dollars.saturating_mul(MINOR_UNITS_PER_MAJOR_UNIT))
    }

    /// The amount as a count of cents.
    pub const fn minor_units(self) -> i64 {
        self.0
    }

    /// Whether the amount is strictly greater than zero.
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Subtract `other` from this amount, returning `None` on overflow.
    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }
}

impl FromStr for Money {
    type Err = Error;

    /// Parse an amount in dollars such as "1000", "-10", "12.3" or "12.34".
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidAmount] if the text is not a plain decimal
    /// number with at most two decimal places, or if it does not fit in the
    /// range of [Money].
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidAmount(text.to_owned());

        let trimmed = text.trim();
        let (is_negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let (whole, fraction) = match unsigned.split_once('.') {
            Some((_, "")) => return Err(invalid()),
            Some((whole, fraction)) => (whole, fraction),
            None => (unsigned, ""),
        };

        if whole.is_empty()
            || fraction.len() > 2
            || !whole.bytes().all(|byte| byte.is_ascii_digit())
            || !fraction.bytes().all(|byte| byte.is_ascii_digit())
        {
            return Err(invalid());
        }

        let dollars: i64 = whole.parse().map_err(|_| invalid())?;
        let cents: i64 = match fraction.len() {
            0 => 0,
            // "12.3" means thirty cents, not three.
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };

        let magnitude = dollars
            .checked_mul(MINOR_UNITS_PER_MAJOR_UNIT)
            .and_then(|dollar_cents| dollar_cents.checked_add(cents))
            .ok_or_else(invalid)?;

        Ok(Money(if is_negative { -magnitude } else { magnitude }))
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format_currency(*self))
    }
}

/// Format `amount` as dollars with two decimal places, e.g. "-$1,234.50".
pub fn format_currency(amount: Money) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("$")
            .expect("\"$\" is a valid currency prefix")
            .precision(Precision::Decimals(2))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-$")
            .expect("\"-$\" is a valid currency prefix")
            .precision(Precision::Decimals(2))
    });

    // Only used for display, so precision loss above 2^53 cents is acceptable.
    let dollars = amount.0 as f64 / MINOR_UNITS_PER_MAJOR_UNIT as f64;

    let mut formatted_string = if amount.0 < 0 {
        negative_fmt.fmt_string(dollars.abs())
    } else if amount.0 > 0 {
        positive_fmt.fmt_string(dollars)
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        return "$0.00".to_owned();
    };

    // numfmt omits trailing zeros, e.g. "12.30" is rendered as "12.3" and
    // "600.00" as "600", so pad back out to two decimal places.
    match formatted_string.rfind('.') {
        None => formatted_string.push_str(".00"),
        Some(dot) if formatted_string.len() - dot == 2 => formatted_string.push('0'),
        Some(_) => {}
    }

    formatted_string
}


#[cfg(test)]
mod format_currency_tests {
    use crate::Money;

    use super::format_currency;

    #[test]
    fn zero_has_two_decimal_places() {
        assert_eq!(format_currency(Money::ZERO), "$0.00");
    }

    #[test]
    fn whole_dollars_have_two_decimal_places() {
        assert_eq!(format_currency(Money::from_major_units(600)), "$600.00");
    }

    #[test]
    fn trailing_zero_is_restored() {
        assert_eq!(format_currency(Money::from_minor_units(1_230)), "$12.30");
    }

    #[test]
    fn negative_amounts_have_minus_before_symbol() {
        assert_eq!(format_currency(Money::from_major_units(-500)), "-$500.00");
    }

    #[test]
    fn display_matches_format_currency() {
        let amount = Money::from_minor_units(4_205);

        assert_eq!(amount.to_string(), format_currency(amount));
    }
}
