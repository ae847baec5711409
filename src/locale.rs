//! # Locale Formatting
//!
//! Currency and timestamp formatting for receipt text. The receipt layout
//! only talks to the [`CurrencyFormatter`] and [`TimestampFormatter`] traits,
//! so another locale or a completely different formatting backend can be
//! plugged in without touching the layout code.
//!
//! ## Built-in Locales
//!
//! | Locale | Currency | Timestamp |
//! |--------|----------|-----------|
//! | `id-ID` | `Rp 15.000`, `-Rp 5.000` | `19/10/2026, 14.30.05` |
//! | `en-US` | `$15,000`, `-$5,000` | `10/19/2026, 2:30:05 PM` |
//!
//! Amounts are printed with no minimum fraction digits: a fraction only
//! shows up when the amount actually has one, trailing zeros trimmed.

use chrono::NaiveDateTime;
use std::borrow::Cow;
use std::str::FromStr;

use crate::error::StrukError;
use crate::money::{MINOR_DIGITS, Money, SCALE};

/// Formats an amount of a given ISO 4217 currency.
pub trait CurrencyFormatter {
    fn format(&self, amount: Money, currency: &str) -> String;
}

/// Formats a receipt timestamp.
pub trait TimestampFormatter {
    fn format_timestamp(&self, at: &NaiveDateTime) -> String;
}

/// Display properties of a currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    /// Printed symbol (`Rp`, `$`), or the upper-cased ISO code when unknown
    pub symbol: Cow<'static, str>,
    /// Whether `symbol` is a bare ISO code, which is always space separated
    pub is_code: bool,
}

/// Look up a currency by ISO code (case-insensitive).
///
/// Unknown codes print as the code itself.
pub fn currency(code: &str) -> Currency {
    let code = code.trim().to_ascii_uppercase();
    let symbol = if code == "IDR" {
        "Rp"
    } else if code == "USD" {
        "$"
    } else {
        return Currency {
            symbol: Cow::Owned(code),
            is_code: true,
        };
    };
    Currency {
        symbol: Cow::Borrowed(symbol),
        is_code: false,
    }
}

/// Number and date conventions of one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    /// BCP 47 tag
    pub tag: &'static str,
    /// Thousands separator
    pub grouping_separator: char,
    /// Fraction separator
    pub decimal_separator: char,
    /// Between the currency symbol and the number
    pub symbol_separator: &'static str,
    /// chrono strftime pattern for timestamps
    pub timestamp_pattern: &'static str,
}

impl Locale {
    /// Indonesian. The id-ID currency format puts a no-break space after
    /// `Rp`; a plain space is used because printer code pages have no
    /// U+00A0 glyph.
    pub const ID_ID: Self = Self {
        tag: "id-ID",
        grouping_separator: '.',
        decimal_separator: ',',
        symbol_separator: " ",
        timestamp_pattern: "%-d/%-m/%Y, %H.%M.%S",
    };

    /// US English.
    pub const EN_US: Self = Self {
        tag: "en-US",
        grouping_separator: ',',
        decimal_separator: '.',
        symbol_separator: "",
        timestamp_pattern: "%-m/%-d/%Y, %-I:%M:%S %p",
    };

    /// All built-in locales.
    pub const ALL: [Self; 2] = [Self::ID_ID, Self::EN_US];
}

impl Default for Locale {
    fn default() -> Self {
        Self::ID_ID
    }
}

impl FromStr for Locale {
    type Err = StrukError;

    /// Accepts a full tag (`id-ID`, `en_US`) or a bare language (`id`, `en`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|locale| {
                locale.tag.eq_ignore_ascii_case(&normalized)
                    || locale
                        .tag
                        .split('-')
                        .next()
                        .is_some_and(|lang| lang.eq_ignore_ascii_case(&normalized))
            })
            .ok_or_else(|| StrukError::InvalidParameter(format!("unsupported locale '{}'", s)))
    }
}

impl CurrencyFormatter for Locale {
    fn format(&self, amount: Money, code: &str) -> String {
        let currency = currency(code);
        let abs = amount.unsigned_abs();
        let (whole, fraction) = (abs / SCALE as u64, abs % SCALE as u64);

        let mut out = String::new();
        if amount.is_negative() {
            out.push('-');
        }
        out.push_str(&currency.symbol);
        out.push_str(if currency.is_code {
            " "
        } else {
            self.symbol_separator
        });
        out.push_str(&group_thousands(whole, self.grouping_separator));

        if fraction != 0 {
            let digits = format!("{:0width$}", fraction, width = MINOR_DIGITS as usize);
            out.push(self.decimal_separator);
            out.push_str(digits.trim_end_matches('0'));
        }
        out
    }
}

impl TimestampFormatter for Locale {
    fn format_timestamp(&self, at: &NaiveDateTime) -> String {
        at.format(self.timestamp_pattern).to_string()
    }
}

/// `1234567` → `1.234.567` for separator `.`
fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
