//! Money and date formatting.
//!
//! Every helper takes its configuration explicitly, nothing is read from
//! process-wide state.

use std::fmt::Write;

use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};
use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::iso;
use serde::{Deserialize, Serialize};

/// How the integer part of an amount is split into groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigitGrouping {
    /// 1,234,567
    #[default]
    Western,
    /// 12,34,567
    Indian,
    /// 1234567
    None,
}

/// Formatting parameters for monetary amounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoneyFormat {
    /// ISO 4217 code, used to look up the symbol.
    pub currency_code: String,
    pub decimal_places: u32,
    pub grouping: DigitGrouping,
    pub show_symbol: bool,
}

impl MoneyFormat {
    /// Format for the given currency, using its minor-unit exponent as the
    /// number of decimal places. Unknown codes get two places.
    pub fn for_currency(code: &str) -> Self {
        let currency_code = code.trim().to_uppercase();
        let decimal_places = iso::find(&currency_code).map(|c| c.exponent).unwrap_or(2);
        Self {
            currency_code,
            decimal_places,
            grouping: DigitGrouping::Western,
            show_symbol: true,
        }
    }

    pub fn with_grouping(mut self, grouping: DigitGrouping) -> Self {
        self.grouping = grouping;
        self
    }

    pub fn with_decimal_places(mut self, decimal_places: u32) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    pub fn with_symbol(mut self, show_symbol: bool) -> Self {
        self.show_symbol = show_symbol;
        self
    }

    /// Currency symbol, or the code itself when the currency is unknown.
    pub fn symbol(&self) -> &str {
        iso::find(&self.currency_code)
            .map(|c| c.symbol)
            .unwrap_or(self.currency_code.as_str())
    }

    fn symbol_first(&self) -> bool {
        iso::find(&self.currency_code)
            .map(|c| c.symbol_first)
            .unwrap_or(true)
    }
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self::for_currency("INR").with_grouping(DigitGrouping::Indian)
    }
}

/// Formats an amount, rounding half away from zero to the configured precision.
pub fn format_amount(amount: Decimal, format: &MoneyFormat) -> String {
    let dp = format.decimal_places;
    let rounded = amount.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    let fixed = format!("{:.*}", dp as usize, rounded.abs());

    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut digits = group_digits(integer, format.grouping);
    if let Some(fraction) = fraction {
        digits.push('.');
        digits.push_str(fraction);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    if !format.show_symbol {
        return format!("{sign}{digits}");
    }

    if format.symbol_first() {
        format!("{sign}{}{digits}", format.symbol())
    } else {
        format!("{sign}{digits} {}", format.symbol())
    }
}

fn group_digits(integer: &str, grouping: DigitGrouping) -> String {
    let len = integer.len();
    if len <= 3 || grouping == DigitGrouping::None {
        return integer.to_string();
    }

    let (head, tail) = integer.split_at(len - 3);
    let group = match grouping {
        DigitGrouping::Indian => 2,
        _ => 3,
    };

    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(group);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    let mut out = groups.join(",");
    out.push(',');
    out.push_str(tail);
    out
}

/// Returns true when `pattern` is a strftime pattern chrono can render.
pub fn is_valid_date_pattern(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

/// Formats a date with a strftime pattern, falling back to ISO 8601 when the
/// pattern cannot be rendered.
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_err() {
        return date.format("%Y-%m-%d").to_string();
    }
    out
}
