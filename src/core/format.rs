//! Field format validators
//!
//! This module provides the format predicates a receipt's raw string
//! fields are checked against. Each predicate takes one string and
//! returns whether it matches its pattern exactly; malformed input
//! yields `false`, never a panic.
//!
//! # Patterns
//!
//! The character classes use ASCII semantics (`(?-u)`): a "word"
//! character is a letter, digit, or underscore, matching the patterns
//! the wire format was defined with. Dates and times are checked in two
//! steps: a width regex pins the exact `YYYY-MM-DD` / `HH:MM` shape
//! (chrono accepts unpadded numeric fields on its own), then a chrono
//! parse confirms the value is a real calendar date or clock time.
//!
//! All patterns are compiled once at construction; there is no
//! process-global validator state.

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;

/// Compiled format predicates for receipt fields
///
/// Construct once (typically inside a [`ReceiptValidator`]) and reuse;
/// every predicate is a pure function of its input.
///
/// [`ReceiptValidator`]: crate::core::ReceiptValidator
#[derive(Debug)]
pub struct FormatValidators {
    date_shape: Regex,
    time_shape: Regex,
    price: Regex,
    retailer: Regex,
    description: Regex,
}

impl FormatValidators {
    /// Create a new set of format validators
    ///
    /// Compiles the field patterns. The patterns are fixed literals, so
    /// compilation cannot fail at runtime.
    pub fn new() -> Self {
        Self {
            date_shape: Regex::new(r"(?-u)^\d{4}-\d{2}-\d{2}$").expect("date pattern compiles"),
            time_shape: Regex::new(r"(?-u)^\d{2}:\d{2}$").expect("time pattern compiles"),
            price: Regex::new(r"(?-u)^\d+\.\d{2}$").expect("price pattern compiles"),
            retailer: Regex::new(r"(?-u)^[\w\s&-]+$").expect("retailer pattern compiles"),
            description: Regex::new(r"(?-u)^[\w\s-]+$").expect("description pattern compiles"),
        }
    }

    /// Check a purchase date string (`"2022-01-01"`)
    ///
    /// True iff the string has the exact 4-2-2 digit shape and names a
    /// real calendar date. `"2022-1-1"` and `"2022-02-30"` both fail.
    pub fn is_date_format(&self, s: &str) -> bool {
        self.date_shape.is_match(s) && NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
    }

    /// Check a purchase time string (`"14:00"`)
    ///
    /// True iff the string has the exact 2-2 digit shape and names a
    /// 24-hour clock time between `00:00` and `23:59`.
    pub fn is_time_format(&self, s: &str) -> bool {
        self.time_shape.is_match(s) && NaiveTime::parse_from_str(s, "%H:%M").is_ok()
    }

    /// Check a money amount string (`"6.49"`)
    ///
    /// True iff the string is one or more digits, a literal dot, and
    /// exactly two digits. Leading zeros are allowed (`"0.50"`).
    pub fn is_price_format(&self, s: &str) -> bool {
        self.price.is_match(s)
    }

    /// Check a retailer name
    ///
    /// True iff the string is non-empty and every character is a word
    /// character, whitespace, `&`, or `-`.
    pub fn is_retailer_format(&self, s: &str) -> bool {
        self.retailer.is_match(s)
    }

    /// Check an item description
    ///
    /// True iff the string is non-empty and every character is a word
    /// character, whitespace, or `-`.
    pub fn is_description_format(&self, s: &str) -> bool {
        self.description.is_match(s)
    }
}

impl Default for FormatValidators {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::padded("2022-01-01", true)]
    #[case::end_of_month("2022-01-31", true)]
    #[case::leap_day("2020-02-29", true)]
    #[case::unpadded_fields("2022-1-1", false)]
    #[case::month_out_of_range("2022-13-01", false)]
    #[case::impossible_day("2022-02-30", false)]
    #[case::non_leap_february("2021-02-29", false)]
    #[case::wrong_separator("2022/01/01", false)]
    #[case::trailing_garbage("2022-01-01x", false)]
    #[case::empty("", false)]
    fn test_is_date_format(#[case] input: &str, #[case] expected: bool) {
        let formats = FormatValidators::new();
        assert_eq!(formats.is_date_format(input), expected);
    }

    #[rstest]
    #[case::midnight("00:00", true)]
    #[case::afternoon("14:00", true)]
    #[case::last_minute("23:59", true)]
    #[case::twelve_hour_clock("2:00 PM", false)]
    #[case::unpadded_hour("2:00", false)]
    #[case::hour_out_of_range("24:00", false)]
    #[case::minute_out_of_range("14:60", false)]
    #[case::with_seconds("14:00:00", false)]
    #[case::empty("", false)]
    fn test_is_time_format(#[case] input: &str, #[case] expected: bool) {
        let formats = FormatValidators::new();
        assert_eq!(formats.is_time_format(input), expected);
    }

    #[rstest]
    #[case::cents("6.49", true)]
    #[case::zero("0.00", true)]
    #[case::leading_zero("0.50", true)]
    #[case::large_amount("12345.00", true)]
    #[case::one_decimal("6.4", false)]
    #[case::no_decimals("6", false)]
    #[case::three_decimals("6.499", false)]
    #[case::no_integer_part(".49", false)]
    #[case::negative("-6.49", false)]
    #[case::whitespace(" 6.49", false)]
    #[case::empty("", false)]
    fn test_is_price_format(#[case] input: &str, #[case] expected: bool) {
        let formats = FormatValidators::new();
        assert_eq!(formats.is_price_format(input), expected);
    }

    #[rstest]
    #[case::simple("Target", true)]
    #[case::with_ampersand("M&M Corner Market", true)]
    #[case::with_hyphen("Wal-Mart", true)]
    #[case::with_underscore("corner_market", true)]
    #[case::with_digits("7 Eleven", true)]
    #[case::punctuation("Target!", false)]
    #[case::non_ascii_letter("Tärget", false)]
    #[case::empty("", false)]
    fn test_is_retailer_format(#[case] input: &str, #[case] expected: bool) {
        let formats = FormatValidators::new();
        assert_eq!(formats.is_retailer_format(input), expected);
    }

    #[rstest]
    #[case::simple("Mountain Dew 12PK", true)]
    #[case::with_hyphen("Klarbrunn 12-PK 12 FL OZ", true)]
    #[case::padded("   Klarbrunn 12-PK 12 FL OZ  ", true)]
    #[case::ampersand_not_allowed("Mac & Cheese", false)]
    #[case::punctuation("Chips, Large", false)]
    #[case::empty("", false)]
    fn test_is_description_format(#[case] input: &str, #[case] expected: bool) {
        let formats = FormatValidators::new();
        assert_eq!(formats.is_description_format(input), expected);
    }
}
