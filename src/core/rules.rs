//! Reward points scoring rules
//!
//! This module defines the seven scoring rules and the RulesEngine that
//! applies them. Each rule is a pure function from a receipt to a
//! non-negative contribution; the engine holds the rules in a fixed
//! order and returns the sum of their outputs. Rules never observe each
//! other's results, so the total is deterministic for a given receipt
//! value.
//!
//! # Numeric Semantics
//!
//! Money amounts are parsed into `rust_decimal::Decimal`, so the
//! round-dollar and quarter-multiple checks are exact at their
//! boundaries (`"100.00" % 1.00 == 0` holds reliably, with no binary
//! floating-point error). `ceil` rounds toward positive infinity.
//!
//! # Failure Semantics
//!
//! The engine expects receipts that already passed validation, but every
//! rule is independently fault-tolerant: a malformed field reaching a
//! rule contributes 0 for that rule instead of aborting the computation.

use crate::types::Receipt;
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// One scoring rule over a validated receipt
///
/// Implementations are pure: no side effects, no shared state, and a
/// non-negative contribution for any input.
pub trait ScoringRule: Send + Sync {
    /// Stable rule name for auditing and diagnostics
    fn name(&self) -> &'static str;

    /// Compute this rule's contribution for the receipt
    fn score(&self, receipt: &Receipt) -> u64;
}

/// Parse a money string into an exact decimal amount
///
/// Returns `None` for anything `Decimal` cannot parse; rules treat that
/// as a zero contribution.
fn parse_amount(s: &str) -> Option<Decimal> {
    Decimal::from_str(s).ok()
}

/// Rule 1: one point per alphanumeric character in the retailer name
///
/// Counts ASCII letters and digits only; spaces, `&`, and `-` do not
/// score.
pub struct RetailerNameRule;

impl ScoringRule for RetailerNameRule {
    fn name(&self) -> &'static str {
        "retailer_name"
    }

    fn score(&self, receipt: &Receipt) -> u64 {
        receipt
            .retailer
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .count() as u64
    }
}

/// Rule 2: 50 points if the total is a round dollar amount
pub struct RoundDollarRule;

impl ScoringRule for RoundDollarRule {
    fn name(&self) -> &'static str {
        "round_dollar"
    }

    fn score(&self, receipt: &Receipt) -> u64 {
        match parse_amount(&receipt.total) {
            Some(total) if total % Decimal::ONE == Decimal::ZERO => 50,
            _ => 0,
        }
    }
}

/// Rule 3: 25 points if the total is a multiple of 0.25
pub struct QuarterTotalRule;

impl ScoringRule for QuarterTotalRule {
    fn name(&self) -> &'static str {
        "quarter_total"
    }

    fn score(&self, receipt: &Receipt) -> u64 {
        let quarter = Decimal::new(25, 2);
        match parse_amount(&receipt.total) {
            Some(total) if total % quarter == Decimal::ZERO => 25,
            _ => 0,
        }
    }
}

/// Rule 4: 5 points for every two items
pub struct ItemPairRule;

impl ScoringRule for ItemPairRule {
    fn name(&self) -> &'static str {
        "item_pair"
    }

    fn score(&self, receipt: &Receipt) -> u64 {
        (receipt.items.len() as u64 / 2) * 5
    }
}

/// Rule 5: description-length bonus per item
///
/// For each item whose trimmed description length is divisible by 3, add
/// `ceil(price * 0.2)`. Other items, and items whose price does not
/// parse, contribute 0.
pub struct DescriptionLengthRule;

impl ScoringRule for DescriptionLengthRule {
    fn name(&self) -> &'static str {
        "description_length"
    }

    fn score(&self, receipt: &Receipt) -> u64 {
        let fifth = Decimal::new(2, 1);

        receipt
            .items
            .iter()
            .filter(|item| item.short_description.trim().chars().count() % 3 == 0)
            .filter_map(|item| parse_amount(&item.price))
            .map(|price| (price * fifth).ceil().to_u64().unwrap_or(0))
            .sum()
    }
}

/// Rule 6: 6 points if the day of the purchase date is odd
pub struct OddDayRule;

impl ScoringRule for OddDayRule {
    fn name(&self) -> &'static str {
        "odd_day"
    }

    fn score(&self, receipt: &Receipt) -> u64 {
        match NaiveDate::parse_from_str(&receipt.purchase_date, "%Y-%m-%d") {
            Ok(date) if date.day() % 2 == 1 => 6,
            _ => 0,
        }
    }
}

/// Rule 7: 10 points if the purchase hour is exactly 14
///
/// The check is a literal equality on the hour: only times in the
/// 14:00-14:59 slot score, and 15:xx does not.
pub struct AfternoonHourRule;

impl ScoringRule for AfternoonHourRule {
    fn name(&self) -> &'static str {
        "afternoon_hour"
    }

    fn score(&self, receipt: &Receipt) -> u64 {
        match NaiveTime::parse_from_str(&receipt.purchase_time, "%H:%M") {
            Ok(time) if time.hour() == 14 => 10,
            _ => 0,
        }
    }
}

/// Applies all scoring rules to a receipt
///
/// Holds the closed set of seven rules in a fixed registration order.
/// The order is stable for auditability but has no effect on the total,
/// since contributions are independent and summed.
pub struct RulesEngine {
    rules: Vec<Box<dyn ScoringRule>>,
}

impl RulesEngine {
    /// Create a RulesEngine with the full rule set registered
    pub fn new() -> Self {
        RulesEngine {
            rules: vec![
                Box::new(RetailerNameRule),
                Box::new(RoundDollarRule),
                Box::new(QuarterTotalRule),
                Box::new(ItemPairRule),
                Box::new(DescriptionLengthRule),
                Box::new(OddDayRule),
                Box::new(AfternoonHourRule),
            ],
        }
    }

    /// Compute the points total for a receipt
    ///
    /// Sums every rule's contribution. The receipt is expected to hold a
    /// passing verdict from the validator; on anything else the
    /// individual rules degrade to zero contributions.
    pub fn calculate_points(&self, receipt: &Receipt) -> u64 {
        self.rules.iter().map(|rule| rule.score(receipt)).sum()
    }

    /// Registered rule names in application order
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }
}

impl Default for RulesEngine {
    fn default() -> Self {
        Self::new()
    }
}
