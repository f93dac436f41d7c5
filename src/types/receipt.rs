//! Receipt-related types for the Receipt Points Engine
//!
//! This module defines the receipt wire types, the receipt identifier,
//! and the scored output record used throughout the system.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Receipt identifier
///
/// A random UUID (v4) assigned when a receipt is accepted into the store.
/// Callers use it to look points up later.
pub type ReceiptId = Uuid;

/// A purchase receipt as decoded from its JSON representation
///
/// All money, date, and time fields are carried as raw strings; the
/// validator decides whether they are well formed and the scoring rules
/// parse them on demand. Fields absent from the JSON decode to their
/// empty defaults, so an absent field and an empty field yield the same
/// missing-field verdict from the validator.
///
/// A receipt is immutable once validated: the engine only ever reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Receipt {
    /// Name of the retailer or store the receipt is from
    pub retailer: String,

    /// Date of the purchase, printed on the receipt (`YYYY-MM-DD`)
    pub purchase_date: String,

    /// Time of the purchase, 24-hour clock (`HH:MM`)
    pub purchase_time: String,

    /// Purchased items; a valid receipt has at least one
    pub items: Vec<Item>,

    /// Total amount paid, with exactly two decimal places (`"35.35"`)
    pub total: String,
}

/// A single line item on a receipt
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    /// Short product description (`"Mountain Dew 12PK"`)
    pub short_description: String,

    /// Price paid for this item, with exactly two decimal places
    pub price: String,
}

/// Output record of the scoring pipeline
///
/// Pairs the identifier a receipt was stored under with the points total
/// computed for it. Serialized as one JSON object per line by the output
/// writer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredReceipt {
    /// Identifier the receipt was stored under
    pub id: ReceiptId,

    /// Reward points total for the receipt
    pub points: u64,
}
