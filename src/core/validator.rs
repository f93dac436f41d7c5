//! Receipt validation
//!
//! This module provides the ReceiptValidator component that decides
//! whether a decoded receipt is acceptable for storage and scoring.
//! Validation composes the field format predicates with structural
//! checks (required fields present, at least one item) into a single
//! verdict.
//!
//! Checks run in a fixed order and stop at the first failure; the order
//! only determines which reason string surfaces, not whether a receipt
//! is accepted. No network or storage access happens here.

use crate::core::format::FormatValidators;
use crate::types::{Receipt, ValidationError};

/// Validates receipts against structural and format rules
///
/// Owns its compiled format predicates. Construct once at startup and
/// pass by reference wherever receipts need checking; validation is a
/// pure function of the receipt value.
#[derive(Debug, Default)]
pub struct ReceiptValidator {
    formats: FormatValidators,
}

impl ReceiptValidator {
    /// Create a new ReceiptValidator with freshly compiled patterns
    pub fn new() -> Self {
        Self {
            formats: FormatValidators::new(),
        }
    }

    /// Validate a receipt, returning the first failure encountered
    ///
    /// Check order: retailer, purchaseDate, purchaseTime, item count,
    /// total, then each item's shortDescription and price. A field that
    /// decoded to empty counts as missing (structural); a non-empty
    /// field that fails its pattern is malformed (format).
    ///
    /// # Returns
    ///
    /// * `Ok(())` - the receipt is valid
    /// * `Err(ValidationError)` - the reason the receipt was rejected
    pub fn validate(&self, receipt: &Receipt) -> Result<(), ValidationError> {
        Self::check_field(&receipt.retailer, "retailer", |s| {
            self.formats.is_retailer_format(s)
        })?;
        Self::check_field(&receipt.purchase_date, "purchaseDate", |s| {
            self.formats.is_date_format(s)
        })?;
        Self::check_field(&receipt.purchase_time, "purchaseTime", |s| {
            self.formats.is_time_format(s)
        })?;

        if receipt.items.is_empty() {
            return Err(ValidationError::NoItems);
        }

        Self::check_field(&receipt.total, "total", |s| self.formats.is_price_format(s))?;

        for (index, item) in receipt.items.iter().enumerate() {
            Self::check_field(
                &item.short_description,
                &format!("items[{index}].shortDescription"),
                |s| self.formats.is_description_format(s),
            )?;
            Self::check_field(&item.price, &format!("items[{index}].price"), |s| {
                self.formats.is_price_format(s)
            })?;
        }

        Ok(())
    }

    /// Check one field for presence, then format
    fn check_field(
        value: &str,
        field: &str,
        is_valid: impl Fn(&str) -> bool,
    ) -> Result<(), ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::missing_field(field));
        }
        if !is_valid(value) {
            return Err(ValidationError::invalid_format(field, value));
        }
        Ok(())
    }
}
