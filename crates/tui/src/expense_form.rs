//! Validation for the add-expense form.
//!
//! The engine trusts its caller to hand it a positive amount and a category
//! that is not blank, so every submit goes through [`parse`] first.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Invalid amount. Please enter a number.")]
    NotANumber,
    #[error("Invalid amount. Please enter a number greater than 0.")]
    NotPositive,
    #[error("Invalid category. Please enter a category.")]
    MissingCategory,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseInput {
    pub amount: f64,
    pub category: String,
}

/// Checks the raw field contents in the order the user reads them: amount
/// first, then category.
pub fn parse(raw_amount: &str, raw_category: &str) -> Result<ExpenseInput, FormError> {
    let amount = parse_amount(raw_amount)?;

    let category = raw_category.trim();
    if category.is_empty() {
        return Err(FormError::MissingCategory);
    }

    Ok(ExpenseInput {
        amount,
        category: category.to_string(),
    })
}

fn parse_amount(raw: &str) -> Result<f64, FormError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FormError::NotANumber);
    }

    let amount = trimmed
        .parse::<f64>()
        .map_err(|_| FormError::NotANumber)?;
    if !amount.is_finite() {
        return Err(FormError::NotANumber);
    }
    if amount <= 0.0 {
        return Err(FormError::NotPositive);
    }
    Ok(amount)
}
