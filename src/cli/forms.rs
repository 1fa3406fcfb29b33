//! Raw input collection and validation for new expense entries.

use thiserror::Error;

use crate::domain::Record;

/// Rejections raised before a record is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Amount and Category are required!")]
    MissingRequired,
    #[error("Amount must be a number!")]
    InvalidAmount,
}

/// The three raw fields a user supplies for one expense.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryForm {
    pub amount: String,
    pub category: String,
    pub description: String,
}

impl EntryForm {
    pub fn new(
        amount: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            category: category.into(),
            description: description.into(),
        }
    }

    /// Builds a form from `add` arguments: amount, category, then any number of
    /// description words.
    pub fn from_args(args: &[&str]) -> Self {
        let amount = args.first().copied().unwrap_or_default();
        let category = args.get(1).copied().unwrap_or_default();
        let description = args.get(2..).map(|rest| rest.join(" ")).unwrap_or_default();
        Self::new(amount, category, description)
    }

    /// Only empty fields count as missing. The category is stored as typed;
    /// surrounding whitespace is ignored when parsing the amount.
    pub fn validate(&self) -> Result<Record, FormError> {
        if self.amount.is_empty() || self.category.is_empty() {
            return Err(FormError::MissingRequired);
        }
        let amount: f64 = self
            .amount
            .trim()
            .parse()
            .map_err(|_| FormError::InvalidAmount)?;
        if !amount.is_finite() {
            return Err(FormError::InvalidAmount);
        }
        Ok(Record::new(
            amount,
            self.category.as_str(),
            self.description.as_str(),
        ))
    }
}
