use serde_json::{Map, Value};

use crate::errors::LedgerError;

pub const AMOUNT_KEY: &str = "amount";
pub const CATEGORY_KEY: &str = "category";
pub const DESCRIPTION_KEY: &str = "description";

/// One recorded expense.
///
/// Values are fixed once constructed; the ledger owns records after they are
/// appended and only drops them on `clear`.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    amount: f64,
    category: String,
    description: String,
}

impl Record {
    pub fn new(amount: f64, category: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            amount,
            category: category.into(),
            description: description.into(),
        }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// JSON has no encoding for `inf` or `NaN`.
    pub fn is_storable(&self) -> bool {
        self.amount.is_finite()
    }

    /// Returns the key-value form written to storage.
    pub fn to_mapping(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(AMOUNT_KEY.into(), Value::from(self.amount));
        map.insert(CATEGORY_KEY.into(), Value::from(self.category.clone()));
        map.insert(DESCRIPTION_KEY.into(), Value::from(self.description.clone()));
        map
    }

    /// Builds a record from decoded key-value data.
    ///
    /// All three keys must be present with the JSON type the writer produces.
    /// Unknown keys are ignored.
    pub fn from_mapping(map: &Map<String, Value>) -> Result<Self, LedgerError> {
        let amount = map
            .get(AMOUNT_KEY)
            .ok_or_else(|| LedgerError::missing(AMOUNT_KEY))?
            .as_f64()
            .ok_or_else(|| LedgerError::wrong_type(AMOUNT_KEY))?;
        let category = string_field(map, CATEGORY_KEY)?;
        let description = string_field(map, DESCRIPTION_KEY)?;
        Ok(Self {
            amount,
            category,
            description,
        })
    }
}

fn string_field(map: &Map<String, Value>, key: &'static str) -> Result<String, LedgerError> {
    match map.get(key) {
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(LedgerError::wrong_type(key)),
        None => Err(LedgerError::missing(key)),
    }
}
