//! A vendor's bookable service. Only the duration feeds slot generation.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub duration_minutes: i64,
    #[serde(default)]
    pub price_amount: f64,
}

impl Service {
    /// # Errors
    /// [`SlotError::InvalidDuration`] for a non-positive duration and
    /// [`SlotError::InvalidService`] for a negative or non-finite price.
    pub fn validate(&self) -> Result<()> {
        if self.duration_minutes <= 0 {
            return Err(SlotError::InvalidDuration(self.duration_minutes));
        }
        if !self.price_amount.is_finite() || self.price_amount < 0.0 {
            return Err(SlotError::InvalidService(format!(
                "service '{}' has invalid price {}",
                self.id, self.price_amount
            )));
        }
        Ok(())
    }
}
