//! Engine Configuration

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::gesture::GestureController;
use crate::resolver::{NearestSlotResolver, DEFAULT_BIAS};

/// Tunables for the drag engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DndConfig {
    /// Offset added to each slot top when resolving the drop slot.
    /// Roughly half a card's rendered height.
    pub bias: f64,
}

impl Default for DndConfig {
    fn default() -> Self {
        Self { bias: DEFAULT_BIAS }
    }
}

impl DndConfig {
    /// Parse from JSON; missing fields take their defaults
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.bias.is_finite() {
            return Err(ConfigError::InvalidBias(self.bias));
        }
        Ok(())
    }

    pub fn resolver(&self) -> NearestSlotResolver {
        NearestSlotResolver::new(self.bias)
    }

    pub fn controller(&self) -> GestureController {
        GestureController::new(self.resolver())
    }
}
