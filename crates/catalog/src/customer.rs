//! Customer entity.

use common::CustomerId;
use serde::{Deserialize, Serialize};

/// A customer in the dataset.
///
/// No query reads customers; they are carried as part of the dataset shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    name: String,
    #[serde(default)]
    tier: u8,
}

impl Customer {
    pub fn new(id: CustomerId, name: impl Into<String>, tier: u8) -> Self {
        Self {
            id,
            name: name.into(),
            tier,
        }
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tier(&self) -> u8 {
        self.tier
    }
}
