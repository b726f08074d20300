use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for one checkout run.
///
/// Wraps a UUID so run identifiers cannot be confused with
/// other UUID-based values in logs and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckoutId(Uuid);

impl CheckoutId {
    /// Creates a new random checkout ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a checkout ID from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for CheckoutId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CheckoutId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for CheckoutId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// Product identity as assigned by the inventory backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    /// Creates a product ID from the backend's numeric identity.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the numeric identity.
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::str::FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}
