use serde::{Deserialize, Deserializer, Serialize};

use prodapi_core::{DomainError, DomainResult, ProductId};

/// A sellable item.
///
/// The same shape is used on the wire and in the repository. `id` is owned by
/// the repository: whatever a client sends is overwritten on create and update.
/// Every field defaults when absent or `null` so that a missing field is
/// reported by [`Product::validate`] with a rule-specific message instead of
/// failing to decode. A name made only of whitespace counts as empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: ProductId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sku: String,
}

/// Treat an explicit JSON `null` like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// One violated field rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub reason: &'static str,
}

impl core::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        sku: impl Into<String>,
    ) -> Self {
        Self {
            id: ProductId::default(),
            name: name.into(),
            description: description.into(),
            price,
            sku: sku.into(),
        }
    }

    /// Decode a product from a JSON body.
    ///
    /// Malformed JSON and type mismatches become [`DomainError::Decode`].
    pub fn from_json(body: &[u8]) -> DomainResult<Self> {
        serde_json::from_slice(body).map_err(|e| DomainError::decode(e.to_string()))
    }

    /// Every rule this product violates, in field order.
    pub fn violations(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();

        if self.name.trim().is_empty() {
            violations.push(FieldViolation {
                field: "name",
                reason: "must not be empty",
            });
        }

        // NaN fails both comparisons, so test for it explicitly.
        if self.price.is_nan() || self.price <= 0.0 {
            violations.push(FieldViolation {
                field: "price",
                reason: "must be greater than zero",
            });
        }

        if !is_valid_sku(&self.sku) {
            violations.push(FieldViolation {
                field: "sku",
                reason: "must be three alphanumeric segments separated by hyphens (e.g. abc-abc-abc)",
            });
        }

        violations
    }

    /// Check all field rules.
    ///
    /// The error message lists every violation, joined by `"; "`.
    pub fn validate(&self) -> DomainResult<()> {
        let violations = self.violations();
        if violations.is_empty() {
            return Ok(());
        }

        let message = violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Err(DomainError::validation(message))
    }
}

/// `xxx-xxx-xxx`: exactly three non-empty ASCII alphanumeric segments.
pub fn is_valid_sku(sku: &str) -> bool {
    let segments: Vec<&str> = sku.split('-').collect();
    segments.len() == 3
        && segments
            .iter()
            .all(|s| !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric()))
}
