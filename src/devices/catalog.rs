//! Standard transformer ratings accepted by the validator.

use std::borrow::Cow;

/// Standard three-phase distribution transformer ratings (kVA).
pub const STANDARD_RATED_POWERS_KVA: [f64; 14] = [
    30.0, 45.0, 75.0, 112.5, 150.0, 225.0, 300.0, 500.0, 750.0, 1000.0, 1500.0, 2000.0, 2500.0,
    3000.0,
];

/// Standard primary distribution voltages (kV).
pub const STANDARD_HIGH_VOLTAGES_KV: [f64; 3] = [13.8, 22.0, 34.5];

/// Ordered sets of permitted rated powers and primary voltages.
///
/// A value is accepted only when it equals one of the listed entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    rated_powers: Cow<'static, [f64]>,
    high_voltages: Cow<'static, [f64]>,
}

impl Catalog {
    /// The built-in catalog of standard ratings.
    pub const STANDARD: Catalog = Catalog {
        rated_powers: Cow::Borrowed(&STANDARD_RATED_POWERS_KVA),
        high_voltages: Cow::Borrowed(&STANDARD_HIGH_VOLTAGES_KV),
    };

    /// Creates a catalog from explicit rating lists.
    pub fn new(rated_powers: Vec<f64>, high_voltages: Vec<f64>) -> Self {
        Self {
            rated_powers: Cow::Owned(rated_powers),
            high_voltages: Cow::Owned(high_voltages),
        }
    }

    /// Permitted rated powers (kVA), in catalog order.
    pub fn rated_powers(&self) -> &[f64] {
        &self.rated_powers
    }

    /// Permitted primary voltages (kV), in catalog order.
    pub fn high_voltages(&self) -> &[f64] {
        &self.high_voltages
    }

    /// Returns `true` when `kva` is a listed rating.
    pub fn accepts_rated_power(&self, kva: f64) -> bool {
        self.rated_powers.iter().any(|&listed| listed == kva)
    }

    /// Returns `true` when `kv` is a listed primary voltage.
    pub fn accepts_high_voltage(&self, kv: f64) -> bool {
        self.high_voltages.iter().any(|&listed| listed == kv)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::STANDARD
    }
}
