//! Protected power-system equipment and its construction-time validation.

/// Standard rating catalogs.
pub mod catalog;
/// Name-based access to sealed entities.
pub mod property;
/// Power transformer entity and its derived protection currents.
pub mod transformer;
/// Ordered construction checks.
pub mod validator;

// Re-export the main types for convenience
pub use catalog::Catalog;
pub use property::{Property, SealedEntity};
pub use transformer::PowerTransformer;
pub use validator::{Defaults, Ratings, TransformerParams, Validator};
