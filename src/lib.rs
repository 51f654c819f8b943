// Animal Profile - Core Library
// Exposes profile construction and announcement for the demo binary and tests

pub mod animal;
pub mod validation;

// Re-export commonly used types
pub use animal::Animal;
pub use validation::{ValidationError, ValidationResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
