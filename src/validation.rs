// ✅ Validation Layer - Construction-time field checks
// A profile that fails validation is never observable as an instance

use serde::Serialize;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// One rejected argument, reported with the field it belongs to.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub context: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.context, self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Ok when every check passed; otherwise ALL violations, not just the first.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

// ============================================================================
// TESTS
// ============================================================================
