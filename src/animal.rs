// 🐾 Animal Profile - named, aged, categorized record
// Fields are fixed at construction; reads go through accessors

use serde::Serialize;

use crate::validation::{ValidationError, ValidationResult};

// ============================================================================
// ANIMAL
// ============================================================================

/// An animal profile with a name, an age in years, and a category
/// (typically a species label such as "dog").
///
/// Fields are private and set exactly once by [`Animal::new`]. There are no
/// update operations, so two calls to any accessor or to [`Animal::greeting`]
/// always return the same value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Animal {
    name: String,
    age: u32,
    category: String,
}

impl Animal {
    /// Build a profile from its three fields.
    ///
    /// `name` and `category` must be non-empty; every violated field is
    /// reported, not just the first. Age cannot be negative by type.
    pub fn new(
        name: impl Into<String>,
        age: u32,
        category: impl Into<String>,
    ) -> Result<Self, Vec<ValidationError>> {
        let name = name.into();
        let category = category.into();

        validate_fields(&name, &category)?;

        Ok(Animal { name, age, category })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Format the introduction line without printing it.
    pub fn greeting(&self) -> String {
        format!(
            "My name is {}, I am {} years old and I am a {}",
            self.name, self.age, self.category
        )
    }

    /// Print the introduction line to stdout.
    pub fn announce(&self) {
        println!("{}", self.greeting());
    }
}

// ============================================================================
// FIELD VALIDATION
// ============================================================================

fn validate_fields(name: &str, category: &str) -> ValidationResult {
    let mut errors = Vec::new();

    if name.is_empty() {
        errors.push(ValidationError {
            field: "name".to_string(),
            message: "Required field is empty".to_string(),
            context: "Animal".to_string(),
        });
    }

    if category.is_empty() {
        errors.push(ValidationError {
            field: "category".to_string(),
            message: "Required field is empty".to_string(),
            context: "Animal".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animal_creation() {
        let animal = Animal::new("Rex", 3, "dog").expect("valid fields should construct");

        assert_eq!(animal.name(), "Rex");
        assert_eq!(animal.age(), 3);
        assert_eq!(animal.category(), "dog");
    }

    #[test]
    fn test_greeting_exact_text() {
        let animal = Animal::new("Rex", 3, "dog").unwrap();

        assert_eq!(
            animal.greeting(),
            "My name is Rex, I am 3 years old and I am a dog"
        );
    }

    #[test]
    fn test_greeting_is_idempotent() {
        let animal = Animal::new("Luna", 7, "cat").unwrap();

        let first = animal.greeting();
        let second = animal.greeting();

        assert_eq!(first, second);
        assert_eq!(animal.name(), "Luna", "accessors unchanged after greeting");
        assert_eq!(animal.age(), 7);
        assert_eq!(animal.category(), "cat");
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = Animal::new("", 0, "cat");
        assert!(result.is_err());

        let errors = result.unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
    }

    #[test]
    fn test_empty_category_rejected() {
        let result = Animal::new("Rex", 3, "");
        assert!(result.is_err());

        let errors = result.unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "category");
    }

    #[test]
    fn test_all_violations_reported() {
        let result = Animal::new("", 1, "");
        assert!(result.is_err());

        let errors = result.unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.field == "name"));
        assert!(errors.iter().any(|e| e.field == "category"));
    }

    #[test]
    fn test_age_zero_allowed() {
        let animal = Animal::new("Kiwi", 0, "parrot").unwrap();

        assert_eq!(animal.age(), 0);
        assert_eq!(
            animal.greeting(),
            "My name is Kiwi, I am 0 years old and I am a parrot"
        );
    }
}
