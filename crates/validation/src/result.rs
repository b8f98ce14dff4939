use serde::Serialize;
use thiserror::Error;

/// Outcome of validating one input.
///
/// `is_valid` is derived from `errors` at construction, so the two cannot disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    is_valid: bool,
    errors: Vec<String>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    pub fn valid() -> Self {
        Self::from_errors(Vec::new())
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Messages in check order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn contains(&self, message: &str) -> bool {
        self.errors.iter().any(|e| e == message)
    }

    /// Append `other`'s messages after this result's.
    pub fn merge(mut self, other: ValidationResult) -> Self {
        self.errors.extend(other.errors);
        Self::from_errors(self.errors)
    }

    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_valid {
            Ok(())
        } else {
            Err(ValidationError {
                errors: self.errors,
            })
        }
    }
}

/// A rejected form submission. Never leaves the process.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("validation failed: {}", .errors.join("; "))]
pub struct ValidationError {
    errors: Vec<String>,
}

impl ValidationError {
    pub fn new(errors: Vec<String>) -> Self {
        Self { errors }
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity_follows_errors() {
        assert!(ValidationResult::valid().is_valid());
        let r = ValidationResult::from_errors(vec!["x".to_string()]);
        assert!(!r.is_valid());
        assert!(r.contains("x"));
    }

    #[test]
    fn merge_keeps_order_and_recomputes_validity() {
        let a = ValidationResult::valid();
        let b = ValidationResult::from_errors(vec!["b1".to_string(), "b2".to_string()]);
        let merged = a.merge(b);
        assert!(!merged.is_valid());
        assert_eq!(merged.errors(), ["b1", "b2"]);
    }

    #[test]
    fn into_result_carries_messages() {
        let err = ValidationResult::from_errors(vec!["Category is required".to_string()])
            .into_result()
            .unwrap_err();
        assert_eq!(err.errors(), ["Category is required"]);
        assert_eq!(err.to_string(), "validation failed: Category is required");
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let value = serde_json::to_value(ValidationResult::valid()).unwrap();
        assert_eq!(value, serde_json::json!({ "isValid": true, "errors": [] }));
    }
}
