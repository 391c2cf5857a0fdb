//! Required-field checks for credentials and tokens.
//!
//! Each type lists its own missing fields explicitly; [`Validate::validate`]
//! folds them into a single [`ValidationError`] so every gap is reported at once.

use std::fmt;


/// Aggregated list of required fields that were empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    missing: Vec<&'static str>,
}


impl ValidationError {
    /// Build an error from field names, dropping repeats but keeping order.
    pub fn new(fields: impl IntoIterator<Item = &'static str>) -> Self {
        let mut missing = Vec::new();
        for field in fields {
            if !missing.contains(&field) {
                missing.push(field);
            }
        }
        Self { missing }
    }


    /// Names of the fields that failed the check.
    pub fn missing_fields(&self) -> &[&'static str] {
        &self.missing
    }
}


impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.missing.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field} is required")?;
        }
        Ok(())
    }
}


impl std::error::Error for ValidationError {}


/// Types whose required fields must be populated before use.
pub trait Validate {
    /// Names of required fields that are empty, in declaration order.
    fn missing_fields(&self) -> Vec<&'static str>;

    fn validate(&self) -> Result<(), ValidationError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(missing))
        }
    }
}


/// Pushes `name` onto `missing` when `value` is blank.
pub(crate) fn require_str(missing: &mut Vec<&'static str>, name: &'static str, value: &str) {
    if value.is_empty() {
        missing.push(name);
    }
}
