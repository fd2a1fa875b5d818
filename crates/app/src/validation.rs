//! Field-level validation failures.

use std::fmt::{Display, Formatter, Result as FmtResult};

use smallvec::SmallVec;
use validator::{Validate, ValidationErrors};

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// One rejected input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub code: String,
}

/// All rejected fields of one payload, sorted by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(SmallVec<[FieldError; 4]>);

impl FieldErrors {
    #[must_use]
    pub fn single(field: &str, code: &str) -> Self {
        let mut errors = Self::default();

        errors.push(field, code);

        errors
    }

    pub fn push(&mut self, field: &str, code: &str) {
        self.0.push(FieldError {
            field: field.to_string(),
            code: code.to_string(),
        });

        self.0
            .sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.code.cmp(&b.code)));
    }

    pub fn extend(&mut self, other: Self) {
        for error in other.0 {
            self.push(&error.field, &error.code);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.0.iter().any(|error| error.field == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// `Ok` when nothing was rejected.
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one field was rejected.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut first = true;

        for error in &self.0 {
            if !first {
                f.write_str(", ")?;
            }

            write!(f, "{}: {}", error.field, error.code)?;

            first = false;
        }

        Ok(())
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = Self::default();

        for (field, field_errors) in errors.field_errors() {
            for error in field_errors.iter() {
                fields.push(&field, &error.code);
            }
        }

        fields
    }
}

/// Run derived validation, collecting failures as [`FieldErrors`].
///
/// # Errors
///
/// Returns the rejected fields when validation fails.
pub fn validate<T: Validate>(data: &T) -> Result<(), FieldErrors> {
    data.validate().map_err(FieldErrors::from)
}

/// Lower-case and trim an email address so lookups and uniqueness are case-insensitive.
#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
