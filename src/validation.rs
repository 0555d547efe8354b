//! Required-field checks for a single step.

use crate::schema::{FieldKind, FormDefinition};
use crate::value::{DraftRecord, FieldValue};

pub const MSG_REQUIRED: &str = "required";
pub const MSG_SELECT_ONE: &str = "select at least one option";
pub const MSG_INVALID_NUMBER: &str = "enter a valid number";

/// A failed check on one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: &'static str,
}

/// Field errors of one step, in the order the fields are declared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// The first failing field, which the renderer should focus.
    pub fn first(&self) -> Option<&FieldError> {
        self.errors.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| e.field.as_str())
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    fn push(&mut self, field: &str, message: &'static str) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message,
        });
    }
}

/// Checks the required fields of one step against the draft.
///
/// Only required fields are inspected and each yields at most one error, the first
/// matching rule winning: missing answer, empty selection, then invalid number.
/// An out-of-range step has nothing to check.
pub fn validate_step(
    definition: &FormDefinition,
    step_index: usize,
    draft: &DraftRecord,
) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    let Some(step) = definition.step(step_index) else {
        return errors;
    };

    for field in step.fields.iter().filter(|f| f.required) {
        let value = draft.get(&field.name);
        match value {
            None => errors.push(&field.name, MSG_REQUIRED),
            Some(v) if v.is_blank() => errors.push(&field.name, MSG_REQUIRED),
            Some(FieldValue::Selection(s)) if s.is_empty() => {
                errors.push(&field.name, MSG_SELECT_ONE)
            }
            Some(v) if field.kind == FieldKind::Number && !is_valid_count(v) => {
                errors.push(&field.name, MSG_INVALID_NUMBER)
            }
            Some(_) => {}
        }
    }

    errors
}

/// Validates every step, returning only the steps that have errors.
pub fn validate_all(
    definition: &FormDefinition,
    draft: &DraftRecord,
) -> Vec<(usize, ValidationErrors)> {
    (0..definition.step_count())
        .map(|i| (i, validate_step(definition, i, draft)))
        .filter(|(_, errors)| !errors.is_empty())
        .collect()
}

fn is_valid_count(value: &FieldValue) -> bool {
    matches!(value.as_number(), Some(n) if n.is_finite() && n >= 0.0)
}
