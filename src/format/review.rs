use super::{format_currency, format_percentage};
use crate::schema::{FieldDescriptor, FieldKind, FormDefinition};
use crate::value::{DraftRecord, FieldValue};
use itertools::Itertools;

/// Shown for fields without an answer.
pub const NOT_PROVIDED: &str = "Not provided";

/// One answered (or unanswered) field on the review screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewEntry {
    pub name: String,
    pub label: String,
    pub display: String,
    pub wide: bool,
}

/// All entries of one input step. `step` is the index to jump back to for editing.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewSection {
    pub step: usize,
    pub title: String,
    pub entries: Vec<ReviewEntry>,
}

/// Builds the read-only summary shown on the review step.
pub struct ReviewFormatter;

impl ReviewFormatter {
    /// Summarizes every input step of the form against the draft.
    pub fn sections(definition: &FormDefinition, draft: &DraftRecord) -> Vec<ReviewSection> {
        definition
            .input_steps()
            .iter()
            .enumerate()
            .map(|(step, descriptor)| ReviewSection {
                step,
                title: descriptor.title.clone(),
                entries: descriptor
                    .fields
                    .iter()
                    .map(|field| ReviewEntry {
                        name: field.name.clone(),
                        label: field.label.clone(),
                        display: Self::display_value(field, draft.get(&field.name)),
                        wide: field.kind == FieldKind::TextArea,
                    })
                    .collect(),
            })
            .collect()
    }

    /// Formats a single answer for display.
    pub fn display_value(field: &FieldDescriptor, value: Option<&FieldValue>) -> String {
        let Some(value) = value else {
            return NOT_PROVIDED.to_string();
        };
        match (value, field.kind) {
            (FieldValue::Text(s), _) if s.is_empty() => NOT_PROVIDED.to_string(),
            (FieldValue::Selection(s), _) if s.is_empty() => NOT_PROVIDED.to_string(),
            (FieldValue::Selection(s), _) => s
                .selected
                .iter()
                .cloned()
                .chain(s.other.iter().map(|o| format!("Other: {}", o)))
                .join(", "),
            (FieldValue::Number(n), FieldKind::Currency) => format_currency(*n),
            (FieldValue::Number(n), FieldKind::Percentage) => format_percentage(*n),
            (other, _) => other.to_string(),
        }
    }

    /// Plain-text rendering of the review screen.
    pub fn render_text(definition: &FormDefinition, draft: &DraftRecord) -> String {
        Self::sections(definition, draft)
            .iter()
            .map(|section| {
                let body = section
                    .entries
                    .iter()
                    .map(|e| format!("  {}: {}", e.label, e.display))
                    .join("\n");
                format!("[{}] {}\n{}", section.step + 1, section.title, body)
            })
            .join("\n\n")
    }
}
