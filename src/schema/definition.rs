use super::field::FieldDescriptor;
use super::step::StepDescriptor;
use crate::error::DefinitionError;
use ahash::AHashMap;
use itertools::Itertools;

/// Where a field lives inside the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLocation {
    pub step: usize,
    pub position: usize,
}

/// The complete, validated form: an ordered sequence of steps ending in a review step.
///
/// Field names are unique across the whole form because answers are collected into
/// one flat draft record.
#[derive(Debug, Clone)]
pub struct FormDefinition {
    steps: Vec<StepDescriptor>,
    index: AHashMap<String, FieldLocation>,
}

impl FormDefinition {
    /// Checks the structural rules of a form and builds its field index.
    pub fn new(steps: Vec<StepDescriptor>) -> Result<Self, DefinitionError> {
        let last = steps.last().ok_or(DefinitionError::NoSteps)?;
        if !last.is_review() {
            return Err(DefinitionError::ReviewStepHasFields(last.id.clone()));
        }

        if let Some(id) = steps.iter().map(|s| s.id.as_str()).duplicates().next() {
            return Err(DefinitionError::DuplicateStepId(id.to_string()));
        }

        let mut index = AHashMap::new();
        for (step_idx, step) in steps.iter().enumerate() {
            for (position, field) in step.fields.iter().enumerate() {
                Self::check_field(field)?;
                let location = FieldLocation {
                    step: step_idx,
                    position,
                };
                if index.insert(field.name.clone(), location).is_some() {
                    return Err(DefinitionError::DuplicateFieldName {
                        step_id: step.id.clone(),
                        field: field.name.clone(),
                    });
                }
            }
        }

        Ok(Self { steps, index })
    }

    fn check_field(field: &FieldDescriptor) -> Result<(), DefinitionError> {
        if field.kind.has_options() && field.options.is_empty() {
            return Err(DefinitionError::MissingOptions(field.name.clone()));
        }
        if field.allows_free_other && field.kind != super::FieldKind::Checkboxes {
            return Err(DefinitionError::OtherNotSupported {
                field: field.name.clone(),
                kind: field.kind,
            });
        }
        Ok(())
    }

    pub fn steps(&self) -> &[StepDescriptor] {
        &self.steps
    }

    pub fn step(&self, index: usize) -> Option<&StepDescriptor> {
        self.steps.get(index)
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Index of the terminal review step.
    pub fn review_index(&self) -> usize {
        self.steps.len() - 1
    }

    /// Steps that collect answers, i.e. everything before the review step.
    pub fn input_steps(&self) -> &[StepDescriptor] {
        &self.steps[..self.review_index()]
    }

    pub fn locate(&self, name: &str) -> Option<FieldLocation> {
        self.index.get(name).copied()
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.locate(name)
            .map(|loc| &self.steps[loc.step].fields[loc.position])
    }

    pub fn field_count(&self) -> usize {
        self.index.len()
    }
}
