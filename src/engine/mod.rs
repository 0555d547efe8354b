use crate::error::UpdateError;
use crate::schema::{FormDefinition, StepDescriptor};
use crate::store::DraftStore;
use crate::validation::{ValidationErrors, validate_step};
use crate::value::{DraftRecord, FieldValue};
use tracing::{debug, info};

mod builder;
mod submission;

pub use builder::FormEngineBuilder;
pub use submission::{SUBMISSION_FAILED_NOTICE, SubmissionTicket};

/// Outcome of `FormEngine::advance`.
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    /// The step passed validation and the pointer moved forward.
    Moved { from: usize, to: usize },
    /// The step passed validation but it is already the last one.
    Stayed,
    /// The step has errors. `focus` is the first failing field in declared order.
    Blocked {
        focus: String,
        errors: ValidationErrors,
    },
}

/// How a step is presented in the step list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Current,
    Locked,
}

impl StepStatus {
    /// Only steps up to the current one can be navigated to directly.
    pub fn is_clickable(&self) -> bool {
        !matches!(self, StepStatus::Locked)
    }
}

/// Drives one editing session: the step pointer, the draft, the errors of the current
/// step and the submit/reset lifecycle.
///
/// The engine owns the draft. Renderers and exporters borrow the engine (or take a
/// snapshot) and report edits back through `update`.
pub struct FormEngine {
    definition: FormDefinition,
    store: DraftStore,
    current_step: usize,
    draft: DraftRecord,
    errors: ValidationErrors,
    submission_in_flight: bool,
    submitted: bool,
    generation: u64,
}

impl FormEngine {
    pub fn builder(definition: FormDefinition) -> FormEngineBuilder {
        FormEngineBuilder::new(definition)
    }

    /// Stores an answer and persists the draft. No validation is run.
    pub fn update(
        &mut self,
        field: &str,
        value: impl Into<FieldValue>,
    ) -> Result<(), UpdateError> {
        let value = value.into();
        let location = self
            .definition
            .locate(field)
            .ok_or_else(|| UpdateError::UnknownField(field.to_string()))?;
        let kind = self.definition.steps()[location.step].fields[location.position].kind;
        if !kind.accepts(&value) {
            return Err(UpdateError::KindMismatch {
                field: field.to_string(),
                kind,
                found: value.shape(),
            });
        }
        if matches!(value, FieldValue::Number(n) if !n.is_finite()) {
            return Err(UpdateError::NonFiniteNumber(field.to_string()));
        }

        self.draft.set(field, value);
        if location.step == self.current_step {
            self.errors.clear();
        }
        self.store.save(&self.draft);
        Ok(())
    }

    /// Removes an answer, as when an input is emptied.
    pub fn clear_field(&mut self, field: &str) -> Result<(), UpdateError> {
        let location = self
            .definition
            .locate(field)
            .ok_or_else(|| UpdateError::UnknownField(field.to_string()))?;
        self.draft.remove(field);
        if location.step == self.current_step {
            self.errors.clear();
        }
        self.store.save(&self.draft);
        Ok(())
    }

    /// Validates the current step and moves forward if it passes.
    pub fn advance(&mut self) -> Advance {
        let errors = validate_step(&self.definition, self.current_step, &self.draft);
        if let Some(first) = errors.first() {
            let focus = first.field.clone();
            debug!(step = self.current_step, invalid = errors.len(), "advance blocked");
            self.errors = errors.clone();
            return Advance::Blocked { focus, errors };
        }

        self.errors.clear();
        if self.current_step + 1 < self.definition.step_count() {
            let from = self.current_step;
            self.current_step += 1;
            debug!(from, to = self.current_step, "advanced");
            Advance::Moved {
                from,
                to: self.current_step,
            }
        } else {
            Advance::Stayed
        }
    }

    /// Steps back without validating. Returns whether the pointer moved.
    pub fn retreat(&mut self) -> bool {
        if self.current_step == 0 {
            return false;
        }
        self.current_step -= 1;
        self.errors.clear();
        debug!(to = self.current_step, "retreated");
        true
    }

    /// Jumps to an already visited step. Jumping ahead is refused and returns `false`.
    pub fn jump_to(&mut self, target: usize) -> bool {
        if target > self.current_step {
            return false;
        }
        self.current_step = target;
        self.errors.clear();
        debug!(to = target, "jumped");
        true
    }

    /// Discards the session after the user confirmed it: empty draft, first step, and
    /// no stored copy. A submission still in flight is orphaned.
    pub fn reset(&mut self) {
        info!(fields = self.draft.len(), "resetting session");
        self.submitted = false;
        self.discard_session();
    }

    fn discard_session(&mut self) {
        self.draft.clear();
        self.errors.clear();
        self.current_step = 0;
        self.submission_in_flight = false;
        self.generation += 1;
        self.store.clear();
    }

    /// A detached copy of the draft for exporters.
    pub fn export_snapshot(&self) -> DraftRecord {
        self.draft.clone()
    }

    pub fn definition(&self) -> &FormDefinition {
        &self.definition
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn current_step_descriptor(&self) -> &StepDescriptor {
        &self.definition.steps()[self.current_step]
    }

    pub fn step_count(&self) -> usize {
        self.definition.step_count()
    }

    pub fn is_review_step(&self) -> bool {
        self.current_step == self.definition.review_index()
    }

    pub fn draft(&self) -> &DraftRecord {
        &self.draft
    }

    pub fn value(&self, field: &str) -> Option<&FieldValue> {
        self.draft.get(field)
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submission_in_flight
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Progress through the form in percent, counting the current step as reached.
    pub fn progress(&self) -> f64 {
        (self.current_step + 1) as f64 / self.step_count() as f64 * 100.0
    }

    pub fn step_statuses(&self) -> Vec<(&StepDescriptor, StepStatus)> {
        self.definition
            .steps()
            .iter()
            .enumerate()
            .map(|(i, step)| {
                let status = match i.cmp(&self.current_step) {
                    std::cmp::Ordering::Less => StepStatus::Completed,
                    std::cmp::Ordering::Equal => StepStatus::Current,
                    std::cmp::Ordering::Greater => StepStatus::Locked,
                };
                (step, status)
            })
            .collect()
    }
}

impl std::fmt::Debug for FormEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormEngine")
            .field("current_step", &self.current_step)
            .field("fields", &self.draft.len())
            .field("errors", &self.errors.len())
            .field("submission_in_flight", &self.submission_in_flight)
            .field("submitted", &self.submitted)
            .finish()
    }
}
