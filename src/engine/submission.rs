use super::FormEngine;
use crate::error::{SubmitError, TransportError};
use crate::transport::Transport;
use crate::validation::validate_step;
use crate::value::DraftRecord;
use tracing::{info, warn};

/// The single user-facing message for any failed submission.
pub const SUBMISSION_FAILED_NOTICE: &str = "Failed to send the form. Please try again later.";

/// A submission handed out by `FormEngine::begin_submission`.
///
/// Holds a snapshot of the record being delivered and the session generation it was
/// taken from, so a completion arriving after a reset can be recognised and dropped.
#[derive(Debug, Clone)]
pub struct SubmissionTicket {
    generation: u64,
    record: DraftRecord,
}

impl SubmissionTicket {
    pub fn record(&self) -> &DraftRecord {
        &self.record
    }
}

impl FormEngine {
    /// Submits the draft through `transport`. Single attempt, no retry.
    ///
    /// On success the draft and its stored copy are discarded and the delivered record
    /// is returned.
    pub async fn submit<T: Transport + ?Sized>(
        &mut self,
        transport: &T,
    ) -> Result<DraftRecord, SubmitError> {
        let ticket = self.begin_submission()?;
        let outcome = transport.deliver(ticket.record()).await;
        self.complete_submission(ticket, outcome)
    }

    /// Starts a submission without awaiting it. Navigation stays possible until
    /// `complete_submission` is called, but further submissions are refused.
    pub fn begin_submission(&mut self) -> Result<SubmissionTicket, SubmitError> {
        if self.submitted {
            return Err(SubmitError::AlreadySubmitted);
        }
        if self.submission_in_flight {
            return Err(SubmitError::InFlight);
        }
        if !self.is_review_step() {
            return Err(SubmitError::NotOnReviewStep {
                current: self.current_step,
            });
        }

        let errors = validate_step(&self.definition, self.current_step, &self.draft);
        if !errors.is_empty() {
            let count = errors.len();
            self.errors = errors;
            return Err(SubmitError::Invalid(count));
        }

        self.errors.clear();
        self.submission_in_flight = true;
        info!(fields = self.draft.len(), "submission started");
        Ok(SubmissionTicket {
            generation: self.generation,
            record: self.draft.clone(),
        })
    }

    /// Records the transport outcome for `ticket`.
    pub fn complete_submission(
        &mut self,
        ticket: SubmissionTicket,
        outcome: Result<(), TransportError>,
    ) -> Result<DraftRecord, SubmitError> {
        if ticket.generation != self.generation {
            warn!(
                ticket = ticket.generation,
                session = self.generation,
                "discarding submission result from a reset session"
            );
            return Err(SubmitError::StaleTicket);
        }

        self.submission_in_flight = false;
        match outcome {
            Ok(()) => {
                info!(fields = ticket.record.len(), "submission accepted");
                self.submitted = true;
                self.discard_session();
                Ok(ticket.record)
            }
            Err(source) => {
                warn!(error = %source, "submission failed");
                Err(SubmitError::Transport {
                    notice: SUBMISSION_FAILED_NOTICE,
                    source,
                })
            }
        }
    }
}
