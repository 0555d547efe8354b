use crate::schema::FieldKind;
use thiserror::Error;

/// Errors that can occur while assembling a `FormDefinition`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DefinitionError {
    #[error("A form needs at least one step")]
    NoSteps,

    #[error("The last step '{0}' must be a review step without fields")]
    ReviewStepHasFields(String),

    #[error("Step id '{0}' is declared more than once")]
    DuplicateStepId(String),

    #[error("Field '{field}' in step '{step_id}' is already declared by an earlier field")]
    DuplicateFieldName { step_id: String, field: String },

    #[error("Field '{0}' is a choice field but declares no options")]
    MissingOptions(String),

    #[error("Field '{field}' of kind {kind} cannot accept a free 'other' answer")]
    OtherNotSupported { field: String, kind: FieldKind },

    #[error("Unknown field type '{type_name}' on field '{field}'")]
    UnknownFieldType { field: String, type_name: String },

    #[error("Failed to parse form definition JSON: {0}")]
    JsonParseError(String),
}

/// Errors returned when a value cannot be written into the draft.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UpdateError {
    #[error("Field '{0}' is not part of this form")]
    UnknownField(String),

    #[error("Field '{field}' of kind {kind} cannot hold a {found} value")]
    KindMismatch {
        field: String,
        kind: FieldKind,
        found: &'static str,
    },

    #[error("Field '{0}' only accepts finite numbers")]
    NonFiniteNumber(String),
}

/// Errors raised by a `DraftStorage` backend. The `DraftStore` never lets these escape.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage I/O failed for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Stored draft under key '{key}' could not be decoded: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Draft could not be encoded: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Storage backend unavailable: {0}")]
    Unavailable(String),
}

/// Errors produced by a submission `Transport`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    #[error("Request could not be delivered: {0}")]
    Network(String),

    #[error("Endpoint answered with non-success status {0}")]
    Status(u16),

    #[error("Record could not be encoded: {0}")]
    Encode(String),
}

/// Errors returned by `FormEngine::submit` and `FormEngine::begin_submission`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    #[error("Submission is only possible from the review step (current step is {current})")]
    NotOnReviewStep { current: usize },

    #[error("A submission is already in flight")]
    InFlight,

    #[error("This session was already submitted; reset it to start a new one")]
    AlreadySubmitted,

    #[error("The current step has {0} invalid field(s)")]
    Invalid(usize),

    #[error("{notice}")]
    Transport {
        notice: &'static str,
        #[source]
        source: TransportError,
    },

    #[error("The submission ticket belongs to a session that was reset")]
    StaleTicket,
}

/// Errors that can occur while writing an export artifact.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to serialize draft: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Could not write export file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
