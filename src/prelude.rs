//! Prelude module for convenient imports
//!
//! Re-exports the types needed to define a form and drive a session.
//!
//! # Example
//!
//! ```rust,no_run
//! use stepform::prelude::*;
//!
//! # fn run_example() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let definition = briefing_form()?;
//! let mut engine = FormEngine::builder(definition)
//!     .with_store(DraftStore::new(FileStorage::new(".stepform")))
//!     .build();
//!
//! engine.update("companyName", "Acme")?;
//! println!("{}", ReviewFormatter::render_text(engine.definition(), engine.draft()));
//! # Ok(())
//! # }
//! ```

// Session
pub use crate::engine::{Advance, FormEngine, StepStatus, SubmissionTicket};

// Schema
pub use crate::schema::briefing::briefing_form;
pub use crate::schema::{FieldDescriptor, FieldKind, FormDefinition, IntoForm, StepDescriptor};

// Values and validation
pub use crate::validation::{ValidationErrors, validate_step};
pub use crate::value::{DraftRecord, FieldValue, Selection};

// Persistence and delivery
pub use crate::store::{DraftStorage, DraftStore, FileStorage, MemoryStorage};
pub use crate::transport::Transport;

// Presentation helpers
pub use crate::format::ReviewFormatter;

// Error types
pub use crate::error::{DefinitionError, SubmitError, TransportError, UpdateError};
