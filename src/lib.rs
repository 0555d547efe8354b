//! # Stepform - Multi-Step Form Engine
//!
//! **Stepform** drives a configuration-defined, multi-step data-collection form. A form is
//! an ordered list of steps, each grouping a few typed fields, followed by a review step.
//! Answers accumulate in one flat draft record that is persisted after every edit, checked
//! step by step for required fields, and finally posted to a webhook.
//!
//! ## Core Workflow
//!
//! 1.  **Define the Form**: Build `StepDescriptor`s in code, load a JSON definition through
//!     `RawForm`, or implement `IntoForm` for your own configuration structs.
//! 2.  **Start a Session**: `FormEngine::builder(definition)` with a `DraftStore` restores
//!     any draft left by a previous session.
//! 3.  **Collect Answers**: A renderer shows the current step and reports edits with
//!     `update`. Navigation goes through `advance`, `retreat` and `jump_to`; only `advance`
//!     moves forward, and only when the current step validates.
//! 4.  **Submit**: On the review step, `submit` hands the record to a `Transport`.
//!
//! ## Quick Start
//!
//! ```rust
//! use stepform::prelude::*;
//!
//! let definition = FormDefinition::new(vec![
//!     StepDescriptor::new(
//!         "contact",
//!         "Contact",
//!         vec![
//!             FieldDescriptor::new("name", "Name", FieldKind::Text).required(),
//!             FieldDescriptor::new("budget", "Budget", FieldKind::Currency),
//!         ],
//!     ),
//!     StepDescriptor::review("review", "Review"),
//! ])
//! .unwrap();
//!
//! let mut engine = FormEngine::builder(definition)
//!     .with_store(DraftStore::in_memory())
//!     .build();
//!
//! // The required name is missing, so the engine refuses to move on.
//! assert!(matches!(engine.advance(), Advance::Blocked { .. }));
//! assert_eq!(engine.errors().get("name"), Some("required"));
//!
//! engine.update("name", "Acme").unwrap();
//! let (amount, display) = stepform::format::normalize(FieldKind::Currency, "1.500,00").unwrap();
//! assert_eq!(display, "R$\u{a0}1.500,00");
//! engine.update("budget", amount).unwrap();
//!
//! assert_eq!(engine.advance(), Advance::Moved { from: 0, to: 1 });
//! assert!(engine.is_review_step());
//! ```

pub mod engine;
pub mod error;
pub mod export;
pub mod format;
pub mod prelude;
pub mod schema;
pub mod store;
pub mod transport;
pub mod validation;
pub mod value;
