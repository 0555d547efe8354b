//! Common test utilities for building forms, sessions and collaborators.
use async_trait::async_trait;
use stepform::prelude::*;
use std::sync::{Arc, Mutex};

/// A two-step form plus review.
///
/// Step 0: `name` (required text), `age` (required number), `tags` (required checkboxes
/// with other), `notes` (optional). Step 1: `budget` (optional currency).
#[allow(dead_code)]
pub fn create_small_form() -> FormDefinition {
    FormDefinition::new(vec![
        StepDescriptor::new(
            "about",
            "About you",
            vec![
                FieldDescriptor::new("name", "Name", FieldKind::Text).required(),
                FieldDescriptor::new("age", "Age", FieldKind::Number).required(),
                FieldDescriptor::new("tags", "Tags", FieldKind::Checkboxes)
                    .required()
                    .with_options(&["a", "b", "c"])
                    .with_other(),
                FieldDescriptor::new("notes", "Notes", FieldKind::TextArea),
            ],
        ),
        StepDescriptor::new(
            "money",
            "Money",
            vec![FieldDescriptor::new("budget", "Budget", FieldKind::Currency)],
        ),
        StepDescriptor::review("review", "Review"),
    ])
    .expect("small form is well formed")
}

#[allow(dead_code)]
pub fn create_briefing_engine() -> FormEngine {
    FormEngine::builder(briefing_form().expect("briefing form is well formed")).build()
}

/// Engine over the briefing form whose store shares slots with the returned handle.
#[allow(dead_code)]
pub fn create_briefing_engine_with_storage() -> (FormEngine, MemoryStorage) {
    let storage = MemoryStorage::new();
    let engine = FormEngine::builder(briefing_form().expect("briefing form is well formed"))
        .with_store(DraftStore::new(storage.clone()))
        .build();
    (engine, storage)
}

/// Answers every required field of the first briefing step.
#[allow(dead_code)]
pub fn fill_company_info(engine: &mut FormEngine) {
    engine.update("companyName", "Acme").unwrap();
    engine.update("segment", "Retail").unwrap();
    engine.update("marketTime", "2 years").unwrap();
    engine.update("location", "Nacional").unwrap();
    engine.update("responsible", "Jane").unwrap();
}

/// Fills every required briefing field and walks the engine to the review step.
#[allow(dead_code)]
pub fn walk_briefing_to_review(engine: &mut FormEngine) {
    fill_company_info(engine);
    engine.update("expectations", "More leads").unwrap();
    engine.update("desiredInvestment", 5000.0).unwrap();
    while !engine.is_review_step() {
        match engine.advance() {
            Advance::Moved { .. } => {}
            other => panic!("unexpected advance outcome: {:?}", other),
        }
    }
}

/// Transport double that records delivered records and answers with a fixed outcome.
#[allow(dead_code)]
#[derive(Clone)]
pub struct RecordingTransport {
    outcome: Result<(), TransportError>,
    pub delivered: Arc<Mutex<Vec<DraftRecord>>>,
}

#[allow(dead_code)]
impl RecordingTransport {
    pub fn accepting() -> Self {
        Self {
            outcome: Ok(()),
            delivered: Arc::default(),
        }
    }

    pub fn failing(error: TransportError) -> Self {
        Self {
            outcome: Err(error),
            delivered: Arc::default(),
        }
    }

    pub fn deliveries(&self) -> Vec<DraftRecord> {
        self.delivered.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn deliver(&self, record: &DraftRecord) -> Result<(), TransportError> {
        self.delivered.lock().unwrap().push(record.clone());
        self.outcome.clone()
    }
}
