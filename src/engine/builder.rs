use super::FormEngine;
use crate::schema::FormDefinition;
use crate::store::DraftStore;
use crate::validation::ValidationErrors;

/// Configures a `FormEngine` before the session starts.
pub struct FormEngineBuilder {
    definition: FormDefinition,
    store: Option<DraftStore>,
}

impl FormEngineBuilder {
    pub fn new(definition: FormDefinition) -> Self {
        Self {
            definition,
            store: None,
        }
    }

    /// Persists the draft through `store`. Without one, the draft lives in memory only.
    pub fn with_store(mut self, store: DraftStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Starts the session, rehydrating any draft left in the store.
    pub fn build(self) -> FormEngine {
        let store = self.store.unwrap_or_else(DraftStore::in_memory);
        let draft = store.load();
        FormEngine {
            definition: self.definition,
            store,
            current_step: 0,
            draft,
            errors: ValidationErrors::new(),
            submission_in_flight: false,
            submitted: false,
            generation: 0,
        }
    }
}
