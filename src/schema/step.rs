use super::field::FieldDescriptor;

/// One screen of related fields, validated as a unit.
#[derive(Debug, Clone, PartialEq)]
pub struct StepDescriptor {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub fields: Vec<FieldDescriptor>,
}

impl StepDescriptor {
    pub fn new(id: &str, title: &str, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: None,
            fields,
        }
    }

    /// Creates the terminal review step, which carries no fields.
    pub fn review(id: &str, title: &str) -> Self {
        Self::new(id, title, Vec::new())
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn is_review(&self) -> bool {
        self.fields.is_empty()
    }
}
