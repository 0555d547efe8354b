use super::definition::FormDefinition;
use super::field::{FieldDescriptor, FieldKind};
use super::step::StepDescriptor;
use crate::error::DefinitionError;
use serde::Deserialize;

/// A trait for custom configuration models that can be converted into a `FormDefinition`.
///
/// Implement it on your own structs to feed forms from any source format into the engine.
///
/// # Example
///
/// ```rust
/// use stepform::prelude::*;
/// use stepform::error::DefinitionError;
///
/// struct Survey { questions: Vec<String> }
///
/// impl IntoForm for Survey {
///     fn into_form(self) -> Result<FormDefinition, DefinitionError> {
///         let fields = self
///             .questions
///             .iter()
///             .enumerate()
///             .map(|(i, q)| FieldDescriptor::new(&format!("q{}", i), q, FieldKind::Text))
///             .collect();
///         FormDefinition::new(vec![
///             StepDescriptor::new("questions", "Questions", fields),
///             StepDescriptor::review("review", "Review"),
///         ])
///     }
/// }
///
/// let form = Survey { questions: vec!["Name?".into()] }.into_form().unwrap();
/// assert_eq!(form.step_count(), 2);
/// ```
pub trait IntoForm {
    /// Consumes the object and converts it into a validated form definition.
    fn into_form(self) -> Result<FormDefinition, DefinitionError>;
}

impl IntoForm for Vec<StepDescriptor> {
    fn into_form(self) -> Result<FormDefinition, DefinitionError> {
        FormDefinition::new(self)
    }
}

/// Form definition file layout, a JSON array of steps.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct RawForm {
    pub steps: Vec<RawStep>,
}

#[derive(Debug, Deserialize)]
pub struct RawStep {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Vec<RawField>,
}

#[derive(Debug, Deserialize)]
pub struct RawField {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub required: bool,
    pub placeholder: Option<String>,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default, alias = "hasOther")]
    pub has_other: bool,
}

impl RawForm {
    pub fn from_json(json: &str) -> Result<Self, DefinitionError> {
        serde_json::from_str(json).map_err(|e| DefinitionError::JsonParseError(e.to_string()))
    }
}

impl IntoForm for RawForm {
    fn into_form(self) -> Result<FormDefinition, DefinitionError> {
        let steps = self
            .steps
            .into_iter()
            .map(|raw_step| {
                let fields = raw_step
                    .fields
                    .into_iter()
                    .map(|raw_field| {
                        let kind = FieldKind::from_tag(&raw_field.type_name).ok_or_else(|| {
                            DefinitionError::UnknownFieldType {
                                field: raw_field.name.clone(),
                                type_name: raw_field.type_name.clone(),
                            }
                        })?;
                        Ok(FieldDescriptor {
                            name: raw_field.name,
                            label: raw_field.label,
                            kind,
                            required: raw_field.required,
                            options: raw_field.options,
                            allows_free_other: raw_field.has_other,
                            placeholder: raw_field.placeholder,
                        })
                    })
                    .collect::<Result<Vec<_>, DefinitionError>>()?;
                Ok(StepDescriptor {
                    id: raw_step.id,
                    title: raw_step.title,
                    description: raw_step.description,
                    fields,
                })
            })
            .collect::<Result<Vec<_>, DefinitionError>>()?;

        FormDefinition::new(steps)
    }
}
