use crate::value::FieldValue;
use std::fmt;

/// The input widget family a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Text,
    TextArea,
    Number,
    Currency,
    Percentage,
    Select,
    Checkboxes,
}

impl FieldKind {
    /// Resolves the type tag used in form definition files.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "text" => Some(FieldKind::Text),
            "textarea" => Some(FieldKind::TextArea),
            "number" => Some(FieldKind::Number),
            "currency" => Some(FieldKind::Currency),
            "percentage" => Some(FieldKind::Percentage),
            "select" => Some(FieldKind::Select),
            "checkboxes" => Some(FieldKind::Checkboxes),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::TextArea => "textarea",
            FieldKind::Number => "number",
            FieldKind::Currency => "currency",
            FieldKind::Percentage => "percentage",
            FieldKind::Select => "select",
            FieldKind::Checkboxes => "checkboxes",
        }
    }

    /// Choice kinds must declare their options.
    pub fn has_options(&self) -> bool {
        matches!(self, FieldKind::Select | FieldKind::Checkboxes)
    }

    /// Kinds whose answer is stored as a number.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            FieldKind::Number | FieldKind::Currency | FieldKind::Percentage
        )
    }

    /// Whether a value of the given shape may be stored for a field of this kind.
    pub fn accepts(&self, value: &FieldValue) -> bool {
        match value {
            FieldValue::Text(_) => matches!(
                self,
                FieldKind::Text | FieldKind::TextArea | FieldKind::Select
            ),
            FieldValue::Number(_) => self.is_numeric(),
            FieldValue::Selection(_) => matches!(self, FieldKind::Checkboxes),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Static description of a single input.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub options: Vec<String>,
    pub allows_free_other: bool,
    pub placeholder: Option<String>,
}

impl FieldDescriptor {
    /// Creates an optional field without options.
    pub fn new(name: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            required: false,
            options: Vec::new(),
            allows_free_other: false,
            placeholder: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_options(mut self, options: &[&str]) -> Self {
        self.options = options.iter().map(|o| o.to_string()).collect();
        self
    }

    /// Adds the free-text "other, please specify" entry to a checkbox group.
    pub fn with_other(mut self) -> Self {
        self.allows_free_other = true;
        self
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }
}
