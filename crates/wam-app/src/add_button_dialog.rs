//! "Add a Website Button" dialog state

use wam_core::{CallToAction, ValidationError};

/// Which input of the dialog receives typed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddButtonField {
    #[default]
    Label,
    Url,
}

impl AddButtonField {
    pub fn toggle(self) -> Self {
        match self {
            AddButtonField::Label => AddButtonField::Url,
            AddButtonField::Url => AddButtonField::Label,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AddButtonState {
    pub label: String,
    pub url: String,
    pub field: AddButtonField,
    error: Option<String>,
}

impl AddButtonState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn value(&self, field: AddButtonField) -> &str {
        match field {
            AddButtonField::Label => &self.label,
            AddButtonField::Url => &self.url,
        }
    }

    pub fn set_value(&mut self, field: AddButtonField, text: impl Into<String>) {
        match field {
            AddButtonField::Label => self.label = text.into(),
            AddButtonField::Url => self.url = text.into(),
        }
    }

    /// Build the call-to-action, recording the failure inline on error
    pub fn save(&mut self) -> Result<CallToAction, ValidationError> {
        match CallToAction::new(self.label.clone(), self.url.clone()) {
            Ok(cta) => {
                self.error = None;
                Ok(cta)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }
}
