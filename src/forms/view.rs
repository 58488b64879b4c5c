//! Serializable view model of the customer form.
//!
//! Rendering is left to the caller; this is the state a renderer needs,
//! re-derived from the controller on every call to `CustomerForm::view`.

use serde::Serialize;

use crate::{constants, models::customer::CustomerField};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormView {
    pub id: &'static str,
    /// Generic save-failure banner, present only after a failed submission.
    pub banner: Option<&'static str>,
    pub fields: Vec<FieldView>,
    pub submit: SubmitView,
}

impl FormView {
    pub fn new(submission_failed: bool, fields: Vec<FieldView>, submit: SubmitView) -> Self {
        Self {
            id: constants::FORM_ID,
            banner: submission_failed.then_some(constants::MESSAGE_SAVE_FAILED),
            fields,
            submit,
        }
    }

    pub fn field(&self, field: CustomerField) -> Option<&FieldView> {
        self.fields.iter().find(|view| view.name == field.name())
    }
}

/// A labelled text input; `label_for` always equals the input's `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldView {
    pub label: &'static str,
    pub label_for: &'static str,
    pub input_type: &'static str,
    pub id: &'static str,
    pub name: &'static str,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FieldView {
    pub fn new(field: CustomerField, value: impl Into<String>, error: Option<String>) -> Self {
        Self {
            label: field.label(),
            label_for: field.name(),
            input_type: constants::INPUT_TYPE_TEXT,
            id: field.name(),
            name: field.name(),
            value: value.into(),
            error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitView {
    pub value: &'static str,
    pub disabled: bool,
}

impl SubmitView {
    pub fn new(disabled: bool) -> Self {
        Self {
            value: constants::SUBMIT_LABEL,
            disabled,
        }
    }
}
