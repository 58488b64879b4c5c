//! Record Validation Engine
//!
//! Runs a [`ValidatorSet`] over a record (full or partial) and collects the
//! failing fields into a [`ValidationResult`]. Everything here is pure: the
//! engine never mutates its inputs and never fails; a failing field is data,
//! not an error.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::functional::validation_rules::FieldValidator;

/// Field name to validator mapping, built once per form type
#[derive(Default)]
pub struct ValidatorSet {
    validators: BTreeMap<String, Box<dyn FieldValidator>>,
}

impl ValidatorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `validator` for `field_name`, replacing any previous one.
    ///
    /// # Examples
    ///
    /// ```
    /// let validators = ValidatorSet::new()
    ///     .field("firstName", required("First name is required"))
    ///     .field("lastName", required("Last name is required"));
    /// assert_eq!(validators.len(), 2);
    /// ```
    pub fn field<V>(mut self, field_name: impl Into<String>, validator: V) -> Self
    where
        V: FieldValidator + 'static,
    {
        self.validators
            .insert(field_name.into(), Box::new(validator));
        self
    }

    pub fn get(&self, field_name: &str) -> Option<&dyn FieldValidator> {
        self.validators.get(field_name).map(|validator| validator.as_ref())
    }

    pub fn contains(&self, field_name: &str) -> bool {
        self.validators.contains_key(field_name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.validators.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl std::fmt::Debug for ValidatorSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.validators.keys()).finish()
    }
}

/// Failing fields and their messages.
///
/// A field with no entry is valid. Entries are kept in field-name order so
/// the result serializes deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationResult {
    errors: BTreeMap<String, String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field_name: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(field_name.into(), message.into());
    }

    pub fn get(&self, field_name: &str) -> Option<&str> {
        self.errors.get(field_name).map(String::as_str)
    }

    /// Overwrites the entry for a single field, removing it when `message` is `None`.
    ///
    /// Entries for every other field are preserved.
    pub fn merge_field(&mut self, field_name: &str, message: Option<String>) {
        match message {
            Some(message) => {
                self.errors.insert(field_name.to_string(), message);
            }
            None => {
                self.errors.remove(field_name);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors
            .iter()
            .map(|(field, message)| (field.as_str(), message.as_str()))
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl<K> FromIterator<(K, Option<String>)> for ValidationResult
where
    K: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, Option<String>)>>(iter: I) -> Self {
        let errors = iter
            .into_iter()
            .filter_map(|(field, message)| message.map(|message| (field.into(), message)))
            .collect();
        Self { errors }
    }
}

/// Validates every field of `record` that has a configured validator.
///
/// `record` may contain a single field (blur) or all of them (submit). Fields
/// without a validator are ignored, and only failing fields appear in the
/// result, so its keys are always a subset of the validator set's keys.
///
/// # Examples
///
/// ```
/// let validators = ValidatorSet::new().field("a", required("req"));
/// let result = validate_many(&validators, [("a", ""), ("b", "ignored")]);
/// assert_eq!(result.get("a"), Some("req"));
/// assert_eq!(result.len(), 1);
/// ```
pub fn validate_many<I, K, V>(validators: &ValidatorSet, record: I) -> ValidationResult
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    record
        .into_iter()
        .filter_map(|(field_name, value)| {
            let field_name = field_name.as_ref();
            validators
                .get(field_name)
                .map(|validator| (field_name.to_string(), validator.check(value.as_ref())))
        })
        .collect()
}

/// Returns `true` when `field_name` currently holds a non-empty message.
pub fn has_error(result: &ValidationResult, field_name: &str) -> bool {
    result
        .get(field_name)
        .is_some_and(|message| !message.is_empty())
}

/// Returns `true` when at least one field holds a non-empty message.
pub fn any_errors(result: &ValidationResult) -> bool {
    result.iter().any(|(_, message)| !message.is_empty())
}
