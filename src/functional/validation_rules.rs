//! Composable Field Validators
//!
//! This module provides pure, composable validators for single form fields.
//! A validator maps a raw field value to either no error (`None`) or an error
//! message (`Some(message)`). Validators carry their configuration (message,
//! pattern) as plain data, so new fields and rules only need new validator
//! values, never changes to the engine.

use regex::Regex;

/// Core capability shared by every field validator.
pub trait FieldValidator: Send + Sync {
    /// Checks a raw field value, returning the error message when it fails.
    fn check(&self, value: &str) -> Option<String>;

    /// Boxes the validator so it can be stored alongside validators of other types.
    fn boxed(self) -> Box<dyn FieldValidator>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

impl<F> FieldValidator for F
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn check(&self, value: &str) -> Option<String> {
        self(value)
    }
}

/// Required field validation - fails when the value is empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Required {
    message: String,
}

impl FieldValidator for Required {
    /// Returns the configured message when `value` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let rule = required("First name is required");
    /// assert_eq!(rule.check(""), Some("First name is required".to_string()));
    /// assert_eq!(rule.check("Ann"), None);
    /// ```
    fn check(&self, value: &str) -> Option<String> {
        value.is_empty().then(|| self.message.clone())
    }
}

/// Creates a [`Required`] validator reporting `message` for empty values.
pub fn required(message: impl Into<String>) -> Required {
    Required {
        message: message.into(),
    }
}

/// Pattern validation for non-empty values.
///
/// Empty values always pass: emptiness is the concern of [`Required`], so a
/// form never reports a format error for a field the user has not filled in.
#[derive(Debug, Clone)]
pub struct Match {
    pattern: Regex,
    message: String,
}

impl Match {
    /// Creates a pattern validator from an already compiled regex.
    pub fn new(pattern: Regex, message: impl Into<String>) -> Self {
        Self {
            pattern,
            message: message.into(),
        }
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

impl FieldValidator for Match {
    /// Returns the configured message when a non-empty `value` does not match the pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// let rule = matches(r"^[0-9]*$", "digits only").unwrap();
    /// assert_eq!(rule.check(""), None);
    /// assert_eq!(rule.check("12a"), Some("digits only".to_string()));
    /// assert_eq!(rule.check("123"), None);
    /// ```
    fn check(&self, value: &str) -> Option<String> {
        if value.is_empty() || self.pattern.is_match(value) {
            return None;
        }
        Some(self.message.clone())
    }
}

/// Compiles `pattern` into a [`Match`] validator.
///
/// # Errors
///
/// Returns the `regex::Error` when `pattern` is not a valid regular expression.
pub fn matches(pattern: &str, message: impl Into<String>) -> Result<Match, regex::Error> {
    Ok(Match::new(Regex::new(pattern)?, message))
}

/// Ordered rule chain that stops at the first failing validator
pub struct List {
    validators: Vec<Box<dyn FieldValidator>>,
}

impl FieldValidator for List {
    /// Runs every validator left to right and returns the first message produced.
    ///
    /// The order encodes priority: with `required` ahead of `matches`, an empty
    /// value reports only the required message.
    fn check(&self, value: &str) -> Option<String> {
        self.validators
            .iter()
            .find_map(|validator| validator.check(value))
    }
}

impl std::fmt::Debug for List {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("List")
            .field("validators", &self.validators.len())
            .finish()
    }
}

/// Constructs a [`List`] that applies `validators` in sequence.
///
/// An empty list always passes.
pub fn list(validators: Vec<Box<dyn FieldValidator>>) -> List {
    List { validators }
}
