use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    constants,
    functional::{
        validation_engine::ValidatorSet,
        validation_rules::{list, required, FieldValidator, Match},
    },
    models::customer::CustomerField,
};

static PHONE_NUMBER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(constants::PHONE_NUMBER_PATTERN).unwrap());

static CUSTOMER_VALIDATORS: Lazy<ValidatorSet> = Lazy::new(customer_validator);

/// Build the validator set for the customer form.
///
/// Phone numbers report the required message before the format message.
pub fn customer_validator() -> ValidatorSet {
    ValidatorSet::new()
        .field(
            CustomerField::FirstName.name(),
            required(constants::MESSAGE_FIRST_NAME_REQUIRED),
        )
        .field(
            CustomerField::LastName.name(),
            required(constants::MESSAGE_LAST_NAME_REQUIRED),
        )
        .field(
            CustomerField::PhoneNumber.name(),
            list(vec![
                required(constants::MESSAGE_PHONE_NUMBER_REQUIRED).boxed(),
                Match::new(
                    PHONE_NUMBER_REGEX.clone(),
                    constants::MESSAGE_PHONE_NUMBER_FORMAT,
                )
                .boxed(),
            ]),
        )
}

/// Shared customer validator set, built on first use.
pub fn customer_validators() -> &'static ValidatorSet {
    &CUSTOMER_VALIDATORS
}
