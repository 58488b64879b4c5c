pub mod validators;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants;

/// Editable fields of the customer form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CustomerField {
    FirstName,
    LastName,
    PhoneNumber,
}

impl CustomerField {
    pub const ALL: [CustomerField; 3] = [
        CustomerField::FirstName,
        CustomerField::LastName,
        CustomerField::PhoneNumber,
    ];

    /// Wire and input name of the field (`firstName`, `lastName`, `phoneNumber`).
    pub fn name(self) -> &'static str {
        match self {
            CustomerField::FirstName => "firstName",
            CustomerField::LastName => "lastName",
            CustomerField::PhoneNumber => "phoneNumber",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CustomerField::FirstName => constants::LABEL_FIRST_NAME,
            CustomerField::LastName => constants::LABEL_LAST_NAME,
            CustomerField::PhoneNumber => constants::LABEL_PHONE_NUMBER,
        }
    }

    /// Looks a field up by its input name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

impl fmt::Display for CustomerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The record edited by the form and sent to the save endpoint.
///
/// Missing fields deserialize as empty strings, so partially filled props
/// still seed a usable record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Customer {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

impl Customer {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone_number: phone_number.into(),
        }
    }

    pub fn get(&self, field: CustomerField) -> &str {
        match field {
            CustomerField::FirstName => &self.first_name,
            CustomerField::LastName => &self.last_name,
            CustomerField::PhoneNumber => &self.phone_number,
        }
    }

    pub fn set(&mut self, field: CustomerField, value: impl Into<String>) {
        let slot = match field {
            CustomerField::FirstName => &mut self.first_name,
            CustomerField::LastName => &mut self.last_name,
            CustomerField::PhoneNumber => &mut self.phone_number,
        };
        *slot = value.into();
    }

    /// Field name and value pairs, ready for `validate_many`.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        CustomerField::ALL
            .into_iter()
            .map(move |field| (field.name(), self.get(field)))
    }
}

/// A customer as returned by the save endpoint.
///
/// The server-assigned `id` is kept as sent (number or string), and any
/// fields beyond the record itself are carried in `extra`, so the saved
/// record serializes back to the object the server returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedCustomer {
    pub id: Value,
    #[serde(flatten)]
    pub customer: Customer,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SavedCustomer {
    pub fn new(id: impl Into<Value>, customer: Customer) -> Self {
        Self {
            id: id.into(),
            customer,
            extra: Map::new(),
        }
    }
}
