// Validation messages
pub const MESSAGE_FIRST_NAME_REQUIRED: &str = "First name is required";
pub const MESSAGE_LAST_NAME_REQUIRED: &str = "Last name is required";
pub const MESSAGE_PHONE_NUMBER_REQUIRED: &str = "Phone number is required";
pub const MESSAGE_PHONE_NUMBER_FORMAT: &str =
    "Only numbers, spaces and these symbols are allowed: ( ) + -";
pub const MESSAGE_SAVE_FAILED: &str = "An error occurred during save.";

pub const PHONE_NUMBER_PATTERN: &str = r"^[0-9+()\- ]*$";

// Form surface
pub const FORM_ID: &str = "customer";
pub const INPUT_TYPE_TEXT: &str = "text";
pub const LABEL_FIRST_NAME: &str = "First name";
pub const LABEL_LAST_NAME: &str = "Last name";
pub const LABEL_PHONE_NUMBER: &str = "Phone number";
pub const SUBMIT_LABEL: &str = "Add";

// Save endpoint
pub const CUSTOMERS_PATH: &str = "customers";
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

// Environment
pub const ENV_API_URL: &str = "CUSTOMER_API_URL";
pub const ENV_API_AUTHORIZATION: &str = "CUSTOMER_API_AUTHORIZATION";
pub const ENV_LOG_FORMAT: &str = "CUSTOMER_FORM_LOG_FORMAT";
pub const DEFAULT_LOG_FILTER: &str = "info";
