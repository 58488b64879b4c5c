//! Customer form: field validation and submission for a customer's name and
//! phone number.
//!
//! - [`functional::validation_rules`]: composable field validators
//!   (`required`, `matches`, `list`).
//! - [`functional::validation_engine`]: `validate_many`, `has_error`,
//!   `any_errors` over a [`ValidatorSet`](functional::validation_engine::ValidatorSet).
//! - [`forms::CustomerForm`]: change/blur/submit lifecycle.
//! - [`services::customer_service`]: the `POST /customers` save endpoint.
//!
//! Hosts call [`utils::logger::init_logging`] once at startup to route the
//! crate's `log` output through `tracing`, and build the gateway from
//! [`config::ApiConfig::from_env`].

pub mod config;
pub mod constants;
pub mod error;
pub mod forms;
pub mod functional;
pub mod models;
pub mod services;
pub mod utils;
