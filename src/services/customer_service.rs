//! Save endpoint for customer records
//!
//! [`CustomerGateway`] is the seam between the form controller and the
//! network. [`HttpCustomerGateway`] talks to `POST /customers` with `awc`;
//! tests substitute in-memory gateways.

use awc::http::header::{self, HeaderValue};
use log::{debug, warn};
use url::Url;

use crate::{
    config::ApiConfig,
    error::{ConfigError, SaveError},
    models::customer::{Customer, SavedCustomer},
};

/// Persists a customer and returns the stored record.
///
/// Futures are not required to be `Send`: the form runs on a single-threaded
/// event loop.
#[async_trait::async_trait(?Send)]
pub trait CustomerGateway {
    async fn save(&self, customer: &Customer) -> Result<SavedCustomer, SaveError>;
}

/// HTTP implementation of [`CustomerGateway`].
///
/// Sends one JSON request per call, with no timeout and no retry.
pub struct HttpCustomerGateway {
    client: awc::Client,
    endpoint: Url,
}

impl HttpCustomerGateway {
    /// Builds a gateway for the save endpoint described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAuthorization`] when the configured
    /// authorization value cannot be sent as a header.
    pub fn new(config: &ApiConfig) -> Result<Self, ConfigError> {
        let endpoint = config.customers_url()?;

        let mut builder = awc::Client::builder().disable_timeout();
        if let Some(authorization) = config.authorization() {
            let value = HeaderValue::from_str(authorization)
                .map_err(|_| ConfigError::InvalidAuthorization)?;
            builder = builder.add_default_header((header::AUTHORIZATION, value));
        }

        Ok(Self {
            client: builder.finish(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait::async_trait(?Send)]
impl CustomerGateway for HttpCustomerGateway {
    async fn save(&self, customer: &Customer) -> Result<SavedCustomer, SaveError> {
        debug!("POST {}", self.endpoint);

        let mut response = self
            .client
            .post(self.endpoint.as_str())
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .send_json(customer)
            .await
            .map_err(|e| SaveError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Save endpoint {} responded with {}", self.endpoint, status);
            return Err(SaveError::Status(status.as_u16()));
        }

        // Parsed regardless of the response's content type
        let body = response
            .body()
            .await
            .map_err(|e| SaveError::Transport(e.to_string()))?;
        serde_json::from_slice::<SavedCustomer>(&body).map_err(|e| SaveError::Decode(e.to_string()))
    }
}
