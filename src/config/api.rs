use std::env;

use url::Url;

use crate::{constants, error::ConfigError};

/// Location of the customer API and the credentials sent with each request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Url,
    authorization: Option<String>,
}

impl ApiConfig {
    /// Parses `base_url` as the API root.
    ///
    /// The path is normalised to end with `/` so endpoint paths are appended
    /// to it rather than replacing its last segment.
    ///
    /// # Examples
    ///
    /// ```
    /// let config = ApiConfig::new("http://localhost:3000/api").unwrap();
    /// assert_eq!(
    ///     config.customers_url().unwrap().as_str(),
    ///     "http://localhost:3000/api/customers"
    /// );
    /// ```
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let mut url = Url::parse(base_url).map_err(|source| ConfigError::InvalidUrl {
            value: base_url.to_string(),
            source,
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(url.scheme().to_string()));
        }

        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(Self {
            base_url: url,
            authorization: None,
        })
    }

    /// Reads the configuration from the environment, loading `.env` first.
    ///
    /// `CUSTOMER_API_URL` defaults to `http://localhost:3000`;
    /// `CUSTOMER_API_AUTHORIZATION` is optional.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let base_url =
            env::var(constants::ENV_API_URL).unwrap_or_else(|_| constants::DEFAULT_API_URL.to_string());
        let config = Self::new(&base_url)?;

        Ok(match env::var(constants::ENV_API_AUTHORIZATION) {
            Ok(value) if !value.is_empty() => config.with_authorization(value),
            _ => config,
        })
    }

    pub fn with_authorization(mut self, authorization: impl Into<String>) -> Self {
        self.authorization = Some(authorization.into());
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn authorization(&self) -> Option<&str> {
        self.authorization.as_deref()
    }

    /// URL of the save endpoint (`POST {base}/customers`).
    pub fn customers_url(&self) -> Result<Url, ConfigError> {
        self.base_url
            .join(constants::CUSTOMERS_PATH)
            .map_err(|source| ConfigError::InvalidUrl {
                value: constants::CUSTOMERS_PATH.to_string(),
                source,
            })
    }
}
