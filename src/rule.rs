use std::env;

use thiserror::Error;

const DESTINATION_VAR: &str = "REDIRECT_DESTINATION";
const STATIC_VAR: &str = "REDIRECT_STATIC";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("REDIRECT_DESTINATION is not set")]
    MissingDestination,
    #[error("REDIRECT_DESTINATION is empty")]
    EmptyDestination,
    #[error("REDIRECT_STATIC must be `true` or `false`, got {0:?}")]
    InvalidStaticFlag(String),
}

/// The two values baked in at deployment time: where to send clients, and
/// whether the original request uri is carried along.
#[derive(Debug, Clone)]
pub struct RedirectRule {
    destination: String,
    static_redirect: bool,
}

impl RedirectRule {
    pub fn new(destination: impl Into<String>, static_redirect: bool) -> Self {
        Self {
            destination: destination.into(),
            static_redirect,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let destination = lookup(DESTINATION_VAR).ok_or(ConfigError::MissingDestination)?;

        if destination.is_empty() {
            return Err(ConfigError::EmptyDestination);
        }

        let static_redirect = match lookup(STATIC_VAR) {
            Some(raw) => raw
                .parse::<bool>()
                .map_err(|_| ConfigError::InvalidStaticFlag(raw))?,
            None => false,
        };

        Ok(Self {
            destination,
            static_redirect,
        })
    }

    /// Computes the `location` header value for a request uri.
    ///
    /// The uri is appended verbatim, no separator normalization: a
    /// destination without a trailing slash runs straight into the path.
    pub fn location_for(&self, uri: &str) -> String {
        if self.static_redirect {
            self.destination.clone()
        } else {
            format!("{}{}", self.destination, uri)
        }
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn is_static(&self) -> bool {
        self.static_redirect
    }
}
