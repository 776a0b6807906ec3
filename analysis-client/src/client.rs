use std::{sync::Arc, time::Duration};

use reqwest::{header, Url};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    captures::CapturesEndpoints,
    error::{ConfigError, Error},
    statistics::StatisticsEndpoints,
};

const DEFAULT_USER_AGENT: &str = concat!("silvaguard/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Handle to the Analysis Service.
///
/// Cheap to clone; clones share the underlying connection pool. Every request carries the
/// configured bearer credential and is bounded by the configured timeout.
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientRef>,
}

struct ClientRef {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl Client {
    /// Creates a [`ClientBuilder`].
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Capture discovery endpoints.
    pub fn captures(&self) -> CapturesEndpoints<'_> {
        CapturesEndpoints::new(self)
    }

    /// Vegetation and loss statistics endpoints.
    pub fn statistics(&self) -> StatisticsEndpoints<'_> {
        StatisticsEndpoints::new(self)
    }

    pub(crate) async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, Error>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self
            .inner
            .base_url
            .join(path)
            .map_err(|e| Error::InvalidResponse(format!("failed to build URL for {path}: {e}")))?;

        tracing::debug!("POST {}", url);

        let response = self
            .inner
            .http
            .post(url)
            .bearer_auth(&self.inner.api_key)
            .json(body)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<R>().await?)
    }
}

/// Builder for [`Client`].
#[derive(Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    /// Base URL of the Analysis Service, e.g. `https://analysis.example.com`.
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = Some(base_url.to_string());
        self
    }

    /// Bearer credential sent with every request.
    pub fn api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    /// Upper bound for a single request, connection through body. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validates the settings and builds the client.
    ///
    /// # Returns
    /// - `Ok(Client)` - Client ready for use
    /// - `Err(Error::ConfigError)` - Base URL or API key missing/invalid, or zero timeout
    /// - `Err(Error::ReqwestError)` - The HTTP client could not be constructed
    pub fn build(self) -> Result<Client, Error> {
        let raw_url = match self.base_url {
            Some(url) if !url.trim().is_empty() => url,
            _ => return Err(ConfigError::MissingBaseUrl.into()),
        };

        // Joining relative endpoint paths requires a trailing slash on the base
        let normalized = if raw_url.ends_with('/') {
            raw_url.clone()
        } else {
            format!("{raw_url}/")
        };
        let base_url = Url::parse(&normalized).map_err(|e| ConfigError::InvalidBaseUrl {
            url: raw_url.clone(),
            reason: e.to_string(),
        })?;

        let api_key = match self.api_key {
            Some(key) if !key.trim().is_empty() => key,
            _ => return Err(ConfigError::MissingApiKey.into()),
        };

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout.into());
        }

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let http = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT))
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Client {
            inner: Arc::new(ClientRef {
                http,
                base_url,
                api_key,
            }),
        })
    }
}
