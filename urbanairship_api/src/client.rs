//! HTTP client for the UrbanAirship push API.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use reqwest::{
    header::{ACCEPT, CONTENT_TYPE},
    Method, Request, Response,
};
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::{
    executor::Executor,
    response::{check_response, decode_body},
    types::{Push, PushResponse},
    Error,
};

macro_rules! api_version {
    () => {
        "3"
    };
}

/// API version sent in the `Accept` media type.
pub const API_VERSION: &str = api_version!();

/// Production endpoint.
pub const BASE_URL: &str = "https://go.urbanairship.com";

/// Versioned media type UrbanAirship expects in `Accept`.
pub const MIME_TYPE: &str = concat!("application/vnd.urbanairship+json; version=", api_version!());

const PUSH_ENDPOINT: &str = "/api/push";

/// Request timeout applied by the underlying `reqwest::Client`.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Entry point for calling UrbanAirship.
///
/// Holds nothing but the executor that performs the HTTP round-trip, so it is
/// cheap to clone and can be shared across tasks.
#[derive(Clone)]
pub struct Client {
    urban: Arc<dyn Executor>,
}

impl Client {
    /// Creates a client for the production API with the given app key and master secret.
    pub fn new(username: &str, password: &str) -> Result<Self, Error> {
        Self::with_base_url(BASE_URL, username, password)
    }

    /// Creates a client against a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, username: &str, password: &str) -> Result<Self, Error> {
        Ok(Self::with_executor(UrbanAirship::new(
            base_url, username, password,
        )?))
    }

    /// Creates a client that sends every request through `executor`.
    pub fn with_executor(executor: impl Executor + 'static) -> Self {
        Self {
            urban: Arc::new(executor),
        }
    }

    /// Sends a push and returns the decoded acknowledgement.
    ///
    /// Fails without touching the network when `cancel` is absent or already
    /// cancelled, or when `body` is absent. Any non-success response comes
    /// back as the error [`check_response`] classified it as. Cancelling
    /// `cancel` while the body is still being read ends the call with
    /// [`Error::Transport`].
    pub async fn push(
        &self,
        cancel: Option<&CancellationToken>,
        body: Option<&Push>,
    ) -> Result<PushResponse, Error> {
        let cancel = cancel.ok_or(Error::Validation("missing context"))?;
        if cancel.is_cancelled() {
            return Err(Error::Validation("missing context: context canceled"));
        }
        let body = body.ok_or(Error::Validation("missing urban request body"))?;

        let sent = self.urban.do_push_request(cancel, body).await;

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::warn!("Push request cancelled while reading the response");
                Err(Error::transport("request cancelled"))
            }
            res = async {
                let resp = check_response(sent).await?;
                decode_body(resp).await
            } => res,
        }
    }
}

/// The real [`Executor`]: sends requests over HTTPS with Basic auth.
pub struct UrbanAirship {
    base_url: Url,
    http: reqwest::Client,
    mime_type: String,
    username: String,
    password: String,
}

impl UrbanAirship {
    /// Validates credentials and the base URL and builds the HTTP client.
    pub fn new(base_url: &str, username: &str, password: &str) -> Result<Self, Error> {
        if username.is_empty() {
            return Err(Error::Configuration("missing username".to_string()));
        }
        if password.is_empty() {
            return Err(Error::Configuration("missing user password".to_string()));
        }

        let parsed = Url::parse(base_url).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", base_url, e);
            Error::Configuration(format!("invalid base url {base_url:?}: {e}"))
        })?;
        if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::Configuration(format!(
                "invalid base url {base_url:?}: expected an http(s) URL"
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Configuration(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            base_url: parsed,
            http,
            mime_type: MIME_TYPE.to_string(),
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    /// Builds an authenticated JSON request for `spath`, relative to the base URL's path.
    pub fn new_request(&self, method: Method, spath: &str, body: Vec<u8>) -> Result<Request, Error> {
        self.http
            .request(method, join_path(&self.base_url, spath))
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, self.mime_type.as_str())
            .basic_auth(&self.username, Some(&self.password))
            .body(body)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build request: {}", e);
                Error::from(e)
            })
    }
}

// See: https://docs.urbanairship.com/api/ua/#push
#[async_trait]
impl Executor for UrbanAirship {
    async fn do_push_request(
        &self,
        cancel: &CancellationToken,
        body: &Push,
    ) -> Result<Response, Error> {
        let json = serde_json::to_vec(body).map_err(Error::Encode)?;
        let req = self.new_request(Method::POST, PUSH_ENDPOINT, json)?;
        tracing::debug!("Sending push request to {}", req.url());

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::warn!("Push request cancelled before a response arrived");
                Err(Error::transport("request cancelled"))
            }
            res = self.http.execute(req) => res.map_err(|e| {
                tracing::error!("Failed urban push request: {}", e);
                Error::from(e)
            }),
        }
    }
}

fn join_path(base: &Url, spath: &str) -> Url {
    let mut uri = base.clone();
    let joined = format!(
        "{}/{}",
        base.path().trim_end_matches('/'),
        spath.trim_start_matches('/')
    );
    uri.set_path(&joined);
    uri
}
