//! Request authentication.
//!
//! Watson services accept either an IAM bearer token (obtained by trading
//! an API key at the IAM token endpoint), legacy basic credentials, or a
//! caller-managed bearer token. The IAM exchange is performed lazily and
//! the token is cached until shortly before it expires.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::{DateTime, Duration, Utc};
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::{Error, Result};

/// IAM token endpoint for the public IBM Cloud.
pub const DEFAULT_IAM_URL: &str = "https://iam.cloud.ibm.com/identity/token";

/// Tokens are refreshed this many seconds before their reported expiry.
const REFRESH_MARGIN_SECS: i64 = 60;

#[derive(Serialize)]
struct TokenRequest {
    grant_type: String,
    apikey: String,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expiry")]
    expires_in: i64,
}

fn default_expiry() -> i64 {
    3600
}

#[derive(Debug)]
struct CachedToken {
    token: String,
    expires_at: DateTime<Utc>,
}

/// IAM API-key authenticator with a cached bearer token.
#[derive(Debug)]
pub struct IamAuthenticator {
    apikey: String,
    url: String,
    token: RwLock<Option<CachedToken>>,
}

impl IamAuthenticator {
    pub fn new(apikey: impl Into<String>) -> Self {
        Self {
            apikey: apikey.into(),
            url: DEFAULT_IAM_URL.to_string(),
            token: RwLock::new(None),
        }
    }

    /// Override the IAM token endpoint, e.g. for a dedicated environment.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    async fn bearer(&self, client: &Client) -> Result<String> {
        {
            let cached = self.token.read().await;
            if let Some(token) = cached.as_ref() {
                if token.expires_at > Utc::now() {
                    return Ok(token.token.clone());
                }
            }
        }

        let token_request = TokenRequest {
            grant_type: "urn:ibm:params:oauth:grant-type:apikey".to_string(),
            apikey: self.apikey.clone(),
        };

        let response = client
            .post(&self.url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .form(&token_request)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::Authentication(format!(
                "IAM token request failed: {}",
                response.status()
            )));
        }

        let token_response: TokenResponse = response
            .json()
            .await
            .map_err(|e| Error::Serialization(e.to_string()))?;

        let expires_at =
            Utc::now() + Duration::seconds(token_response.expires_in - REFRESH_MARGIN_SECS);
        let mut cached = self.token.write().await;
        *cached = Some(CachedToken {
            token: token_response.access_token.clone(),
            expires_at,
        });

        Ok(token_response.access_token)
    }
}

/// How requests to a service are authenticated.
#[derive(Debug)]
pub enum Authenticator {
    /// IAM API key, exchanged for a bearer token on demand.
    Iam(IamAuthenticator),
    /// Legacy username/password credentials.
    Basic { username: String, password: String },
    /// A bearer token managed by the caller.
    Bearer(String),
    /// No authentication, e.g. against a local mock.
    NoAuth,
}

impl Authenticator {
    pub fn iam_apikey(apikey: impl Into<String>) -> Self {
        Authenticator::Iam(IamAuthenticator::new(apikey))
    }

    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Authenticator::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn bearer(token: impl Into<String>) -> Self {
        Authenticator::Bearer(token.into())
    }

    /// Attach the `Authorization` header for this scheme.
    pub async fn apply(
        &self,
        client: &Client,
        builder: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder> {
        match self {
            Authenticator::Iam(iam) => {
                let token = iam.bearer(client).await?;
                Ok(builder.header(AUTHORIZATION, format!("Bearer {}", token)))
            }
            Authenticator::Basic { username, password } => {
                let credentials = BASE64.encode(format!("{}:{}", username, password));
                Ok(builder.header(AUTHORIZATION, format!("Basic {}", credentials)))
            }
            Authenticator::Bearer(token) => {
                Ok(builder.header(AUTHORIZATION, format!("Bearer {}", token)))
            }
            Authenticator::NoAuth => Ok(builder),
        }
    }
}
