//! Environment-based service credentials.

use std::env;

use crate::auth::{Authenticator, IamAuthenticator};
use crate::{Error, Result};

/// Credentials for one service instance, resolved from the environment.
#[derive(Debug)]
pub struct ServiceCredentials {
    /// Instance URL override, when `WATSON_<SERVICE>_URL` is set.
    pub url: Option<String>,
    pub authenticator: Authenticator,
}

impl ServiceCredentials {
    /// Read credentials for `service` (e.g. `"assistant"`) from the
    /// environment, loading a `.env` file when present.
    ///
    /// Resolution order: `WATSON_<SERVICE>_APIKEY` (IAM, honoring
    /// `WATSON_<SERVICE>_AUTH_URL`), then `_USERNAME`/`_PASSWORD`, then
    /// `_BEARER_TOKEN`.
    pub fn from_env(service: &str) -> Result<Self> {
        dotenvy::dotenv().ok();

        let prefix = format!("WATSON_{}", service.to_uppercase().replace('-', "_"));
        let url = env::var(format!("{}_URL", prefix)).ok();

        if let Ok(apikey) = env::var(format!("{}_APIKEY", prefix)) {
            let mut iam = IamAuthenticator::new(apikey);
            if let Ok(auth_url) = env::var(format!("{}_AUTH_URL", prefix)) {
                iam = iam.with_url(auth_url);
            }
            return Ok(Self {
                url,
                authenticator: Authenticator::Iam(iam),
            });
        }

        if let (Ok(username), Ok(password)) = (
            env::var(format!("{}_USERNAME", prefix)),
            env::var(format!("{}_PASSWORD", prefix)),
        ) {
            return Ok(Self {
                url,
                authenticator: Authenticator::basic(username, password),
            });
        }

        if let Ok(token) = env::var(format!("{}_BEARER_TOKEN", prefix)) {
            return Ok(Self {
                url,
                authenticator: Authenticator::bearer(token),
            });
        }

        Err(Error::Configuration(format!(
            "no credentials found: set {prefix}_APIKEY, {prefix}_USERNAME/{prefix}_PASSWORD \
             or {prefix}_BEARER_TOKEN"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apikey_wins_over_basic() {
        env::set_var("WATSON_SVC_ONE_APIKEY", "key");
        env::set_var("WATSON_SVC_ONE_USERNAME", "user");
        env::set_var("WATSON_SVC_ONE_PASSWORD", "pass");
        env::set_var("WATSON_SVC_ONE_URL", "https://example.com/api");

        let credentials = ServiceCredentials::from_env("svc-one").unwrap();
        assert!(matches!(credentials.authenticator, Authenticator::Iam(_)));
        assert_eq!(credentials.url.as_deref(), Some("https://example.com/api"));
    }

    #[test]
    fn test_basic_credentials_are_picked_up() {
        env::set_var("WATSON_SVC_TWO_USERNAME", "user");
        env::set_var("WATSON_SVC_TWO_PASSWORD", "pass");

        let credentials = ServiceCredentials::from_env("svc-two").unwrap();
        assert!(matches!(
            credentials.authenticator,
            Authenticator::Basic { .. }
        ));
    }

    #[test]
    fn test_missing_credentials_report_the_variables() {
        let err = ServiceCredentials::from_env("svc-missing").unwrap_err();
        assert!(err.to_string().contains("WATSON_SVC_MISSING_APIKEY"));
    }
}
