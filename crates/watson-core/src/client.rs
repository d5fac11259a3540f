//! The shared service client every Watson crate wraps.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::auth::Authenticator;
use crate::request::{RequestBody, ServiceRequest};
use crate::{Error, Result};

const REQUEST_TIMEOUT_SECS: u64 = 60;

/// A configured connection to one Watson service instance.
///
/// Holds the reqwest client, the service endpoint, the authenticator and,
/// for versioned services, the `version` date that is appended to every
/// request as a query parameter.
pub struct WatsonService {
    service_name: &'static str,
    endpoint: Url,
    version: Option<String>,
    authenticator: Authenticator,
    client: Client,
}

impl WatsonService {
    pub fn new(
        service_name: &'static str,
        endpoint: &str,
        authenticator: Authenticator,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self {
            service_name,
            endpoint: Url::parse(endpoint)?,
            version: None,
            authenticator,
            client,
        })
    }

    /// Set the API version date (yyyy-MM-dd) sent with every request.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Point the client at a different service instance.
    pub fn set_endpoint(&mut self, endpoint: &str) -> Result<()> {
        self.endpoint = Url::parse(endpoint)?;
        Ok(())
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Start a request against this service.
    pub fn request(&self, method: Method, segments: &[&str]) -> Result<ServiceRequest> {
        let mut request = ServiceRequest::new(method, &self.endpoint, segments)?;
        if let Some(version) = &self.version {
            request = request.query("version", version);
        }
        Ok(request)
    }

    async fn dispatch(&self, request: ServiceRequest) -> Result<reqwest::Response> {
        let ServiceRequest {
            method,
            url,
            query,
            headers,
            body,
        } = request;

        tracing::debug!(
            service = self.service_name,
            %method,
            %url,
            "dispatching request"
        );

        let mut builder = self.client.request(method, url).headers(headers);
        if !query.is_empty() {
            builder = builder.query(&query);
        }
        builder = match body {
            RequestBody::None => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(form) => builder.multipart(form),
            RequestBody::Raw { content_type, data } => {
                builder.header(CONTENT_TYPE, content_type).body(data)
            }
        };
        builder = self.authenticator.apply(&self.client, builder).await?;

        let response = builder.send().await.map_err(Error::from)?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Service {
                status: status.as_u16(),
                message: extract_error_message(&body),
            });
        }
        Ok(response)
    }

    /// Send the request and decode the JSON response body.
    pub async fn send_json<T: DeserializeOwned>(&self, request: ServiceRequest) -> Result<T> {
        let response = self.dispatch(request).await?;
        response
            .json()
            .await
            .map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Send the request, discarding any response body.
    pub async fn send_no_content(&self, request: ServiceRequest) -> Result<()> {
        self.dispatch(request).await?;
        Ok(())
    }

    /// Send the request and return the raw response body.
    pub async fn send_bytes(&self, request: ServiceRequest) -> Result<Vec<u8>> {
        let response = self.dispatch(request).await?;
        let bytes = response.bytes().await.map_err(Error::from)?;
        Ok(bytes.to_vec())
    }
}

/// Pull a human-readable message out of a Watson error body.
///
/// Services answer errors with either `{"error": "..."}`,
/// `{"errors": [{"message": "..."}]}` or `{"code": ..., "message": "..."}`.
fn extract_error_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorItem {
        message: String,
    }

    #[derive(Deserialize)]
    struct ErrorBody {
        error: Option<String>,
        message: Option<String>,
        errors: Option<Vec<ErrorItem>>,
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(error) = parsed.error {
            return error;
        }
        if let Some(message) = parsed.message {
            return message;
        }
        if let Some(errors) = parsed.errors {
            let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            if !messages.is_empty() {
                return messages.join("; ");
            }
        }
    }

    if body.trim().is_empty() {
        "Unknown error".to_string()
    } else {
        body.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, Deserialize)]
    struct Probe {
        name: String,
    }

    async fn service(server: &MockServer) -> WatsonService {
        WatsonService::new("probe", &server.uri(), Authenticator::NoAuth).unwrap()
    }

    #[tokio::test]
    async fn test_version_query_is_appended() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/things"))
            .and(query_param("version", "2019-02-28"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "name": "thing"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let service = service(&server).await.with_version("2019-02-28");
        let request = service.request(Method::GET, &["v1", "things"]).unwrap();
        let probe: Probe = service.send_json(request).await.unwrap();
        assert_eq!(probe.name, "thing");
    }

    #[tokio::test]
    async fn test_error_body_message_is_extracted() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/things"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "error": "Resource not found",
                "code": 404
            })))
            .mount(&server)
            .await;

        let service = service(&server).await;
        let request = service.request(Method::GET, &["v1", "things"]).unwrap();
        let err = service.send_json::<Probe>(request).await.unwrap_err();
        match err {
            Error::Service { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Resource not found");
            }
            other => panic!("expected service error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_errors_array_is_joined() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/things"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "errors": [
                    {"message": "name is required"},
                    {"message": "language is invalid"}
                ]
            })))
            .mount(&server)
            .await;

        let service = service(&server).await;
        let request = service.request(Method::GET, &["v1", "things"]).unwrap();
        let err = service.send_json::<Probe>(request).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Service error (400): name is required; language is invalid"
        );
    }

    #[tokio::test]
    async fn test_non_json_error_body_falls_back_to_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/things"))
            .respond_with(ResponseTemplate::new(500).set_body_string("gateway exploded"))
            .mount(&server)
            .await;

        let service = service(&server).await;
        let request = service.request(Method::GET, &["v1", "things"]).unwrap();
        let err = service.send_json::<Probe>(request).await.unwrap_err();
        assert_eq!(err.to_string(), "Service error (500): gateway exploded");
    }
}
