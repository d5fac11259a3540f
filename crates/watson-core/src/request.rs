//! Request accumulator used by the service crates.
//!
//! A [`ServiceRequest`] collects everything an operation needs before it is
//! handed to [`crate::WatsonService`] for dispatch: percent-encoded path
//! segments appended to the service endpoint, query parameters, headers and
//! one of the supported body kinds.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::Serialize;
use url::Url;

use crate::{Error, Result};

/// An uploaded file plus the metadata its multipart part needs.
#[derive(Debug, Clone)]
pub struct FileData {
    pub data: Vec<u8>,
    pub filename: String,
    pub content_type: Option<String>,
}

impl FileData {
    pub fn new(data: Vec<u8>, filename: impl Into<String>) -> Self {
        Self {
            data,
            filename: filename.into(),
            content_type: None,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Turn the file into a multipart part, defaulting the content type to
    /// `application/octet-stream`.
    pub fn into_part(self) -> Result<Part> {
        let content_type = self
            .content_type
            .unwrap_or_else(|| "application/octet-stream".to_string());
        let part = Part::bytes(self.data)
            .file_name(self.filename)
            .mime_str(&content_type)?;
        Ok(part)
    }
}

/// Body attached to a request.
pub enum RequestBody {
    None,
    Json(serde_json::Value),
    Multipart(Form),
    Raw { content_type: String, data: Vec<u8> },
}

/// A single service request under construction.
pub struct ServiceRequest {
    pub(crate) method: Method,
    pub(crate) url: Url,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) headers: HeaderMap,
    pub(crate) body: RequestBody,
}

impl ServiceRequest {
    /// Start a request for `endpoint` with the given path segments.
    ///
    /// Each segment is pushed individually, so path parameters containing
    /// reserved characters are percent-encoded rather than splitting the
    /// path.
    pub fn new(method: Method, endpoint: &Url, segments: &[&str]) -> Result<Self> {
        let mut url = endpoint.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| Error::Configuration("endpoint cannot be a base URL".to_string()))?;
            path.pop_if_empty();
            for segment in segments {
                path.push(segment);
            }
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Ok(Self {
            method,
            url,
            query: Vec::new(),
            headers,
            body: RequestBody::None,
        })
    }

    /// Append a query parameter.
    pub fn query(mut self, name: &str, value: impl ToString) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    /// Set a header, replacing any previous value.
    pub fn header(mut self, name: &str, value: &str) -> Result<Self> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| Error::InvalidInput(format!("invalid header name {:?}: {}", name, e)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| Error::InvalidInput(format!("invalid header value: {}", e)))?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Override the `Accept` header (defaults to `application/json`).
    pub fn accept(self, value: &str) -> Result<Self> {
        self.header("Accept", value)
    }

    /// Attach a JSON body.
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self> {
        self.body = RequestBody::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Attach a multipart form body.
    pub fn multipart(mut self, form: Form) -> Self {
        self.body = RequestBody::Multipart(form);
        self
    }

    /// Attach a raw body with an explicit content type.
    pub fn raw(mut self, data: Vec<u8>, content_type: &str) -> Self {
        self.body = RequestBody::Raw {
            content_type: content_type.to_string(),
            data,
        };
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}
