//! Compare and Comply v1 operations.

use reqwest::multipart::Form;
use reqwest::Method;
use serde::Serialize;

use watson_core::{not_empty, Authenticator, FileData, Result, ServiceCredentials, WatsonService};

use crate::models::{
    AddFeedbackOptions, ClassifyReturn, CompareDocumentsOptions, CompareReturn, FeedbackData,
    FeedbackList, FeedbackReturn, HtmlReturn, ListFeedbackOptions,
};

const SERVICE_NAME: &str = "compare_comply";

#[derive(Serialize)]
struct FeedbackRequest {
    feedback_data: FeedbackData,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
}

/// Compare and Comply service client.
pub struct CompareComply {
    service: WatsonService,
}

impl CompareComply {
    pub const DEFAULT_URL: &'static str = "https://gateway.watsonplatform.net/compare-comply/api";

    /// `version` is the API version date (yyyy-MM-dd) sent with every call.
    pub fn new(version: impl Into<String>, authenticator: Authenticator) -> Result<Self> {
        let version = version.into();
        not_empty(&version, "version")?;
        let service =
            WatsonService::new(SERVICE_NAME, Self::DEFAULT_URL, authenticator)?.with_version(version);
        Ok(Self { service })
    }

    /// Build a client from `WATSON_COMPARE_COMPLY_*` environment variables.
    pub fn from_env(version: impl Into<String>) -> Result<Self> {
        let credentials = ServiceCredentials::from_env(SERVICE_NAME)?;
        let mut client = Self::new(version, credentials.authenticator)?;
        if let Some(url) = credentials.url {
            client.set_endpoint(&url)?;
        }
        Ok(client)
    }

    pub fn set_endpoint(&mut self, endpoint: &str) -> Result<()> {
        self.service.set_endpoint(endpoint)
    }

    /// Convert a contract document to HTML.
    pub async fn convert_to_html(
        &self,
        file: FileData,
        model: Option<&str>,
    ) -> Result<HtmlReturn> {
        not_empty(&file.filename, "filename")?;
        let form = Form::new().part("file", file.into_part()?);
        let mut request = self
            .service
            .request(Method::POST, &["v1", "html_conversion"])?
            .multipart(form);
        if let Some(model) = model {
            request = request.query("model", model);
        }
        self.service.send_json(request).await
    }

    /// Classify the elements of a contract document.
    pub async fn classify_elements(
        &self,
        file: FileData,
        model: Option<&str>,
    ) -> Result<ClassifyReturn> {
        not_empty(&file.filename, "filename")?;
        let form = Form::new().part("file", file.into_part()?);
        let mut request = self
            .service
            .request(Method::POST, &["v1", "element_classification"])?
            .multipart(form);
        if let Some(model) = model {
            request = request.query("model", model);
        }
        self.service.send_json(request).await
    }

    /// Compare two documents, aligning their matching elements.
    pub async fn compare_documents(
        &self,
        options: CompareDocumentsOptions,
    ) -> Result<CompareReturn> {
        not_empty(&options.file_1.filename, "filename")?;
        not_empty(&options.file_2.filename, "filename")?;
        let mut request = self.service.request(Method::POST, &["v1", "comparison"])?;
        if let Some(label) = &options.file_1_label {
            request = request.query("file_1_label", label);
        }
        if let Some(label) = &options.file_2_label {
            request = request.query("file_2_label", label);
        }
        if let Some(model) = &options.model {
            request = request.query("model", model);
        }

        let form = Form::new()
            .part("file_1", options.file_1.into_part()?)
            .part("file_2", options.file_2.into_part()?);
        self.service.send_json(request.multipart(form)).await
    }

    /// Store feedback on element labels.
    pub async fn add_feedback(&self, options: AddFeedbackOptions) -> Result<FeedbackReturn> {
        not_empty(&options.feedback_data.feedback_type, "feedback_type")?;
        let body = FeedbackRequest {
            feedback_data: options.feedback_data,
            user_id: options.user_id,
            comment: options.comment,
        };
        let request = self
            .service
            .request(Method::POST, &["v1", "feedback"])?
            .json(&body)?;
        self.service.send_json(request).await
    }

    /// List stored feedback, newest first by default.
    pub async fn list_feedback(&self, options: ListFeedbackOptions) -> Result<FeedbackList> {
        let mut request = self.service.request(Method::GET, &["v1", "feedback"])?;
        if let Some(feedback_type) = options.feedback_type {
            request = request.query("feedback_type", feedback_type);
        }
        if let Some(document_title) = options.document_title {
            request = request.query("document_title", document_title);
        }
        if let Some(model_id) = options.model_id {
            request = request.query("model_id", model_id);
        }
        if let Some(model_version) = options.model_version {
            request = request.query("model_version", model_version);
        }
        if let Some(page_limit) = options.page_limit {
            request = request.query("page_limit", page_limit);
        }
        if let Some(cursor) = options.cursor {
            request = request.query("cursor", cursor);
        }
        if let Some(sort) = options.sort {
            request = request.query("sort", sort);
        }
        if let Some(include_total) = options.include_total {
            request = request.query("include_total", include_total);
        }
        self.service.send_json(request).await
    }

    /// Get one stored feedback entry.
    pub async fn get_feedback(
        &self,
        feedback_id: &str,
        model: Option<&str>,
    ) -> Result<FeedbackReturn> {
        not_empty(feedback_id, "feedback_id")?;
        let mut request = self
            .service
            .request(Method::GET, &["v1", "feedback", feedback_id])?;
        if let Some(model) = model {
            request = request.query("model", model);
        }
        self.service.send_json(request).await
    }

    /// Delete a stored feedback entry.
    pub async fn delete_feedback(&self, feedback_id: &str, model: Option<&str>) -> Result<()> {
        not_empty(feedback_id, "feedback_id")?;
        let mut request = self
            .service
            .request(Method::DELETE, &["v1", "feedback", feedback_id])?;
        if let Some(model) = model {
            request = request.query("model", model);
        }
        self.service.send_no_content(request).await
    }
}
