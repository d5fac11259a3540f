//! Language Translator v3 operations.

use reqwest::multipart::Form;
use reqwest::Method;
use serde::Serialize;

use watson_core::{not_empty, Authenticator, Error, Result, ServiceCredentials, WatsonService};

use crate::models::{
    CreateModelOptions, DeleteModelResult, DocumentList, DocumentStatus, IdentifiableLanguages,
    IdentifiedLanguages, TranslateDocumentOptions, TranslateOptions, TranslationModel,
    TranslationModels, TranslationResult,
};

const SERVICE_NAME: &str = "language_translator";

#[derive(Serialize)]
struct TranslateRequest {
    text: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    model_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<String>,
}

/// Language Translator service client.
pub struct LanguageTranslator {
    service: WatsonService,
}

impl LanguageTranslator {
    pub const DEFAULT_URL: &'static str =
        "https://gateway.watsonplatform.net/language-translator/api";

    /// `version` is the API version date (yyyy-MM-dd) sent with every call.
    pub fn new(version: impl Into<String>, authenticator: Authenticator) -> Result<Self> {
        let version = version.into();
        not_empty(&version, "version")?;
        let service =
            WatsonService::new(SERVICE_NAME, Self::DEFAULT_URL, authenticator)?.with_version(version);
        Ok(Self { service })
    }

    /// Build a client from `WATSON_LANGUAGE_TRANSLATOR_*` environment variables.
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

    /// Translate text from one language to another.
    pub async fn translate(&self, options: TranslateOptions) -> Result<TranslationResult> {
        if options.text.is_empty() {
            return Err(Error::InvalidInput("text cannot be empty".to_string()));
        }
        if options.model_id.is_none() && (options.source.is_none() || options.target.is_none()) {
            return Err(Error::InvalidInput(
                "either model_id or both source and target must be supplied".to_string(),
            ));
        }

        let body = TranslateRequest {
            text: options.text,
            model_id: options.model_id,
            source: options.source,
            target: options.target,
        };
        let request = self
            .service
            .request(Method::POST, &["v3", "translate"])?
            .json(&body)?;
        self.service.send_json(request).await
    }

    /// Identify the language of the given text.
    pub async fn identify(&self, text: &str) -> Result<IdentifiedLanguages> {
        not_empty(text, "text")?;
        let request = self
            .service
            .request(Method::POST, &["v3", "identify"])?
            .raw(text.as_bytes().to_vec(), "text/plain");
        self.service.send_json(request).await
    }

    /// List the languages that the service can identify.
    pub async fn list_identifiable_languages(&self) -> Result<IdentifiableLanguages> {
        let request = self
            .service
            .request(Method::GET, &["v3", "identifiable_languages"])?;
        self.service.send_json(request).await
    }

    /// List available translation models, optionally filtered.
    pub async fn list_models(
        &self,
        source: Option<&str>,
        target: Option<&str>,
        default_models: Option<bool>,
    ) -> Result<TranslationModels> {
        let mut request = self.service.request(Method::GET, &["v3", "models"])?;
        if let Some(source) = source {
            request = request.query("source", source);
        }
        if let Some(target) = target {
            request = request.query("target", target);
        }
        if let Some(default_models) = default_models {
            request = request.query("default", default_models);
        }
        self.service.send_json(request).await
    }

    /// Train a custom model from a forced glossary and/or parallel corpus.
    pub async fn create_model(&self, options: CreateModelOptions) -> Result<TranslationModel> {
        not_empty(&options.base_model_id, "base_model_id")?;
        if options.forced_glossary.is_none() && options.parallel_corpus.is_none() {
            return Err(Error::InvalidInput(
                "at least one of forced_glossary or parallel_corpus must be supplied".to_string(),
            ));
        }

        let mut form = Form::new();
        if let Some(forced_glossary) = options.forced_glossary {
            form = form.part("forced_glossary", forced_glossary.into_part()?);
        }
        if let Some(parallel_corpus) = options.parallel_corpus {
            form = form.part("parallel_corpus", parallel_corpus.into_part()?);
        }

        let mut request = self
            .service
            .request(Method::POST, &["v3", "models"])?
            .query("base_model_id", &options.base_model_id);
        if let Some(name) = options.name {
            request = request.query("name", name);
        }
        self.service.send_json(request.multipart(form)).await
    }

    /// Get information about a translation model.
    pub async fn get_model(&self, model_id: &str) -> Result<TranslationModel> {
        not_empty(model_id, "model_id")?;
        let request = self
            .service
            .request(Method::GET, &["v3", "models", model_id])?;
        self.service.send_json(request).await
    }

    /// Delete a custom translation model.
    pub async fn delete_model(&self, model_id: &str) -> Result<DeleteModelResult> {
        not_empty(model_id, "model_id")?;
        let request = self
            .service
            .request(Method::DELETE, &["v3", "models", model_id])?;
        self.service.send_json(request).await
    }

    /// Submit a document for translation.
    pub async fn translate_document(
        &self,
        options: TranslateDocumentOptions,
    ) -> Result<DocumentStatus> {
        not_empty(&options.file.filename, "filename")?;

        let mut form = Form::new().part("file", options.file.into_part()?);
        if let Some(model_id) = options.model_id {
            form = form.text("model_id", model_id);
        }
        if let Some(source) = options.source {
            form = form.text("source", source);
        }
        if let Some(target) = options.target {
            form = form.text("target", target);
        }
        if let Some(document_id) = options.document_id {
            form = form.text("document_id", document_id);
        }

        let request = self
            .service
            .request(Method::POST, &["v3", "documents"])?
            .multipart(form);
        self.service.send_json(request).await
    }

    /// List documents submitted for translation.
    pub async fn list_documents(&self) -> Result<DocumentList> {
        let request = self.service.request(Method::GET, &["v3", "documents"])?;
        self.service.send_json(request).await
    }

    /// Get the translation status of a document.
    pub async fn get_document_status(&self, document_id: &str) -> Result<DocumentStatus> {
        not_empty(document_id, "document_id")?;
        let request = self
            .service
            .request(Method::GET, &["v3", "documents", document_id])?;
        self.service.send_json(request).await
    }

    /// Delete a submitted document and its translation.
    pub async fn delete_document(&self, document_id: &str) -> Result<()> {
        not_empty(document_id, "document_id")?;
        let request = self
            .service
            .request(Method::DELETE, &["v3", "documents", document_id])?;
        self.service.send_no_content(request).await
    }

    /// Download the translated document, optionally converted to `accept`.
    pub async fn get_translated_document(
        &self,
        document_id: &str,
        accept: Option<&str>,
    ) -> Result<Vec<u8>> {
        not_empty(document_id, "document_id")?;
        let mut request = self.service.request(
            Method::GET,
            &["v3", "documents", document_id, "translated_document"],
        )?;
        if let Some(accept) = accept {
            request = request.accept(accept)?;
        }
        self.service.send_bytes(request).await
    }
}
