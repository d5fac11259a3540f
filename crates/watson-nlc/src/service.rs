//! Natural Language Classifier v1 operations.

use reqwest::multipart::{Form, Part};
use reqwest::Method;

use watson_core::{not_empty, Authenticator, Result, ServiceCredentials, WatsonService};

use crate::models::{
    Classification, ClassificationCollection, Classifier, ClassifierList, ClassifyInput,
    CreateClassifierOptions,
};

const SERVICE_NAME: &str = "natural_language_classifier";

/// Natural Language Classifier service client.
pub struct NaturalLanguageClassifier {
    service: WatsonService,
}

impl NaturalLanguageClassifier {
    pub const DEFAULT_URL: &'static str =
        "https://gateway.watsonplatform.net/natural-language-classifier/api";

    pub fn new(authenticator: Authenticator) -> Result<Self> {
        let service = WatsonService::new(SERVICE_NAME, Self::DEFAULT_URL, authenticator)?;
        Ok(Self { service })
    }

    /// Build a client from `WATSON_NATURAL_LANGUAGE_CLASSIFIER_*` environment
    /// variables.
    pub fn from_env() -> Result<Self> {
        let credentials = ServiceCredentials::from_env(SERVICE_NAME)?;
        let mut client = Self::new(credentials.authenticator)?;
        if let Some(url) = credentials.url {
            client.set_endpoint(&url)?;
        }
        Ok(client)
    }

    pub fn set_endpoint(&mut self, endpoint: &str) -> Result<()> {
        self.service.set_endpoint(endpoint)
    }

    /// Classify a phrase. The classifier status must be `Available`.
    pub async fn classify(&self, classifier_id: &str, text: &str) -> Result<Classification> {
        not_empty(classifier_id, "classifier_id")?;
        not_empty(text, "text")?;
        let request = self
            .service
            .request(
                Method::POST,
                &["v1", "classifiers", classifier_id, "classify"],
            )?
            .json(&serde_json::json!({ "text": text }))?;
        self.service.send_json(request).await
    }

    /// Classify multiple phrases in one call.
    pub async fn classify_collection(
        &self,
        classifier_id: &str,
        collection: &[ClassifyInput],
    ) -> Result<ClassificationCollection> {
        not_empty(classifier_id, "classifier_id")?;
        let request = self
            .service
            .request(
                Method::POST,
                &["v1", "classifiers", classifier_id, "classify_collection"],
            )?
            .json(&serde_json::json!({ "collection": collection }))?;
        self.service.send_json(request).await
    }

    /// Send training data to create and train a classifier.
    pub async fn create_classifier(
        &self,
        options: CreateClassifierOptions,
    ) -> Result<Classifier> {
        let form = Form::new()
            .part(
                "training_metadata",
                Part::bytes(options.training_metadata)
                    .file_name("training_metadata.json")
                    .mime_str("application/json")?,
            )
            .part(
                "training_data",
                Part::bytes(options.training_data)
                    .file_name("training.csv")
                    .mime_str("text/csv")?,
            );
        let request = self
            .service
            .request(Method::POST, &["v1", "classifiers"])?
            .multipart(form);
        self.service.send_json(request).await
    }

    /// List classifiers. Returns an empty array if none are available.
    pub async fn list_classifiers(&self) -> Result<ClassifierList> {
        let request = self.service.request(Method::GET, &["v1", "classifiers"])?;
        self.service.send_json(request).await
    }

    /// Get status and other information about a classifier.
    pub async fn get_classifier(&self, classifier_id: &str) -> Result<Classifier> {
        not_empty(classifier_id, "classifier_id")?;
        let request = self
            .service
            .request(Method::GET, &["v1", "classifiers", classifier_id])?;
        self.service.send_json(request).await
    }

    /// Delete a classifier.
    pub async fn delete_classifier(&self, classifier_id: &str) -> Result<()> {
        not_empty(classifier_id, "classifier_id")?;
        let request = self
            .service
            .request(Method::DELETE, &["v1", "classifiers", classifier_id])?;
        self.service.send_no_content(request).await
    }
}
