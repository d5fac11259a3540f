//! Visual Recognition v3 operations.

use reqwest::multipart::{Form, Part};
use reqwest::Method;

use watson_core::{not_empty, Authenticator, Error, Result, ServiceCredentials, WatsonService};

use crate::models::{
    ClassifiedImages, Classifier, Classifiers, ClassifyOptions, CreateClassifierOptions,
    DetectFacesOptions, DetectedFaces, UpdateClassifierOptions,
};

const SERVICE_NAME: &str = "visual_recognition";

/// Visual Recognition service client.
pub struct VisualRecognition {
    service: WatsonService,
}

impl VisualRecognition {
    pub const DEFAULT_URL: &'static str =
        "https://gateway.watsonplatform.net/visual-recognition/api";

    /// `version` is the API version date (yyyy-MM-dd) sent with every call.
    pub fn new(version: impl Into<String>, authenticator: Authenticator) -> Result<Self> {
        let version = version.into();
        not_empty(&version, "version")?;
        let service =
            WatsonService::new(SERVICE_NAME, Self::DEFAULT_URL, authenticator)?.with_version(version);
        Ok(Self { service })
    }

    /// Build a client from `WATSON_VISUAL_RECOGNITION_*` environment variables.
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

    /// Classify images with built-in or custom classifiers.
    pub async fn classify(&self, options: ClassifyOptions) -> Result<ClassifiedImages> {
        if options.is_empty() {
            return Err(Error::InvalidInput(
                "at least one of images_file, url, threshold, owners, or classifier_ids \
                 must be supplied"
                    .to_string(),
            ));
        }

        let mut form = Form::new();
        if let Some(images_file) = options.images_file {
            form = form.part("images_file", images_file.into_part()?);
        }
        if let Some(url) = options.url {
            form = form.text("url", url);
        }
        if let Some(threshold) = options.threshold {
            form = form.text("threshold", threshold.to_string());
        }
        if let Some(owners) = options.owners {
            form = form.text("owners", owners.join(","));
        }
        if let Some(classifier_ids) = options.classifier_ids {
            form = form.text("classifier_ids", classifier_ids.join(","));
        }

        let mut request = self
            .service
            .request(Method::POST, &["v3", "classify"])?
            .multipart(form);
        if let Some(accept_language) = options.accept_language {
            request = request.header("Accept-Language", &accept_language)?;
        }
        self.service.send_json(request).await
    }

    /// Analyze faces in images, estimating age and gender.
    pub async fn detect_faces(&self, options: DetectFacesOptions) -> Result<DetectedFaces> {
        if options.images_file.is_none() && options.url.is_none() {
            return Err(Error::InvalidInput(
                "at least one of images_file or url must be supplied".to_string(),
            ));
        }

        let mut form = Form::new();
        if let Some(images_file) = options.images_file {
            form = form.part("images_file", images_file.into_part()?);
        }
        if let Some(url) = options.url {
            form = form.text("url", url);
        }

        let mut request = self
            .service
            .request(Method::POST, &["v3", "detect_faces"])?
            .multipart(form);
        if let Some(accept_language) = options.accept_language {
            request = request.header("Accept-Language", &accept_language)?;
        }
        self.service.send_json(request).await
    }

    /// Train a new custom classifier from positive and negative example zips.
    pub async fn create_classifier(
        &self,
        options: CreateClassifierOptions,
    ) -> Result<Classifier> {
        not_empty(&options.name, "name")?;
        if options.positive_examples.is_empty() {
            return Err(Error::InvalidInput(
                "at least one positive_examples set must be supplied".to_string(),
            ));
        }

        let mut form = Form::new().text("name", options.name);
        for (class_name, zip) in options.positive_examples {
            let part = Part::bytes(zip)
                .file_name(format!("{}.zip", class_name))
                .mime_str("application/octet-stream")?;
            form = form.part(format!("{}_positive_examples", class_name), part);
        }
        if let Some(negative_examples) = options.negative_examples {
            form = form.part("negative_examples", negative_examples.into_part()?);
        }

        let request = self
            .service
            .request(Method::POST, &["v3", "classifiers"])?
            .multipart(form);
        self.service.send_json(request).await
    }

    /// Retrieve the list of custom classifiers.
    pub async fn list_classifiers(&self, verbose: Option<bool>) -> Result<Classifiers> {
        let mut request = self.service.request(Method::GET, &["v3", "classifiers"])?;
        if let Some(verbose) = verbose {
            request = request.query("verbose", verbose);
        }
        self.service.send_json(request).await
    }

    /// Retrieve information about a custom classifier.
    pub async fn get_classifier(&self, classifier_id: &str) -> Result<Classifier> {
        not_empty(classifier_id, "classifier_id")?;
        let request = self
            .service
            .request(Method::GET, &["v3", "classifiers", classifier_id])?;
        self.service.send_json(request).await
    }

    /// Retrain a classifier with new example sets.
    ///
    /// Don't retrain until the status is `ready`; parallel retraining
    /// requests overwrite each other.
    pub async fn update_classifier(
        &self,
        options: UpdateClassifierOptions,
    ) -> Result<Classifier> {
        not_empty(&options.classifier_id, "classifier_id")?;
        if options.positive_examples.is_empty() && options.negative_examples.is_none() {
            return Err(Error::InvalidInput(
                "at least one of positive_examples or negative_examples must be supplied"
                    .to_string(),
            ));
        }

        let mut form = Form::new();
        for (class_name, zip) in options.positive_examples {
            let part = Part::bytes(zip)
                .file_name(format!("{}.zip", class_name))
                .mime_str("application/octet-stream")?;
            form = form.part(format!("{}_positive_examples", class_name), part);
        }
        if let Some(negative_examples) = options.negative_examples {
            form = form.part("negative_examples", negative_examples.into_part()?);
        }

        let request = self
            .service
            .request(Method::POST, &["v3", "classifiers", &options.classifier_id])?
            .multipart(form);
        self.service.send_json(request).await
    }

    /// Delete a custom classifier.
    pub async fn delete_classifier(&self, classifier_id: &str) -> Result<()> {
        not_empty(classifier_id, "classifier_id")?;
        let request = self
            .service
            .request(Method::DELETE, &["v3", "classifiers", classifier_id])?;
        self.service.send_no_content(request).await
    }

    /// Download the Core ML model file (.mlmodel) of a classifier that has
    /// `core_ml_enabled` set.
    pub async fn get_core_ml_model(&self, classifier_id: &str) -> Result<Vec<u8>> {
        not_empty(classifier_id, "classifier_id")?;
        let request = self
            .service
            .request(
                Method::GET,
                &["v3", "classifiers", classifier_id, "core_ml_model"],
            )?
            .accept("application/octet-stream")?;
        self.service.send_bytes(request).await
    }

    /// Delete all data associated with a customer id (`X-Watson-Metadata`).
    pub async fn delete_user_data(&self, customer_id: &str) -> Result<()> {
        not_empty(customer_id, "customer_id")?;
        let request = self
            .service
            .request(Method::DELETE, &["v3", "user_data"])?
            .query("customer_id", customer_id);
        self.service.send_no_content(request).await
    }
}
