//! Wire models for Visual Recognition v3.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use watson_core::FileData;

/// A class identified in an image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassResult {
    #[serde(rename = "class")]
    pub class_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_hierarchy: Option<String>,
}

/// Classes matched by one classifier for one image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierResult {
    pub name: String,
    pub classifier_id: String,
    #[serde(default)]
    pub classes: Vec<ClassResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarningInfo {
    pub warning_id: String,
    pub description: String,
}

/// Classification results for one image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedImage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
    #[serde(default)]
    pub classifiers: Vec<ClassifierResult>,
}

/// Results for a classify call across all supplied images.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedImages {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_classes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images_processed: Option<i64>,
    #[serde(default)]
    pub images: Vec<ClassifiedImage>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<WarningInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaceLocation {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub top: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaceAge {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaceGender {
    pub gender: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// Data about one detected face.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Face {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<FaceAge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<FaceGender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_location: Option<FaceLocation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageWithFaces {
    #[serde(default)]
    pub faces: Vec<Face>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectedFaces {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images_processed: Option<i64>,
    #[serde(default)]
    pub images: Vec<ImageWithFaces>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<WarningInfo>,
}

/// A class defined for a custom classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassInfo {
    #[serde(rename = "class")]
    pub class_name: String,
}

/// A custom classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classifier {
    pub classifier_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub core_ml_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<ClassInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retrained: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl Classifier {
    /// Training status values.
    pub const STATUS_READY: &'static str = "ready";
    pub const STATUS_TRAINING: &'static str = "training";
    pub const STATUS_RETRAINING: &'static str = "retraining";
    pub const STATUS_FAILED: &'static str = "failed";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classifiers {
    #[serde(default)]
    pub classifiers: Vec<Classifier>,
}

/// Options for classifying images.
///
/// At least one of an images file, a URL, a threshold, owners or
/// classifier ids must be supplied.
#[derive(Debug, Clone, Default)]
pub struct ClassifyOptions {
    pub images_file: Option<FileData>,
    pub url: Option<String>,
    pub threshold: Option<f32>,
    pub owners: Option<Vec<String>>,
    pub classifier_ids: Option<Vec<String>>,
    pub accept_language: Option<String>,
}

impl ClassifyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_images_file(mut self, images_file: FileData) -> Self {
        self.images_file = Some(images_file);
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn with_owners(mut self, owners: Vec<String>) -> Self {
        self.owners = Some(owners);
        self
    }

    pub fn with_classifier_ids(mut self, classifier_ids: Vec<String>) -> Self {
        self.classifier_ids = Some(classifier_ids);
        self
    }

    pub fn with_accept_language(mut self, accept_language: impl Into<String>) -> Self {
        self.accept_language = Some(accept_language.into());
        self
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.images_file.is_none()
            && self.url.is_none()
            && self.threshold.is_none()
            && self.owners.is_none()
            && self.classifier_ids.is_none()
    }
}

/// Options for detecting faces. At least one of an images file or a URL
/// must be supplied.
#[derive(Debug, Clone, Default)]
pub struct DetectFacesOptions {
    pub images_file: Option<FileData>,
    pub url: Option<String>,
    pub accept_language: Option<String>,
}

impl DetectFacesOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_images_file(mut self, images_file: FileData) -> Self {
        self.images_file = Some(images_file);
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_accept_language(mut self, accept_language: impl Into<String>) -> Self {
        self.accept_language = Some(accept_language.into());
        self
    }
}

/// Options for training a new custom classifier.
///
/// Positive example zips are keyed by class name and uploaded as
/// `{class}_positive_examples` form parts.
#[derive(Debug, Clone)]
pub struct CreateClassifierOptions {
    pub name: String,
    pub positive_examples: Vec<(String, Vec<u8>)>,
    pub negative_examples: Option<FileData>,
}

impl CreateClassifierOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            positive_examples: Vec::new(),
            negative_examples: None,
        }
    }

    pub fn add_positive_examples(mut self, class_name: impl Into<String>, zip: Vec<u8>) -> Self {
        self.positive_examples.push((class_name.into(), zip));
        self
    }

    pub fn with_negative_examples(mut self, negative_examples: FileData) -> Self {
        self.negative_examples = Some(negative_examples);
        self
    }
}

/// Options for retraining an existing classifier. At least one positive or
/// negative example set must be supplied.
#[derive(Debug, Clone)]
pub struct UpdateClassifierOptions {
    pub classifier_id: String,
    pub positive_examples: Vec<(String, Vec<u8>)>,
    pub negative_examples: Option<FileData>,
}

impl UpdateClassifierOptions {
    pub fn new(classifier_id: impl Into<String>) -> Self {
        Self {
            classifier_id: classifier_id.into(),
            positive_examples: Vec::new(),
            negative_examples: None,
        }
    }

    pub fn add_positive_examples(mut self, class_name: impl Into<String>, zip: Vec<u8>) -> Self {
        self.positive_examples.push((class_name.into(), zip));
        self
    }

    pub fn with_negative_examples(mut self, negative_examples: FileData) -> Self {
        self.negative_examples = Some(negative_examples);
        self
    }
}
