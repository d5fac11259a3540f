//! Wire models for Natural Language Classifier v1.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One phrase to classify in a collection call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyInput {
    pub text: String,
}

impl ClassifyInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A class the service matched against the input, with its confidence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedClass {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

/// Label information for one classified phrase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classifier_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_class: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<ClassifiedClass>,
}

/// One entry of a collection classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_class: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<ClassifiedClass>,
}

/// Label information for a batch of classified phrases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationCollection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classifier_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub collection: Vec<CollectionItem>,
}

/// A trained classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classifier {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub classifier_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Classifier {
    /// Classifier status values.
    pub const STATUS_NON_EXISTENT: &'static str = "Non Existent";
    pub const STATUS_TRAINING: &'static str = "Training";
    pub const STATUS_FAILED: &'static str = "Failed";
    pub const STATUS_AVAILABLE: &'static str = "Available";
    pub const STATUS_UNAVAILABLE: &'static str = "Unavailable";
}

/// List of available classifiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierList {
    #[serde(default)]
    pub classifiers: Vec<Classifier>,
}

/// Training payloads for creating a classifier.
///
/// `training_metadata` is the JSON metadata (name and language) and
/// `training_data` the CSV of labeled examples; both are uploaded as
/// multipart form parts.
#[derive(Debug, Clone)]
pub struct CreateClassifierOptions {
    pub training_metadata: Vec<u8>,
    pub training_data: Vec<u8>,
}

impl CreateClassifierOptions {
    pub fn new(training_metadata: Vec<u8>, training_data: Vec<u8>) -> Self {
        Self {
            training_metadata,
            training_data,
        }
    }
}
