//! Wire models for Language Translator v3.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use watson_core::FileData;

/// One translated segment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Translation {
    pub translation: String,
}

/// Result of a translate call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_count: Option<i64>,
    #[serde(default)]
    pub translations: Vec<Translation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentifiedLanguage {
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentifiedLanguages {
    #[serde(default)]
    pub languages: Vec<IdentifiedLanguage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentifiableLanguage {
    pub language: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentifiableLanguages {
    #[serde(default)]
    pub languages: Vec<IdentifiableLanguage>,
}

/// A base or custom translation model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationModel {
    pub model_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_model_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customizable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_model: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl TranslationModel {
    /// Model availability states.
    pub const STATUS_UPLOADING: &'static str = "uploading";
    pub const STATUS_UPLOADED: &'static str = "uploaded";
    pub const STATUS_DISPATCHING: &'static str = "dispatching";
    pub const STATUS_QUEUED: &'static str = "queued";
    pub const STATUS_TRAINING: &'static str = "training";
    pub const STATUS_TRAINED: &'static str = "trained";
    pub const STATUS_PUBLISHING: &'static str = "publishing";
    pub const STATUS_AVAILABLE: &'static str = "available";
    pub const STATUS_DELETED: &'static str = "deleted";
    pub const STATUS_ERROR: &'static str = "error";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationModels {
    #[serde(default)]
    pub models: Vec<TranslationModel>,
}

/// Confirmation of a model deletion, `"OK"` on success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteModelResult {
    pub status: String,
}

/// Status of a submitted document translation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStatus {
    pub document_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_model_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_count: Option<i64>,
}

impl DocumentStatus {
    pub const STATUS_PROCESSING: &'static str = "processing";
    pub const STATUS_AVAILABLE: &'static str = "available";
    pub const STATUS_FAILED: &'static str = "failed";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentList {
    #[serde(default)]
    pub documents: Vec<DocumentStatus>,
}

/// Options for translating text. Either a model id or a source/target
/// language pair selects the model.
#[derive(Debug, Clone)]
pub struct TranslateOptions {
    pub text: Vec<String>,
    pub model_id: Option<String>,
    pub source: Option<String>,
    pub target: Option<String>,
}

impl TranslateOptions {
    pub fn new(text: Vec<String>) -> Self {
        Self {
            text,
            model_id: None,
            source: None,
            target: None,
        }
    }

    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }
}

/// Options for training a custom model on top of a base model.
#[derive(Debug, Clone)]
pub struct CreateModelOptions {
    pub base_model_id: String,
    pub name: Option<String>,
    pub forced_glossary: Option<FileData>,
    pub parallel_corpus: Option<FileData>,
}

impl CreateModelOptions {
    pub fn new(base_model_id: impl Into<String>) -> Self {
        Self {
            base_model_id: base_model_id.into(),
            name: None,
            forced_glossary: None,
            parallel_corpus: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_forced_glossary(mut self, forced_glossary: FileData) -> Self {
        self.forced_glossary = Some(forced_glossary);
        self
    }

    pub fn with_parallel_corpus(mut self, parallel_corpus: FileData) -> Self {
        self.parallel_corpus = Some(parallel_corpus);
        self
    }
}

/// Options for submitting a document for translation.
#[derive(Debug, Clone)]
pub struct TranslateDocumentOptions {
    pub file: FileData,
    pub model_id: Option<String>,
    pub source: Option<String>,
    pub target: Option<String>,
    pub document_id: Option<String>,
}

impl TranslateDocumentOptions {
    pub fn new(file: FileData) -> Self {
        Self {
            file,
            model_id: None,
            source: None,
            target: None,
            document_id: None,
        }
    }

    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Reuse the translation configuration of a previously submitted document.
    pub fn with_document_id(mut self, document_id: impl Into<String>) -> Self {
        self.document_id = Some(document_id.into());
        self
    }
}
