//! Wire models for Speech to Text v1.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportedFeatures {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_language_model: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaker_labels: Option<bool>,
}

/// A base model available for transcription.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechModel {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_features: Option<SupportedFeatures>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechModels {
    #[serde(default)]
    pub models: Vec<SpeechModel>,
}

/// A keyword spotted in the audio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordResult {
    pub normalized_text: String,
    pub start_time: f64,
    pub end_time: f64,
    pub confidence: f64,
}

/// One transcription hypothesis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechRecognitionAlternative {
    pub transcript: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Word timings as `[word, start, end]` triples.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub timestamps: Vec<(String, f64, f64)>,
    /// Word confidences as `[word, confidence]` pairs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub word_confidence: Vec<(String, f64)>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechRecognitionResult {
    #[serde(rename = "final")]
    pub is_final: bool,
    #[serde(default)]
    pub alternatives: Vec<SpeechRecognitionAlternative>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords_result: Option<HashMap<String, Vec<KeywordResult>>>,
}

/// The complete response of a recognize call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechRecognitionResults {
    #[serde(default)]
    pub results: Vec<SpeechRecognitionResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_index: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// A custom language model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageModel {
    pub customization_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialect: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_model_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl LanguageModel {
    /// Customization lifecycle states.
    pub const STATUS_PENDING: &'static str = "pending";
    pub const STATUS_READY: &'static str = "ready";
    pub const STATUS_TRAINING: &'static str = "training";
    pub const STATUS_AVAILABLE: &'static str = "available";
    pub const STATUS_UPGRADING: &'static str = "upgrading";
    pub const STATUS_FAILED: &'static str = "failed";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageModels {
    #[serde(default)]
    pub customizations: Vec<LanguageModel>,
}

/// A corpus of a custom language model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Corpus {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_words: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_of_vocabulary_words: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Corpus {
    /// Corpus processing states.
    pub const STATUS_ANALYZED: &'static str = "analyzed";
    pub const STATUS_BEING_PROCESSED: &'static str = "being_processed";
    pub const STATUS_UNDETERMINED: &'static str = "undetermined";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Corpora {
    #[serde(default)]
    pub corpora: Vec<Corpus>,
}

/// Options for a recognize call. The audio is sent as the raw request body
/// with its `Content-Type`.
#[derive(Debug, Clone)]
pub struct RecognizeOptions {
    pub audio: Vec<u8>,
    pub content_type: String,
    pub model: Option<String>,
    pub language_customization_id: Option<String>,
    pub acoustic_customization_id: Option<String>,
    pub timestamps: Option<bool>,
    pub word_confidence: Option<bool>,
    pub max_alternatives: Option<i64>,
    pub inactivity_timeout: Option<i64>,
    pub keywords: Option<Vec<String>>,
    pub keywords_threshold: Option<f32>,
    pub smart_formatting: Option<bool>,
    pub speaker_labels: Option<bool>,
}

impl RecognizeOptions {
    pub fn new(audio: Vec<u8>, content_type: impl Into<String>) -> Self {
        Self {
            audio,
            content_type: content_type.into(),
            model: None,
            language_customization_id: None,
            acoustic_customization_id: None,
            timestamps: None,
            word_confidence: None,
            max_alternatives: None,
            inactivity_timeout: None,
            keywords: None,
            keywords_threshold: None,
            smart_formatting: None,
            speaker_labels: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_language_customization_id(mut self, id: impl Into<String>) -> Self {
        self.language_customization_id = Some(id.into());
        self
    }

    pub fn with_acoustic_customization_id(mut self, id: impl Into<String>) -> Self {
        self.acoustic_customization_id = Some(id.into());
        self
    }

    pub fn with_timestamps(mut self, timestamps: bool) -> Self {
        self.timestamps = Some(timestamps);
        self
    }

    pub fn with_word_confidence(mut self, word_confidence: bool) -> Self {
        self.word_confidence = Some(word_confidence);
        self
    }

    pub fn with_max_alternatives(mut self, max_alternatives: i64) -> Self {
        self.max_alternatives = Some(max_alternatives);
        self
    }

    pub fn with_inactivity_timeout(mut self, inactivity_timeout: i64) -> Self {
        self.inactivity_timeout = Some(inactivity_timeout);
        self
    }

    pub fn with_keywords(mut self, keywords: Vec<String>, threshold: f32) -> Self {
        self.keywords = Some(keywords);
        self.keywords_threshold = Some(threshold);
        self
    }

    pub fn with_smart_formatting(mut self, smart_formatting: bool) -> Self {
        self.smart_formatting = Some(smart_formatting);
        self
    }

    pub fn with_speaker_labels(mut self, speaker_labels: bool) -> Self {
        self.speaker_labels = Some(speaker_labels);
        self
    }
}

/// Options for creating a custom language model.
#[derive(Debug, Clone, Serialize)]
pub struct CreateLanguageModelOptions {
    pub name: String,
    pub base_model_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialect: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateLanguageModelOptions {
    pub fn new(name: impl Into<String>, base_model_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_model_name: base_model_name.into(),
            dialect: None,
            description: None,
        }
    }

    pub fn with_dialect(mut self, dialect: impl Into<String>) -> Self {
        self.dialect = Some(dialect.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Options for training a custom language model.
#[derive(Debug, Clone, Default)]
pub struct TrainOptions {
    pub word_type_to_add: Option<String>,
    pub customization_weight: Option<f64>,
}

impl TrainOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_word_type_to_add(mut self, word_type_to_add: impl Into<String>) -> Self {
        self.word_type_to_add = Some(word_type_to_add.into());
        self
    }

    pub fn with_customization_weight(mut self, customization_weight: f64) -> Self {
        self.customization_weight = Some(customization_weight);
        self
    }
}
