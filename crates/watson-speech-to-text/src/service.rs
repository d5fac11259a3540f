//! Speech to Text v1 operations.

use reqwest::Method;

use watson_core::{not_empty, Authenticator, Result, ServiceCredentials, WatsonService};

use crate::models::{
    Corpora, Corpus, CreateLanguageModelOptions, LanguageModel, LanguageModels, RecognizeOptions,
    SpeechModel, SpeechModels, SpeechRecognitionResults, TrainOptions,
};

const SERVICE_NAME: &str = "speech_to_text";

/// Speech to Text service client.
pub struct SpeechToText {
    service: WatsonService,
}

impl SpeechToText {
    pub const DEFAULT_URL: &'static str = "https://stream.watsonplatform.net/speech-to-text/api";

    pub fn new(authenticator: Authenticator) -> Result<Self> {
        let service = WatsonService::new(SERVICE_NAME, Self::DEFAULT_URL, authenticator)?;
        Ok(Self { service })
    }

    /// Build a client from `WATSON_SPEECH_TO_TEXT_*` environment variables.
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

    /// List the base models available for transcription.
    pub async fn list_models(&self) -> Result<SpeechModels> {
        let request = self.service.request(Method::GET, &["v1", "models"])?;
        self.service.send_json(request).await
    }

    /// Get information about one base model.
    pub async fn get_model(&self, model_id: &str) -> Result<SpeechModel> {
        not_empty(model_id, "model_id")?;
        let request = self
            .service
            .request(Method::GET, &["v1", "models", model_id])?;
        self.service.send_json(request).await
    }

    /// Transcribe audio sent as the request body.
    pub async fn recognize(&self, options: RecognizeOptions) -> Result<SpeechRecognitionResults> {
        not_empty(&options.content_type, "content_type")?;

        let mut request = self.service.request(Method::POST, &["v1", "recognize"])?;
        if let Some(model) = options.model {
            request = request.query("model", model);
        }
        if let Some(id) = options.language_customization_id {
            request = request.query("language_customization_id", id);
        }
        if let Some(id) = options.acoustic_customization_id {
            request = request.query("acoustic_customization_id", id);
        }
        if let Some(timestamps) = options.timestamps {
            request = request.query("timestamps", timestamps);
        }
        if let Some(word_confidence) = options.word_confidence {
            request = request.query("word_confidence", word_confidence);
        }
        if let Some(max_alternatives) = options.max_alternatives {
            request = request.query("max_alternatives", max_alternatives);
        }
        if let Some(inactivity_timeout) = options.inactivity_timeout {
            request = request.query("inactivity_timeout", inactivity_timeout);
        }
        if let Some(keywords) = options.keywords {
            request = request.query("keywords", keywords.join(","));
        }
        if let Some(keywords_threshold) = options.keywords_threshold {
            request = request.query("keywords_threshold", keywords_threshold);
        }
        if let Some(smart_formatting) = options.smart_formatting {
            request = request.query("smart_formatting", smart_formatting);
        }
        if let Some(speaker_labels) = options.speaker_labels {
            request = request.query("speaker_labels", speaker_labels);
        }

        let request = request.raw(options.audio, &options.content_type);
        self.service.send_json(request).await
    }

    /// Create a custom language model on top of a base model.
    pub async fn create_language_model(
        &self,
        options: CreateLanguageModelOptions,
    ) -> Result<LanguageModel> {
        not_empty(&options.name, "name")?;
        not_empty(&options.base_model_name, "base_model_name")?;
        let request = self
            .service
            .request(Method::POST, &["v1", "customizations"])?
            .json(&options)?;
        self.service.send_json(request).await
    }

    /// List custom language models, optionally filtered by language.
    pub async fn list_language_models(&self, language: Option<&str>) -> Result<LanguageModels> {
        let mut request = self.service.request(Method::GET, &["v1", "customizations"])?;
        if let Some(language) = language {
            request = request.query("language", language);
        }
        self.service.send_json(request).await
    }

    /// Get information about a custom language model.
    pub async fn get_language_model(&self, customization_id: &str) -> Result<LanguageModel> {
        not_empty(customization_id, "customization_id")?;
        let request = self
            .service
            .request(Method::GET, &["v1", "customizations", customization_id])?;
        self.service.send_json(request).await
    }

    /// Delete a custom language model.
    pub async fn delete_language_model(&self, customization_id: &str) -> Result<()> {
        not_empty(customization_id, "customization_id")?;
        let request = self
            .service
            .request(Method::DELETE, &["v1", "customizations", customization_id])?;
        self.service.send_no_content(request).await
    }

    /// Start training a custom language model on its corpora and words.
    pub async fn train_language_model(
        &self,
        customization_id: &str,
        options: TrainOptions,
    ) -> Result<()> {
        not_empty(customization_id, "customization_id")?;
        let mut request = self.service.request(
            Method::POST,
            &["v1", "customizations", customization_id, "train"],
        )?;
        if let Some(word_type_to_add) = options.word_type_to_add {
            request = request.query("word_type_to_add", word_type_to_add);
        }
        if let Some(customization_weight) = options.customization_weight {
            request = request.query("customization_weight", customization_weight);
        }
        self.service.send_no_content(request).await
    }

    /// Reset a custom language model, removing all corpora and words.
    pub async fn reset_language_model(&self, customization_id: &str) -> Result<()> {
        not_empty(customization_id, "customization_id")?;
        let request = self.service.request(
            Method::POST,
            &["v1", "customizations", customization_id, "reset"],
        )?;
        self.service.send_no_content(request).await
    }

    /// List the corpora of a custom language model.
    pub async fn list_corpora(&self, customization_id: &str) -> Result<Corpora> {
        not_empty(customization_id, "customization_id")?;
        let request = self.service.request(
            Method::GET,
            &["v1", "customizations", customization_id, "corpora"],
        )?;
        self.service.send_json(request).await
    }

    /// Add a plain-text corpus to a custom language model.
    pub async fn add_corpus(
        &self,
        customization_id: &str,
        corpus_name: &str,
        corpus_text: Vec<u8>,
        allow_overwrite: bool,
    ) -> Result<()> {
        not_empty(customization_id, "customization_id")?;
        not_empty(corpus_name, "corpus_name")?;
        let mut request = self.service.request(
            Method::POST,
            &[
                "v1",
                "customizations",
                customization_id,
                "corpora",
                corpus_name,
            ],
        )?;
        if allow_overwrite {
            request = request.query("allow_overwrite", true);
        }
        let request = request.raw(corpus_text, "text/plain");
        self.service.send_no_content(request).await
    }

    /// Get the processing status of a corpus.
    pub async fn get_corpus(&self, customization_id: &str, corpus_name: &str) -> Result<Corpus> {
        not_empty(customization_id, "customization_id")?;
        not_empty(corpus_name, "corpus_name")?;
        let request = self.service.request(
            Method::GET,
            &[
                "v1",
                "customizations",
                customization_id,
                "corpora",
                corpus_name,
            ],
        )?;
        self.service.send_json(request).await
    }

    /// Delete a corpus from a custom language model.
    pub async fn delete_corpus(&self, customization_id: &str, corpus_name: &str) -> Result<()> {
        not_empty(customization_id, "customization_id")?;
        not_empty(corpus_name, "corpus_name")?;
        let request = self.service.request(
            Method::DELETE,
            &[
                "v1",
                "customizations",
                customization_id,
                "corpora",
                corpus_name,
            ],
        )?;
        self.service.send_no_content(request).await
    }
}
