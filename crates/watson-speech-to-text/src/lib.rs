//! Client for the IBM Watson Speech to Text v1 service.
//!
//! Transcribes audio to text, with customization through user-trained
//! language models and their corpora.

mod models;
mod service;

#[cfg(test)]
mod tests;

pub use models::{
    Corpora, Corpus, CreateLanguageModelOptions, KeywordResult, LanguageModel, LanguageModels,
    RecognizeOptions, SpeechModel, SpeechModels, SpeechRecognitionAlternative,
    SpeechRecognitionResult, SpeechRecognitionResults, SupportedFeatures, TrainOptions,
};
pub use service::SpeechToText;

pub use watson_core::{Authenticator, Error, Result};
