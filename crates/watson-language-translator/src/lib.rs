//! Client for the IBM Watson Language Translator v3 service.
//!
//! Translates text and documents between languages, identifies the
//! language of text, and manages custom translation models.

mod models;
mod service;

#[cfg(test)]
mod tests;

pub use models::{
    CreateModelOptions, DeleteModelResult, DocumentList, DocumentStatus, IdentifiableLanguage,
    IdentifiableLanguages, IdentifiedLanguage, IdentifiedLanguages, TranslateDocumentOptions,
    TranslateOptions, Translation, TranslationModel, TranslationModels, TranslationResult,
};
pub use service::LanguageTranslator;

pub use watson_core::{Authenticator, Error, FileData, Result};
