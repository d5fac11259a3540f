//! Rust client SDK for the IBM Watson cloud AI services.
//!
//! Each service lives in its own crate; this facade re-exports them under
//! one roof together with the shared core types.

pub use watson_assistant as assistant;
pub use watson_compare_comply as compare_comply;
pub use watson_discovery as discovery;
pub use watson_language_translator as language_translator;
pub use watson_nlc as natural_language_classifier;
pub use watson_speech_to_text as speech_to_text;
pub use watson_visual_recognition as visual_recognition;

pub use watson_core::{Authenticator, Error, IamAuthenticator, Result, ServiceCredentials};
