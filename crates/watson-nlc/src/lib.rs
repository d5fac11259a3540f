//! Client for the IBM Watson Natural Language Classifier v1 service.
//!
//! The service returns the top matching predefined classes for short text
//! input, using classifiers trained from labeled example data.

mod models;
mod service;


pub use models::{
    Classification, ClassificationCollection, ClassifiedClass, Classifier, ClassifierList,
    ClassifyInput, CollectionItem, CreateClassifierOptions,
};
pub use service::NaturalLanguageClassifier;

pub use watson_core::{Authenticator, Error, Result};
