//! Client for the IBM Watson Visual Recognition v3 service.
//!
//! Identifies scenes, objects and faces in uploaded images, with support
//! for custom classifiers trained from positive and negative example sets.

mod models;
mod service;

#[cfg(test)]
mod tests;

pub use models::{
    ClassInfo, ClassResult, ClassifiedImage, ClassifiedImages, Classifier, ClassifierResult,
    Classifiers, ClassifyOptions, CreateClassifierOptions, DetectFacesOptions, DetectedFaces,
    ErrorInfo, Face, FaceAge, FaceGender, FaceLocation, ImageWithFaces, UpdateClassifierOptions,
    WarningInfo,
};
pub use service::VisualRecognition;

pub use watson_core::{Authenticator, Error, FileData, Result};
