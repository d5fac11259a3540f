//! Client for the IBM Watson Compare and Comply v1 service.
//!
//! Extracts structure, elements and governing labels from contract
//! documents, compares two documents, and collects user feedback on the
//! labels the models assign.

mod models;
mod service;

#[cfg(test)]
mod tests;

pub use models::{
    AddFeedbackOptions, AlignedElement, Attribute, Category, CompareDocumentsOptions,
    CompareReturn, ClassifyReturn, DocStructure, Document, Element, ElementLocations, ElementPair,
    FeedbackData, FeedbackList, FeedbackReturn, HtmlReturn, Label, LeadingSentence,
    ListFeedbackOptions, Location, Pagination, SectionTitle, ShortDoc, TypeLabel,
    UnalignedElement, UpdatedLabels,
};
pub use service::CompareComply;

pub use watson_core::{Authenticator, Error, FileData, Result};
