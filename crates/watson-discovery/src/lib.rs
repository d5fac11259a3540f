//! Client for the IBM Watson Discovery v1 service.
//!
//! Manages environments, collections and document ingestion, and runs
//! queries, including federated queries across collections.

mod models;
mod service;

#[cfg(test)]
mod tests;

pub use models::{
    AddDocumentOptions, Collection, CreateCollectionOptions, CreateEnvironmentOptions,
    DeleteCollectionResponse, DeleteDocumentResponse, DeleteEnvironmentResponse, DocumentAccepted,
    DocumentCounts, DocumentStatus, Enrichment, EnrichmentOptions, Environment, Gateway,
    GatewayDelete, GatewayList, ListCollectionsResponse, ListEnvironmentsResponse, Notice,
    NluEnrichmentCategories, NluEnrichmentFeatures, QueryOptions, QueryPassage, QueryResponse,
};
pub use service::Discovery;

pub use watson_core::{Authenticator, Error, FileData, Result};
