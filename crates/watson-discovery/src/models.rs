//! Wire models for Discovery v1.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use watson_core::FileData;

/// A Discovery environment, the top-level container for collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Environment {
    pub environment_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_capacity: Option<Value>,
}

impl Environment {
    pub const STATUS_ACTIVE: &'static str = "active";
    pub const STATUS_PENDING: &'static str = "pending";
    pub const STATUS_MAINTENANCE: &'static str = "maintenance";
    pub const STATUS_RESIZING: &'static str = "resizing";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListEnvironmentsResponse {
    #[serde(default)]
    pub environments: Vec<Environment>,
}

/// Confirmation of an environment deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteEnvironmentResponse {
    pub environment_id: String,
    pub status: String,
}

/// Counts of documents in a collection, by processing outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentCounts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending: Option<i64>,
}

/// A collection of documents within an environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    pub collection_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_counts: Option<DocumentCounts>,
}

impl Collection {
    pub const STATUS_ACTIVE: &'static str = "active";
    pub const STATUS_PENDING: &'static str = "pending";
    pub const STATUS_MAINTENANCE: &'static str = "maintenance";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListCollectionsResponse {
    #[serde(default)]
    pub collections: Vec<Collection>,
}

/// Confirmation of a collection deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteCollectionResponse {
    pub collection_id: String,
    pub status: String,
}

/// A warning or error raised while ingesting a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Notice {
    pub const SEVERITY_WARNING: &'static str = "warning";
    pub const SEVERITY_ERROR: &'static str = "error";
}

/// Acknowledgement that a document was accepted for ingestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentAccepted {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub notices: Vec<Notice>,
}

/// Ingestion status of a single document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStatus {
    pub document_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha1: Option<String>,
    #[serde(default)]
    pub notices: Vec<Notice>,
}

impl DocumentStatus {
    pub const STATUS_AVAILABLE: &'static str = "available";
    pub const STATUS_AVAILABLE_WITH_NOTICES: &'static str = "available with notices";
    pub const STATUS_FAILED: &'static str = "failed";
    pub const STATUS_PROCESSING: &'static str = "processing";
    pub const STATUS_PENDING: &'static str = "pending";
}

/// Confirmation of a document deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteDocumentResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    pub status: String,
}

/// A passage extracted from a matching document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryPassage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passage_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passage_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Result set of a query. Documents are schemaless, so each result is
/// returned as raw JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matching_results: Option<i64>,
    #[serde(default)]
    pub results: Vec<Value>,
    #[serde(default)]
    pub aggregations: Vec<Value>,
    #[serde(default)]
    pub passages: Vec<QueryPassage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duplicates_removed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_token: Option<String>,
}

/// A gateway connecting Discovery to an on-premises data source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gateway {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_id: Option<String>,
}

impl Gateway {
    pub const STATUS_CONNECTED: &'static str = "connected";
    pub const STATUS_IDLE: &'static str = "idle";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayList {
    #[serde(default)]
    pub gateways: Vec<Gateway>,
}

/// Confirmation of a gateway deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayDelete {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Free-form category taxonomy options for the NLU categories enrichment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NluEnrichmentCategories(pub serde_json::Map<String, Value>);

/// Per-feature options for an NLU enrichment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NluEnrichmentFeatures {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<NluEnrichmentCategories>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semantic_roles: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relations: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concepts: Option<Value>,
}

/// Options passed to an enrichment step in a configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnrichmentOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<NluEnrichmentFeatures>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// One enrichment step applied to ingested documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrichment {
    /// Name of the enrichment service to call, e.g. `natural_language_understanding`.
    pub enrichment: String,
    pub source_field: String,
    pub destination_field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overwrite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_downstream_errors: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<EnrichmentOptions>,
}

/// Options for creating an environment.
#[derive(Debug, Clone)]
pub struct CreateEnvironmentOptions {
    pub name: String,
    pub description: Option<String>,
    pub size: Option<String>,
}

impl CreateEnvironmentOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            size: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }
}

/// Options for creating a collection in an environment.
#[derive(Debug, Clone)]
pub struct CreateCollectionOptions {
    pub name: String,
    pub description: Option<String>,
    pub configuration_id: Option<String>,
    pub language: Option<String>,
}

impl CreateCollectionOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            configuration_id: None,
            language: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_configuration_id(mut self, configuration_id: impl Into<String>) -> Self {
        self.configuration_id = Some(configuration_id.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

/// Options for adding or updating a document. At least one of `file` or
/// `metadata` must be set.
#[derive(Debug, Clone, Default)]
pub struct AddDocumentOptions {
    pub file: Option<FileData>,
    /// JSON metadata stored alongside the document, at most 1 MB.
    pub metadata: Option<String>,
}

impl AddDocumentOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, file: FileData) -> Self {
        self.file = Some(file);
        self
    }

    pub fn with_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }
}

/// Query parameters shared by per-collection and federated queries.
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    pub filter: Option<String>,
    pub query: Option<String>,
    pub natural_language_query: Option<String>,
    pub passages: Option<bool>,
    pub passages_fields: Option<String>,
    pub passages_count: Option<i64>,
    pub passages_characters: Option<i64>,
    pub aggregation: Option<String>,
    pub count: Option<i64>,
    pub return_fields: Option<String>,
    pub offset: Option<i64>,
    pub sort: Option<String>,
    pub highlight: Option<bool>,
    pub deduplicate: Option<bool>,
    pub deduplicate_field: Option<String>,
    pub collection_ids: Option<String>,
    pub similar: Option<bool>,
    pub similar_document_ids: Option<String>,
    pub similar_fields: Option<String>,
    pub bias: Option<String>,
    /// When true, the request is excluded from service logs via the
    /// `X-Watson-Logging-Opt-Out` header.
    pub logging_opt_out: Option<bool>,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_natural_language_query(mut self, query: impl Into<String>) -> Self {
        self.natural_language_query = Some(query.into());
        self
    }

    pub fn with_passages(mut self, passages: bool) -> Self {
        self.passages = Some(passages);
        self
    }

    pub fn with_passages_fields(mut self, fields: impl Into<String>) -> Self {
        self.passages_fields = Some(fields.into());
        self
    }

    pub fn with_passages_count(mut self, count: i64) -> Self {
        self.passages_count = Some(count);
        self
    }

    pub fn with_passages_characters(mut self, characters: i64) -> Self {
        self.passages_characters = Some(characters);
        self
    }

    pub fn with_aggregation(mut self, aggregation: impl Into<String>) -> Self {
        self.aggregation = Some(aggregation.into());
        self
    }

    pub fn with_count(mut self, count: i64) -> Self {
        self.count = Some(count);
        self
    }

    /// Comma-separated list of fields to include in each result.
    pub fn with_return_fields(mut self, fields: impl Into<String>) -> Self {
        self.return_fields = Some(fields.into());
        self
    }

    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn with_highlight(mut self, highlight: bool) -> Self {
        self.highlight = Some(highlight);
        self
    }

    pub fn with_deduplicate(mut self, deduplicate: bool) -> Self {
        self.deduplicate = Some(deduplicate);
        self
    }

    pub fn with_deduplicate_field(mut self, field: impl Into<String>) -> Self {
        self.deduplicate_field = Some(field.into());
        self
    }

    /// Comma-separated collection ids, required for federated queries.
    pub fn with_collection_ids(mut self, collection_ids: impl Into<String>) -> Self {
        self.collection_ids = Some(collection_ids.into());
        self
    }

    pub fn with_similar(mut self, similar: bool) -> Self {
        self.similar = Some(similar);
        self
    }

    pub fn with_similar_document_ids(mut self, document_ids: impl Into<String>) -> Self {
        self.similar_document_ids = Some(document_ids.into());
        self
    }

    pub fn with_similar_fields(mut self, fields: impl Into<String>) -> Self {
        self.similar_fields = Some(fields.into());
        self
    }

    pub fn with_bias(mut self, bias: impl Into<String>) -> Self {
        self.bias = Some(bias.into());
        self
    }

    pub fn with_logging_opt_out(mut self, opt_out: bool) -> Self {
        self.logging_opt_out = Some(opt_out);
        self
    }
}
