//! Wire models for Compare and Comply v1.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use watson_core::FileData;

/// Character offsets of an element in the converted document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub begin: i64,
    pub end: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementLocations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
}

/// The first sentence of a section, with the elements it covers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadingSentence {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub element_locations: Vec<ElementLocations>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionTitle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

/// Section titles and leading sentences of the parsed document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocStructure {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub section_titles: Vec<SectionTitle>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub leading_sentences: Vec<LeadingSentence>,
}

/// Brief document reference used in feedback payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortDoc {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

/// Cursors and totals for paging through feedback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
}

/// The nature and party of a contractual element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    pub nature: String,
    pub party: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeLabel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub provenance_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub provenance_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attribute {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub attribute_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

/// One classified element of the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<TypeLabel>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<Category>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
}

/// Basic information about an analyzed document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Result of an element classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyReturn {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<Document>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub elements: Vec<Element>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_structure: Option<DocStructure>,
}

/// Result of an HTML conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HtmlReturn {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_pages: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementPair {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

/// An element found in both compared documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlignedElement {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub element_pair: Vec<ElementPair>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identical_text: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub provenance_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub significant_elements: Option<bool>,
}

/// An element present in only one of the compared documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnalignedElement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<TypeLabel>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<Category>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
}

/// Result of a document comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareReturn {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub documents: Vec<Document>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aligned_elements: Vec<AlignedElement>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unaligned_elements: Vec<UnalignedElement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
}

/// Corrected labels supplied or returned with feedback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatedLabels {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<TypeLabel>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<Category>,
}

/// The feedback payload attached to an element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackData {
    pub feedback_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<ShortDoc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_labels: Option<UpdatedLabels>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_labels: Option<UpdatedLabels>,
}

impl FeedbackData {
    /// The only feedback type the service currently accepts.
    pub const TYPE_ELEMENT_CLASSIFICATION: &'static str = "element_classification";
}

/// Stored feedback as returned by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackReturn {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback_data: Option<FeedbackData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackList {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub feedback: Vec<FeedbackReturn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// Options for comparing two documents.
#[derive(Debug, Clone)]
pub struct CompareDocumentsOptions {
    pub file_1: FileData,
    pub file_2: FileData,
    pub file_1_label: Option<String>,
    pub file_2_label: Option<String>,
    pub model: Option<String>,
}

impl CompareDocumentsOptions {
    pub fn new(file_1: FileData, file_2: FileData) -> Self {
        Self {
            file_1,
            file_2,
            file_1_label: None,
            file_2_label: None,
            model: None,
        }
    }

    pub fn with_labels(mut self, file_1_label: impl Into<String>, file_2_label: impl Into<String>) -> Self {
        self.file_1_label = Some(file_1_label.into());
        self.file_2_label = Some(file_2_label.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// Options for storing feedback.
#[derive(Debug, Clone)]
pub struct AddFeedbackOptions {
    pub feedback_data: FeedbackData,
    pub user_id: Option<String>,
    pub comment: Option<String>,
}

impl AddFeedbackOptions {
    pub fn new(feedback_data: FeedbackData) -> Self {
        Self {
            feedback_data,
            user_id: None,
            comment: None,
        }
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// Filters for listing feedback.
#[derive(Debug, Clone, Default)]
pub struct ListFeedbackOptions {
    pub feedback_type: Option<String>,
    pub document_title: Option<String>,
    pub model_id: Option<String>,
    pub model_version: Option<String>,
    pub page_limit: Option<i64>,
    pub cursor: Option<String>,
    pub sort: Option<String>,
    pub include_total: Option<bool>,
}

impl ListFeedbackOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_feedback_type(mut self, feedback_type: impl Into<String>) -> Self {
        self.feedback_type = Some(feedback_type.into());
        self
    }

    pub fn with_document_title(mut self, document_title: impl Into<String>) -> Self {
        self.document_title = Some(document_title.into());
        self
    }

    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    pub fn with_model_version(mut self, model_version: impl Into<String>) -> Self {
        self.model_version = Some(model_version.into());
        self
    }

    pub fn with_page_limit(mut self, page_limit: i64) -> Self {
        self.page_limit = Some(page_limit);
        self
    }

    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn with_include_total(mut self, include_total: bool) -> Self {
        self.include_total = Some(include_total);
        self
    }
}
