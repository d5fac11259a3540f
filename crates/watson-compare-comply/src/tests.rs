//! Tests for the Compare and Comply client.

use insta::assert_yaml_snapshot;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::{
    AddFeedbackOptions, Authenticator, CompareComply, CompareDocumentsOptions, FeedbackData,
    FileData, ListFeedbackOptions,
};

const VERSION: &str = "2018-10-15";

async fn client(server: &MockServer) -> CompareComply {
    let mut client = CompareComply::new(VERSION, Authenticator::NoAuth).unwrap();
    client.set_endpoint(&server.uri()).unwrap();
    client
}

fn pdf(name: &str) -> FileData {
    FileData::new(vec![0x25, 0x50, 0x44, 0x46], name).with_content_type("application/pdf")
}

#[tokio::test]
async fn test_convert_to_html_uploads_the_file() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/html_conversion"))
        .and(query_param("version", VERSION))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "num_pages": "4",
            "title": "Master Services Agreement",
            "html": "<html><body>…</body></html>"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let html = client(&server)
        .await
        .convert_to_html(pdf("msa.pdf"), None)
        .await
        .unwrap();
    assert_eq!(html.title.as_deref(), Some("Master Services Agreement"));
}

#[tokio::test]
async fn test_classify_elements_parses_types_and_categories() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/element_classification"))
        .and(query_param("version", VERSION))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "document": {"title": "msa.pdf", "hash": "abc123"},
            "model_id": "contracts",
            "model_version": "1.0.0",
            "elements": [{
                "location": {"begin": 210, "end": 310},
                "text": "Supplier shall indemnify the Buyer.",
                "types": [{"label": {"nature": "Obligation", "party": "Supplier"}}],
                "categories": [{"label": "Indemnification"}]
            }],
            "document_structure": {
                "section_titles": [{"text": "Indemnity", "location": {"begin": 180, "end": 200}}],
                "leading_sentences": [{
                    "text": "Supplier shall indemnify the Buyer.",
                    "location": {"begin": 210, "end": 310},
                    "element_locations": [{"begin": 210, "end": 310}]
                }]
            }
        })))
        .mount(&server)
        .await;

    let classified = client(&server)
        .await
        .classify_elements(pdf("msa.pdf"), Some("contracts"))
        .await
        .unwrap();

    let element = &classified.elements[0];
    let label = element.types[0].label.as_ref().unwrap();
    assert_eq!(label.nature, "Obligation");
    assert_eq!(label.party, "Supplier");
    let structure = classified.document_structure.unwrap();
    assert_eq!(structure.leading_sentences[0].element_locations.len(), 1);
}

#[tokio::test]
async fn test_compare_documents_sends_labels_as_query() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/comparison"))
        .and(query_param("file_1_label", "primary"))
        .and(query_param("file_2_label", "secondary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "documents": [
                {"title": "v1.pdf", "label": "primary"},
                {"title": "v2.pdf", "label": "secondary"}
            ],
            "aligned_elements": [{
                "element_pair": [
                    {"document_label": "primary", "text": "Term is 12 months."},
                    {"document_label": "secondary", "text": "Term is 24 months."}
                ],
                "identical_text": false
            }]
        })))
        .mount(&server)
        .await;

    let compared = client(&server)
        .await
        .compare_documents(
            CompareDocumentsOptions::new(pdf("v1.pdf"), pdf("v2.pdf"))
                .with_labels("primary", "secondary"),
        )
        .await
        .unwrap();

    assert_eq!(compared.aligned_elements[0].identical_text, Some(false));
}

#[tokio::test]
async fn test_compare_documents_rejects_files_without_filenames() {
    let server = MockServer::start().await;
    let err = client(&server)
        .await
        .compare_documents(CompareDocumentsOptions::new(
            pdf("v1.pdf"),
            FileData::new(vec![0x25, 0x50, 0x44, 0x46], ""),
        ))
        .await
        .unwrap_err();
    assert!(matches!(err, crate::Error::InvalidInput(_)));
}

#[tokio::test]
async fn test_add_feedback_posts_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/feedback"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "feedback_id": "fb-1",
            "created": "2019-07-01T12:00:00.000Z",
            "feedback_data": {"feedback_type": "element_classification"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let feedback_data = FeedbackData {
        feedback_type: FeedbackData::TYPE_ELEMENT_CLASSIFICATION.to_string(),
        document: None,
        model_id: Some("contracts".to_string()),
        model_version: None,
        location: None,
        text: Some("Supplier shall indemnify the Buyer.".to_string()),
        original_labels: None,
        updated_labels: None,
    };
    let stored = client(&server)
        .await
        .add_feedback(AddFeedbackOptions::new(feedback_data).with_user_id("user-1"))
        .await
        .unwrap();

    assert_eq!(stored.feedback_id.as_deref(), Some("fb-1"));
}

#[tokio::test]
async fn test_list_feedback_parses_pagination() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/feedback"))
        .and(query_param("page_limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "feedback": [{"feedback_id": "fb-1"}],
            "pagination": {
                "refresh_cursor": "ref-1",
                "next_cursor": "next-1",
                "total": 12
            }
        })))
        .mount(&server)
        .await;

    let list = client(&server)
        .await
        .list_feedback(ListFeedbackOptions::new().with_page_limit(1))
        .await
        .unwrap();

    let pagination = list.pagination.unwrap();
    assert_eq!(pagination.next_cursor.as_deref(), Some("next-1"));
    assert_eq!(pagination.total, Some(12));
}

#[test]
fn test_pagination_wire_shape() {
    let pagination: crate::Pagination = serde_json::from_value(serde_json::json!({
        "refresh_cursor": "ref-1",
        "next_cursor": "next-1",
        "refresh_url": "/v1/feedback?cursor=ref-1",
        "next_url": "/v1/feedback?cursor=next-1",
        "total": 12
    }))
    .unwrap();

    assert_yaml_snapshot!(pagination, @r###"
    ---
    refresh_cursor: ref-1
    next_cursor: next-1
    refresh_url: /v1/feedback?cursor=ref-1
    next_url: /v1/feedback?cursor=next-1
    total: 12
    "###);
}
