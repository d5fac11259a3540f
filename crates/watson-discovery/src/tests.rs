//! Tests for the Discovery client.

use insta::assert_yaml_snapshot;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::{
    AddDocumentOptions, Authenticator, CreateCollectionOptions, CreateEnvironmentOptions,
    Discovery, Error, FileData, QueryOptions,
};

const VERSION: &str = "2019-04-30";

async fn client(server: &MockServer) -> Discovery {
    let mut client = Discovery::new(VERSION, Authenticator::NoAuth).unwrap();
    client.set_endpoint(&server.uri()).unwrap();
    client
}

#[tokio::test]
async fn test_create_environment_posts_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/environments"))
        .and(query_param("version", VERSION))
        .and(body_json(serde_json::json!({
            "name": "contracts",
            "description": "Contract archive",
            "size": "S"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "environment_id": "env-1",
            "name": "contracts",
            "status": "pending",
            "read_only": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let environment = client(&server)
        .await
        .create_environment(
            CreateEnvironmentOptions::new("contracts")
                .with_description("Contract archive")
                .with_size("S"),
        )
        .await
        .unwrap();

    assert_eq!(environment.environment_id, "env-1");
    assert_eq!(environment.status.as_deref(), Some("pending"));
}

#[tokio::test]
async fn test_list_environments_filters_by_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/environments"))
        .and(query_param("name", "contracts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "environments": [
                {"environment_id": "env-1", "name": "contracts", "read_only": false}
            ]
        })))
        .mount(&server)
        .await;

    let listed = client(&server)
        .await
        .list_environments(Some("contracts"))
        .await
        .unwrap();
    assert_eq!(listed.environments.len(), 1);
    assert_eq!(listed.environments[0].environment_id, "env-1");
}

#[tokio::test]
async fn test_collection_crud_paths() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/environments/env-1/collections"))
        .and(body_json(serde_json::json!({
            "name": "msa",
            "language": "en"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "collection_id": "col-1",
            "name": "msa",
            "status": "active",
            "language": "en"
        })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/environments/env-1/collections/col-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "collection_id": "col-1",
            "status": "deleted"
        })))
        .mount(&server)
        .await;

    let client = client(&server).await;
    let collection = client
        .create_collection(
            "env-1",
            CreateCollectionOptions::new("msa").with_language("en"),
        )
        .await
        .unwrap();
    assert_eq!(collection.collection_id, "col-1");

    let deleted = client.delete_collection("env-1", "col-1").await.unwrap();
    assert_eq!(deleted.status, "deleted");
}

#[tokio::test]
async fn test_add_document_uploads_file_and_metadata() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/environments/env-1/collections/col-1/documents"))
        .and(query_param("version", VERSION))
        .respond_with(ResponseTemplate::new(202).set_body_json(serde_json::json!({
            "document_id": "doc-1",
            "status": "processing",
            "notices": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let accepted = client(&server)
        .await
        .add_document(
            "env-1",
            "col-1",
            AddDocumentOptions::new()
                .with_file(
                    FileData::new(b"hello".to_vec(), "note.txt").with_content_type("text/plain"),
                )
                .with_metadata(r#"{"source":"mail"}"#),
        )
        .await
        .unwrap();

    assert_eq!(accepted.document_id.as_deref(), Some("doc-1"));
    assert_eq!(accepted.status.as_deref(), Some("processing"));
}

#[tokio::test]
async fn test_add_document_without_file_or_metadata_is_invalid() {
    let server = MockServer::start().await;
    let result = client(&server)
        .await
        .add_document("env-1", "col-1", AddDocumentOptions::new())
        .await;
    assert!(matches!(result, Err(Error::InvalidInput(_))));
}

#[tokio::test]
async fn test_query_sends_dotted_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/environments/env-1/collections/col-1/query"))
        .and(query_param("natural_language_query", "termination notice period"))
        .and(query_param("passages", "true"))
        .and(query_param("passages.count", "3"))
        .and(query_param("count", "5"))
        .and(query_param("return", "title,text"))
        .and(query_param("deduplicate.field", "title"))
        .and(header("X-Watson-Logging-Opt-Out", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "matching_results": 2,
            "results": [
                {"id": "doc-1", "title": "MSA"},
                {"id": "doc-2", "title": "SOW"}
            ],
            "passages": [{
                "document_id": "doc-1",
                "passage_score": 8.1,
                "passage_text": "Either party may terminate on 30 days notice.",
                "start_offset": 120,
                "end_offset": 168,
                "field": "text"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server)
        .await
        .query(
            "env-1",
            "col-1",
            QueryOptions::new()
                .with_natural_language_query("termination notice period")
                .with_passages(true)
                .with_passages_count(3)
                .with_count(5)
                .with_return_fields("title,text")
                .with_deduplicate_field("title")
                .with_logging_opt_out(true),
        )
        .await
        .unwrap();

    assert_eq!(response.matching_results, Some(2));
    assert_eq!(response.results.len(), 2);
    assert_eq!(
        response.passages[0].field.as_deref(),
        Some("text")
    );
}

#[tokio::test]
async fn test_federated_query_requires_collection_ids() {
    let server = MockServer::start().await;
    let result = client(&server)
        .await
        .federated_query("env-1", QueryOptions::new().with_query("text:notice"))
        .await;
    assert!(matches!(result, Err(Error::InvalidInput(_))));
}

#[tokio::test]
async fn test_federated_query_spans_collections() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/environments/env-1/query"))
        .and(query_param("collection_ids", "col-1,col-2"))
        .and(query_param("deduplicate", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "matching_results": 7,
            "results": [],
            "duplicates_removed": 2
        })))
        .mount(&server)
        .await;

    let response = client(&server)
        .await
        .federated_query(
            "env-1",
            QueryOptions::new()
                .with_collection_ids("col-1,col-2")
                .with_deduplicate(true),
        )
        .await
        .unwrap();

    assert_eq!(response.duplicates_removed, Some(2));
}

#[tokio::test]
async fn test_gateway_lifecycle() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/environments/env-1/gateways"))
        .and(body_json(serde_json::json!({"name": "on-prem"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "gateway_id": "gw-1",
            "name": "on-prem",
            "status": "idle",
            "token": "tok",
            "token_id": "tok-1"
        })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/environments/env-1/gateways/gw-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "gateway_id": "gw-1",
            "status": "deleted"
        })))
        .mount(&server)
        .await;

    let client = client(&server).await;
    let gateway = client.create_gateway("env-1", Some("on-prem")).await.unwrap();
    assert_eq!(gateway.gateway_id.as_deref(), Some("gw-1"));

    let deleted = client.delete_gateway("env-1", "gw-1").await.unwrap();
    assert_eq!(deleted.status.as_deref(), Some("deleted"));
}

#[test]
fn test_document_status_wire_shape() {
    let status: crate::DocumentStatus = serde_json::from_value(serde_json::json!({
        "document_id": "doc-1",
        "configuration_id": "conf-1",
        "status": "available with notices",
        "status_description": "Document is successfully ingested with warnings",
        "filename": "note.txt",
        "file_type": "html",
        "sha1": "da39a3ee",
        "notices": [{
            "notice_id": "index_failed",
            "severity": "warning",
            "step": "index",
            "description": "one field was truncated"
        }]
    }))
    .unwrap();

    assert_yaml_snapshot!(status, @r###"
    ---
    document_id: doc-1
    configuration_id: conf-1
    status: available with notices
    status_description: Document is successfully ingested with warnings
    filename: note.txt
    file_type: html
    sha1: da39a3ee
    notices:
      - notice_id: index_failed
        severity: warning
        step: index
        description: one field was truncated
    "###);
}

#[test]
fn test_enrichment_categories_serialize_transparently() {
    let mut categories = crate::NluEnrichmentCategories::default();
    categories
        .0
        .insert("explanation".to_string(), serde_json::json!(true));
    let features = crate::NluEnrichmentFeatures {
        categories: Some(categories),
        ..Default::default()
    };

    let value = serde_json::to_value(&features).unwrap();
    assert_eq!(value, serde_json::json!({"categories": {"explanation": true}}));
}
