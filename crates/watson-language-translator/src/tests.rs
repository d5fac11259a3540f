//! Tests for the Language Translator client.

use insta::assert_yaml_snapshot;
use wiremock::matchers::{
    body_json, body_string, body_string_contains, header, method, path, query_param,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::{
    Authenticator, CreateModelOptions, Error, FileData, LanguageTranslator,
    TranslateDocumentOptions, TranslateOptions,
};

const VERSION: &str = "2018-05-01";

async fn client(server: &MockServer) -> LanguageTranslator {
    let mut client = LanguageTranslator::new(VERSION, Authenticator::NoAuth).unwrap();
    client.set_endpoint(&server.uri()).unwrap();
    client
}

#[tokio::test]
async fn test_translate_sends_model_id_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/translate"))
        .and(query_param("version", VERSION))
        .and(body_json(serde_json::json!({
            "text": ["Hello, world"],
            "model_id": "en-es"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "word_count": 2,
            "character_count": 12,
            "translations": [{"translation": "Hola, mundo"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client(&server)
        .await
        .translate(TranslateOptions::new(vec!["Hello, world".to_string()]).with_model_id("en-es"))
        .await
        .unwrap();

    assert_eq!(result.word_count, Some(2));
    assert_eq!(result.translations[0].translation, "Hola, mundo");
}

#[tokio::test]
async fn test_translate_requires_model_or_language_pair() {
    let server = MockServer::start().await;
    let err = client(&server)
        .await
        .translate(TranslateOptions::new(vec!["Hello".to_string()]).with_source("en"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
}

#[tokio::test]
async fn test_identify_posts_plain_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/identify"))
        .and(header("Content-Type", "text/plain"))
        .and(body_string("Hallo Welt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "languages": [
                {"language": "de", "confidence": 0.985},
                {"language": "nl", "confidence": 0.013}
            ]
        })))
        .mount(&server)
        .await;

    let identified = client(&server).await.identify("Hallo Welt").await.unwrap();
    assert_eq!(identified.languages[0].language, "de");
}

#[tokio::test]
async fn test_list_models_passes_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/models"))
        .and(query_param("source", "en"))
        .and(query_param("target", "es"))
        .and(query_param("default", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "models": [{
                "model_id": "en-es",
                "source": "en",
                "target": "es",
                "domain": "general",
                "customizable": true,
                "default_model": true,
                "status": "available"
            }]
        })))
        .mount(&server)
        .await;

    let models = client(&server)
        .await
        .list_models(Some("en"), Some("es"), Some(true))
        .await
        .unwrap();

    assert_eq!(models.models[0].model_id, "en-es");
    assert_eq!(
        models.models[0].status.as_deref(),
        Some(crate::TranslationModel::STATUS_AVAILABLE)
    );
}

#[tokio::test]
async fn test_create_model_uploads_glossary_with_query_params() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/models"))
        .and(query_param("version", VERSION))
        .and(query_param("base_model_id", "en-es"))
        .and(query_param("name", "custom-en-es"))
        .and(body_string_contains("name=\"forced_glossary\""))
        .and(body_string_contains("filename=\"glossary.tmx\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "model_id": "en-es-custom",
            "name": "custom-en-es",
            "base_model_id": "en-es",
            "status": "dispatching"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let model = client(&server)
        .await
        .create_model(
            CreateModelOptions::new("en-es")
                .with_name("custom-en-es")
                .with_forced_glossary(
                    FileData::new(b"<tmx version=\"1.4\"></tmx>".to_vec(), "glossary.tmx")
                        .with_content_type("application/x-tmx+xml"),
                ),
        )
        .await
        .unwrap();

    assert_eq!(model.model_id, "en-es-custom");
    assert_eq!(
        model.status.as_deref(),
        Some(crate::TranslationModel::STATUS_DISPATCHING)
    );
}

#[tokio::test]
async fn test_create_model_requires_glossary_or_corpus() {
    let server = MockServer::start().await;
    let err = client(&server)
        .await
        .create_model(CreateModelOptions::new("en-es"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
}

#[tokio::test]
async fn test_delete_model_returns_status() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v3/models/en-es-custom"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "OK"})),
        )
        .mount(&server)
        .await;

    let result = client(&server)
        .await
        .delete_model("en-es-custom")
        .await
        .unwrap();
    assert_eq!(result.status, "OK");
}

#[tokio::test]
async fn test_translate_document_uploads_file() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/documents"))
        .and(query_param("version", VERSION))
        .respond_with(ResponseTemplate::new(202).set_body_json(serde_json::json!({
            "document_id": "doc-1",
            "filename": "report.pdf",
            "status": "processing",
            "model_id": "en-es",
            "created": "2019-05-01T10:30:00.000Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = TranslateDocumentOptions::new(
        FileData::new(vec![1, 2, 3], "report.pdf").with_content_type("application/pdf"),
    )
    .with_model_id("en-es");
    let status = client(&server)
        .await
        .translate_document(options)
        .await
        .unwrap();

    assert_eq!(status.document_id, "doc-1");
    assert_eq!(
        status.status.as_deref(),
        Some(crate::DocumentStatus::STATUS_PROCESSING)
    );
}

#[tokio::test]
async fn test_get_translated_document_returns_bytes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/documents/doc-1/translated_document"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"translated".to_vec()))
        .mount(&server)
        .await;

    let bytes = client(&server)
        .await
        .get_translated_document("doc-1", Some("text/plain"))
        .await
        .unwrap();
    assert_eq!(bytes, b"translated");
}

#[test]
fn test_translation_result_wire_shape() {
    let result: crate::TranslationResult = serde_json::from_value(serde_json::json!({
        "word_count": 2,
        "character_count": 12,
        "translations": [{"translation": "Hola, mundo"}]
    }))
    .unwrap();

    assert_yaml_snapshot!(result, @r###"
    ---
    word_count: 2
    character_count: 12
    translations:
      - translation: "Hola, mundo"
    "###);
}
