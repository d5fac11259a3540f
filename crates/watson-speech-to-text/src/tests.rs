//! Tests for the Speech to Text client.

use insta::assert_yaml_snapshot;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::{
    Authenticator, Corpus, CreateLanguageModelOptions, Error, RecognizeOptions, SpeechToText,
    TrainOptions,
};

async fn client(server: &MockServer) -> SpeechToText {
    let mut client = SpeechToText::new(Authenticator::NoAuth).unwrap();
    client.set_endpoint(&server.uri()).unwrap();
    client
}

#[tokio::test]
async fn test_recognize_sends_audio_with_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/recognize"))
        .and(header("Content-Type", "audio/flac"))
        .and(query_param("model", "en-US_BroadbandModel"))
        .and(query_param("timestamps", "true"))
        .and(query_param("keywords", "colorado,tornado"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result_index": 0,
            "results": [{
                "final": true,
                "alternatives": [{
                    "transcript": "several tornadoes touch down ",
                    "confidence": 0.891,
                    "timestamps": [["several", 1.0, 1.51], ["tornadoes", 1.51, 2.15]]
                }],
                "keywords_result": {
                    "tornado": [{
                        "normalized_text": "tornadoes",
                        "start_time": 1.51,
                        "end_time": 2.15,
                        "confidence": 0.98
                    }]
                }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = RecognizeOptions::new(vec![0u8; 16], "audio/flac")
        .with_model("en-US_BroadbandModel")
        .with_timestamps(true)
        .with_keywords(vec!["colorado".to_string(), "tornado".to_string()], 0.5);
    let results = client(&server).await.recognize(options).await.unwrap();

    let result = &results.results[0];
    assert!(result.is_final);
    assert_eq!(
        result.alternatives[0].transcript,
        "several tornadoes touch down "
    );
    assert_eq!(result.alternatives[0].timestamps[1].0, "tornadoes");
    let keyword = &result.keywords_result.as_ref().unwrap()["tornado"][0];
    assert_eq!(keyword.normalized_text, "tornadoes");
}

#[tokio::test]
async fn test_list_models_parses_supported_features() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/models"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "models": [{
                "name": "en-US_BroadbandModel",
                "language": "en-US",
                "rate": 16000,
                "supported_features": {
                    "custom_language_model": true,
                    "speaker_labels": true
                }
            }]
        })))
        .mount(&server)
        .await;

    let models = client(&server).await.list_models().await.unwrap();
    let features = models.models[0].supported_features.as_ref().unwrap();
    assert_eq!(features.custom_language_model, Some(true));
}

#[tokio::test]
async fn test_create_language_model_posts_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/customizations"))
        .and(body_json(serde_json::json!({
            "name": "Weather model",
            "base_model_name": "en-US_BroadbandModel",
            "dialect": "en-US"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "customization_id": "cust-1",
            "status": "pending"
        })))
        .mount(&server)
        .await;

    let model = client(&server)
        .await
        .create_language_model(
            CreateLanguageModelOptions::new("Weather model", "en-US_BroadbandModel")
                .with_dialect("en-US"),
        )
        .await
        .unwrap();

    assert_eq!(model.customization_id, "cust-1");
    assert_eq!(
        model.status.as_deref(),
        Some(crate::LanguageModel::STATUS_PENDING)
    );
}

#[tokio::test]
async fn test_train_language_model_passes_word_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/customizations/cust-1/train"))
        .and(query_param("word_type_to_add", "user"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .await
        .train_language_model("cust-1", TrainOptions::new().with_word_type_to_add("user"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_add_corpus_uploads_plain_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/customizations/cust-1/corpora/weather-news"))
        .and(header("Content-Type", "text/plain"))
        .and(query_param("allow_overwrite", "true"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .await
        .add_corpus(
            "cust-1",
            "weather-news",
            b"the storm system moved east".to_vec(),
            true,
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_corpus_parses_analysis_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/customizations/cust-1/corpora/weather-news"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "weather-news",
            "total_words": 5201,
            "out_of_vocabulary_words": 62,
            "status": "analyzed"
        })))
        .mount(&server)
        .await;

    let corpus = client(&server)
        .await
        .get_corpus("cust-1", "weather-news")
        .await
        .unwrap();
    assert_eq!(corpus.status.as_deref(), Some(Corpus::STATUS_ANALYZED));
    assert_eq!(corpus.out_of_vocabulary_words, Some(62));
}

#[tokio::test]
async fn test_recognize_rejects_empty_content_type() {
    let server = MockServer::start().await;
    let err = client(&server)
        .await
        .recognize(RecognizeOptions::new(vec![1, 2, 3], ""))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
}

#[test]
fn test_corpus_wire_shape() {
    let corpus: Corpus = serde_json::from_value(serde_json::json!({
        "name": "weather-news",
        "total_words": 5201,
        "out_of_vocabulary_words": 62,
        "status": "being_processed"
    }))
    .unwrap();

    assert_yaml_snapshot!(corpus, @r###"
    ---
    name: weather-news
    total_words: 5201
    out_of_vocabulary_words: 62
    status: being_processed
    "###);
}
