//! Tests for the Visual Recognition client.

use insta::assert_yaml_snapshot;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::{
    Authenticator, ClassifyOptions, CreateClassifierOptions, DetectFacesOptions, Error, FileData,
    UpdateClassifierOptions, VisualRecognition,
};

const VERSION: &str = "2018-03-19";

async fn client(server: &MockServer) -> VisualRecognition {
    let mut client = VisualRecognition::new(VERSION, Authenticator::NoAuth).unwrap();
    client.set_endpoint(&server.uri()).unwrap();
    client
}

#[tokio::test]
async fn test_classify_builds_multipart_with_url_and_threshold() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/classify"))
        .and(query_param("version", VERSION))
        .and(header("Accept-Language", "es"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "images_processed": 1,
            "images": [{
                "source_url": "https://example.com/fruitbowl.jpg",
                "resolved_url": "https://example.com/fruitbowl.jpg",
                "classifiers": [{
                    "name": "default",
                    "classifier_id": "default",
                    "classes": [
                        {"class": "banana", "score": 0.562, "type_hierarchy": "/fruit/banana"},
                        {"class": "fruit", "score": 0.788}
                    ]
                }]
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = ClassifyOptions::new()
        .with_url("https://example.com/fruitbowl.jpg")
        .with_threshold(0.5)
        .with_owners(vec!["IBM".to_string()])
        .with_accept_language("es");
    let classified = client(&server).await.classify(options).await.unwrap();

    assert_eq!(classified.images_processed, Some(1));
    let classes = &classified.images[0].classifiers[0].classes;
    assert_eq!(classes[0].class_name, "banana");
    assert_eq!(classes[0].type_hierarchy.as_deref(), Some("/fruit/banana"));
}

#[tokio::test]
async fn test_classify_requires_some_input() {
    let server = MockServer::start().await;
    let err = client(&server)
        .await
        .classify(ClassifyOptions::new())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
}

#[tokio::test]
async fn test_detect_faces_parses_age_and_gender() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/detect_faces"))
        .and(query_param("version", VERSION))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "images_processed": 1,
            "images": [{
                "faces": [{
                    "age": {"min": 23, "max": 26, "score": 0.78},
                    "gender": {"gender": "FEMALE", "score": 0.98},
                    "face_location": {"width": 92.0, "height": 116.0, "left": 255.0, "top": 67.0}
                }]
            }]
        })))
        .mount(&server)
        .await;

    let options =
        DetectFacesOptions::new().with_images_file(FileData::new(vec![0xFF, 0xD8], "face.jpg"));
    let detected = client(&server).await.detect_faces(options).await.unwrap();

    let face = &detected.images[0].faces[0];
    assert_eq!(face.age.as_ref().unwrap().min, Some(23));
    assert_eq!(face.gender.as_ref().unwrap().gender, "FEMALE");
}

#[tokio::test]
async fn test_create_classifier_requires_positive_examples() {
    let server = MockServer::start().await;
    let err = client(&server)
        .await
        .create_classifier(CreateClassifierOptions::new("fruit"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
}

#[tokio::test]
async fn test_update_classifier_requires_examples() {
    let server = MockServer::start().await;
    let err = client(&server)
        .await
        .update_classifier(UpdateClassifierOptions::new("fruit_1234"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
}

#[tokio::test]
async fn test_create_classifier_parses_training_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/classifiers"))
        .and(query_param("version", VERSION))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "classifier_id": "fruit_1462128776",
            "name": "fruit",
            "status": "training",
            "owner": "a1b2c3d4",
            "created": "2019-02-01T12:00:00.000Z",
            "classes": [{"class": "banana"}, {"class": "apple"}]
        })))
        .mount(&server)
        .await;

    let options = CreateClassifierOptions::new("fruit")
        .add_positive_examples("banana", vec![1, 2, 3])
        .add_positive_examples("apple", vec![4, 5, 6]);
    let classifier = client(&server)
        .await
        .create_classifier(options)
        .await
        .unwrap();

    assert_eq!(classifier.status.as_deref(), Some("training"));
    assert_eq!(classifier.classes.len(), 2);
}

#[tokio::test]
async fn test_get_core_ml_model_returns_bytes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/classifiers/fruit_1234/core_ml_model"))
        .and(query_param("version", VERSION))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xCA, 0xFE]))
        .mount(&server)
        .await;

    let model = client(&server)
        .await
        .get_core_ml_model("fruit_1234")
        .await
        .unwrap();
    assert_eq!(model, vec![0xCA, 0xFE]);
}

#[tokio::test]
async fn test_delete_user_data_sends_customer_id() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v3/user_data"))
        .and(query_param("version", VERSION))
        .and(query_param("customer_id", "cust-1"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .await
        .delete_user_data("cust-1")
        .await
        .unwrap();
}

#[test]
fn test_classifier_wire_shape() {
    let classifier: crate::Classifier = serde_json::from_value(serde_json::json!({
        "classifier_id": "fruit_1462128776",
        "name": "fruit",
        "status": "ready",
        "core_ml_enabled": true,
        "classes": [{"class": "banana"}]
    }))
    .unwrap();
    assert_eq!(classifier.status.as_deref(), Some(crate::Classifier::STATUS_READY));

    assert_yaml_snapshot!(classifier, @r###"
    ---
    classifier_id: fruit_1462128776
    name: fruit
    status: ready
    core_ml_enabled: true
    classes:
      - class: banana
    "###);
}
