use genstudio::{
    Config, GenerationApi, GenerationClient, ImageEditRequest, ImageUpload, MediaKind,
    ResultOutput, Studio, StudioError, TextToImageRequest, VideoRequest,
};
use httpmock::prelude::*;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

fn client_for(server: &MockServer) -> GenerationClient {
    GenerationClient::new(&Config::new().with_base_url(server.base_url())).unwrap()
}

#[tokio::test]
async fn text_to_image_posts_json_with_bearer_key() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/images/generations")
                .header("authorization", "Bearer TEST")
                .json_body(json!({
                    "prompt": "a lighthouse at dusk",
                    "model": "vheer-text-to-image-max",
                    "size": "16:9",
                    "n": 1,
                    "response_format": "url"
                }));
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "created": 1700000000,
                    "data": [{ "url": "https://access.vheer.com/results/1.jpg" }]
                }));
        })
        .await;

    let result = client_for(&server)
        .generate_image(
            "TEST",
            TextToImageRequest::new("a lighthouse at dusk", "vheer-text-to-image-max", "16:9"),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result.created_secs(), Some(1700000000));
    assert_eq!(result.first_url(), Some("https://access.vheer.com/results/1.jpg"));
}

#[tokio::test]
async fn error_status_with_detail_is_parsed_not_raised() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/images/generations");
            then.status(403)
                .header("content-type", "application/json")
                .json_body(json!({ "detail": "无效的 API Key。" }));
        })
        .await;

    let result = client_for(&server)
        .generate_image("wrong", TextToImageRequest::new("x", "vheer-text-to-image-pro", "1:1"))
        .await
        .unwrap();

    assert_eq!(result.detail_message().as_deref(), Some("无效的 API Key。"));
}

#[tokio::test]
async fn error_status_without_detail_is_treated_as_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/images/generations");
            then.status(500)
                .header("content-type", "application/json")
                .json_body(json!({ "data": [{ "url": "http://x/late.png" }] }));
        })
        .await;

    let result = client_for(&server)
        .generate_image("k", TextToImageRequest::new("x", "vheer-text-to-image-pro", "1:1"))
        .await
        .unwrap();

    assert_eq!(result.first_url(), Some("http://x/late.png"));
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/video/generations");
            then.status(502).body("<html>Bad Gateway</html>");
        })
        .await;

    let err = client_for(&server)
        .generate_video("k", VideoRequest { image: None })
        .await
        .unwrap_err();

    assert!(matches!(err, StudioError::Decode(_)));
}

#[tokio::test]
async fn image_edit_sends_multipart_fields() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/images/edits")
                .header("authorization", "Bearer TEST")
                .header_exists("content-type")
                .body_contains("name=\"image\"; filename=\"source.png\"")
                .body_contains("name=\"prompt\"")
                .body_contains("watercolor")
                .body_contains("name=\"creative_strength\"")
                .body_contains("name=\"control_strength\"");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({ "data": [{ "url": "http://x/edit.png" }] }));
        })
        .await;

    let request = ImageEditRequest {
        image: Some(ImageUpload::from_bytes("source.png", vec![0x89, 0x50, 0x4e, 0x47])),
        prompt: "watercolor".into(),
        creative_strength: "12".into(),
        control_strength: "3".into(),
    };
    let result = client_for(&server).edit_image("TEST", request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(result.first_url(), Some("http://x/edit.png"));
}

#[tokio::test]
async fn video_sends_image_part() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/video/generations")
                .header("authorization", "Bearer TEST")
                .body_contains("name=\"image\"; filename=\"still.jpg\"");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({ "data": [{ "url": "http://x/clip.mp4" }] }));
        })
        .await;

    let request = VideoRequest {
        image: Some(ImageUpload::from_bytes("still.jpg", vec![0xff, 0xd8])),
    };
    let result = client_for(&server).generate_video("TEST", request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(result.first_url(), Some("http://x/clip.mp4"));
}

#[tokio::test]
async fn models_are_listed_with_bearer_key() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v1/models")
                .header("authorization", "Bearer TEST");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "object": "list",
                    "data": [
                        { "id": "vheer-text-to-image-pro", "object": "model", "created": 1 },
                        { "id": "vheer-image-to-video", "object": "model", "created": 1 }
                    ]
                }));
        })
        .await;

    let models = client_for(&server).list_models("TEST").await.unwrap();

    mock.assert_async().await;
    assert_eq!(
        models.ids().collect::<Vec<_>>(),
        vec!["vheer-text-to-image-pro", "vheer-image-to-video"]
    );
}

#[tokio::test]
async fn rejected_key_on_model_listing_is_a_service_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/models");
            then.status(403)
                .header("content-type", "application/json")
                .json_body(json!({ "detail": "无效的 API Key。" }));
        })
        .await;

    let err = client_for(&server).list_models("wrong").await.unwrap_err();

    assert!(matches!(&err, StudioError::Service(msg) if msg == "无效的 API Key。"));
    assert_eq!(err.to_string(), "无效的 API Key。");
}

#[tokio::test]
async fn loosely_typed_envelope_fields_do_not_reject_a_reply() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/images/generations");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "created": 1700000000.25,
                    "data": [{ "url": "http://x/float.png" }]
                }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/images/edits");
            then.status(400)
                .header("content-type", "application/json")
                .json_body(json!({ "detail": "bad request", "data": {} }));
        })
        .await;

    let client = client_for(&server);
    let result = client
        .generate_image("k", TextToImageRequest::new("x", "vheer-text-to-image-pro", "1:1"))
        .await
        .unwrap();
    assert_eq!(result.created_secs(), Some(1700000000));
    assert_eq!(result.first_url(), Some("http://x/float.png"));

    let request = ImageEditRequest {
        image: None,
        prompt: "x".into(),
        creative_strength: "10".into(),
        control_strength: "2".into(),
    };
    let result = client.edit_image("k", request).await.unwrap();
    assert_eq!(result.detail_message().as_deref(), Some("bad request"));
}

#[tokio::test]
async fn unreachable_gateway_is_a_transport_error() {
    let config = Config::new().with_base_url("http://127.0.0.1:1");
    let client = GenerationClient::new(&config).unwrap();
    let err = client
        .generate_image("k", TextToImageRequest::new("x", "vheer-text-to-image-pro", "1:1"))
        .await
        .unwrap_err();
    assert!(matches!(err, StudioError::Transport(_)));
}

#[tokio::test]
async fn configured_timeout_surfaces_as_transport_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/images/generations");
            then.status(200)
                .delay(Duration::from_secs(2))
                .json_body(json!({ "data": [{ "url": "http://x/slow.png" }] }));
        })
        .await;

    let config = Config::new()
        .with_base_url(server.base_url())
        .with_request_timeout(Duration::from_millis(100));
    let err = GenerationClient::new(&config)
        .unwrap()
        .generate_image("k", TextToImageRequest::new("x", "vheer-text-to-image-pro", "1:1"))
        .await
        .unwrap_err();
    assert!(matches!(err, StudioError::Transport(_)));
}

#[tokio::test]
async fn studio_renders_gateway_responses() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/images/generations")
                .header("authorization", "Bearer page-key");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({ "data": [{ "url": "http://x/1.png" }] }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/video/generations");
            then.status(422)
                .header("content-type", "application/json")
                .json_body(json!({
                    "detail": [{
                        "loc": ["body", "image"],
                        "msg": "field required",
                        "type": "missing"
                    }]
                }));
        })
        .await;

    let config = Config::new()
        .with_base_url(server.base_url())
        .with_api_key("page-key");
    let studio = Studio::new(&config, Arc::new(GenerationClient::new(&config).unwrap()));
    studio.update(|state| state.text_to_image.prompt = "a fox".into());

    let report = studio.submit_text_to_image().await;
    assert_eq!(
        report.output,
        ResultOutput::Media {
            kind: MediaKind::Image,
            url: "http://x/1.png".into()
        }
    );
    let view = studio.view();
    assert!(!view.spinner_visible);
    assert!(view.result_container_visible);
    assert!(view.output_html.contains(r#"<img src="http://x/1.png""#));

    studio.activate_tab(2, "i2v");
    let report = studio.submit_image_to_video().await;
    assert!(report.output.is_error());
    let view = studio.view();
    assert!(view.output_html.starts_with(r#"<div class="error">错误: "#));
    assert!(view.output_html.contains("field required"));
    assert!(!view.spinner_visible);
}
