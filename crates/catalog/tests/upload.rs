mod common;

use axum::http::StatusCode;
use common::{PRODUCT_KEY, Part, TestApp, UPLOAD_KEY, multipart_body, multipart_request};
use shared::testing::FakeMediaHost;

const PNG: &[u8] = &[0x89, b'P', b'N', b'G'];

#[tokio::test]
async fn upload_relays_the_file() {
    let app = TestApp::new();

    let body = multipart_body(&[Part::File("file", "shoe.png", PNG)]);
    let (status, uploaded, _) = app
        .send(multipart_request("POST", Some(UPLOAD_KEY), body))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(uploaded["public_id"], "products/shoe.png");
    assert_eq!(uploaded["url"], "https://cdn.example/products/shoe.png");
    assert!(uploaded.get("previous_deleted").is_none());
    assert_eq!(app.media.calls(), vec!["upload:shoe.png"]);
}

#[tokio::test]
async fn upload_requires_the_upload_key() {
    let app = TestApp::new();

    let body = multipart_body(&[Part::File("file", "shoe.png", PNG)]);
    let (status, _, _) = app
        .send(multipart_request("POST", Some(PRODUCT_KEY), body))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(app.media.calls().is_empty());
}

#[tokio::test]
async fn upload_without_a_file_is_400() {
    let app = TestApp::new();

    let body = multipart_body(&[Part::Text("public_id", "products/old")]);
    let (status, error, _) = app
        .send(multipart_request("POST", Some(UPLOAD_KEY), body))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["error"], "No file provided");
}

#[tokio::test]
async fn replace_uploads_first_then_deletes_the_old_image() {
    let app = TestApp::new();

    let body = multipart_body(&[
        Part::Text("public_id", "products/old"),
        Part::File("file", "new.png", PNG),
    ]);
    let (status, uploaded, _) = app
        .send(multipart_request("PUT", Some(UPLOAD_KEY), body))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(uploaded["previous_deleted"], true);
    assert_eq!(
        app.media.calls(),
        vec!["upload:new.png", "destroy:products/old"]
    );
}

#[tokio::test]
async fn failed_upload_leaves_the_old_image_alone() {
    let app = TestApp::with_media(FakeMediaHost::failing_upload());

    let body = multipart_body(&[
        Part::File("file", "new.png", PNG),
        Part::Text("public_id", "products/old"),
    ]);
    let (status, error, _) = app
        .send(multipart_request("PUT", Some(UPLOAD_KEY), body))
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error["error"], "Upload failed");
    assert_eq!(app.media.calls(), vec!["upload:new.png"]);
}

#[tokio::test]
async fn failed_delete_is_reported_not_fatal() {
    let app = TestApp::with_media(FakeMediaHost::failing_destroy());

    let body = multipart_body(&[
        Part::File("file", "new.png", PNG),
        Part::Text("public_id", "products/old"),
    ]);
    let (status, uploaded, _) = app
        .send(multipart_request("PUT", Some(UPLOAD_KEY), body))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(uploaded["public_id"], "products/new.png");
    assert_eq!(uploaded["previous_deleted"], false);
}

#[tokio::test]
async fn non_multipart_upload_is_a_json_400() {
    let app = TestApp::new();

    let (status, error) = app
        .json("POST", "/api/upload", Some(UPLOAD_KEY), serde_json::json!({}))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["status"], "error");
    assert!(
        error["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid multipart body"),
        "{error}"
    );
    assert!(app.media.calls().is_empty());
}
