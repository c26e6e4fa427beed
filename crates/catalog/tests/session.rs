mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use common::{PASSWORD, Part, TestApp, multipart_body, multipart_request};
use serde_json::json;

async fn login(app: &TestApp) -> (String, Vec<String>) {
    let request = Request::post("/api/admin/session")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "password": PASSWORD }).to_string()))
        .unwrap();
    let (status, body, cookies) = app.send(request).await;
    assert_eq!(status, StatusCode::OK);
    (body["token"].as_str().unwrap().to_string(), cookies)
}

#[tokio::test]
async fn login_sets_an_http_only_cookie() {
    let app = TestApp::new();

    let (token, cookies) = login(&app).await;

    assert!(!token.is_empty());
    let cookie = cookies
        .iter()
        .find(|c| c.starts_with("session="))
        .expect("session cookie");
    assert!(cookie.contains("HttpOnly"));
}

#[tokio::test]
async fn wrong_or_missing_password_is_401() {
    let app = TestApp::new();

    let (status, _) = app
        .json("POST", "/api/admin/session", None, json!({ "password": "nope" }))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .json("POST", "/api/admin/session", None, json!({}))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn session_token_authorizes_product_and_upload_mutations() {
    let app = TestApp::new();
    let (token, _) = login(&app).await;

    let (status, _) = app
        .json(
            "POST",
            "/api/products",
            Some(&token),
            json!({ "name": "Mug", "slug": "mug", "price": 9.5 }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let body = multipart_body(&[Part::File("file", "mug.png", b"png")]);
    let (status, _, _) = app.send(multipart_request("POST", Some(&token), body)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn session_cookie_authorizes_mutations() {
    let app = TestApp::new();
    let (token, _) = login(&app).await;

    let request = Request::post("/api/products")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::COOKIE, format!("session={token}"))
        .body(Body::from(
            json!({ "name": "Mug", "slug": "mug", "price": 9.5 }).to_string(),
        ))
        .unwrap();
    let (status, _, _) = app.send(request).await;

    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn status_reflects_the_presented_token() {
    let app = TestApp::new();
    let (token, _) = login(&app).await;

    let request = Request::get("/api/admin/session")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    let (status, body, _) = app.send(request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["authenticated"], true);

    let (status, _) = app.get("/api/admin/session").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let mut tampered = token.clone();
    tampered.push('x');
    let request = Request::get("/api/admin/session")
        .header(header::AUTHORIZATION, format!("Bearer {tampered}"))
        .body(Body::empty())
        .unwrap();
    let (status, _, _) = app.send(request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_clears_the_cookie() {
    let app = TestApp::new();

    let request = Request::delete("/api/admin/session")
        .header(header::COOKIE, "session=stale")
        .body(Body::empty())
        .unwrap();
    let (status, body, cookies) = app.send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["authenticated"], false);
    assert!(cookies.iter().any(|c| c.starts_with("session=")));
}
