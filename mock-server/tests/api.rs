use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Message, VALID_TOKEN};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- message ---

#[tokio::test]
async fn get_message_returns_testdata() {
    let resp = app().oneshot(get_request("/message")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let message: Message = body_json(resp).await;
    assert_eq!(message.message, "testdata");
}

#[tokio::test]
async fn post_message_returns_201_success() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/message")
                .header(http::header::CONTENT_TYPE, "application/json")
                .body(r#"{"text":"text"}"#.to_string())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let message: Message = body_json(resp).await;
    assert_eq!(message.message, "success");
}

#[tokio::test]
async fn delete_message_returns_204_with_empty_body() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/message")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());
}

// --- secure ---

#[tokio::test]
async fn secure_without_token_returns_401() {
    let resp = app().oneshot(get_request("/secure")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn secure_with_valid_token_returns_200() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/secure")
                .header(http::header::AUTHORIZATION, VALID_TOKEN)
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let message: Message = body_json(resp).await;
    assert_eq!(message.message, "secure");
}

// --- mismatch ---

#[tokio::test]
async fn mismatch_returns_unexpected_shape() {
    let resp = app().oneshot(get_request("/mismatch")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["notamessage"], "testdata");
    assert!(body.get("message").is_none());
}

// --- status echo ---

#[tokio::test]
async fn status_route_echoes_table_codes() {
    for code in [400u16, 401, 403, 404, 500] {
        let resp = app()
            .oneshot(get_request(&format!("/status/{code}")))
            .await
            .unwrap();
        assert_eq!(resp.status().as_u16(), code);
    }
}

#[tokio::test]
async fn status_route_echoes_out_of_table_codes() {
    for code in [418u16, 600] {
        let resp = app()
            .oneshot(get_request(&format!("/status/{code}")))
            .await
            .unwrap();
        assert_eq!(resp.status().as_u16(), code);
        assert!(body_bytes(resp).await.is_empty());
    }
}
