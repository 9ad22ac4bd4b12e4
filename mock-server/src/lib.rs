use axum::{
    extract::Path,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// The only `Authorization` value `/secure` accepts, attached verbatim (no
/// scheme prefix).
pub const VALID_TOKEN: &str = "valid-token";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub message: String,
}

pub fn app() -> Router {
    Router::new()
        .route(
            "/message",
            get(get_message)
                .post(post_message)
                .put(put_message)
                .delete(delete_message),
        )
        .route("/secure", get(secure))
        .route("/mismatch", get(mismatch))
        .route("/status/{code}", get(echo_status))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn get_message() -> Json<Message> {
    Json(Message {
        message: "testdata".to_string(),
    })
}

async fn post_message(Json(_body): Json<serde_json::Value>) -> (StatusCode, Json<Message>) {
    (
        StatusCode::CREATED,
        Json(Message {
            message: "success".to_string(),
        }),
    )
}

async fn put_message() -> Json<Message> {
    Json(Message {
        message: "success".to_string(),
    })
}

async fn delete_message() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn secure(headers: HeaderMap) -> Result<Json<Message>, StatusCode> {
    let authorized = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == VALID_TOKEN);
    if authorized {
        Ok(Json(Message {
            message: "secure".to_string(),
        }))
    } else {
        Err(StatusCode::UNAUTHORIZED)
    }
}

async fn mismatch() -> Json<serde_json::Value> {
    Json(serde_json::json!({"notamessage": "testdata"}))
}

/// Echo the path segment back as the response status, empty body. Accepts
/// any code the `http` crate considers valid (100..=999), which lets tests
/// exercise out-of-table statuses like 600.
async fn echo_status(Path(code): Path<u16>) -> Response {
    match StatusCode::from_u16(code) {
        Ok(status) => status.into_response(),
        Err(_) => StatusCode::BAD_REQUEST.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_serializes_to_json() {
        let message = Message {
            message: "testdata".to_string(),
        };
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["message"], "testdata");
    }

    #[test]
    fn message_roundtrips_through_json() {
        let message = Message {
            message: "roundtrip".to_string(),
        };
        let json = serde_json::to_string(&message).unwrap();
        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(back, message);
    }
}
