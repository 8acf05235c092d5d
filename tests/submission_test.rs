//! Exercises the Telegram client against a local mock of the bot API.

use axum::extract::{Multipart, State};
use axum::routing::post;
use axum::{Json, Router};
use payproof::config::TelegramConfig;
use payproof::domain::method::PaymentMethod;
use payproof::domain::ports::ProofSender;
use payproof::domain::proof::{ProofFile, ProofSubmission};
use payproof::error::{GENERIC_SEND_FAILURE, ProofError};
use payproof::infrastructure::telegram::TelegramNotifier;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

const TOKEN: &str = "123:testtoken";

#[derive(Clone)]
struct MockState {
    reply: Value,
    fields: Arc<Mutex<Vec<String>>>,
}

async fn capture(State(state): State<MockState>, mut multipart: Multipart) -> Json<Value> {
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or("").to_string();
        // Consume the part so the stream keeps moving
        let _ = field.bytes().await.unwrap();
        state.fields.lock().unwrap().push(name);
    }
    Json(state.reply.clone())
}

/// Serves `reply` on the given bot endpoint; any other path 404s, so a
/// request to the wrong endpoint fails the test.
async fn spawn_mock(endpoint: &str, reply: Value) -> (String, Arc<Mutex<Vec<String>>>) {
    let fields = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        reply,
        fields: fields.clone(),
    };
    let app = Router::new()
        .route(&format!("/bot{TOKEN}/{endpoint}"), post(capture))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), fields)
}

fn notifier(api_base: String) -> TelegramNotifier {
    TelegramNotifier::new(&TelegramConfig {
        bot_token: TOKEN.to_string(),
        chat_id: "777".to_string(),
        api_base,
    })
}

fn submission(mime: &str, name: &str) -> ProofSubmission {
    ProofSubmission {
        file: ProofFile {
            name: name.to_string(),
            size: 4,
            mime: mime.to_string(),
            bytes: vec![0xde, 0xad, 0xbe, 0xef],
        },
        sender_name: "Alice".to_string(),
        product_name: "Widget".to_string(),
        nominal: "15000".to_string(),
        method: PaymentMethod::Dana,
    }
}

#[tokio::test]
async fn test_image_goes_to_send_photo_with_photo_field() {
    let (base, fields) = spawn_mock("sendPhoto", json!({"ok": true})).await;

    notifier(base)
        .send(&submission("image/png", "proof.png"))
        .await
        .unwrap();

    let fields = fields.lock().unwrap();
    assert!(fields.contains(&"chat_id".to_string()));
    assert!(fields.contains(&"caption".to_string()));
    assert!(fields.contains(&"parse_mode".to_string()));
    assert!(fields.contains(&"photo".to_string()));
    assert!(!fields.contains(&"document".to_string()));
}

#[tokio::test]
async fn test_pdf_goes_to_send_document_with_document_field() {
    let (base, fields) = spawn_mock("sendDocument", json!({"ok": true})).await;

    notifier(base)
        .send(&submission("application/pdf", "proof.pdf"))
        .await
        .unwrap();

    let fields = fields.lock().unwrap();
    assert!(fields.contains(&"document".to_string()));
    assert!(!fields.contains(&"photo".to_string()));
}

#[tokio::test]
async fn test_rejection_surfaces_server_description() {
    let (base, _) = spawn_mock("sendPhoto", json!({"ok": false, "description": "boom"})).await;

    let err = notifier(base)
        .send(&submission("image/png", "proof.png"))
        .await
        .unwrap_err();

    assert!(matches!(err, ProofError::Rejected(ref m) if m == "boom"));
}

#[tokio::test]
async fn test_rejection_without_description_uses_generic_message() {
    let (base, _) = spawn_mock("sendPhoto", json!({"ok": false})).await;

    let err = notifier(base)
        .send(&submission("image/png", "proof.png"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), GENERIC_SEND_FAILURE);
}

#[tokio::test]
async fn test_transport_failure_surfaces_as_error() {
    // Nothing listens here
    let err = notifier("http://127.0.0.1:9".to_string())
        .send(&submission("image/png", "proof.png"))
        .await
        .unwrap_err();

    assert!(matches!(err, ProofError::Http(_)));
}
