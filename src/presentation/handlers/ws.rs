use axum::extract::WebSocketUpgrade;
use axum::extract::ws::{Message, WebSocket};
use axum::response::IntoResponse;

/// Realtime channel. On connect the server emits a `connection_response`
/// event with a static greeting; no client events are defined, so inbound
/// frames are drained until the peer goes away.
pub async fn ws_handler(ws: WebSocketUpgrade) -> impl IntoResponse {
    ws.on_upgrade(handle_socket)
}

async fn handle_socket(mut socket: WebSocket) {
    tracing::info!("Client connected");

    let greeting = serde_json::json!({
        "event": "connection_response",
        "data": { "data": "Connected to Voice API" },
    });

    if socket
        .send(Message::Text(greeting.to_string().into()))
        .await
        .is_err()
    {
        tracing::warn!("Client went away before greeting");
        return;
    }

    while let Some(message) = socket.recv().await {
        match message {
            Ok(Message::Close(_)) | Err(_) => break,
            Ok(_) => {}
        }
    }

    tracing::info!("Client disconnected");
}
