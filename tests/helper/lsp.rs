//! LSP request/notification test utilities

use std::time::Duration;

use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time::timeout;
use tower::Service;
use tower_lsp::jsonrpc::Request;
use tower_lsp::lsp_types::*;
use tower_lsp::{ClientSocket, LspService};

use tag_hover_lsp::lsp::backend::Backend;

/// Create an LSP initialize request
pub fn create_initialize_request(id: i64) -> Request {
    create_initialize_request_with_options(id, None)
}

/// Create an LSP initialize request carrying initialization options
pub fn create_initialize_request_with_options(
    id: i64,
    initialization_options: Option<serde_json::Value>,
) -> Request {
    Request::build("initialize")
        .id(id)
        .params(
            serde_json::to_value(InitializeParams {
                initialization_options,
                ..Default::default()
            })
            .unwrap(),
        )
        .finish()
}

/// Create an LSP initialized notification
pub fn create_initialized_notification() -> Request {
    Request::build("initialized")
        .params(serde_json::to_value(InitializedParams {}).unwrap())
        .finish()
}

/// Create an LSP didOpen notification
pub fn create_did_open_notification(uri: &str, language_id: &str, content: &str) -> Request {
    Request::build("textDocument/didOpen")
        .params(
            serde_json::to_value(DidOpenTextDocumentParams {
                text_document: TextDocumentItem {
                    uri: uri.parse().unwrap(),
                    language_id: language_id.to_string(),
                    version: 1,
                    text: content.to_string(),
                },
            })
            .unwrap(),
        )
        .finish()
}

/// Create an LSP didChange notification
pub fn create_did_change_notification(uri: &str, content: &str, version: i32) -> Request {
    Request::build("textDocument/didChange")
        .params(
            serde_json::to_value(DidChangeTextDocumentParams {
                text_document: VersionedTextDocumentIdentifier {
                    uri: uri.parse().unwrap(),
                    version,
                },
                content_changes: vec![TextDocumentContentChangeEvent {
                    range: None,
                    range_length: None,
                    text: content.to_string(),
                }],
            })
            .unwrap(),
        )
        .finish()
}

/// Create an LSP didChangeConfiguration notification
pub fn create_did_change_configuration_notification(settings: serde_json::Value) -> Request {
    Request::build("workspace/didChangeConfiguration")
        .params(serde_json::to_value(DidChangeConfigurationParams { settings }).unwrap())
        .finish()
}

/// Create an LSP hover request
pub fn create_hover_request(id: i64, uri: &str, line: u32, character: u32) -> Request {
    Request::build("textDocument/hover")
        .id(id)
        .params(
            serde_json::to_value(HoverParams {
                text_document_position_params: TextDocumentPositionParams {
                    text_document: TextDocumentIdentifier {
                        uri: uri.parse().unwrap(),
                    },
                    position: Position { line, character },
                },
                work_done_progress_params: Default::default(),
            })
            .unwrap(),
        )
        .finish()
}

/// Send a hover request and decode the result
pub async fn hover(
    service: &mut LspService<Backend>,
    id: i64,
    uri: &str,
    line: u32,
    character: u32,
) -> Option<Hover> {
    let response = service
        .call(create_hover_request(id, uri, line, character))
        .await
        .unwrap()
        .expect("Expected hover response");
    let (_, result) = response.into_parts();
    serde_json::from_value(result.expect("Hover request failed")).unwrap()
}

/// Create a default service, initialize it and start collecting notifications
pub async fn start_service(
    initialization_options: Option<serde_json::Value>,
) -> (LspService<Backend>, mpsc::Receiver<Request>) {
    let (mut service, socket) = LspService::new(Backend::new);
    let notification_rx = spawn_notification_collector(socket);

    let init_response = service
        .call(create_initialize_request_with_options(
            1,
            initialization_options,
        ))
        .await
        .unwrap();
    assert!(init_response.is_some());

    service
        .call(create_initialized_notification())
        .await
        .unwrap();

    (service, notification_rx)
}

/// Collect notifications in background and return a receiver
pub fn spawn_notification_collector(mut socket: ClientSocket) -> mpsc::Receiver<Request> {
    let (tx, rx) = mpsc::channel(100);

    tokio::spawn(async move {
        while let Some(notification) = socket.next().await {
            if tx.send(notification).await.is_err() {
                break;
            }
        }
    });

    rx
}

/// Wait for a notification with the specified method name from the receiver
#[allow(dead_code)]
pub async fn wait_for_notification(
    rx: &mut mpsc::Receiver<Request>,
    method: &str,
) -> Option<Request> {
    let timeout_duration = Duration::from_secs(5);

    loop {
        match timeout(timeout_duration, rx.recv()).await {
            Ok(Some(notification)) => {
                if notification.method() == method {
                    return Some(notification);
                }
            }
            _ => return None,
        }
    }
}
