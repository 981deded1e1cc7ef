use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::RwLock;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};
use tracing::{debug, info, warn};

use crate::config::LspConfig;
use crate::document::TextDocument;
use crate::lsp::hover::do_hover;
use crate::lsp::providers::create_providers;
use crate::parser::HtmlParser;
use crate::parser::traits::Parser;
use crate::parser::types::HtmlDocument;
use crate::tags::provider::TagProvider;

/// An open document together with its element tree
struct DocumentState {
    document: TextDocument,
    html: HtmlDocument,
}

pub struct Backend {
    client: Client,
    parser: Arc<dyn Parser>,
    providers: RwLock<Vec<Arc<dyn TagProvider>>>,
    documents: RwLock<HashMap<Url, DocumentState>>,
    workspace_root: RwLock<Option<PathBuf>>,
}

impl Backend {
    pub fn new(client: Client) -> Self {
        Self::build(
            client,
            Arc::new(HtmlParser::new()),
            create_providers(&LspConfig::default(), None),
        )
    }

    /// Build a Backend with a custom parser and providers
    pub fn build(
        client: Client,
        parser: Arc<dyn Parser>,
        providers: Vec<Arc<dyn TagProvider>>,
    ) -> Self {
        Self {
            client,
            parser,
            providers: RwLock::new(providers),
            documents: RwLock::new(HashMap::new()),
            workspace_root: RwLock::new(None),
        }
    }

    pub fn server_capabilities() -> ServerCapabilities {
        ServerCapabilities {
            text_document_sync: Some(TextDocumentSyncCapability::Options(
                TextDocumentSyncOptions {
                    open_close: Some(true),
                    change: Some(TextDocumentSyncKind::FULL),
                    ..Default::default()
                },
            )),
            hover_provider: Some(HoverProviderCapability::Simple(true)),
            ..Default::default()
        }
    }

    fn parse_document(&self, document: &TextDocument) -> HtmlDocument {
        if !self.parser.can_parse(document.language_id()) {
            debug!(
                "No parser for language {}, skipping {}",
                document.language_id(),
                document.uri()
            );
            return HtmlDocument::default();
        }

        self.parser
            .parse(document.text())
            .inspect_err(|e| warn!("Failed to parse {}: {}", document.uri(), e))
            .unwrap_or_default()
    }

    async fn store_document(&self, document: TextDocument) {
        let html = self.parse_document(&document);
        self.documents
            .write()
            .await
            .insert(document.uri().clone(), DocumentState { document, html });
    }

    async fn apply_config(&self, config: LspConfig) {
        let workspace_root = self.workspace_root.read().await.clone();
        let providers = create_providers(&config, workspace_root.as_deref());
        *self.providers.write().await = providers;
    }
}

#[allow(deprecated)]
fn workspace_root(params: &InitializeParams) -> Option<PathBuf> {
    params
        .workspace_folders
        .as_ref()
        .and_then(|folders| folders.first())
        .map(|folder| &folder.uri)
        .or(params.root_uri.as_ref())
        .and_then(|uri| uri.to_file_path().ok())
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        self.client
            .log_message(MessageType::INFO, "LSP server initializing")
            .await;

        *self.workspace_root.write().await = workspace_root(&params);

        if let Some(options) = params.initialization_options {
            match LspConfig::from_settings(options) {
                Ok(config) => {
                    info!("Applying initialization options: {:?}", config);
                    self.apply_config(config).await;
                }
                Err(e) => warn!("Ignoring invalid initialization options: {}", e),
            }
        }

        Ok(InitializeResult {
            capabilities: Self::server_capabilities(),
            server_info: Some(ServerInfo {
                name: "tag-hover-lsp".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _params: InitializedParams) {
        self.client
            .log_message(MessageType::INFO, "LSP server initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        self.client
            .log_message(MessageType::INFO, "LSP server shutting down")
            .await;
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let item = params.text_document;
        self.client
            .log_message(MessageType::LOG, format!("Document opened: {}", item.uri))
            .await;

        self.store_document(TextDocument::new(
            item.uri,
            item.language_id,
            item.version,
            item.text,
        ))
        .await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        // With FULL sync mode, the last content change contains the full document text
        let Some(content) = params.content_changes.into_iter().last().map(|c| c.text) else {
            return;
        };
        let uri = params.text_document.uri;

        let Some(language_id) = self
            .documents
            .read()
            .await
            .get(&uri)
            .map(|state| state.document.language_id().to_string())
        else {
            warn!("Change for unopened document {}", uri);
            return;
        };

        self.client
            .log_message(MessageType::LOG, format!("Document changed: {}", uri))
            .await;

        self.store_document(TextDocument::new(
            uri,
            language_id,
            params.text_document.version,
            content,
        ))
        .await;
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        self.documents
            .write()
            .await
            .remove(&params.text_document.uri);
    }

    async fn did_change_configuration(&self, params: DidChangeConfigurationParams) {
        match LspConfig::from_settings(params.settings) {
            Ok(config) => {
                info!("Configuration changed: {:?}", config);
                self.apply_config(config).await;
            }
            Err(e) => warn!("Ignoring invalid configuration: {}", e),
        }
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let position_params = params.text_document_position_params;
        let uri = position_params.text_document.uri;

        let documents = self.documents.read().await;
        let Some(state) = documents.get(&uri) else {
            debug!("Hover on unopened document {}", uri);
            return Ok(None);
        };

        let providers = self.providers.read().await;
        let hover = do_hover(
            &state.document,
            position_params.position,
            &state.html,
            &providers,
        );
        debug!(
            "Hover {}:{}:{} -> {}",
            uri,
            position_params.position.line,
            position_params.position.character,
            if hover.is_some() { "found" } else { "none" }
        );

        Ok(hover)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParseError;
    use crate::parser::traits::MockParser;
    use crate::parser::types::Node;
    use crate::tags::providers::CustomTagProvider;
    use futures::StreamExt;
    use tower_lsp::LspService;

    const URI: &str = "file:///test/index.html";

    fn providers() -> Vec<Arc<dyn TagProvider>> {
        vec![Arc::new(CustomTagProvider::new(
            "test",
            vec!["html".to_string()],
            vec![("div".to_string(), "A division".to_string())],
        ))]
    }

    fn div_tree() -> HtmlDocument {
        HtmlDocument::new(vec![Node {
            tag: Some("div".to_string()),
            start: 0,
            end: 5,
            start_tag_end: Some(5),
            ..Default::default()
        }])
    }

    fn service(parser: MockParser) -> LspService<Backend> {
        let (service, socket) =
            LspService::new(|client| Backend::build(client, Arc::new(parser), providers()));
        // Drain log messages so the client never blocks
        tokio::spawn(socket.for_each(|_| async {}));
        service
    }

    fn open_params(language_id: &str, text: &str) -> DidOpenTextDocumentParams {
        DidOpenTextDocumentParams {
            text_document: TextDocumentItem {
                uri: URI.parse().unwrap(),
                language_id: language_id.to_string(),
                version: 1,
                text: text.to_string(),
            },
        }
    }

    fn hover_params(character: u32) -> HoverParams {
        HoverParams {
            text_document_position_params: TextDocumentPositionParams {
                text_document: TextDocumentIdentifier {
                    uri: URI.parse().unwrap(),
                },
                position: Position::new(0, character),
            },
            work_done_progress_params: Default::default(),
        }
    }

    #[tokio::test]
    async fn hover_uses_parsed_tree() {
        let mut parser = MockParser::new();
        parser.expect_can_parse().returning(|_| true);
        parser
            .expect_parse()
            .times(1)
            .returning(|_| Ok(div_tree()));
        let service = service(parser);
        let backend = service.inner();

        backend.did_open(open_params("html", "<div>")).await;
        let hover = backend.hover(hover_params(2)).await.unwrap().unwrap();

        assert_eq!(
            hover.range,
            Some(Range::new(Position::new(0, 1), Position::new(0, 4)))
        );
    }

    #[tokio::test]
    async fn unsupported_language_is_not_parsed() {
        let mut parser = MockParser::new();
        parser.expect_can_parse().returning(|_| false);
        parser.expect_parse().never();
        let service = service(parser);
        let backend = service.inner();

        backend.did_open(open_params("markdown", "<div>")).await;

        assert_eq!(backend.hover(hover_params(2)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn parse_failure_yields_no_hover() {
        let mut parser = MockParser::new();
        parser.expect_can_parse().returning(|_| true);
        parser
            .expect_parse()
            .returning(|_| Err(ParseError::ParseFailed("broken".to_string())));
        let service = service(parser);
        let backend = service.inner();

        backend.did_open(open_params("html", "<div>")).await;

        assert_eq!(backend.hover(hover_params(2)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn closed_document_yields_no_hover() {
        let mut parser = MockParser::new();
        parser.expect_can_parse().returning(|_| true);
        parser.expect_parse().returning(|_| Ok(div_tree()));
        let service = service(parser);
        let backend = service.inner();

        backend.did_open(open_params("html", "<div>")).await;
        backend
            .did_close(DidCloseTextDocumentParams {
                text_document: TextDocumentIdentifier {
                    uri: URI.parse().unwrap(),
                },
            })
            .await;

        assert_eq!(backend.hover(hover_params(2)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn change_for_unopened_document_is_ignored() {
        let mut parser = MockParser::new();
        parser.expect_can_parse().never();
        parser.expect_parse().never();
        let service = service(parser);
        let backend = service.inner();

        backend
            .did_change(DidChangeTextDocumentParams {
                text_document: VersionedTextDocumentIdentifier {
                    uri: URI.parse().unwrap(),
                    version: 2,
                },
                content_changes: vec![TextDocumentContentChangeEvent {
                    range: None,
                    range_length: None,
                    text: "<div>".to_string(),
                }],
            })
            .await;

        assert_eq!(backend.hover(hover_params(2)).await.unwrap(), None);
    }

    #[test]
    fn workspace_root_prefers_workspace_folders() {
        #[allow(deprecated)]
        let params = InitializeParams {
            root_uri: Some("file:///root-uri".parse().unwrap()),
            workspace_folders: Some(vec![WorkspaceFolder {
                uri: "file:///folder".parse().unwrap(),
                name: "folder".to_string(),
            }]),
            ..Default::default()
        };

        assert_eq!(workspace_root(&params), Some(PathBuf::from("/folder")));
    }

    #[test]
    fn workspace_root_falls_back_to_root_uri() {
        #[allow(deprecated)]
        let params = InitializeParams {
            root_uri: Some("file:///root-uri".parse().unwrap()),
            ..Default::default()
        };

        assert_eq!(workspace_root(&params), Some(PathBuf::from("/root-uri")));
    }
}
