use tower_lsp::{LspService, Server};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{data_dir, log_path};
use crate::lsp::backend::Backend;

/// Run the language server over stdin/stdout.
///
/// Logs go to a file in the data directory since stdout carries the protocol.
/// The level is taken from `RUST_LOG` and defaults to `info`.
pub async fn run_server() -> anyhow::Result<()> {
    let data_dir = data_dir();
    std::fs::create_dir_all(&data_dir)?;

    let log_path = log_path();
    let file_name = log_path
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("Invalid log path: {:?}", log_path))?;
    let appender = tracing_appender::rolling::never(&data_dir, file_name);
    let (writer, _guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    info!("Starting tag-hover-lsp {}", env!("CARGO_PKG_VERSION"));

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(Backend::new);
    Server::new(stdin, stdout, socket).serve(service).await;

    info!("tag-hover-lsp stopped");
    Ok(())
}
