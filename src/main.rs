use clap::Parser;

/// Serves hover documentation for HTML tags over stdin/stdout
#[derive(Parser)]
#[command(name = "tag-hover-lsp")]
#[command(version, about = "Language Server providing hover documentation for HTML tags")]
struct Cli {}

fn main() -> anyhow::Result<()> {
    Cli::parse();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(tag_hover_lsp::lsp::server::run_server())
}
