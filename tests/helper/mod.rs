pub mod lsp;

pub use lsp::*;
