pub mod config;
pub mod document;
pub mod lsp;
pub mod parser;
pub mod tags;
