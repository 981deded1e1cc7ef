//! Parser trait definition

#[cfg(test)]
use mockall::automock;

use crate::parser::types::HtmlDocument;

/// Trait for parsing markup documents into an element tree
#[cfg_attr(test, automock)]
pub trait Parser: Send + Sync {
    /// Check if this parser can handle documents of the given language
    fn can_parse(&self, language_id: &str) -> bool;

    /// Parse the content into an element tree
    fn parse(&self, content: &str) -> Result<HtmlDocument, ParseError>;
}

/// Error type for parsing operations
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Failed to parse the file structure
    #[error("Failed to parse file: {0}")]
    ParseFailed(String),

    /// Tree-sitter related error
    #[error("Tree-sitter error: {0}")]
    TreeSitter(String),
}
