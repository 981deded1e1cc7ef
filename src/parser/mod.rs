//! Parser layer
//! - traits.rs: Parser trait definition
//! - types.rs: Element tree types (Node, HtmlDocument)
//! - html.rs: tree-sitter backed HTML parser
//! - scanner.rs: raw-text tokenizer used to recover exact token ranges

pub mod html;
pub mod scanner;
pub mod traits;
pub mod types;

pub use html::HtmlParser;
pub use scanner::{Scanner, Token, TokenType};
pub use traits::{ParseError, Parser};
pub use types::{HtmlDocument, Node};
