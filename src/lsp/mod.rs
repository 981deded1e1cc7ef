//! LSP (Language Server Protocol) implementation layer
//!
//! This module handles communication with editors via LSP and answers hover
//! requests with documentation for HTML tag names.
//!
//! # Modules
//!
//! - [`backend`]: Main LSP backend implementing `LanguageServer` trait
//! - [`hover`]: Resolves the tag under the cursor and assembles the hover
//! - [`providers`]: Builds the tag provider list from configuration
//! - [`server`]: LSP server initialization and lifecycle

pub mod backend;
pub mod hover;
pub mod providers;
pub mod server;
