//! Tag documentation layer
//!
//! # Modules
//!
//! - [`provider`]: `TagProvider` trait and `TagInfo`
//! - [`providers`]: Built-in providers (HTML5, AngularJS, Ionic) and custom data files
//! - [`resolver`]: Language filtering and first-match documentation lookup
//! - [`error`]: Error types for loading custom data

pub mod error;
pub mod provider;
pub mod providers;
pub mod resolver;

pub use provider::{TagInfo, TagProvider};
pub use resolver::{applicable_providers, resolve_tag_doc};
