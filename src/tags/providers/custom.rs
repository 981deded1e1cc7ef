//! Tags loaded from custom data files
//!
//! Files use the HTML custom data shape:
//!
//! ```json
//! {
//!   "version": 1.1,
//!   "tags": [
//!     { "name": "my-button", "description": "A themed button" },
//!     { "name": "my-card", "description": { "kind": "markdown", "value": "A card" } }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::tags::error::CustomDataError;
use crate::tags::provider::{TagInfo, TagProvider};

#[derive(Debug, Deserialize)]
struct CustomData {
    #[serde(default)]
    tags: Vec<CustomTag>,
}

#[derive(Debug, Deserialize)]
struct CustomTag {
    name: String,
    #[serde(default)]
    description: Option<Description>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Description {
    Text(String),
    Markup { value: String },
}

impl Description {
    fn into_text(self) -> String {
        match self {
            Description::Text(text) => text,
            Description::Markup { value } => value,
        }
    }
}

/// Provider for user-supplied tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomTagProvider {
    id: String,
    languages: Vec<String>,
    tags: Vec<(String, String)>,
}

impl CustomTagProvider {
    pub fn new(id: impl Into<String>, languages: Vec<String>, tags: Vec<(String, String)>) -> Self {
        Self {
            id: id.into(),
            languages,
            tags,
        }
    }

    /// Build a provider from custom data JSON
    pub fn from_json(
        id: impl Into<String>,
        languages: Vec<String>,
        json: &str,
    ) -> Result<Self, serde_json::Error> {
        let data: CustomData = serde_json::from_str(json)?;
        let tags = data
            .tags
            .into_iter()
            .map(|tag| {
                let documentation = tag.description.map(Description::into_text);
                (tag.name, documentation.unwrap_or_default())
            })
            .collect();
        Ok(Self::new(id, languages, tags))
    }

    /// Load a provider from a custom data file
    pub fn load(path: &Path, languages: Vec<String>) -> Result<Self, CustomDataError> {
        let json = std::fs::read_to_string(path).map_err(|source| CustomDataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let provider =
            Self::from_json(path.display().to_string(), languages, &json).map_err(|source| {
                CustomDataError::Json {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
        debug!("Loaded {} custom tags from {:?}", provider.tags.len(), path);
        Ok(provider)
    }
}

impl TagProvider for CustomTagProvider {
    fn id(&self) -> &str {
        &self.id
    }

    fn is_applicable(&self, language_id: &str) -> bool {
        self.languages.iter().any(|language| language == language_id)
    }

    fn tags(&self) -> Box<dyn Iterator<Item = TagInfo<'_>> + '_> {
        Box::new(self.tags.iter().map(|(name, documentation)| TagInfo {
            name,
            documentation,
        }))
    }
}
