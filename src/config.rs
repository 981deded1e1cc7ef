use serde::Deserialize;
use std::path::PathBuf;

/// Settings section read from `workspace/didChangeConfiguration`
pub const SETTINGS_SECTION: &str = "tagHover";

/// LSP configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LspConfig {
    pub providers: ProvidersConfig,
    pub custom_data: CustomDataConfig,
}

impl LspConfig {
    /// Parse settings sent by the client, accepting either the bare config
    /// object or one nested under [`SETTINGS_SECTION`].
    pub fn from_settings(settings: serde_json::Value) -> Result<Self, serde_json::Error> {
        match settings {
            serde_json::Value::Null => Ok(Self::default()),
            serde_json::Value::Object(mut map) if map.contains_key(SETTINGS_SECTION) => {
                Self::from_settings(map.remove(SETTINGS_SECTION).unwrap_or_default())
            }
            settings => serde_json::from_value(settings),
        }
    }
}

/// Built-in provider toggles
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ProvidersConfig {
    pub html5: ProviderConfig,
    pub angular: ProviderConfig,
    pub ionic: ProviderConfig,
}

/// Individual provider configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProviderConfig {
    pub enabled: bool,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Custom tag data files
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct CustomDataConfig {
    /// JSON files, relative paths resolved against the workspace root
    pub paths: Vec<PathBuf>,
    /// Language identifiers the custom tags apply to
    pub languages: Vec<String>,
}

impl Default for CustomDataConfig {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            languages: vec!["html".to_string()],
        }
    }
}

/// Returns the path to the data directory for tag-hover-lsp.
/// Uses $XDG_DATA_HOME/tag-hover-lsp if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/tag-hover-lsp,
/// or ./tag-hover-lsp if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("tag-hover-lsp.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("tag-hover-lsp")
}
