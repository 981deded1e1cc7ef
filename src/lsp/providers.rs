//! Builds the ordered tag provider list from configuration

use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use crate::config::LspConfig;
use crate::tags::provider::TagProvider;
use crate::tags::providers::{
    AngularTagProvider, CustomTagProvider, Html5TagProvider, IonicTagProvider,
};

/// Create the enabled providers in lookup order: built-in html5, angular and
/// ionic first, then one provider per custom data file.
///
/// Relative custom data paths are resolved against `base_dir`. Files that
/// fail to load are logged and skipped.
pub fn create_providers(config: &LspConfig, base_dir: Option<&Path>) -> Vec<Arc<dyn TagProvider>> {
    let mut providers: Vec<Arc<dyn TagProvider>> = Vec::new();

    if config.providers.html5.enabled {
        providers.push(Arc::new(Html5TagProvider));
    }
    if config.providers.angular.enabled {
        providers.push(Arc::new(AngularTagProvider));
    }
    if config.providers.ionic.enabled {
        providers.push(Arc::new(IonicTagProvider));
    }

    let custom_data = &config.custom_data;
    for path in &custom_data.paths {
        let path = match base_dir {
            Some(base_dir) if path.is_relative() => base_dir.join(path),
            _ => path.clone(),
        };
        match CustomTagProvider::load(&path, custom_data.languages.clone()) {
            Ok(provider) => providers.push(Arc::new(provider)),
            Err(e) => warn!("Skipping custom data: {}", e),
        }
    }

    info!(
        "Tag providers: [{}]",
        providers
            .iter()
            .map(|provider| provider.id())
            .collect::<Vec<_>>()
            .join(", ")
    );

    providers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CustomDataConfig, ProviderConfig, ProvidersConfig};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn ids(providers: &[Arc<dyn TagProvider>]) -> Vec<String> {
        providers
            .iter()
            .map(|provider| provider.id().to_string())
            .collect()
    }

    #[test]
    fn default_config_enables_builtin_providers_in_order() {
        let providers = create_providers(&LspConfig::default(), None);
        assert_eq!(ids(&providers), vec!["html5", "angular", "ionic"]);
    }

    #[test]
    fn disabled_providers_are_omitted() {
        let config = LspConfig {
            providers: ProvidersConfig {
                html5: ProviderConfig { enabled: true },
                angular: ProviderConfig { enabled: false },
                ionic: ProviderConfig { enabled: false },
            },
            ..Default::default()
        };

        let providers = create_providers(&config, None);

        assert_eq!(ids(&providers), vec!["html5"]);
    }

    #[test]
    fn custom_data_is_appended_after_builtins() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("tags.json"),
            r#"{"tags": [{"name": "x-card", "description": "Card"}]}"#,
        )
        .unwrap();
        let config = LspConfig {
            custom_data: CustomDataConfig {
                paths: vec![PathBuf::from("tags.json")],
                languages: vec!["html".to_string(), "php".to_string()],
            },
            ..Default::default()
        };

        let providers = create_providers(&config, Some(temp_dir.path()));

        assert_eq!(providers.len(), 4);
        let custom = &providers[3];
        assert!(custom.id().ends_with("tags.json"));
        assert!(custom.is_applicable("php"));
        assert!(!custom.is_applicable("markdown"));
        assert_eq!(custom.tags().next().map(|tag| tag.name), Some("x-card"));
    }

    #[test]
    fn unreadable_custom_data_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("broken.json"), "{").unwrap();
        let config = LspConfig {
            custom_data: CustomDataConfig {
                paths: vec![
                    temp_dir.path().join("missing.json"),
                    temp_dir.path().join("broken.json"),
                ],
                ..Default::default()
            },
            ..Default::default()
        };

        let providers = create_providers(&config, None);

        assert_eq!(ids(&providers), vec!["html5", "angular", "ionic"]);
    }
}
