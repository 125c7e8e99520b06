use std::sync::Arc;

use cssls_core::format::FormatMode;
use serde::Deserialize;
use tokio::sync::Semaphore;
use tower_lsp::lsp_types::ConfigurationItem;
use tracing::{debug, warn};

use crate::analyzer::AnalyzerSettings;

use super::state::CssLanguageServer;

/// Client configuration section holding every setting below.
pub(crate) const CONFIG_SECTION: &str = "css";

#[derive(Debug, Clone)]
pub(crate) struct ServerConfig {
    pub(crate) settings: AnalyzerSettings,
    pub(crate) max_concurrent: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            settings: AnalyzerSettings::default(),
            max_concurrent: 2,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct CssConfigSection {
    #[serde(default)]
    completion: CompletionConfig,
    #[serde(default)]
    format: FormatConfig,
    #[serde(default)]
    lint: LintConfig,
    #[serde(default)]
    performance: PerformanceConfig,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct CompletionConfig {
    #[serde(default)]
    show_deprecated: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct FormatConfig {
    #[serde(default)]
    mode: Option<FormatMode>,
    #[serde(default)]
    print_width: Option<usize>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct LintConfig {
    #[serde(default)]
    enabled: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct PerformanceConfig {
    #[serde(default)]
    max_concurrent: Option<usize>,
}

impl ServerConfig {
    /// Fold a client section into a fresh config. Missing or zero values keep defaults.
    fn from_section(section: CssConfigSection) -> Self {
        let defaults = ServerConfig::default();
        let mut settings = defaults.settings;
        if let Some(v) = section.completion.show_deprecated {
            settings.completion.show_deprecated = v;
        }
        if let Some(mode) = section.format.mode {
            settings.format_mode = mode;
        }
        if let Some(width) = section.format.print_width.filter(|w| *w > 0) {
            settings.print_width = width;
        }
        if let Some(enabled) = section.lint.enabled {
            settings.lint_enabled = enabled;
        }
        Self {
            settings,
            max_concurrent: section
                .performance
                .max_concurrent
                .filter(|v| *v > 0)
                .unwrap_or(defaults.max_concurrent),
        }
    }
}

impl CssLanguageServer {
    pub(crate) async fn load_config(&self) {
        let items = vec![ConfigurationItem {
            scope_uri: None,
            section: Some(CONFIG_SECTION.to_string()),
        }];

        let values = match self.client.configuration(items).await {
            Ok(values) => values,
            Err(e) => {
                debug!("workspace/configuration unavailable: {}", e);
                return;
            }
        };
        let Some(value) = values.into_iter().next().filter(|v| !v.is_null()) else {
            return;
        };
        let section = match serde_json::from_value::<CssConfigSection>(value) {
            Ok(section) => section,
            Err(e) => {
                warn!("ignoring invalid '{}' configuration: {}", CONFIG_SECTION, e);
                return;
            }
        };

        let config = ServerConfig::from_section(section);
        let permits = config.max_concurrent;
        debug!("configuration loaded: {:?}", config);
        if let Ok(mut guard) = self.config.lock() {
            *guard = config;
        }
        if let Ok(mut sem_arc) = self.compute_limiter.lock() {
            *sem_arc = Arc::new(Semaphore::new(permits));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_overrides_defaults() {
        let value = serde_json::json!({
            "completion": { "showDeprecated": true },
            "format": { "mode": "compact", "printWidth": 100 },
            "lint": { "enabled": false },
            "performance": { "maxConcurrent": 4 }
        });
        let section: CssConfigSection = serde_json::from_value(value).unwrap();
        let config = ServerConfig::from_section(section);
        assert!(config.settings.completion.show_deprecated);
        assert_eq!(config.settings.format_mode, FormatMode::Compact);
        assert_eq!(config.settings.print_width, 100);
        assert!(!config.settings.lint_enabled);
        assert_eq!(config.max_concurrent, 4);
    }

    #[test]
    fn empty_or_zero_values_keep_defaults() {
        let value = serde_json::json!({ "format": { "printWidth": 0 }, "performance": { "maxConcurrent": 0 } });
        let section: CssConfigSection = serde_json::from_value(value).unwrap();
        let config = ServerConfig::from_section(section);
        assert_eq!(config.settings, AnalyzerSettings::default());
        assert_eq!(config.max_concurrent, 2);
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let value = serde_json::json!({ "format": { "mode": "pretty" } });
        assert!(serde_json::from_value::<CssConfigSection>(value).is_err());
    }
}
