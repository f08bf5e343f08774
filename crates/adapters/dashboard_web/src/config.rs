//! Configuration loading — inline JSON block with `data-*` attribute overrides.
//!
//! Looks for `<script type="application/json" id="svcboard-config">` in the
//! page. Every field has a sensible default so the block is optional.
//! Attributes on `<body>` take precedence over the block.

use serde::Deserialize;
use svcboard_app::services::registry_client::DEFAULT_SERVICES_PATH;
use web_sys::Document;

/// Id of the optional inline JSON configuration block.
pub const CONFIG_SCRIPT_ID: &str = "svcboard-config";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Registry API settings.
    pub api: ApiConfig,
    /// Selectors of the page elements the dashboard drives.
    pub selectors: SelectorConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Registry API configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Path of the service collection.
    pub services_path: String,
}

/// CSS selectors for the page elements.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Container receiving one `<li>` per service.
    pub list: String,
    /// Button that submits a new service.
    pub submit: String,
    /// Input holding the new service's url.
    pub url_input: String,
    /// Input holding the new service's name.
    pub name_input: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl DashboardConfig {
    /// Load configuration from the inline block (if present) then apply
    /// `<body>` dataset overrides.
    ///
    /// Never fails: problems are returned alongside a usable configuration
    /// so the caller can report them.
    pub fn load(document: &Document) -> (Self, Vec<ConfigError>) {
        let script = document
            .get_element_by_id(CONFIG_SCRIPT_ID)
            .and_then(|script| script.text_content());
        let dataset = document.body().map(|body| body.dataset());
        Self::resolve(script.as_deref(), |key| {
            dataset.as_ref().and_then(|dataset| dataset.get(key))
        })
    }

    /// Compose the configuration from the inline block content and a dataset
    /// lookup.
    ///
    /// A malformed block falls back to the defaults; overrides are applied in
    /// every case; blank values are reset to their defaults individually.
    fn resolve(
        script: Option<&str>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> (Self, Vec<ConfigError>) {
        let mut problems = Vec::new();
        let mut config = match script.filter(|content| !content.trim().is_empty()) {
            Some(content) => Self::from_json(content).unwrap_or_else(|err| {
                problems.push(err);
                Self::default()
            }),
            None => Self::default(),
        };
        config.apply_overrides(lookup);
        problems.extend(config.repair());
        (config, problems)
    }

    fn from_json(content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(ConfigError::Parse)
    }

    /// Apply overrides looked up by dataset key (`data-services-api` is
    /// `servicesApi`).
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("servicesApi") {
            self.api.services_path = val;
        }
        if let Some(val) = lookup("serviceList") {
            self.selectors.list = val;
        }
        if let Some(val) = lookup("postService") {
            self.selectors.submit = val;
        }
        if let Some(val) = lookup("urlInput") {
            self.selectors.url_input = val;
        }
        if let Some(val) = lookup("nameInput") {
            self.selectors.name_input = val;
        }
        if let Some(val) = lookup("log") {
            self.logging.filter = val;
        }
    }

    /// Reset blank values to their defaults, reporting each one.
    fn repair(&mut self) -> Vec<ConfigError> {
        let api = ApiConfig::default();
        let selectors = SelectorConfig::default();
        let mut problems = Vec::new();
        let fields = [
            ("services_path", &mut self.api.services_path, api.services_path),
            ("list", &mut self.selectors.list, selectors.list),
            ("submit", &mut self.selectors.submit, selectors.submit),
            ("url_input", &mut self.selectors.url_input, selectors.url_input),
            ("name_input", &mut self.selectors.name_input, selectors.name_input),
        ];
        for (name, value, default) in fields {
            if value.trim().is_empty() {
                problems.push(ConfigError::Validation(format!(
                    "`{name}` must not be empty, using `{default}`"
                )));
                *value = default;
            }
        }
        problems
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            services_path: DEFAULT_SERVICES_PATH.to_string(),
        }
    }
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            list: "#service-list".to_string(),
            submit: "#post-service".to_string(),
            url_input: "#url".to_string(),
            name_input: "#url-name".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Inline JSON parse failure.
    #[error("failed to parse inline config: {0}")]
    Parse(#[from] serde_json::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
