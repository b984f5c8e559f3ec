use serde::Deserialize;

/// Endpoint used when no configuration overrides it.
pub const DEFAULT_ENDPOINT: &str = "https://bayes-ai.onrender.com/visualization/visualize";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    /// Full URL of the visualization endpoint.
    pub endpoint: String,
    /// Request timeout on native targets. `None` waits indefinitely.
    pub request_timeout_secs: Option<u64>,
    /// Grant `allow-same-origin` to the plot sandbox.
    pub trust_snippets: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_secs: None,
            trust_snippets: true,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ClientConfig {
    /// Environment prefix, e.g. `VIZCHAT_ENDPOINT`.
    pub const ENV_PREFIX: &'static str = "VIZCHAT";

    /// Layer an optional TOML file and `VIZCHAT_*` variables over the defaults.
    pub fn load(path: Option<&std::path::Path>) -> Result<Self, crate::ApiError> {
        use config::{Config, Environment, File};

        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(false));
        }
        let s = builder
            .add_source(Environment::with_prefix(Self::ENV_PREFIX))
            .build()?;
        Ok(s.try_deserialize()?)
    }
}
