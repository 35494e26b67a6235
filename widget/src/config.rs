//! Host-supplied widget configuration.
//!
//! The host page may pass an options object to `renderWebchatWidget` or
//! define `window.webchatWidgetConfig` before the script loads. Keys are
//! camelCase; every key is optional.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;
use webchat_protocol::DEFAULT_API_URL;

/// Name of the optional global options object on `window`.
pub const GLOBAL_CONFIG_KEY: &str = "webchatWidgetConfig";

const DEFAULT_TITLE: &str = "Hello World!";
const DEFAULT_DESCRIPTION: &str = "This is a custom chatbot using a local backend.";
const DEFAULT_PLACEHOLDER: &str = "Type your message...";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid widget options: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("widget options are not serializable: {0}")]
    Js(String),
    #[error("apiUrl must not be empty")]
    EmptyApiUrl,
}

/// Settings for one mounted widget.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Chat endpoint receiving `POST {"message": ...}`.
    pub api_url: String,
    /// Upper bound on one request. `None` waits indefinitely.
    pub request_timeout_ms: Option<u32>,
    pub title: String,
    pub description: String,
    pub placeholder: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            request_timeout_ms: None,
            title: DEFAULT_TITLE.to_owned(),
            description: DEFAULT_DESCRIPTION.to_owned(),
            placeholder: DEFAULT_PLACEHOLDER.to_owned(),
        }
    }
}

impl WidgetConfig {
    /// Parse options from their JSON form.
    ///
    /// Blank input and `null` yield the defaults. A zero timeout means "no
    /// timeout".
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the JSON does not match the expected shape
    /// or `apiUrl` is blank.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let raw = raw.trim();
        if raw.is_empty() || raw == "null" {
            return Ok(Self::default());
        }
        let mut config: Self = serde_json::from_str(raw)?;
        config.api_url = config.api_url.trim().to_owned();
        if config.api_url.is_empty() {
            return Err(ConfigError::EmptyApiUrl);
        }
        config.request_timeout_ms = config.request_timeout_ms.filter(|ms| *ms > 0);
        Ok(config)
    }

    /// Parse options from a JavaScript value (`undefined`/`null` → defaults).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the value cannot be stringified or parsed.
    #[cfg(feature = "csr")]
    pub fn from_js(value: &wasm_bindgen::JsValue) -> Result<Self, ConfigError> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        let raw = js_sys::JSON::stringify(value).map_err(|e| ConfigError::Js(format!("{e:?}")))?;
        Self::from_json(&String::from(raw))
    }

    /// Resolve the options for one render call: the explicit argument wins,
    /// then `window.webchatWidgetConfig`, then the defaults. Invalid options
    /// are logged and replaced by the defaults.
    #[cfg(feature = "csr")]
    pub fn resolve(options: &wasm_bindgen::JsValue) -> Self {
        let source = if options.is_undefined() || options.is_null() {
            web_sys::window()
                .and_then(|w| js_sys::Reflect::get(&w, &GLOBAL_CONFIG_KEY.into()).ok())
                .unwrap_or(wasm_bindgen::JsValue::UNDEFINED)
        } else {
            options.clone()
        };
        Self::from_js(&source).unwrap_or_else(|err| {
            log::warn!("webchat: {err}; falling back to default options");
            Self::default()
        })
    }
}
