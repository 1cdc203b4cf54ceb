//! Build-time configuration for the API base URL and landing page with an optional
//! runtime override. On `wasm32` the runtime config is read from
//! `window.STOCKROOM_CONFIG` (if present) so static deployments can change
//! endpoints without rebuilding. Configuration values are public; do not store
//! secrets here.

/// Landing (login) page used when nothing else is configured.
pub const DEFAULT_LANDING_PATH: &str = "/index.html";
/// Default request timeout (milliseconds) applied to every API call.
pub const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub landing_path: String,
    pub request_timeout_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            landing_path: DEFAULT_LANDING_PATH.to_string(),
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    #[must_use]
    pub fn load() -> Self {
        let api_base_url = option_env!("STOCKROOM_API_BASE_URL").unwrap_or("");
        let landing_path = option_env!("STOCKROOM_LANDING_PATH").unwrap_or(DEFAULT_LANDING_PATH);

        let mut config = Self {
            api_base_url: api_base_url.to_string(),
            landing_path: landing_path.to_string(),
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    /// Replaces the API base URL unless the new value is blank.
    #[must_use]
    pub fn with_api_base_url(mut self, api_base_url: &str) -> Self {
        if let Some(value) = normalize_runtime_value(api_base_url) {
            self.api_base_url = value;
        }
        self
    }

    #[must_use]
    pub fn with_request_timeout_ms(mut self, timeout_ms: u32) -> Self {
        if timeout_ms > 0 {
            self.request_timeout_ms = timeout_ms;
        }
        self
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    landing_path: Option<String>,
    request_timeout_ms: Option<u32>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.landing_path {
        config.landing_path = value;
    }
    if let Some(value) = runtime.request_timeout_ms.filter(|ms| *ms > 0) {
        config.request_timeout_ms = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("STOCKROOM_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        landing_path: read_runtime_value(&object, "landing_path"),
        request_timeout_ms: read_runtime_value(&object, "request_timeout_ms")
            .and_then(|value| value.parse().ok()),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key)).ok()?;
    let value = value
        .as_string()
        .or_else(|| value.as_f64().map(|number| number.to_string()))?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{
        AppConfig, DEFAULT_LANDING_PATH, DEFAULT_TIMEOUT_MS, RuntimeConfig,
        apply_runtime_overrides, normalize_runtime_value,
    };

    fn defaults() -> AppConfig {
        AppConfig {
            api_base_url: "https://api.default".to_string(),
            landing_path: "/index.html".to_string(),
            request_timeout_ms: 5_000,
        }
    }

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://estoque.local "),
            Some("https://estoque.local".to_string())
        );
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = defaults();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value(""),
            landing_path: normalize_runtime_value("  "),
            request_timeout_ms: Some(0),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config, defaults());
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = defaults();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("https://api.override"),
            landing_path: normalize_runtime_value("/login.html"),
            request_timeout_ms: Some(2_500),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.override");
        assert_eq!(config.landing_path, "/login.html");
        assert_eq!(config.request_timeout_ms, 2_500);
    }

    #[test]
    fn builders_keep_defaults_for_blank_input() {
        let config = AppConfig::default()
            .with_api_base_url("   ")
            .with_request_timeout_ms(0);

        assert_eq!(config.api_base_url, "");
        assert_eq!(config.landing_path, DEFAULT_LANDING_PATH);
        assert_eq!(config.request_timeout_ms, DEFAULT_TIMEOUT_MS);

        let config = config
            .with_api_base_url(" http://localhost:8000 ")
            .with_request_timeout_ms(1_500);
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.request_timeout_ms, 1_500);
    }
}
