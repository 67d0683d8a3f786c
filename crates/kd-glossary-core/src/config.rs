//! Page configuration handed over by the server-rendered template.

use crate::error::ConfigError;
use kd_api_types::PageConfig;

/// Parse the JSON body of the `#glossary-config` element.
pub fn parse_page_config(raw: &str) -> Result<PageConfig, ConfigError> {
    let config: PageConfig = serde_json::from_str(raw)?;
    check(config)
}

/// Build the config from loose template globals collected into a JSON object.
pub fn page_config_from_value(value: serde_json::Value) -> Result<PageConfig, ConfigError> {
    let config: PageConfig = serde_json::from_value(value)?;
    check(config)
}

/// JS numbers arrive as doubles; whole, non-negative ones become integers so
/// they can fill count fields. Arrays are converted element-wise.
pub fn whole_numbers(value: serde_json::Value) -> serde_json::Value {
    if value.is_f64() {
        if let Some(f) = value.as_f64() {
            if f.fract() == 0.0 && f >= 0.0 && f <= u64::MAX as f64 {
                return serde_json::Value::from(f as u64);
            }
        }
    }
    match value {
        serde_json::Value::Array(items) => {
            serde_json::Value::Array(items.into_iter().map(whole_numbers).collect())
        }
        other => other,
    }
}

fn check(config: PageConfig) -> Result<PageConfig, ConfigError> {
    if config.items_per_page == 0 {
        return Err(ConfigError::ZeroPageSize);
    }
    Ok(config)
}
