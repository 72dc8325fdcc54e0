//! `key=value` extraction with boolean coercion.
use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use super::ResourceValue;

#[allow(clippy::unwrap_used)]
static KEY_VALUE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\w+)=(\w+)").unwrap());

/// Interpret `value` as a boolean token, case-insensitively.
///
/// Truthy: `y`, `yes`, `t`, `true`, `on`, `1`.
/// Falsy: `n`, `no`, `f`, `false`, `off`, `0`.
#[must_use]
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "y" | "yes" | "t" | "true" | "on" | "1" => Some(true),
        "n" | "no" | "f" | "false" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Coerce a literal into a [`ResourceValue`].
///
/// Total: recognised boolean tokens become [`ResourceValue::Bool`], anything
/// else is kept verbatim as [`ResourceValue::Text`].
#[must_use]
pub fn coerce(value: &str) -> ResourceValue {
    parse_bool(value).map_or_else(|| ResourceValue::Text(value.to_string()), ResourceValue::Bool)
}

/// Collect every `word=word` pair found in the space-joined tokens.
///
/// Later occurrences of a key replace earlier ones.
#[must_use]
pub fn parse_key_values(tokens: &[String]) -> BTreeMap<String, ResourceValue> {
    let joined = tokens.join(" ");
    let mut values = BTreeMap::new();
    for caps in KEY_VALUE.captures_iter(&joined) {
        let (_, [key, value]) = caps.extract();
        tracing::debug!("parsed {key}={value}");
        values.insert(key.to_string(), coerce(value));
    }
    values
}
