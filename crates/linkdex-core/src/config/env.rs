use crate::error::{LinkdexError, Result};

/// Variable lookup; `std::env::var` in production, a map in tests.
pub(crate) type EnvSource<'a> = &'a dyn Fn(&str) -> Option<String>;

#[must_use]
pub(super) fn read_non_empty_env(source: EnvSource<'_>, name: &str) -> Option<String> {
    source(name)
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[must_use]
pub(super) fn read_env_list(source: EnvSource<'_>, name: &str) -> Vec<String> {
    read_non_empty_env(source, name)
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(ToString::to_string)
                .collect()
        })
        .unwrap_or_default()
}

pub(super) fn read_env_u32(
    source: EnvSource<'_>,
    name: &str,
    default_value: u32,
    min_value: u32,
) -> Result<u32> {
    let Some(raw) = read_non_empty_env(source, name) else {
        return Ok(default_value);
    };
    match raw.parse::<u32>() {
        Ok(value) if value >= min_value => Ok(value),
        _ => Err(LinkdexError::Validation(format!(
            "invalid {name}: {raw} (expected integer >= {min_value})"
        ))),
    }
}

pub(super) fn read_env_switch(
    source: EnvSource<'_>,
    name: &str,
    default_value: bool,
) -> Result<bool> {
    let Some(raw) = read_non_empty_env(source, name) else {
        return Ok(default_value);
    };
    match raw.to_ascii_lowercase().as_str() {
        "on" | "true" | "1" | "yes" => Ok(true),
        "off" | "false" | "0" | "no" | "none" => Ok(false),
        _ => Err(LinkdexError::Validation(format!(
            "invalid {name}: {raw} (expected on|off)"
        ))),
    }
}
