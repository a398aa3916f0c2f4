//! Environment variable expansion for configuration strings.
//!
//! Supports:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

use std::env::VarError;

use crate::ConfigError;

/// Expand `${VAR}` references in the value of config field `field`.
///
/// Values without `${` are returned as-is. Bare `$VAR` is left alone.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    match shellexpand::env_with_context(value, lookup_var) {
        Ok(expanded) => Ok(expanded.into_owned()),
        Err(shellexpand::LookupError { var_name, cause }) => {
            let message = match cause {
                VarError::NotPresent => format!("${{{var_name}}} not set"),
                VarError::NotUnicode(_) => format!("${{{var_name}}} is not valid unicode"),
            };
            Err(ConfigError::EnvVar {
                field: field.to_owned(),
                message,
            })
        }
    }
}

/// Resolve one variable; unset and non-unicode values both fail expansion.
fn lookup_var(name: &str) -> Result<Option<String>, VarError> {
    std::env::var(name).map(Some)
}
