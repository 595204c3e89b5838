//! Startup configuration read once from the environment (after an optional `.env`).

mod database;
mod server;

pub use database::DbConfig;
pub use server::ServerConfig;

use crate::error::ConfigError;

/// Parse a boolean flag the way operators tend to write them in env files.
fn parse_flag(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: raw.to_string(),
            reason: "expected a boolean".into(),
        }),
    }
}

/// Reads process environment variables.
pub fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_accept_common_spellings() {
        for raw in ["true", "TRUE", "1", "yes", "On"] {
            assert!(parse_flag("DB_ENCRYPT", raw).unwrap(), "{raw}");
        }
        for raw in ["false", "0", "no", "OFF", ""] {
            assert!(!parse_flag("DB_ENCRYPT", raw).unwrap(), "{raw}");
        }
    }

    #[test]
    fn flags_reject_garbage() {
        let err = parse_flag("DB_ENCRYPT", "maybe").unwrap_err();
        assert!(err.to_string().contains("DB_ENCRYPT"));
    }
}
