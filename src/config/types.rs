use serde::{Deserialize, Serialize};

use crate::auth::DemoAccount;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Settings for the mock authentication gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// The single accepted credential pair.
    #[serde(default)]
    pub demo: DemoAccount,
    /// Simulated round-trip latency in milliseconds (default: 650).
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
}

fn default_latency_ms() -> u64 {
    650
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            demo: DemoAccount::default(),
            latency_ms: default_latency_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_demo_account() {
        let config = Config::default();
        assert_eq!(config.auth.demo.email, "demo@venust.app");
        assert_eq!(config.auth.latency_ms, 650);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.auth.demo.password, "123456");
        assert_eq!(config.auth.latency_ms, 650);

        let config: Config = toml::from_str("[auth]\nlatency_ms = 10\n").unwrap();
        assert_eq!(config.auth.latency_ms, 10);
        assert_eq!(config.auth.demo.display_name, "Usuário Demo");
    }
}
