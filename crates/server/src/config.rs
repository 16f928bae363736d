use shared_types::{AppConfig, FeatureFlags};
use std::sync::OnceLock;

static FLAGS: OnceLock<FeatureFlags> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

const DEFAULT_DEMO_EMAIL: &str = "demo@exasecure.ai";
const DEFAULT_DEMO_PASSWORD: &str = "exasecure-demo";

/// Parse feature flags from the contents of a config file.
///
/// Unparseable input disables every flag.
pub fn parse_feature_flags(contents: &str) -> FeatureFlags {
    match toml::from_str::<AppConfig>(contents) {
        Ok(config) => config.features,
        Err(e) => {
            tracing::warn!(%e, path = CONFIG_PATH, "invalid config, all feature flags off");
            FeatureFlags::default()
        }
    }
}

/// Read `config.toml` once and keep the flags for the life of the process.
/// Later calls are no-ops. A missing file disables every flag.
pub fn load_feature_flags() {
    FLAGS.get_or_init(|| {
        let flags = match std::fs::read_to_string(CONFIG_PATH) {
            Ok(contents) => parse_feature_flags(&contents),
            Err(e) => {
                tracing::warn!(%e, path = CONFIG_PATH, "config not found, all feature flags off");
                FeatureFlags::default()
            }
        };
        tracing::info!(?flags, "feature flags loaded");
        flags
    });
}

/// The loaded flags, or all-off if `load_feature_flags` has not run.
pub fn feature_flags() -> &'static FeatureFlags {
    static DEFAULT: FeatureFlags = FeatureFlags {
        telemetry: false,
        demo_data: false,
    };
    FLAGS.get().unwrap_or(&DEFAULT)
}

/// Credentials for the seeded demo account.
#[derive(Debug, Clone)]
pub struct DemoAccount {
    pub email: String,
    pub password: String,
}

impl DemoAccount {
    /// `DEMO_USER_EMAIL` / `DEMO_USER_PASSWORD`, falling back to built-in values.
    pub fn from_env() -> Self {
        let var = |key: &str, default: &str| {
            std::env::var(key)
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        Self {
            email: var("DEMO_USER_EMAIL", DEFAULT_DEMO_EMAIL),
            password: var("DEMO_USER_PASSWORD", DEFAULT_DEMO_PASSWORD),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_flags() {
        let flags = parse_feature_flags("[features]\ntelemetry = true\ndemo_data = true\n");
        assert!(flags.telemetry);
        assert!(flags.demo_data);
    }

    #[test]
    fn malformed_config_disables_everything() {
        let flags = parse_feature_flags("[features\ndemo_data = yes");
        assert_eq!(flags, FeatureFlags::default());
    }

    #[test]
    fn unloaded_flags_default_off() {
        // FLAGS is never initialised in unit tests
        assert!(!feature_flags().demo_data);
    }
}
