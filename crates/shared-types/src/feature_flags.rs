use serde::{Deserialize, Serialize};

/// Feature flags controlling optional server behaviour.
///
/// Loaded from `config.toml` at server startup and exposed to clients
/// via a server function. Every field defaults to `false` so that a
/// missing or incomplete config file disables all optional features.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Export traces and logs over OTLP.
    #[serde(default)]
    pub telemetry: bool,
    /// Seed a demo account and sample rows into empty tables at startup.
    #[serde(default)]
    pub demo_data: bool,
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
}
