use serde::{Deserialize, Serialize};

use crate::records::StatusTone;

/// Shown when the signed-in user has no profile row or no name on it.
pub const DISPLAY_NAME_PLACEHOLDER: &str = "Demo User";

/// Role label used when the profile has none.
pub const DEFAULT_ROLE_LABEL: &str = "user";

/// Canonical spelling of the admin role.
pub const ADMINISTRATOR_ROLE: &str = "administrator";

/// Name and role fields of a user's profile row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct ProfileRecord {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(default)]
    pub role: String,
}

/// "First Last", trimmed, or [`DISPLAY_NAME_PLACEHOLDER`].
pub fn display_name(profile: Option<&ProfileRecord>) -> String {
    let Some(p) = profile else {
        return DISPLAY_NAME_PLACEHOLDER.to_string();
    };
    let joined = format!(
        "{} {}",
        p.first_name.as_deref().unwrap_or(""),
        p.last_name.as_deref().unwrap_or("")
    );
    let trimmed = joined.trim();
    if trimmed.is_empty() {
        DISPLAY_NAME_PLACEHOLDER.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Avatar initials: first letter of every word, uppercased.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|w| w.chars().next())
        .collect::<String>()
        .to_uppercase()
}

/// Role shown under the user's name.
pub fn role_label(profile: Option<&ProfileRecord>) -> String {
    match profile.map(|p| p.role.as_str()) {
        Some(ADMINISTRATOR_ROLE) => ADMINISTRATOR_ROLE.to_string(),
        Some(role) if !role.is_empty() => role.to_string(),
        _ => DEFAULT_ROLE_LABEL.to_string(),
    }
}

// ---------------------------------------------------------------------------
// System status
// ---------------------------------------------------------------------------

/// The single global health row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct SystemStatusRecord {
    pub status: String,
}

/// Coarse platform health shown in the dashboard chrome.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum SystemStatus {
    #[default]
    Operational,
    Degraded,
    Outage,
}

impl SystemStatus {
    /// Parse a stored status. Unrecognized values read as `Outage`.
    pub fn parse(s: &str) -> Self {
        match s {
            "operational" => SystemStatus::Operational,
            "degraded" => SystemStatus::Degraded,
            _ => SystemStatus::Outage,
        }
    }

    /// Resolve the status row, defaulting to `Operational` when there is none.
    pub fn from_record(record: Option<&SystemStatusRecord>) -> Self {
        record
            .map(|r| SystemStatus::parse(&r.status))
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SystemStatus::Operational => "operational",
            SystemStatus::Degraded => "degraded",
            SystemStatus::Outage => "outage",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            SystemStatus::Operational => StatusTone::Green,
            SystemStatus::Degraded => StatusTone::Yellow,
            SystemStatus::Outage => StatusTone::Red,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            SystemStatus::Operational => "All systems operational",
            SystemStatus::Degraded => "Some systems degraded",
            SystemStatus::Outage => "System outage",
        }
    }
}
