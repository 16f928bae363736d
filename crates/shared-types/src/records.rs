use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Store rows
// ---------------------------------------------------------------------------

/// Status literal that marks an exam as currently running.
pub const EXAM_STATUS_ACTIVE: &str = "active";

/// An exam row. Only the status column is read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct ExamRecord {
    pub status: String,
}

impl ExamRecord {
    pub fn is_active(&self) -> bool {
        self.status == EXAM_STATUS_ACTIVE
    }
}

/// A fraud-detection row. Its presence is the signal; only the id is read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct FraudFlagRecord {
    pub id: Uuid,
}

/// One attempted identity or document check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct VerificationRecord {
    pub id: Uuid,
    pub candidate_name: String,
    pub verification_type: String,
    pub confidence_score: f64,
    #[cfg_attr(feature = "server", sqlx(try_from = "String"))]
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "verified"))]
    pub status: VerificationStatus,
    pub created_at: DateTime<Utc>,
    pub verification_code: String,
}

// ---------------------------------------------------------------------------
// Verification status
// ---------------------------------------------------------------------------

/// Terminal state of a verification attempt.
///
/// Parsing never fails: anything outside the three known literals lands in
/// `Other` with the raw value preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VerificationStatus {
    Verified,
    Pending,
    Failed,
    Other(String),
}

impl VerificationStatus {
    pub fn parse(s: &str) -> Self {
        match s {
            "verified" => VerificationStatus::Verified,
            "pending" => VerificationStatus::Pending,
            "failed" => VerificationStatus::Failed,
            other => VerificationStatus::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            VerificationStatus::Verified => "verified",
            VerificationStatus::Pending => "pending",
            VerificationStatus::Failed => "failed",
            VerificationStatus::Other(raw) => raw,
        }
    }

    pub fn is_verified(&self) -> bool {
        matches!(self, VerificationStatus::Verified)
    }

    /// Icon, tone and badge label for this status.
    pub fn presentation(&self) -> StatusPresentation {
        match self {
            VerificationStatus::Verified => StatusPresentation {
                icon: StatusIcon::Check,
                tone: StatusTone::Green,
                label: "Verified",
            },
            VerificationStatus::Pending => StatusPresentation {
                icon: StatusIcon::Clock,
                tone: StatusTone::Yellow,
                label: "Pending",
            },
            VerificationStatus::Failed => StatusPresentation {
                icon: StatusIcon::Cross,
                tone: StatusTone::Red,
                label: "Failed",
            },
            VerificationStatus::Other(_) => StatusPresentation {
                icon: StatusIcon::Clock,
                tone: StatusTone::Neutral,
                label: "Unknown",
            },
        }
    }
}

impl From<String> for VerificationStatus {
    fn from(s: String) -> Self {
        VerificationStatus::parse(&s)
    }
}

impl From<VerificationStatus> for String {
    fn from(status: VerificationStatus) -> Self {
        match status {
            VerificationStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which glyph a status row shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIcon {
    Check,
    Clock,
    Cross,
}

/// Colour family shared by status badges, icons and indicator dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Green,
    Yellow,
    Red,
    Neutral,
}

impl StatusTone {
    /// Value used for `data-tone` attributes in stylesheets.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusTone::Green => "green",
            StatusTone::Yellow => "yellow",
            StatusTone::Red => "red",
            StatusTone::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusPresentation {
    pub icon: StatusIcon,
    pub tone: StatusTone,
    pub label: &'static str,
}
