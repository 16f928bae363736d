use serde::{Deserialize, Serialize};

use crate::records::{ExamRecord, FraudFlagRecord, VerificationRecord};

/// Maximum number of rows in the recent-verifications list.
pub const RECENT_VERIFICATION_LIMIT: usize = 10;

/// Four headline numbers shown on the dashboard overview.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DashboardSummary {
    pub total_exams: u64,
    pub active_exams: u64,
    pub fraud_detected: u64,
    /// Percentage of fetched verifications with status `verified`, two decimals.
    pub verification_rate: f64,
}

/// Everything the overview page renders: the summary plus the recent list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DashboardSnapshot {
    pub summary: DashboardSummary,
    pub recent_verifications: Vec<VerificationRecord>,
}

impl DashboardSnapshot {
    /// Build a snapshot from the three raw collections. `None` counts as empty.
    ///
    /// The verification rate is computed over the rows that end up in the
    /// recent list, i.e. at most [`RECENT_VERIFICATION_LIMIT`] of the newest.
    pub fn from_collections(
        exams: Option<Vec<ExamRecord>>,
        fraud_flags: Option<Vec<FraudFlagRecord>>,
        verifications: Option<Vec<VerificationRecord>>,
    ) -> Self {
        let exams = exams.unwrap_or_default();
        let fraud_flags = fraud_flags.unwrap_or_default();
        let recent = recent_verifications(verifications.unwrap_or_default());

        Self {
            summary: DashboardSummary {
                total_exams: exams.len() as u64,
                active_exams: exams.iter().filter(|e| e.is_active()).count() as u64,
                fraud_detected: fraud_flags.len() as u64,
                verification_rate: verification_rate(&recent),
            },
            recent_verifications: recent,
        }
    }
}

/// Newest-first, truncated to [`RECENT_VERIFICATION_LIMIT`].
pub fn recent_verifications(mut rows: Vec<VerificationRecord>) -> Vec<VerificationRecord> {
    rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    rows.truncate(RECENT_VERIFICATION_LIMIT);
    rows
}

/// `round2(100 * verified / max(1, total))`.
pub fn verification_rate(rows: &[VerificationRecord]) -> f64 {
    let verified = rows.iter().filter(|v| v.status.is_verified()).count();
    let total = rows.len().max(1);
    round2(verified as f64 / total as f64 * 100.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
