//! Demo account and sample rows for local development.
//!
//! Each table is only seeded while it is empty, so restarting the server
//! never duplicates rows or clobbers real data.

use chrono::{DateTime, Duration, Utc};
use shared_types::{AppError, ProfileRecord, ADMINISTRATOR_ROLE};
use sqlx::{Pool, Postgres};

use crate::auth::password::hash_password;
use crate::config::DemoAccount;
use crate::repo::{exam, fraud_flag, profile, system_status, user, verification};

const DEMO_EXAMS: &[(&str, &str)] = &[
    ("National Entrance Examination 2026", "active"),
    ("Civil Services Preliminary", "active"),
    ("Medical Licensing Part I", "completed"),
    ("Engineering Aptitude Test", "completed"),
    ("Law School Admission Round 2", "scheduled"),
];

const DEMO_FRAUD_FLAGS: &[(&str, &str, &str)] = &[
    ("impersonation", "high", "Face mismatch against enrolment photo"),
    ("document_tampering", "medium", "Altered date of birth on admit card"),
    ("proxy_device", "low", "Second device detected near seat 42"),
];

/// (candidate, type, confidence, status, minutes ago)
const DEMO_VERIFICATIONS: &[(&str, &str, f64, &str, i64)] = &[
    ("Asha Rao", "Biometric", 98.4, "verified", 2),
    ("Rahul Mehta", "Document", 91.2, "verified", 9),
    ("Priya Nair", "Biometric", 62.7, "failed", 17),
    ("Vikram Singh", "Face Match", 88.9, "pending", 35),
    ("Neha Kapoor", "Biometric", 97.1, "verified", 58),
    ("Arjun Das", "Document", 45.3, "failed", 95),
    ("Sana Qureshi", "Face Match", 93.6, "verified", 140),
    ("Karan Malhotra", "Biometric", 79.8, "pending", 260),
    ("Divya Iyer", "Document", 99.0, "verified", 410),
    ("Imran Sheikh", "Biometric", 95.5, "verified", 1_500),
    ("Meera Pillai", "Face Match", 70.2, "failed", 2_900),
    ("Rohan Joshi", "Document", 96.8, "verified", 4_400),
];

/// A verification row ready for insert, timestamped relative to `now`.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoVerification {
    pub candidate_name: &'static str,
    pub verification_type: &'static str,
    pub confidence_score: f64,
    pub status: &'static str,
    pub verification_code: String,
    pub created_at: DateTime<Utc>,
}

/// The sample verifications, oldest last, with codes `VER-0001` upward.
pub fn demo_verifications(now: DateTime<Utc>) -> Vec<DemoVerification> {
    DEMO_VERIFICATIONS
        .iter()
        .enumerate()
        .map(
            |(i, &(candidate_name, verification_type, confidence_score, status, minutes_ago))| {
                DemoVerification {
                    candidate_name,
                    verification_type,
                    confidence_score,
                    status,
                    verification_code: format!("VER-{:04}", i + 1),
                    created_at: now - Duration::minutes(minutes_ago),
                }
            },
        )
        .collect()
}

/// Ensure the demo account exists and fill empty tables with sample rows.
pub async fn seed_demo_data(pool: &Pool<Postgres>) -> Result<(), AppError> {
    seed_demo_account(pool).await?;

    if exam::count(pool).await? == 0 {
        for (title, status) in DEMO_EXAMS {
            exam::insert(pool, title, status).await?;
        }
        tracing::info!(rows = DEMO_EXAMS.len(), "seeded exams");
    }

    if fraud_flag::count(pool).await? == 0 {
        for (detection_type, severity, details) in DEMO_FRAUD_FLAGS {
            fraud_flag::insert(pool, detection_type, severity, details).await?;
        }
        tracing::info!(rows = DEMO_FRAUD_FLAGS.len(), "seeded fraud flags");
    }

    if verification::count(pool).await? == 0 {
        let rows = demo_verifications(Utc::now());
        for row in &rows {
            verification::insert(
                pool,
                &verification::NewVerification {
                    candidate_name: row.candidate_name,
                    verification_type: row.verification_type,
                    confidence_score: row.confidence_score,
                    status: row.status,
                    verification_code: &row.verification_code,
                    created_at: row.created_at,
                },
            )
            .await?;
        }
        tracing::info!(rows = rows.len(), "seeded verifications");
    }

    system_status::ensure(pool, "operational").await?;

    Ok(())
}

async fn seed_demo_account(pool: &Pool<Postgres>) -> Result<(), AppError> {
    let account = DemoAccount::from_env();
    if user::find_by_email(pool, &account.email).await?.is_some() {
        return Ok(());
    }

    let hash = hash_password(&account.password)
        .map_err(|e| AppError::internal(format!("Failed to hash demo password: {e}")))?;
    let created = user::create(pool, &account.email, &hash).await?;

    profile::upsert(
        pool,
        created.id,
        &ProfileRecord {
            first_name: Some("Demo".to_string()),
            last_name: Some("Admin".to_string()),
            role: ADMINISTRATOR_ROLE.to_string(),
        },
    )
    .await?;

    tracing::info!(email = %account.email, "created demo account");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use shared_types::{DashboardSnapshot, VerificationRecord, VerificationStatus};
    use uuid::Uuid;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn demo_codes_are_unique_and_sequential() {
        let rows = demo_verifications(now());
        assert_eq!(rows[0].verification_code, "VER-0001");
        assert_eq!(rows[11].verification_code, "VER-0012");
        let mut codes: Vec<_> = rows.iter().map(|r| r.verification_code.clone()).collect();
        codes.dedup();
        assert_eq!(codes.len(), rows.len());
    }

    #[test]
    fn demo_rows_lie_in_the_past() {
        assert!(demo_verifications(now()).iter().all(|r| r.created_at < now()));
    }

    #[test]
    fn demo_data_fills_more_than_the_recent_window() {
        let rows: Vec<VerificationRecord> = demo_verifications(now())
            .into_iter()
            .map(|r| VerificationRecord {
                id: Uuid::new_v4(),
                candidate_name: r.candidate_name.to_string(),
                verification_type: r.verification_type.to_string(),
                confidence_score: r.confidence_score,
                status: VerificationStatus::parse(r.status),
                created_at: r.created_at,
                verification_code: r.verification_code,
            })
            .collect();

        let snapshot = DashboardSnapshot::from_collections(None, None, Some(rows));
        assert_eq!(snapshot.recent_verifications.len(), 10);
        // the ten newest demo rows hold six verified entries
        assert_eq!(snapshot.summary.verification_rate, 60.0);
    }

    #[test]
    fn demo_exams_include_active_ones() {
        assert_eq!(DEMO_EXAMS.iter().filter(|(_, s)| *s == "active").count(), 2);
    }
}
