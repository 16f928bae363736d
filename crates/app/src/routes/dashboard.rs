use crate::auth::{use_session, SessionContext};
use crate::format_helpers::{age_label, confidence_label, rate_label};
use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdActivity, LdCheck, LdClock, LdFileText, LdRefreshCw, LdShieldAlert, LdUsers, LdX,
};
use dioxus_free_icons::Icon;
use shared_types::{
    AppError, DashboardSnapshot, DashboardSummary, FeatureFlags, StatusIcon, StatusTone,
    VerificationRecord,
};
use shared_ui::{
    use_request_generation, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card,
    CardContent, CardDescription, CardHeader, CardTitle, ContentSide, PercentBar,
    RequestGeneration, RequestToken, Separator, Skeleton, Tooltip, TooltipContent, TooltipTrigger,
};

/// Number of skeleton placeholders shown while data is loading.
const SKELETON_COUNT: usize = 4;

/// What the overview page shows.
#[derive(Debug, Clone, PartialEq)]
struct OverviewData {
    summary: DashboardSummary,
    recent: Vec<VerificationRecord>,
    loading: bool,
    loaded_once: bool,
}

impl OverviewData {
    /// First render: nothing loaded yet, a load about to start.
    fn initial() -> Self {
        Self {
            summary: DashboardSummary::default(),
            recent: Vec::new(),
            loading: true,
            loaded_once: false,
        }
    }
}

/// How a finished load was applied.
#[derive(Debug, Clone, PartialEq)]
enum LoadOutcome {
    Applied,
    /// The load failed; the previous numbers stay on screen.
    Kept(String),
    /// A newer load started meanwhile; nothing was touched.
    Stale,
    /// The session is gone. Every outstanding load is now stale.
    SignedOut,
}

/// Fold a finished load into `data`.
///
/// Only the latest load may write. A failure clears the loading flag and
/// leaves the summary and list as they were.
fn apply_load(
    data: &mut OverviewData,
    generation: &mut RequestGeneration,
    token: RequestToken,
    result: Result<DashboardSnapshot, String>,
) -> LoadOutcome {
    if !generation.is_current(token) {
        return LoadOutcome::Stale;
    }

    match result {
        Ok(snapshot) => {
            data.summary = snapshot.summary;
            data.recent = snapshot.recent_verifications;
            data.loaded_once = true;
            data.loading = false;
            LoadOutcome::Applied
        }
        Err(message) if AppError::is_unauthorized(&message) => {
            generation.invalidate();
            data.loading = false;
            LoadOutcome::SignedOut
        }
        Err(message) => {
            data.loading = false;
            LoadOutcome::Kept(message)
        }
    }
}

/// Signals behind the overview page.
#[derive(Clone, Copy)]
struct OverviewState {
    data: Signal<OverviewData>,
    generation: Signal<RequestGeneration>,
}

impl OverviewState {
    /// Fetch everything again. All signal writes happen inside the task.
    fn refresh(mut self, mut session: SessionContext) {
        spawn(async move {
            let token = self.generation.write().begin();
            self.data.write().loading = true;

            let result = fetch_snapshot().await.map_err(|e| e.to_string());

            let outcome = apply_load(
                &mut self.data.write(),
                &mut self.generation.write(),
                token,
                result,
            );

            match outcome {
                LoadOutcome::Applied | LoadOutcome::Stale => {}
                LoadOutcome::Kept(message) => {
                    tracing::error!(error = %message, "failed to load dashboard data");
                }
                LoadOutcome::SignedOut => {
                    tracing::info!("session expired while loading dashboard");
                    session.clear();
                    navigator().push(Route::Login {});
                }
            }
        });
    }
}

/// The three reads run concurrently; any failure fails the whole load.
async fn fetch_snapshot() -> Result<DashboardSnapshot, ServerFnError> {
    let (exams, fraud_flags, verifications) = futures::future::try_join3(
        server::api::list_exam_statuses(),
        server::api::list_fraud_flags(),
        server::api::list_recent_verifications(),
    )
    .await?;

    Ok(DashboardSnapshot::from_collections(
        Some(exams),
        Some(fraud_flags),
        Some(verifications),
    ))
}

/// Dashboard overview: four headline numbers and the latest verifications.
#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    let flags: FeatureFlags = use_context();

    let state = OverviewState {
        data: use_signal(OverviewData::initial),
        generation: use_request_generation(),
    };

    use_hook(move || state.refresh(session));

    let OverviewData {
        summary,
        recent,
        loading,
        loaded_once,
    } = (state.data)();
    let spinning = if loading { "true" } else { "false" };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            div { class: "page-header dashboard-header",
                div {
                    h1 { class: "page-title", "Dashboard Overview" }
                    p { class: "page-subtitle",
                        "Monitor system performance and recent verification activities"
                    }
                }
                div { class: "dashboard-actions",
                    if flags.demo_data {
                        Badge { variant: BadgeVariant::Secondary, "Demo data" }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Sm,
                        disabled: loading,
                        onclick: move |_| state.refresh(session),
                        span { class: "refresh-icon", "data-spinning": spinning,
                            Icon::<LdRefreshCw> { icon: LdRefreshCw, width: 14, height: 14 }
                        }
                        "Refresh"
                    }
                }
            }

            if loading && !loaded_once {
                LoadingSkeletons {}
            } else {
                StatsGrid { summary }
            }

            RecentVerifications { rows: recent }
        }
    }
}

/// Grid of skeleton placeholders shown during the first load.
#[component]
fn LoadingSkeletons() -> Element {
    rsx! {
        div { class: "stats-grid",
            for _ in 0..SKELETON_COUNT {
                Card {
                    CardHeader {
                        Skeleton { style: "height: 1rem; width: 60%;" }
                    }
                    CardContent {
                        Skeleton { style: "height: 2rem; width: 40%;" }
                    }
                }
            }
        }
    }
}

#[component]
fn StatsGrid(summary: DashboardSummary) -> Element {
    rsx! {
        div { class: "stats-grid",
            StatCard {
                title: "Total Exams",
                value: "{summary.total_exams}",
                tooltip_text: "Every exam on record, whatever its status.",
                Icon::<LdFileText> { icon: LdFileText, width: 16, height: 16 }
            }
            StatCard {
                title: "Active Exams",
                value: "{summary.active_exams}",
                tooltip_text: "Exams whose status is currently active.",
                Icon::<LdUsers> { icon: LdUsers, width: 16, height: 16 }
            }
            StatCard {
                title: "Fraud Detected",
                value: "{summary.fraud_detected}",
                tooltip_text: "Fraud-detection records raised so far.",
                Icon::<LdShieldAlert> { icon: LdShieldAlert, width: 16, height: 16 }
            }
            StatCard {
                title: "Verification Rate",
                value: rate_label(summary.verification_rate),
                tooltip_text: "Share of the latest verifications that passed.",
                Icon::<LdActivity> { icon: LdActivity, width: 16, height: 16 }
                PercentBar { percent: summary.verification_rate }
            }
        }
    }
}

/// A single stat card. The first child is the header icon; any further
/// children render under the value.
#[component]
fn StatCard(title: String, value: String, tooltip_text: String, children: Element) -> Element {
    rsx! {
        Card { class: "stat-card",
            CardHeader {
                div { class: "stat-header-row",
                    Tooltip {
                        TooltipTrigger {
                            CardTitle { class: "stat-title", "{title}" }
                        }
                        TooltipContent { side: ContentSide::Top, "{tooltip_text}" }
                    }
                    div { class: "stat-extra", {children} }
                }
            }
            CardContent {
                span { class: "stat-value", "{value}" }
            }
        }
    }
}

#[component]
fn RecentVerifications(rows: Vec<VerificationRecord>) -> Element {
    rsx! {
        Card {
            CardHeader {
                CardTitle { "Recent Verifications" }
                CardDescription { "The ten newest identity and document checks" }
            }
            CardContent {
                if rows.is_empty() {
                    p { class: "empty-text", "No recent verifications found" }
                } else {
                    div { class: "verification-list",
                        for (idx, row) in rows.into_iter().enumerate() {
                            if idx > 0 {
                                Separator {}
                            }
                            VerificationRow { key: "{row.id}", row }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn VerificationRow(row: VerificationRecord) -> Element {
    let presentation = row.status.presentation();
    let tone = presentation.tone.as_str();

    rsx! {
        div { class: "verification-row",
            span { class: "verification-icon", "data-tone": tone,
                StatusGlyph { icon: presentation.icon }
            }
            div { class: "verification-main",
                p { class: "verification-type", "{row.verification_type}" }
                p { class: "verification-meta",
                    "{row.candidate_name} · {row.verification_code}"
                }
            }
            div { class: "verification-side",
                p { class: "verification-confidence", "{confidence_label(row.confidence_score)}" }
                p { class: "verification-age", "{age_label(row.created_at)}" }
            }
            Badge { variant: badge_variant(presentation.tone), "{presentation.label}" }
        }
    }
}

#[component]
fn StatusGlyph(icon: StatusIcon) -> Element {
    match icon {
        StatusIcon::Check => rsx! { Icon::<LdCheck> { icon: LdCheck, width: 16, height: 16 } },
        StatusIcon::Clock => rsx! { Icon::<LdClock> { icon: LdClock, width: 16, height: 16 } },
        StatusIcon::Cross => rsx! { Icon::<LdX> { icon: LdX, width: 16, height: 16 } },
    }
}

fn badge_variant(tone: StatusTone) -> BadgeVariant {
    match tone {
        StatusTone::Green => BadgeVariant::Success,
        StatusTone::Yellow => BadgeVariant::Warning,
        StatusTone::Red => BadgeVariant::Danger,
        StatusTone::Neutral => BadgeVariant::Secondary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{AppErrorKind, ExamRecord, FraudFlagRecord};

    fn snapshot(active: usize, flags: usize) -> DashboardSnapshot {
        let exams = (0..active)
            .map(|_| ExamRecord { status: "active".into() })
            .collect();
        let fraud = (0..flags)
            .map(|_| FraudFlagRecord { id: uuid::Uuid::new_v4() })
            .collect();
        DashboardSnapshot::from_collections(Some(exams), Some(fraud), None)
    }

    fn server_error(kind: AppErrorKind, message: &str) -> String {
        let err = AppError {
            kind,
            message: message.into(),
            field_errors: Default::default(),
        };
        format!(
            "error running server function: {} (details: None)",
            serde_json::to_string(&err).unwrap()
        )
    }

    /// Data after one successful load of `snap`.
    fn loaded(snap: &DashboardSnapshot) -> (OverviewData, RequestGeneration) {
        let mut data = OverviewData::initial();
        let mut generation = RequestGeneration::default();
        let token = generation.begin();
        let outcome = apply_load(&mut data, &mut generation, token, Ok(snap.clone()));
        assert_eq!(outcome, LoadOutcome::Applied);
        (data, generation)
    }

    #[test]
    fn successful_load_replaces_numbers_and_stops_loading() {
        let snap = snapshot(2, 3);
        let (data, _) = loaded(&snap);
        assert_eq!(data.summary, snap.summary);
        assert!(data.loaded_once);
        assert!(!data.loading);
    }

    #[test]
    fn failed_refresh_keeps_previous_numbers() {
        let snap = snapshot(2, 3);
        let (mut data, mut generation) = loaded(&snap);

        let token = generation.begin();
        data.loading = true;
        let err = server_error(AppErrorKind::DatabaseError, "Data store unavailable");
        let outcome = apply_load(&mut data, &mut generation, token, Err(err.clone()));

        assert_eq!(outcome, LoadOutcome::Kept(err));
        assert_eq!(data.summary, snap.summary);
        assert!(data.loaded_once);
        assert!(!data.loading);
    }

    #[test]
    fn superseded_load_changes_nothing() {
        let mut data = OverviewData::initial();
        let mut generation = RequestGeneration::default();

        let older = generation.begin();
        let newer = generation.begin();

        let before = data.clone();
        let outcome = apply_load(&mut data, &mut generation, older, Ok(snapshot(5, 5)));
        assert_eq!(outcome, LoadOutcome::Stale);
        assert_eq!(data, before);

        // a late failure of the older load is ignored too
        let outcome = apply_load(&mut data, &mut generation, older, Err("boom".into()));
        assert_eq!(outcome, LoadOutcome::Stale);
        assert_eq!(data, before);

        assert_eq!(
            apply_load(&mut data, &mut generation, newer, Ok(snapshot(1, 0))),
            LoadOutcome::Applied
        );
    }

    #[test]
    fn unauthorized_load_signs_out_and_stales_other_loads() {
        let snap = snapshot(1, 1);
        let (mut data, mut generation) = loaded(&snap);

        let first = generation.begin();
        let err = server_error(AppErrorKind::Unauthorized, "Authentication required");
        let outcome = apply_load(&mut data, &mut generation, first, Err(err));

        assert_eq!(outcome, LoadOutcome::SignedOut);
        assert!(!data.loading);
        assert!(!generation.is_current(first));
        assert_eq!(data.summary, snap.summary);
    }

    #[test]
    fn transport_failure_is_not_a_sign_out() {
        let mut data = OverviewData::initial();
        let mut generation = RequestGeneration::default();
        let token = generation.begin();

        let outcome = apply_load(&mut data, &mut generation, token, Err("connection reset".into()));
        assert_eq!(outcome, LoadOutcome::Kept("connection reset".into()));
        assert!(!data.loaded_once);
        assert!(!data.loading);
    }

    #[test]
    fn badge_variant_follows_tone() {
        assert_eq!(badge_variant(StatusTone::Green), BadgeVariant::Success);
        assert_eq!(badge_variant(StatusTone::Yellow), BadgeVariant::Warning);
        assert_eq!(badge_variant(StatusTone::Red), BadgeVariant::Danger);
        assert_eq!(badge_variant(StatusTone::Neutral), BadgeVariant::Secondary);
    }
}
