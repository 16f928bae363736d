use dioxus::prelude::*;
use shared_types::FeatureFlags;

mod auth;
mod format_helpers;
mod routes;
use auth::SessionContext;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        server::config::load_feature_flags();
        let flags = server::config::feature_flags();

        if flags.telemetry {
            server::telemetry::init_telemetry();
        }
        server::health::record_start_time();

        let pool = server::db::create_pool();
        server::db::run_migrations(&pool).await;

        if flags.demo_data {
            if let Err(e) = server::seed::seed_demo_data(&pool).await {
                tracing::error!(error = %e, "demo data seeding failed");
            }
        }

        let state = server::db::AppState { pool: pool.clone() };

        let mut router = dioxus::server::router(App).merge(server::openapi::api_router(pool));

        if flags.telemetry {
            router = router.layer(server::telemetry::OtelTraceLayer);
        }

        let router = router
            .layer(axum::middleware::from_fn_with_state(
                state,
                server::auth::middleware::auth_middleware,
            ))
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    // Lets the telemetry layer tag spans by client platform
    use_hook(|| {
        use dioxus::fullstack::{set_request_headers, HeaderMap, HeaderValue};

        let mut headers = HeaderMap::new();
        headers.insert(
            "x-client-platform",
            HeaderValue::from_static(client_platform()),
        );
        set_request_headers(headers);
    });

    // Defaults all-off on error
    let flags_resource =
        use_server_future(move || async move { server::api::get_feature_flags().await })?;

    let flags = flags_resource
        .read()
        .as_ref()
        .cloned()
        .unwrap_or(Ok(FeatureFlags::default()))
        .unwrap_or_default();

    use_context_provider(|| flags);
    use_context_provider(SessionContext::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "ExaSecure AI" }
        SuspenseBoundary {
            fallback: |_| rsx! {
                div { class: "auth-guard-loading",
                    p { "Loading..." }
                }
            },
            Router::<Route> {}
        }
    }
}
