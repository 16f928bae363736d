use axum::{body::Body, http::Request, response::Response};
use opentelemetry::{
    global,
    trace::{SpanKind, TraceContextExt, Tracer},
    Context, KeyValue,
};
use opentelemetry_otlp::{WithExportConfig, WithTonicConfig};
use std::{
    future::Future,
    pin::Pin,
    sync::OnceLock,
    task::{Context as TaskContext, Poll},
};
use tower::{Layer, Service};

use crate::auth::jwt::Claims;

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_SERVICE_NAME: &str = "exasecure";

static LOGGER_PROVIDER: OnceLock<opentelemetry_sdk::logs::SdkLoggerProvider> = OnceLock::new();

/// Runtime for the tonic exporters, which spawn onto Tokio when built.
static OTEL_RUNTIME: OnceLock<tokio::runtime::Runtime> = OnceLock::new();

/// Where and how to ship spans and logs.
#[derive(Debug, Clone)]
struct OtlpTarget {
    endpoint: String,
    ingestion_key: Option<String>,
}

impl OtlpTarget {
    fn from_env() -> Option<Self> {
        let endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT").ok()?;
        let ingestion_key = std::env::var("SIGNOZ_INGESTION_KEY")
            .ok()
            .filter(|k| !k.is_empty());
        Some(Self {
            endpoint,
            ingestion_key,
        })
    }

    fn uses_tls(&self) -> bool {
        self.endpoint.starts_with("https://")
    }

    fn metadata(&self) -> Option<opentelemetry_otlp::tonic_types::metadata::MetadataMap> {
        let key = self.ingestion_key.as_ref()?.parse().ok()?;
        let mut metadata = opentelemetry_otlp::tonic_types::metadata::MetadataMap::new();
        metadata.insert("signoz-ingestion-key", key);
        Some(metadata)
    }

    fn tls() -> opentelemetry_otlp::tonic_types::transport::ClientTlsConfig {
        opentelemetry_otlp::tonic_types::transport::ClientTlsConfig::new().with_native_roots()
    }
}

/// Register an OTLP trace provider and bridge the `log` crate to OTLP logs.
///
/// Does nothing unless `OTEL_EXPORTER_OTLP_ENDPOINT` is set. Dioxus owns the
/// `tracing` subscriber, so only exporters are configured here. Reads
/// `OTEL_SERVICE_NAME`, `SIGNOZ_INGESTION_KEY` and `DEPLOY_ENV`.
pub fn init_telemetry() {
    let _ = dotenvy::dotenv();

    let Some(target) = OtlpTarget::from_env() else {
        tracing::info!("OTEL_EXPORTER_OTLP_ENDPOINT not set, telemetry export disabled");
        return;
    };

    let service_name =
        std::env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| DEFAULT_SERVICE_NAME.to_string());
    let environment = std::env::var("DEPLOY_ENV").unwrap_or_else(|_| "development".to_string());

    let rt = match otel_runtime() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!(error = %e, "could not start telemetry runtime");
            return;
        }
    };
    let _guard = rt.enter();

    let mut span_builder = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(&target.endpoint);
    if target.uses_tls() {
        span_builder = span_builder.with_tls_config(OtlpTarget::tls());
    }
    if let Some(metadata) = target.metadata() {
        span_builder = span_builder.with_metadata(metadata);
    }
    let span_exporter = match span_builder.build() {
        Ok(exporter) => exporter,
        Err(e) => {
            tracing::error!(error = %e, "could not build OTLP span exporter");
            return;
        }
    };

    let resource = opentelemetry_sdk::Resource::builder()
        .with_service_name(service_name)
        .with_attribute(KeyValue::new("service.version", APP_VERSION))
        .with_attribute(KeyValue::new("deployment.environment", environment))
        .build();

    let provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
        .with_batch_exporter(span_exporter)
        .with_resource(resource.clone())
        .build();
    global::set_tracer_provider(provider);

    let mut log_builder = opentelemetry_otlp::LogExporter::builder()
        .with_tonic()
        .with_endpoint(&target.endpoint);
    if target.uses_tls() {
        log_builder = log_builder.with_tls_config(OtlpTarget::tls());
    }
    if let Some(metadata) = target.metadata() {
        log_builder = log_builder.with_metadata(metadata);
    }
    let log_exporter = match log_builder.build() {
        Ok(exporter) => exporter,
        Err(e) => {
            tracing::error!(error = %e, "could not build OTLP log exporter, exporting traces only");
            return;
        }
    };

    let logger_provider = LOGGER_PROVIDER.get_or_init(|| {
        opentelemetry_sdk::logs::SdkLoggerProvider::builder()
            .with_batch_exporter(log_exporter)
            .with_resource(resource)
            .build()
    });

    let bridge = opentelemetry_appender_log::OpenTelemetryLogBridge::new(logger_provider);
    match log::set_boxed_logger(Box::new(bridge)) {
        Ok(()) => log::set_max_level(log::LevelFilter::Info),
        Err(_) => tracing::warn!("a `log` logger is already installed, OTLP log bridge skipped"),
    }

    tracing::info!(
        endpoint = %target.endpoint,
        cloud = target.ingestion_key.is_some(),
        version = APP_VERSION,
        "telemetry export enabled"
    );
}

fn otel_runtime() -> std::io::Result<&'static tokio::runtime::Runtime> {
    if let Some(rt) = OTEL_RUNTIME.get() {
        return Ok(rt);
    }
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .worker_threads(1)
        .build()?;
    Ok(OTEL_RUNTIME.get_or_init(|| rt))
}

/// Client platform from an explicit `X-Client-Platform` header, else a
/// User-Agent guess. Native Dioxus clients send no User-Agent.
fn detect_platform(ua: &str, explicit: Option<&str>) -> &'static str {
    if let Some(p) = explicit {
        return match p {
            "ios" => "ios",
            "android" => "android",
            "desktop" => "desktop",
            "web" => "web",
            _ => "unknown",
        };
    }

    if ua.is_empty() || ua == "unknown" {
        "native"
    } else if ua.contains("iPhone") || ua.contains("iPad") {
        "ios"
    } else if ua.contains("Android") {
        "android"
    } else if ua.contains("Mozilla") {
        "web"
    } else {
        "native"
    }
}

/// Span name with path segments that look like ids collapsed to `{id}`,
/// so one route maps to one span name.
fn route_name(method: &str, path: &str) -> String {
    let route = path
        .split('/')
        .map(|segment| {
            let numeric = !segment.is_empty() && segment.chars().all(|c| c.is_ascii_digit());
            let uuid_like = segment.len() == 36 && segment.matches('-').count() == 4;
            if numeric || uuid_like {
                "{id}"
            } else {
                segment
            }
        })
        .collect::<Vec<_>>()
        .join("/");
    format!("{method} {route}")
}

/// Opens one OpenTelemetry server span per HTTP request.
///
/// Records method, path, user agent, client platform, request id, the
/// signed-in user (if any) and the response status.
#[derive(Clone)]
pub struct OtelTraceLayer;

impl<S> Layer<S> for OtelTraceLayer {
    type Service = OtelTraceService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        OtelTraceService { inner }
    }
}

#[derive(Clone)]
pub struct OtelTraceService<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for OtelTraceService<S>
where
    S: Service<Request<Body>, Response = Response> + Send + Clone + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut TaskContext<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let tracer = global::tracer(DEFAULT_SERVICE_NAME);
        let method = req.method().to_string();
        let path = req.uri().path().to_string();

        let header = |name: &str| {
            req.headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        let user_agent = header("user-agent").unwrap_or_else(|| "unknown".to_string());
        let explicit_platform = header("x-client-platform");
        let client_platform = detect_platform(&user_agent, explicit_platform.as_deref());
        let request_id = header("x-request-id").unwrap_or_default();

        let mut attributes = vec![
            KeyValue::new("http.method", method.clone()),
            KeyValue::new("http.target", path.clone()),
            KeyValue::new("http.user_agent", user_agent),
            KeyValue::new("client.platform", client_platform),
            KeyValue::new("http.request_id", request_id),
        ];
        match req.extensions().get::<Claims>() {
            Some(claims) => attributes.extend([
                KeyValue::new("user.id", claims.sub.to_string()),
                KeyValue::new("auth.status", "authenticated"),
            ]),
            None => attributes.push(KeyValue::new("auth.status", "anonymous")),
        }

        let span = tracer
            .span_builder(route_name(&method, &path))
            .with_kind(SpanKind::Server)
            .with_attributes(attributes)
            .start(&tracer);

        let cx = Context::current_with_span(span);
        let mut inner = self.inner.clone();

        let guard = cx.clone().attach();
        let future = inner.call(req);
        drop(guard);

        Box::pin(async move {
            let response = future.await?;

            let span = cx.span();
            let status = response.status();
            span.set_attribute(KeyValue::new("http.status_code", status.as_u16() as i64));

            if status.is_server_error() {
                span.set_status(opentelemetry::trace::Status::error(status.to_string()));
            } else if status.is_client_error() {
                span.set_attribute(KeyValue::new("error.type", "client_error"));
            }

            Ok(response)
        })
    }
}
