//! # Blog Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the repository adapter
//! - Create the comment service
//! - Start the HTTP server

mod config;

use opentelemetry::global;
use opentelemetry_sdk::{propagation::TraceContextPropagator, trace as sdktrace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blog_hex::{CommentService, inbound::HttpServer};

/// OTLP export is only enabled when a collector endpoint is configured.
fn otlp_configured() -> bool {
    std::env::var_os("OTEL_EXPORTER_OTLP_ENDPOINT").is_some_and(|v| !v.is_empty())
}

fn init_tracer() -> anyhow::Result<(sdktrace::Tracer, sdktrace::SdkTracerProvider)> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    // Use gRPC exporter with batch processing (non-blocking)
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .build()?;

    let provider = sdktrace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .build();

    global::set_tracer_provider(provider.clone());

    use opentelemetry::trace::TracerProvider as _;
    Ok((provider.tracer("blog-service"), provider))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    let dotenv = dotenvy::dotenv();

    // Initialize OpenTelemetry tracing
    let (telemetry, otel_provider) = if otlp_configured() {
        let (tracer, provider) = init_tracer()?;
        (
            Some(tracing_opentelemetry::layer().with_tracer(tracer)),
            Some(provider),
        )
    } else {
        (None, None)
    };

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,blog_app=debug,blog_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(telemetry)
        .init();

    if let Err(e) = dotenv {
        tracing::warn!("No .env file loaded ({}), using process environment", e);
    }

    // Load configuration
    let config = config::Config::from_env().inspect_err(|e| {
        tracing::error!("Configuration unavailable: {}", e);
    })?;

    tracing::info!("Starting blog server on port {}", config.port);

    // Build repository (handles connection and migration)
    #[cfg(feature = "postgres")]
    let repo = blog_repo::Repo::from_config(&config.database).await?;
    #[cfg(all(feature = "sqlite", not(feature = "postgres")))]
    let repo = {
        tracing::info!("Using database: {}", config.database_url);
        blog_repo::build_repo(&config.database_url).await?
    };

    // Create the comment service
    let service = CommentService::new(repo);

    // Create and run the HTTP server
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    // Ensure traces are flushed before exit
    if let Some(provider) = otel_provider {
        if let Err(e) = provider.shutdown() {
            tracing::warn!("Failed to flush traces on shutdown: {}", e);
        }
    }
    Ok(())
}
