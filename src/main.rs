use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use sales_report::config::Config;
use sales_report::modules::{health, reports};
use sales_report::sales::ReportApiClient;
use sales_report::ReportPipeline;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    config.validate().expect("Configuration validation failed");

    // Initialize tracing (JSON lines in production)
    let json_logs = config.app.is_production();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.default_log_filter().into()),
        )
        .with(json_logs.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json_logs).then(tracing_subscriber::fmt::layer))
        .init();

    tracing::info!("Starting sales report service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let client = ReportApiClient::from_config(&config.upstream)
        .expect("Failed to create sales API client");
    tracing::info!(
        base_url = %client.base_url(),
        concurrency = config.upstream.fetch_concurrency,
        "Sales API client initialized"
    );

    let pipeline = web::Data::new(
        ReportPipeline::new(Arc::new(client), config.upstream.retry_policy())
            .with_concurrency(config.upstream.fetch_concurrency),
    );

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(TracingLogger::default())
            .app_data(pipeline.clone())
            .configure(health::configure)
            .configure(reports::controllers::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}
