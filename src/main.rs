use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use loan_risk::config::Settings;
use loan_risk::core::RiskClassifier;
use loan_risk::routes::{self, AppState};
use loan_risk::services::{DefaultModel, LogisticModel};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting loan risk service...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Load the model once; it stays read-only for the process lifetime
    let model = match LogisticModel::load(&settings.model.path) {
        Ok(model) => model,
        Err(e) => {
            error!("Failed to load model from {}: {}", settings.model.path, e);
            return Err(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()));
        }
    };

    let info_snapshot = model.info();
    info!(
        "Model {} v{} loaded (threshold: {})",
        info_snapshot.name, info_snapshot.version, info_snapshot.threshold
    );

    let classifier = Arc::new(RiskClassifier::new(
        Arc::new(model),
        settings.model.employment_types.clone(),
    ));

    info!("Classifier initialized with employment types: {:?}", classifier.employment_types());

    // Build application state
    let app_state = AppState {
        classifier,
        language: settings.report.language,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
