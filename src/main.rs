//! Hybex QA server - main entry point.
//!
//! Starts the Actix-web server with configured routes and middleware.

use std::path::Path;

use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, http::header, web};
use tracing::{Level, error, info, warn};
use tracing_subscriber::FmtSubscriber;
use utoipa::OpenApi;

use hybex_qa_lib::api;
use hybex_qa_lib::auth::AdminKey;
use hybex_qa_lib::config::{ADMIN_KEY_HEADER, Config};
use hybex_qa_lib::db::DbPool;
use hybex_qa_lib::middleware::RequestLogger;

/// Perform health check (for Docker healthcheck).
async fn health_check() -> bool {
    Config::from_env().is_ok()
}

/// Best-effort creation of the directory holding a file-backed SQLite
/// database, so a fresh checkout starts without manual setup.
async fn ensure_database_dir(database_url: &str) {
    let Some(path) = database_url
        .strip_prefix("sqlite://")
        .map(|rest| rest.split('?').next().unwrap_or(rest))
    else {
        return;
    };
    if path.starts_with(':') {
        // sqlite://:memory: has no backing file
        return;
    }
    if let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
        && let Err(e) = tokio::fs::create_dir_all(parent).await
    {
        warn!("Failed to create database directory {:?}: {}", parent, e);
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Check for --health-check flag (used by Docker HEALTHCHECK)
    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|arg| arg == "--health-check") {
        dotenvy::dotenv().ok();
        if health_check().await {
            std::process::exit(0);
        } else {
            std::process::exit(1);
        }
    }

    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            error!("");
            error!("Please check your environment variables:");
            error!("  - RUST_ENV must be set to 'development' or 'production'");
            error!("  - In production, DATABASE_URL must be set");
            error!("  - In production, values must not match development defaults");
            std::process::exit(1);
        }
    };

    info!("========================================");
    info!("  Hybex QA Server");
    info!("  Environment: {}", config.environment);
    info!("========================================");

    if config.is_development() {
        warn!("Running in DEVELOPMENT mode - do not use in production!");
        info!("Using development defaults for DATABASE_URL and HYBEX_ADMIN_KEY");
    }
    if config.admin_key.is_none() {
        warn!("No admin key configured - administrative endpoints will reject all requests");
    }

    ensure_database_dir(&config.database_url).await;

    // Connect and migrate
    let pool = DbPool::connect(&config.database_url)
        .await
        .expect("Failed to open database");
    info!("Database connection established");

    pool.run_migrations()
        .await
        .expect("Failed to run migrations");
    info!("Database migrations complete");

    // Prepare shared state
    let bind_address = config.bind_address();
    let admin_key = AdminKey::new(config.admin_key.clone());
    let is_development = config.is_development();

    let worker_count = if is_development {
        info!(
            "Starting server at http://{} (4 workers - development mode)",
            bind_address
        );
        4
    } else {
        let cpus = num_cpus::get();
        info!(
            "Starting server at http://{} ({} workers)",
            bind_address, cpus
        );
        cpus
    };

    // Start HTTP server
    HttpServer::new(move || {
        let cors = if is_development {
            // Permissive CORS for the SPA dev server
            Cors::default()
                .allowed_origin("http://localhost:3000")
                .allowed_origin("http://127.0.0.1:3000")
                .allowed_origin("http://localhost:5173")
                .allowed_origin("http://127.0.0.1:5173")
                .allowed_methods(vec!["GET", "POST", "PATCH", "DELETE", "OPTIONS"])
                .allowed_headers(vec![
                    header::AUTHORIZATION,
                    header::ACCEPT,
                    header::CONTENT_TYPE,
                    ADMIN_KEY_HEADER.parse().unwrap(),
                ])
                .max_age(3600)
        } else {
            // Same-origin only in production
            Cors::default()
                .allowed_methods(vec!["GET", "POST", "PATCH", "DELETE", "OPTIONS"])
                .allowed_headers(vec![
                    header::AUTHORIZATION,
                    header::ACCEPT,
                    header::CONTENT_TYPE,
                    ADMIN_KEY_HEADER.parse().unwrap(),
                ])
                .max_age(3600)
        };

        App::new()
            .wrap(cors)
            .wrap(RequestLogger)
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(admin_key.clone()))
            .service(
                web::scope("/api/v1")
                    .configure(api::configure_health_routes)
                    .configure(api::configure_auth_routes)
                    .configure(api::configure_test_case_routes)
                    .configure(api::configure_execution_routes)
                    .configure(api::configure_test_plan_routes)
                    .configure(api::configure_project_routes)
                    .configure(api::configure_stats_routes)
                    .configure(api::configure_access_request_routes)
                    .configure(api::configure_admin_routes),
            )
            .route(
                "/api/v1/openapi.json",
                web::get().to(|| async { HttpResponse::Ok().json(api::ApiDoc::openapi()) }),
            )
    })
    .workers(worker_count)
    .bind(&bind_address)?
    .run()
    .await
}
