// src/api/mod.rs
use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::Config;
use middleware::RouteLimiters;

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Generator endpoints
        crate::api::handlers::generator::generate_password,
        crate::api::handlers::generator::generate_passphrase,
        crate::api::handlers::generator::analyze_strength,

        // System endpoints
        crate::api::handlers::system::get_config
    ),
    components(
        schemas(
            crate::api::types::PasswordGenerationRequest,
            crate::api::types::PasswordGenerationResponse,
            crate::api::types::PassphraseGenerationRequest,
            crate::api::types::PassphraseGenerationResponse,
            crate::api::types::StrengthRequest,
            crate::api::types::StrengthResponse,
            crate::api::types::ConfigResponse,
            crate::api::types::ErrorResponse,
            crate::models::StrengthLabel
        )
    ),
    tags(
        (name = "Generator", description = "Password and passphrase generation endpoints"),
        (name = "System", description = "Client configuration")
    ),
    info(
        title = "Passforge API",
        version = "0.1.0",
        description = "Random password and passphrase generator",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

pub async fn start_server(config: &Config) -> std::io::Result<()> {
    log::info!("Starting Passforge API on http://{}:{}", config.web_address, config.web_port);
    log::info!("Security: using the operating system CSPRNG for every draw");

    let limiters = if config.rate_limit_enabled {
        log::info!(
            "Rate limiting: {} requests per {}s per client address on each route",
            config.rate_limit_requests,
            config.rate_limit_window.as_secs()
        );
        RouteLimiters::new(config.rate_limit_requests, config.rate_limit_window)
    } else {
        log::info!("Rate limiting disabled");
        RouteLimiters::disabled()
    };

    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type", "Accept"])
            .max_age(3600);

        let limiters = limiters.clone();

        App::new()
            .wrap(cors)
            .wrap(Logger::new("%a \"%r\" %s %Dms"))
            // Add Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone())
            )
            // Add Redoc
            .service(Redoc::with_url("/redoc", openapi.clone()))
            .configure(|cfg| routes::configure_routes(cfg, limiters))
            .default_service(web::to(handlers::system::not_found))
    })
    .bind((config.web_address.as_str(), config.web_port))?
    .run()
    .await
}

pub mod error;
pub mod types;
pub mod routes;
pub mod handlers;
pub mod middleware;
