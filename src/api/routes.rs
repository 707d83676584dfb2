// src/api/routes.rs
use actix_web::web;

use super::error::ApiError;
use super::handlers;
use super::middleware::RouteLimiters;

pub fn configure_routes(cfg: &mut web::ServiceConfig, limiters: RouteLimiters) {
    cfg.service(
        web::scope("/api")
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                log::warn!("Invalid input type: {}", err);
                ApiError::InvalidBody(err.to_string()).into()
            }))
            // GET: word list for client-side previews
            .service(
                web::resource("/config")
                    .wrap(limiters.config)
                    .route(web::get().to(handlers::system::get_config)),
            )

            // POST: strength meter
            .service(
                web::resource("/strength")
                    .wrap(limiters.strength)
                    .route(web::post().to(handlers::generator::analyze_strength)),
            )

            // Generators, each with its own budget
            .service(
                web::resource("/generate-password")
                    .wrap(limiters.generate_password)
                    .route(web::post().to(handlers::generator::generate_password)),
            )
            .service(
                web::resource("/generate-passphrase")
                    .wrap(limiters.generate_passphrase)
                    .route(web::post().to(handlers::generator::generate_passphrase)),
            ),
    );
}
