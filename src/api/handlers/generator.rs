// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse};
use log::{error, info, warn};

use crate::api::error::ApiError;
use crate::api::handlers::parse_body;
use crate::api::types::{
    ErrorResponse, PassphraseGenerationRequest, PassphraseGenerationResponse,
    PasswordGenerationRequest, PasswordGenerationResponse, StrengthRequest, StrengthResponse,
};
use crate::generators::{self, strength, SecretGenerator, ValidationError};

fn rejected(e: ValidationError) -> ApiError {
    warn!("Validation error on {}: {}", e.field(), e);
    e.into()
}

fn failed(e: generators::Error) -> ApiError {
    match e {
        generators::Error::Validation(e) => rejected(e),
        generators::Error::Generation(e) => {
            error!("Generation error: {}", e);
            e.into()
        }
    }
}

/// Generate a random password
///
/// Every field is optional; missing fields take their documented defaults.
#[utoipa::path(
    post,
    path = "/api/generate-password",
    tag = "Generator",
    request_body = PasswordGenerationRequest,
    responses(
        (status = 200, description = "Generated password", body = PasswordGenerationResponse),
        (status = 400, description = "Invalid parameters", body = ErrorResponse),
        (status = 429, description = "Rate limit exceeded", body = ErrorResponse),
        (status = 500, description = "Generation failed", body = ErrorResponse)
    )
)]
pub async fn generate_password(body: web::Bytes) -> Result<HttpResponse, ApiError> {
    let payload: PasswordGenerationRequest = parse_body(&body).map_err(|e| {
        if let ApiError::InvalidBody(detail) = &e {
            warn!("Invalid input type: {}", detail);
        }
        e
    })?;
    let request = payload.into_request().map_err(rejected)?;
    let generated = SecretGenerator::new().generate_password(&request).map_err(failed)?;

    info!("Password generated successfully: length={}", request.length);
    Ok(HttpResponse::Ok().json(PasswordGenerationResponse { password: generated.secret }))
}

/// Generate a passphrase
///
/// Picks distinct words from the server word list, optionally followed by a number and a symbol.
#[utoipa::path(
    post,
    path = "/api/generate-passphrase",
    tag = "Generator",
    request_body = PassphraseGenerationRequest,
    responses(
        (status = 200, description = "Generated passphrase", body = PassphraseGenerationResponse),
        (status = 400, description = "Invalid parameters", body = ErrorResponse),
        (status = 429, description = "Rate limit exceeded", body = ErrorResponse),
        (status = 500, description = "Generation failed", body = ErrorResponse)
    )
)]
pub async fn generate_passphrase(body: web::Bytes) -> Result<HttpResponse, ApiError> {
    let payload: PassphraseGenerationRequest = parse_body(&body).map_err(|e| {
        if let ApiError::InvalidBody(detail) = &e {
            warn!("Invalid input type: {}", detail);
        }
        e
    })?;
    let request = payload.into_request().map_err(rejected)?;
    let generated = SecretGenerator::new().generate_passphrase(&request).map_err(failed)?;

    info!(
        "Passphrase generated successfully: word_count={}, capitalize={}",
        request.word_count, request.capitalize
    );
    Ok(HttpResponse::Ok().json(PassphraseGenerationResponse { passphrase: generated.secret }))
}

/// Score a password
///
/// Same additive scoring the CLI shows next to generated passwords.
#[utoipa::path(
    post,
    path = "/api/strength",
    tag = "Generator",
    request_body = StrengthRequest,
    responses(
        (status = 200, description = "Strength assessment", body = StrengthResponse),
        (status = 400, description = "Invalid body", body = ErrorResponse),
        (status = 429, description = "Rate limit exceeded", body = ErrorResponse)
    )
)]
pub async fn analyze_strength(body: web::Json<StrengthRequest>) -> HttpResponse {
    let assessment = SecretGenerator::new().analyze_strength(&body.password);

    HttpResponse::Ok().json(StrengthResponse {
        score: assessment.score,
        max_score: strength::MAX_SCORE,
        label: assessment.label,
    })
}

#[cfg(test)]
mod tests {
    use crate::api::handlers::system;
    use crate::api::middleware::RouteLimiters;
    use crate::api::routes::configure_routes;
    use crate::generators::pool::AMBIGUOUS;
    use crate::generators::wordlist;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use serde_json::{json, Value};
    use std::net::SocketAddr;
    use std::time::Duration;

    fn limiter() -> RouteLimiters {
        RouteLimiters::disabled()
    }

    #[actix_web::test]
    async fn password_defaults_to_twelve_chars() {
        let app = test::init_service(App::new().configure(|cfg| configure_routes(cfg, limiter()))).await;
        let req = test::TestRequest::post().uri("/api/generate-password").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["password"].as_str().unwrap().chars().count(), 12);
    }

    #[actix_web::test]
    async fn password_honours_flags() {
        let app = test::init_service(App::new().configure(|cfg| configure_routes(cfg, limiter()))).await;
        let req = test::TestRequest::post()
            .uri("/api/generate-password")
            .set_json(json!({
                "length": 64,
                "useUppercase": false,
                "useSymbols": false,
                "excludeAmbiguous": true
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let password = body["password"].as_str().unwrap();
        assert_eq!(password.len(), 64);
        assert!(password.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        assert!(!password.chars().any(|c| AMBIGUOUS.contains(&c)));
    }

    #[actix_web::test]
    async fn password_validation_errors_are_400() {
        let app = test::init_service(App::new().configure(|cfg| configure_routes(cfg, limiter()))).await;

        for body in [
            json!({"length": 3}),
            json!({"length": 129}),
            json!({"useUppercase": false, "useLowercase": false, "useNumbers": false, "useSymbols": false}),
            json!({"length": "twelve"}),
        ] {
            let req = test::TestRequest::post().uri("/api/generate-password").set_json(&body).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{body}");
            let error: Value = test::read_body_json(resp).await;
            assert!(error["error"].is_string());
        }
    }

    #[actix_web::test]
    async fn passphrase_defaults() {
        let app = test::init_service(App::new().configure(|cfg| configure_routes(cfg, limiter()))).await;
        let req = test::TestRequest::post()
            .uri("/api/generate-passphrase")
            .set_json(json!({}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let passphrase = body["passphrase"].as_str().unwrap();

        let words: Vec<&str> = passphrase.split('-').collect();
        assert_eq!(words.len(), 4);
        let first = words[0];
        assert!(first.chars().next().unwrap().is_ascii_uppercase());
        assert!(wordlist::contains(&first.to_lowercase()));
        assert!("!@#$%".contains(passphrase.chars().last().unwrap()));
    }

    #[actix_web::test]
    async fn passphrase_validation_errors_are_400() {
        let app = test::init_service(App::new().configure(|cfg| configure_routes(cfg, limiter()))).await;

        for (body, message) in [
            (json!({"wordCount": 1}), "Word count must be between 2 and 20"),
            (json!({"wordCount": 21}), "Word count must be between 2 and 20"),
            (json!({"separator": "-----------"}), "Separator must be 10 characters or less"),
            (json!({"capitalize": "camel"}), "Capitalize must be one of: title, lower, upper"),
        ] {
            let req = test::TestRequest::post().uri("/api/generate-passphrase").set_json(&body).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{body}");
            let error: Value = test::read_body_json(resp).await;
            assert_eq!(error["error"], message);
        }
    }

    #[actix_web::test]
    async fn config_returns_word_list() {
        let app = test::init_service(App::new().configure(|cfg| configure_routes(cfg, limiter()))).await;
        let req = test::TestRequest::get().uri("/api/config").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let words = body["wordList"].as_array().unwrap();
        assert_eq!(words.len(), wordlist::word_list().len());
        assert_eq!(words[0], wordlist::word_list()[0]);
    }

    #[actix_web::test]
    async fn strength_endpoint() {
        let app = test::init_service(App::new().configure(|cfg| configure_routes(cfg, limiter()))).await;
        let req = test::TestRequest::post()
            .uri("/api/strength")
            .set_json(json!({"password": "Aa1!Aa1!Aa1!Aa1!"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({"score": 8, "maxScore": 8, "label": "Very Strong"}));

        let req = test::TestRequest::post()
            .uri("/api/strength")
            .set_json(json!({"password": 12}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid parameter type");
    }

    #[actix_web::test]
    async fn each_route_has_its_own_budget() {
        let limiters = RouteLimiters::new(2, Duration::from_secs(60));
        let app = test::init_service(
            App::new()
                .configure(|cfg| configure_routes(cfg, limiters))
                .default_service(web::to(system::not_found)),
        )
        .await;

        for _ in 0..2 {
            let req = test::TestRequest::post().uri("/api/generate-password").to_request();
            assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
        }

        let req = test::TestRequest::post().uri("/api/generate-password").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
        assert!(resp.headers().contains_key("retry-after"));
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Rate limit exceeded. Please wait before making more requests.");
        assert!(body["retry_after"].as_u64().unwrap() >= 1);

        // Exhausting one generator leaves the other untouched
        for _ in 0..2 {
            let req = test::TestRequest::post().uri("/api/generate-passphrase").to_request();
            assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
        }
        let req = test::TestRequest::post().uri("/api/generate-passphrase").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::TOO_MANY_REQUESTS);

        // Other routes carry the default limit too
        for _ in 0..2 {
            let req = test::TestRequest::get().uri("/api/config").to_request();
            assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
        }
        let req = test::TestRequest::get().uri("/api/config").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::TOO_MANY_REQUESTS);

        for _ in 0..2 {
            let req = test::TestRequest::post()
                .uri("/api/strength")
                .set_json(json!({"password": "hunter2"}))
                .to_request();
            assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
        }
        let req = test::TestRequest::post()
            .uri("/api/strength")
            .set_json(json!({"password": "hunter2"}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[actix_web::test]
    async fn forwarded_headers_do_not_reset_the_budget() {
        let limiters = RouteLimiters::new(2, Duration::from_secs(60));
        let app = test::init_service(App::new().configure(|cfg| configure_routes(cfg, limiters))).await;
        let peer: SocketAddr = "198.51.100.20:51234".parse().unwrap();

        let mut statuses = Vec::new();
        for i in 0..10 {
            let req = test::TestRequest::post()
                .uri("/api/generate-password")
                .peer_addr(peer)
                .insert_header(("X-Forwarded-For", format!("10.0.0.{i}")))
                .insert_header(("Forwarded", format!("for=10.0.1.{i}")))
                .to_request();
            statuses.push(test::call_service(&app, req).await.status());
        }

        assert_eq!(statuses.iter().filter(|s| **s == StatusCode::OK).count(), 2);
        assert!(statuses[2..].iter().all(|s| *s == StatusCode::TOO_MANY_REQUESTS));

        // A different socket peer still has its own budget
        let req = test::TestRequest::post()
            .uri("/api/generate-password")
            .peer_addr("198.51.100.21:51234".parse().unwrap())
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn unknown_route_is_json_404() {
        let app = test::init_service(
            App::new()
                .configure(|cfg| configure_routes(cfg, limiter()))
                .default_service(web::to(system::not_found)),
        )
        .await;
        let req = test::TestRequest::get().uri("/api/nope").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Endpoint not found");
    }
}
