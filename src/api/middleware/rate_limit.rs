// src/api/middleware/rate_limit.rs - fixed-window limit per client address

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::Method,
    Error,
};
use futures::future::{ready, LocalBoxFuture, Ready};
use log::{debug, warn};
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::api::error::ApiError;

// Past this many tracked clients, expired windows are swept on insert
const SWEEP_THRESHOLD: usize = 1024;

#[derive(Debug, Clone, Copy)]
struct Window {
    started: Instant,
    count: u32,
}

#[derive(Debug)]
pub struct RateLimitState {
    max_requests: u32,
    window: Duration,
    clients: Mutex<HashMap<String, Window>>,
}

impl RateLimitState {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            clients: Mutex::new(HashMap::new()),
        }
    }

    /// Count one request for `client`. On rejection, returns the time left in the window.
    pub fn check(&self, client: &str, now: Instant) -> Result<(), Duration> {
        // A poisoned map only holds counters, keep using it
        let mut clients = self.clients.lock().unwrap_or_else(|e| e.into_inner());

        if clients.len() >= SWEEP_THRESHOLD && !clients.contains_key(client) {
            let window = self.window;
            clients.retain(|_, w| now.duration_since(w.started) < window);
        }

        let entry = clients.entry(client.to_string()).or_insert(Window { started: now, count: 0 });
        if now.duration_since(entry.started) >= self.window {
            *entry = Window { started: now, count: 0 };
        }

        if entry.count >= self.max_requests {
            return Err(self.window.saturating_sub(now.duration_since(entry.started)));
        }

        entry.count += 1;
        Ok(())
    }
}

// The RateLimiter struct that will be used to transform services
#[derive(Debug, Clone, Default)]
pub struct RateLimiter {
    state: Option<Arc<RateLimitState>>,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            state: Some(Arc::new(RateLimitState::new(max_requests, window))),
        }
    }

    /// A limiter that admits every request.
    pub fn disabled() -> Self {
        Self { state: None }
    }
}

/// Independent budgets for each rate-limited route. Clones share state, so
/// build this once and hand clones to every worker.
#[derive(Debug, Clone)]
pub struct RouteLimiters {
    pub generate_password: RateLimiter,
    pub generate_passphrase: RateLimiter,
    pub config: RateLimiter,
    pub strength: RateLimiter,
}

impl RouteLimiters {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            generate_password: RateLimiter::new(max_requests, window),
            generate_passphrase: RateLimiter::new(max_requests, window),
            config: RateLimiter::new(max_requests, window),
            strength: RateLimiter::new(max_requests, window),
        }
    }

    pub fn disabled() -> Self {
        Self {
            generate_password: RateLimiter::disabled(),
            generate_passphrase: RateLimiter::disabled(),
            config: RateLimiter::disabled(),
            strength: RateLimiter::disabled(),
        }
    }
}

/// The socket peer address. Forwarding headers are client-controlled and ignored.
fn client_key(req: &ServiceRequest) -> String {
    req.peer_addr()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

impl<S, B> Transform<S, ServiceRequest> for RateLimiter
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimiterMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimiterMiddleware {
            service: Rc::new(service),
            state: self.state.clone(),
        }))
    }
}

pub struct RateLimiterMiddleware<S> {
    service: Rc<S>,
    state: Option<Arc<RateLimitState>>,
}

impl<S, B> Service<ServiceRequest> for RateLimiterMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // CORS preflight is never counted
        let state = match &self.state {
            Some(state) if req.method() != Method::OPTIONS => state,
            _ => return self.forward(req),
        };

        let client = client_key(&req);

        match state.check(&client, Instant::now()) {
            Ok(()) => {
                debug!("Request admitted for {}", client);
                self.forward(req)
            }
            Err(wait) => {
                warn!("Rate limit exceeded: {}", client);
                let retry_after = wait.as_secs().max(1);
                let response = req
                    .error_response(ApiError::RateLimited { retry_after })
                    .map_into_right_body();
                Box::pin(async move { Ok::<_, Error>(response) })
            }
        }
    }
}

impl<S, B> RateLimiterMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    fn forward(&self, req: ServiceRequest) -> LocalBoxFuture<'static, Result<ServiceResponse<EitherBody<B>>, Error>> {
        let fut = self.service.call(req);
        Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
    }
}
