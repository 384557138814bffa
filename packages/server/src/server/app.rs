//! Application setup and server configuration.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware,
    routing::get,
    Router,
};
use sqlx::PgPool;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::domains::auth::JwtService;
use crate::domains::events;
use crate::server::middleware::{jwt_auth_middleware, require_organizer};
use crate::server::routes::health_handler;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub jwt_service: Arc<JwtService>,
    /// Minimum elapsed time before a form submission response is produced.
    pub form_min_delay: Duration,
}

/// Build the Axum application router
///
/// The admin surface is guarded by the organizer requirement and (in
/// production) rate limited; the health route stays public.
pub fn build_app(
    pool: PgPool,
    jwt_secret: String,
    jwt_issuer: String,
    allowed_origins: Vec<String>,
    form_min_delay_ms: u64,
    rate_limit_enabled: bool,
) -> Router {
    let jwt_service = Arc::new(JwtService::new(&jwt_secret, jwt_issuer));

    let state = AppState {
        db_pool: pool,
        jwt_service: jwt_service.clone(),
        form_min_delay: Duration::from_millis(form_min_delay_ms),
    };

    // Admin surface: authenticated organizers only
    let mut admin = events::routes::router().route_layer(middleware::from_fn(require_organizer));

    if rate_limit_enabled {
        let rate_limit_config = Arc::new(
            GovernorConfigBuilder::default()
                .per_second(10) // Base rate: 10 requests per second
                .burst_size(20) // Allow bursts up to 20
                .use_headers() // Extract IP from X-Forwarded-For header
                .finish()
                .expect("Rate limiter configuration is valid and should never fail"),
        );

        admin = admin.layer(GovernorLayer {
            config: rate_limit_config,
        });
    }

    let auth_layer = middleware::from_fn(
        move |request: axum::extract::Request, next: middleware::Next| {
            let jwt_service = jwt_service.clone();
            async move { jwt_auth_middleware(jwt_service, request, next).await }
        },
    );

    Router::new()
        .route("/health", get(health_handler))
        .merge(admin)
        .layer(auth_layer)
        .layer(Extension(state))
        .layer(build_cors(allowed_origins))
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(TraceLayer::new_for_http())
}

/// CORS for the admin UI origins.
fn build_cors(allowed_origins: Vec<String>) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
}
