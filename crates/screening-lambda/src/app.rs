use axum::http::HeaderValue;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::middleware;
use crate::routes;
use crate::state::AppState;

/// Build the service router with CORS and request logging applied.
pub fn build_router(state: AppState) -> eyre::Result<Router> {
    let allow_origin = if state.config.cors_origin == "*" {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::exact(HeaderValue::from_str(&state.config.cors_origin)?)
    };
    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/instruments", get(routes::instruments::list_instruments))
        .route(
            "/instruments/{id}",
            get(routes::instruments::get_instrument_detail),
        )
        .route("/instruments/{id}/items", get(routes::instruments::list_items))
        .route(
            "/instruments/{id}/items/{position}/options",
            get(routes::instruments::list_option_values),
        )
        .route("/instruments/{id}/score", post(routes::instruments::score))
        .route("/summary", post(routes::summary::summarize_results))
        .route("/sessions", post(routes::sessions::create_session))
        .route("/sessions/respond", post(routes::sessions::respond))
        .route("/sessions/evaluate", post(routes::sessions::evaluate_session))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state);

    Ok(router)
}
