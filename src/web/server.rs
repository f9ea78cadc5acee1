use axum::{
    extract::{DefaultBodyLimit, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;

use crate::cli::ServeArgs;
use crate::detection::classifier::Classification;
use crate::parsing::request::parse_dna_request;
use crate::store::records::{HumanRecord, RecordStore};
use crate::utils::validation::{check_row_limit, validate_dna};

/// Security configuration constants to prevent `DoS` attacks
pub const MAX_BODY_SIZE: usize = 2 * 1024 * 1024; // 2MB, room for MAX_DNA_ROWS rows
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
pub const MAX_CONCURRENT_REQUESTS: usize = 100;
pub const RATE_LIMIT_BURST: u32 = 50;

/// Shared application state
pub struct AppState {
    pub store: Arc<RecordStore>,
}

impl AppState {
    #[must_use]
    pub fn new(store: RecordStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Error body returned for rejected requests
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_type: String,
    pub details: Option<String>,
}

/// Create a safe error response that prevents information disclosure
/// while logging detailed errors server-side for debugging
pub fn create_safe_error_response(
    error_type: &str,
    user_message: &str,
    internal_error: Option<&str>,
) -> ErrorResponse {
    // Log detailed error server-side for debugging (not exposed to client)
    if let Some(internal_msg) = internal_error {
        tracing::error!("Internal error ({}): {}", error_type, internal_msg);
    }

    ErrorResponse {
        error: user_message.to_string(),
        error_type: error_type.to_string(),
        details: None, // Never expose internal details to prevent information disclosure
    }
}

/// Run the web server
///
/// # Errors
///
/// Returns an error if the tokio runtime cannot be created, the record store
/// cannot be opened, or the server fails to start.
pub fn run(args: ServeArgs) -> anyhow::Result<()> {
    // Build tokio runtime
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(args).await })
}

/// Create the application router with all routes and middleware configured.
///
/// Per-IP rate limiting needs the peer address and is added by the server
/// itself, so routers built here can be driven directly in tests.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/mutant", post(mutant_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                // Security headers for browser protection
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-content-type-options"),
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-frame-options"),
                    HeaderValue::from_static("DENY"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("referrer-policy"),
                    HeaderValue::from_static("no-referrer"),
                ))
                // Request timeout to prevent slow client attacks
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    Duration::from_secs(REQUEST_TIMEOUT_SECS),
                ))
                // Limit concurrent requests to prevent DOS
                .layer(ConcurrencyLimitLayer::new(MAX_CONCURRENT_REQUESTS))
                .layer(DefaultBodyLimit::max(MAX_BODY_SIZE)),
        )
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    let store = match &args.store {
        Some(path) => RecordStore::open(path)?,
        None => RecordStore::in_memory(),
    };
    tracing::info!(
        "Loaded {} records ({})",
        store.len(),
        store
            .path()
            .map_or_else(|| "in memory".to_string(), |p| p.display().to_string())
    );

    // Configure IP-based rate limiting
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(1) // One request slot replenished per second per IP
        .burst_size(RATE_LIMIT_BURST)
        .finish()
        .ok_or_else(|| anyhow::anyhow!("Invalid rate limit configuration"))?;

    let app = create_router(Arc::new(AppState::new(store))).layer(GovernorLayer {
        config: Arc::new(governor_conf),
    });

    let addr = format!("{}:{}", args.address, args.port);
    println!("Starting mutant-finder web server at http://{addr}");

    if args.open {
        let _ = open::that(format!("http://{addr}/stats"));
    }

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Classify a submitted DNA sequence and record the result.
///
/// - mutant: `200 OK`
/// - not mutant: `403 Forbidden`
/// - invalid DNA: `403 Forbidden` with the validation message as body
async fn mutant_handler(State(state): State<Arc<AppState>>, body: String) -> Response {
    let rows = match parse_dna_request(&body) {
        Ok(rows) => rows,
        Err(e) => {
            tracing::debug!("Malformed DNA request: {e}");
            return (
                StatusCode::BAD_REQUEST,
                Json(create_safe_error_response(
                    "invalid_request",
                    &e.to_string(),
                    None,
                )),
            )
                .into_response();
        }
    };

    // Check size before touching any row
    if let Some(message) = rows.as_ref().and_then(|r| check_row_limit(r.len())) {
        return (
            StatusCode::PAYLOAD_TOO_LARGE,
            Json(create_safe_error_response("too_many_rows", &message, None)),
        )
            .into_response();
    }

    let dna = match validate_dna(rows.as_deref()) {
        Ok(dna) => dna,
        Err(e) => {
            tracing::debug!("Rejected DNA ({}): {e}", e.code());
            return (StatusCode::FORBIDDEN, e.to_string()).into_response();
        }
    };

    let classification = Classification::of(&dna);
    let record = HumanRecord::from(&classification);
    let store = Arc::clone(&state.store);

    // Saving may rewrite the store file
    let saved = tokio::task::spawn_blocking(move || store.save(record)).await;
    let failure = match saved {
        Ok(Ok(())) => None,
        Ok(Err(e)) => Some(e.to_string()),
        Err(e) => Some(e.to_string()),
    };
    if let Some(internal) = failure {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(create_safe_error_response(
                "store_failed",
                "Unable to record the classification",
                Some(&internal),
            )),
        )
            .into_response();
    }

    tracing::info!(
        "Classified {}x{} DNA {}: mutant={}",
        classification.size,
        classification.size,
        classification.id,
        classification.is_mutant
    );

    if classification.is_mutant {
        StatusCode::OK.into_response()
    } else {
        StatusCode::FORBIDDEN.into_response()
    }
}

/// Aggregate counts, or `204 No Content` while nothing has been recorded
async fn stats_handler(State(state): State<Arc<AppState>>) -> Response {
    // The store lock may be held across a file write
    let store = Arc::clone(&state.store);
    let stats = match tokio::task::spawn_blocking(move || store.stats()).await {
        Ok(stats) => stats,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(create_safe_error_response(
                    "stats_failed",
                    "Unable to read statistics",
                    Some(&e.to_string()),
                )),
            )
                .into_response();
        }
    };
    if stats.count_human_dna == 0 {
        return StatusCode::NO_CONTENT.into_response();
    }
    Json(stats).into_response()
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_error_response_hides_details() {
        let response = create_safe_error_response(
            "store_failed",
            "Unable to record the classification",
            Some("/var/lib/mutant/records.json: permission denied"),
        );
        assert_eq!(response.error, "Unable to record the classification");
        assert_eq!(response.error_type, "store_failed");
        assert!(response.details.is_none());
    }

    #[test]
    fn test_body_limit_fits_largest_request() {
        use crate::utils::validation::MAX_DNA_ROWS;
        // {"dna":[ "..." , ... ]}: each row is its bases plus quotes and a comma
        let largest = MAX_DNA_ROWS * (MAX_DNA_ROWS + 3) + 16;
        assert!(largest < MAX_BODY_SIZE);
    }
}
