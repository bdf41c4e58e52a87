use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    Router,
    body::Bytes,
    extract::{FromRequestParts, Path, State},
    http::{HeaderValue, request::Parts},
    response::Json,
    routing::{get, post, put},
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain::advisory::Advisory;
use domain::alert::Alert;
use domain::campaign::{Campaign, NewCampaign};
use domain::metrics::Metrics;
use domain::policy::Caller;
use domain::store::{NewStore, Store};
use domain::ticket::Ticket;
use domain::weight::WeightSeries;
use domain::DomainError;
use tracing::warn;

use crate::error::ApiResult;
use crate::state::AppState;

pub const API_KEY_HEADER: &str = "x-api-key";

pub fn create_router(state: Arc<AppState>, allowed_origins: Option<Vec<String>>) -> Router {
    Router::new()
        .route("/api", get(root))
        .route("/api/", get(root))
        .route("/api/stores", get(list_stores).post(create_store))
        .route("/api/stores/{id}", get(get_store).put(update_store))
        .route("/api/stores/{id}/recompute-status", post(recompute_store_status))
        .route("/api/campaigns", get(list_campaigns).post(create_campaign))
        .route("/api/campaigns/{id}", put(update_campaign))
        .route("/api/alerts", get(list_alerts))
        .route("/api/alerts/{id}/resolve", put(resolve_alert))
        .route("/api/metrics", get(get_metrics))
        .route("/api/weight-data", get(get_weight_data))
        .route("/api/ai-predictions", get(get_ai_predictions))
        .route("/api/tickets", get(list_tickets).post(create_ticket))
        .route("/api/fix-naming", post(fix_naming))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(allowed_origins: Option<Vec<String>>) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    match allowed_origins {
        None => cors.allow_origin(Any),
        Some(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| match HeaderValue::from_str(origin) {
                    Ok(value) => Some(value),
                    Err(_) => {
                        warn!(origin = %origin, "Ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();
            cors.allow_origin(origins)
        }
    }
}

/// Credentials taken from the `x-api-key` header
pub struct ApiCaller(pub Caller);

impl<S: Send + Sync> FromRequestParts<S> for ApiCaller {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let caller = parts
            .headers
            .get(API_KEY_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(Caller::with_api_key)
            .unwrap_or_else(Caller::anonymous);
        Ok(Self(caller))
    }
}

/// Parses a JSON body so malformed input maps to 400 rather than axum's 415/422.
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, DomainError> {
    serde_json::from_slice(body)
        .map_err(|e| DomainError::InvalidPayload(format!("Invalid JSON body: {}", e)))
}

fn parse_fields(body: &Bytes) -> Result<Map<String, Value>, DomainError> {
    match parse_body::<Value>(body)? {
        Value::Object(fields) => Ok(fields),
        _ => Err(DomainError::InvalidPayload(
            "Expected a JSON object".to_string(),
        )),
    }
}

fn success() -> Json<Value> {
    Json(json!({ "success": true }))
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "BM MANAGER API v1.0" }))
}

async fn list_stores(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Store>>> {
    Ok(Json(state.stores.list().await?))
}

async fn get_store(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Store>> {
    Ok(Json(state.stores.get(&id).await?))
}

async fn create_store(
    State(state): State<Arc<AppState>>,
    ApiCaller(caller): ApiCaller,
    body: Bytes,
) -> ApiResult<Json<Store>> {
    let draft: NewStore = parse_body(&body)?;
    Ok(Json(state.stores.create(&caller, draft).await?))
}

async fn update_store(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    ApiCaller(caller): ApiCaller,
    body: Bytes,
) -> ApiResult<Json<Value>> {
    let fields = parse_fields(&body)?;
    state.stores.update(&caller, &id, fields).await?;
    Ok(success())
}

async fn recompute_store_status(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    ApiCaller(caller): ApiCaller,
) -> ApiResult<Json<Store>> {
    Ok(Json(state.stores.recompute_status(&caller, &id).await?))
}

async fn list_campaigns(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Campaign>>> {
    Ok(Json(state.campaigns.list().await?))
}

async fn create_campaign(
    State(state): State<Arc<AppState>>,
    ApiCaller(caller): ApiCaller,
    body: Bytes,
) -> ApiResult<Json<Campaign>> {
    let draft: NewCampaign = parse_body(&body)?;
    Ok(Json(state.campaigns.create(&caller, draft).await?))
}

async fn update_campaign(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    ApiCaller(caller): ApiCaller,
    body: Bytes,
) -> ApiResult<Json<Value>> {
    let fields = parse_fields(&body)?;
    state.campaigns.update(&caller, &id, fields).await?;
    Ok(success())
}

async fn list_alerts(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Alert>>> {
    Ok(Json(state.alerts.list_unresolved().await?))
}

async fn resolve_alert(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    ApiCaller(caller): ApiCaller,
) -> ApiResult<Json<Value>> {
    state.alerts.resolve(&caller, &id).await?;
    Ok(success())
}

async fn get_metrics(State(state): State<Arc<AppState>>) -> ApiResult<Json<Metrics>> {
    Ok(Json(state.metrics.current().await?))
}

async fn get_weight_data(State(state): State<Arc<AppState>>) -> Json<Vec<WeightSeries>> {
    Json(state.weights.weekly())
}

async fn get_ai_predictions(State(state): State<Arc<AppState>>) -> Json<Vec<Advisory>> {
    Json(state.advisories.advisories().await)
}

async fn create_ticket(
    State(state): State<Arc<AppState>>,
    ApiCaller(caller): ApiCaller,
    body: Bytes,
) -> ApiResult<Json<Ticket>> {
    let payload: Value = serde_json::from_slice(&body)
        .map_err(|e| DomainError::InvalidPayload(format!("Error creating ticket: {}", e)))?;
    Ok(Json(state.tickets.open(&caller, payload).await?))
}

async fn list_tickets(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Ticket>>> {
    Ok(Json(state.tickets.list().await?))
}

async fn fix_naming(
    State(state): State<Arc<AppState>>,
    ApiCaller(caller): ApiCaller,
) -> ApiResult<Json<Value>> {
    let report = state.naming.run(&caller).await?;
    Ok(Json(json!({ "success": true, "message": report.message() })))
}
