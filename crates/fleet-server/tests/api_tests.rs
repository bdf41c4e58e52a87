use std::sync::Arc;

use application::AdvisorySettings;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use chrono::{Duration, Utc};
use domain::DomainError;
use domain::advisory::{ADVISORY_COUNT, MockTextGenerator};
use domain::alert::{Alert, AlertRepository, AlertType};
use domain::device::{Device, DeviceDraft, DeviceStatus, DeviceType, LabelStatus};
use domain::policy::{AllowAllPolicy, WritePolicy};
use domain::priority::Priority;
use domain::seeder::NoopSeeder;
use domain::store::{NewStore, Store, StoreRepository};
use fleet_server::create_router;
use fleet_server::state::AppState;
use infrastructure::{ApiKeyPolicy, Repositories};
use serde_json::{Value, json};
use tower::ServiceExt;

fn failing_generator() -> MockTextGenerator {
    let mut generator = MockTextGenerator::new();
    generator
        .expect_generate()
        .returning(|_, _| Err(DomainError::Upstream("no key".into())));
    generator
}

fn app_with(repos: &Repositories, policy: Arc<dyn WritePolicy>) -> Router {
    let state = AppState::new(
        repos,
        policy,
        Arc::new(NoopSeeder),
        Arc::new(failing_generator()),
        AdvisorySettings::default(),
    );
    create_router(Arc::new(state), None)
}

fn app(repos: &Repositories) -> Router {
    app_with(repos, Arc::new(AllowAllPolicy))
}

fn scale(status: DeviceStatus) -> Device {
    Device::new(DeviceDraft {
        id: None,
        device_type: DeviceType::SelfService,
        status,
        firmware_version: "v2.3.1".into(),
        last_calibration: Utc::now() - Duration::days(10),
        installation_date: Utc::now() - Duration::days(400),
        avg_consumption: 1.1,
        label_status: LabelStatus::Good,
        printhead_life: 80,
    })
    .unwrap()
}

fn store(sap_code: &str, online: usize, total: usize) -> Store {
    let devices = (0..total)
        .map(|i| {
            scale(if i < online {
                DeviceStatus::Online
            } else {
                DeviceStatus::Offline
            })
        })
        .collect();
    Store::create(
        NewStore {
            name: format!("Local {sap_code}"),
            comuna: "Ñuñoa".into(),
            sap_code: sap_code.into(),
            address: "Av. Irarrázaval 2500, Ñuñoa".into(),
            latitude: -33.4569,
            longitude: -70.5975,
            network_status: Default::default(),
            latency: 25,
            sales_level: Default::default(),
            devices,
        },
        Utc::now(),
    )
    .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn with_body(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_root_message() {
    let repos = Repositories::in_memory();
    let (status, body) = send(app(&repos), get("/api/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "BM MANAGER API v1.0");
}

#[tokio::test]
async fn test_unknown_store_is_404_with_detail() {
    let repos = Repositories::in_memory();
    let (status, body) = send(app(&repos), get("/api/stores/missing")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Store not found");
}

#[tokio::test]
async fn test_stores_listed_and_updated() {
    let repos = Repositories::in_memory();
    let second = store("SAP-0002", 3, 3);
    let first = store("SAP-0001", 3, 4);
    repos.stores.save(&second).await.unwrap();
    repos.stores.save(&first).await.unwrap();

    let (status, body) = send(app(&repos), get("/api/stores")).await;
    assert_eq!(status, StatusCode::OK);
    let listed = body.as_array().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["sap_code"], "SAP-0001");
    assert_eq!(listed[0]["status"], "partial");

    let uri = format!("/api/stores/{}", first.id);
    let (status, body) = send(app(&repos), with_body("PUT", &uri, r#"{"latency": 80}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));

    let (_, body) = send(app(&repos), get(&uri)).await;
    assert_eq!(body["latency"], 80);
}

#[tokio::test]
async fn test_update_with_malformed_json_is_400() {
    let repos = Repositories::in_memory();
    let existing = store("SAP-0001", 1, 1);
    repos.stores.save(&existing).await.unwrap();

    let uri = format!("/api/stores/{}", existing.id);
    let (status, body) = send(app(&repos), with_body("PUT", &uri, "{latency")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().starts_with("Invalid payload"));
}

#[tokio::test]
async fn test_metrics_roll_up_devices() {
    let repos = Repositories::in_memory();
    repos.stores.save(&store("SAP-0001", 3, 4)).await.unwrap();
    repos.stores.save(&store("SAP-0002", 3, 3)).await.unwrap();
    repos.stores.save(&store("SAP-0003", 0, 2)).await.unwrap();

    let (status, body) = send(app(&repos), get("/api/metrics")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["active_balances"], 6);
    assert_eq!(body["calibration_percentage"], 100.0);
    assert_eq!(body["stores_online"], 1);
    assert_eq!(body["stores_partial"], 1);
    assert_eq!(body["stores_offline"], 1);
}

#[tokio::test]
async fn test_alert_resolution() {
    let repos = Repositories::in_memory();
    let owner = store("SAP-0001", 1, 2);
    let alert = Alert::raise(
        &owner,
        AlertType::Calibration,
        "Calibración vencida",
        Priority::High,
        Utc::now(),
    );
    repos.alerts.insert_many(&[alert.clone()]).await.unwrap();

    let (_, body) = send(app(&repos), get("/api/alerts")).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["type"], "calibration");

    let uri = format!("/api/alerts/{}/resolve", alert.id);
    let (status, _) = send(app(&repos), with_body("PUT", &uri, "")).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(app(&repos), get("/api/alerts")).await;
    assert!(body.as_array().unwrap().is_empty());

    let (status, body) = send(
        app(&repos),
        with_body("PUT", "/api/alerts/unknown/resolve", ""),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Alert not found");
}

#[tokio::test]
async fn test_ticket_round_trip() {
    let repos = Repositories::in_memory();
    let payload = json!({
        "device_id": "dev-1",
        "store_name": "Local Ñuñoa",
        "store_comuna": "Ñuñoa",
        "store_address": "Av. Irarrázaval 2500",
        "sap_code": "SAP-0001",
        "issue": "Cabezal de impresión dañado",
        "description": "Imprime líneas en blanco",
        "reported_to": "Alcom"
    });

    let (status, created) = send(
        app(&repos),
        with_body("POST", "/api/tickets", &payload.to_string()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["status"], "Pending");
    assert!(!created["id"].as_str().unwrap().is_empty());

    let (_, listed) = send(app(&repos), get("/api/tickets")).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["id"], created["id"]);
}

#[tokio::test]
async fn test_ticket_missing_issue_is_400() {
    let repos = Repositories::in_memory();
    let payload = json!({ "store_name": "Local Ñuñoa", "reported_to": "Alcom" });

    let (status, body) = send(
        app(&repos),
        with_body("POST", "/api/tickets", &payload.to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("Error creating ticket"));

    let (_, listed) = send(app(&repos), get("/api/tickets")).await;
    assert!(listed.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_ai_predictions_fall_back_to_five() {
    let repos = Repositories::in_memory();
    repos.stores.save(&store("SAP-0001", 1, 2)).await.unwrap();

    let (status, body) = send(app(&repos), get("/api/ai-predictions")).await;

    assert_eq!(status, StatusCode::OK);
    let advisories = body.as_array().unwrap();
    assert_eq!(advisories.len(), ADVISORY_COUNT);
    assert!(
        advisories
            .iter()
            .all(|a| a["id"].as_str().unwrap().starts_with("fallback-"))
    );
}

#[tokio::test]
async fn test_weight_data_covers_seven_days() {
    let repos = Repositories::in_memory();
    let (status, body) = send(app(&repos), get("/api/weight-data")).await;

    assert_eq!(status, StatusCode::OK);
    let series = body.as_array().unwrap();
    assert_eq!(series.len(), 3);
    for entry in series {
        assert_eq!(entry["weights"].as_array().unwrap().len(), 7);
        assert_eq!(entry["dates"].as_array().unwrap().len(), 7);
    }
}

#[tokio::test]
async fn test_writes_require_api_key_when_configured() {
    let repos = Repositories::in_memory();
    let policy: Arc<dyn WritePolicy> = Arc::new(ApiKeyPolicy::new("s3cret"));
    let payload = json!({
        "store_name": "Local Ñuñoa",
        "issue": "Balanza descalibrada",
        "reported_to": "TechnicalService"
    })
    .to_string();

    let (status, body) = send(
        app_with(&repos, policy.clone()),
        with_body("POST", "/api/tickets", &payload),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["detail"], "Unauthorized: API key required for create_ticket");

    let mut request = with_body("POST", "/api/tickets", &payload);
    request
        .headers_mut()
        .insert("x-api-key", "s3cret".parse().unwrap());
    let (status, _) = send(app_with(&repos, policy.clone()), request).await;
    assert_eq!(status, StatusCode::OK);

    // Reads stay open
    let (status, _) = send(app_with(&repos, policy), get("/api/tickets")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_fix_naming_renames_branches() {
    let repos = Repositories::in_memory();
    let mut legacy = store("SAP-0001", 1, 1);
    legacy.name = "Sucursal Ñuñoa".into();
    repos.stores.save(&legacy).await.unwrap();

    let (status, body) = send(app(&repos), with_body("POST", "/api/fix-naming", "")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, body) = send(app(&repos), get(&format!("/api/stores/{}", legacy.id))).await;
    assert_eq!(body["name"], "Local Ñuñoa");
}
