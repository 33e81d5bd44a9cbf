//! End-to-end HTTP tests: an in-process server over a fresh in-memory store,
//! driven with reqwest.

use serde_json::{json, Value as JsonValue};
use stadium_service::transport::http::{create_app, AppState};
use stadium_service::{CreateStadiumRequest, SqliteStadiumStore, Stadium, StadiumStore, StoreError};
use std::sync::Arc;

type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Binds an ephemeral port and returns the base url.
async fn spawn_app() -> Result<String, Box<dyn std::error::Error>> {
    let store = SqliteStadiumStore::in_memory().await?;
    serve(Arc::new(store)).await
}

async fn serve(store: Arc<dyn StadiumStore>) -> Result<String, Box<dyn std::error::Error>> {
    let router = create_app(AppState::new(store));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Ok(format!("http://127.0.0.1:{}", port))
}

fn fenway() -> JsonValue {
    json!({
        "name": "Fenway Park",
        "sport": "Baseball",
        "city": "Boston",
        "state": "Massachusetts",
        "capacity": 37755
    })
}

async fn create(
    client: &reqwest::Client,
    base_url: &str,
    payload: &JsonValue,
) -> Result<reqwest::Response, reqwest::Error> {
    client
        .post(format!("{}/stadiums", base_url))
        .json(payload)
        .send()
        .await
}

#[tokio::test]
async fn test_stadium_workflow() -> TestResult {
    let base_url = spawn_app().await?;
    let client = reqwest::Client::new();

    let payload = json!({
        "name": "TD Garden",
        "sport": "Basketball",
        "city": "Boston",
        "state": "Massachusetts",
        "capacity": 19580
    });
    let resp = create(&client, &base_url, &payload).await?;
    assert_eq!(resp.status(), 200);
    let created: JsonValue = resp.json().await?;
    let id = created["id"].as_i64().expect("id assigned");

    let fetched: JsonValue = client
        .get(format!("{}/stadiums/{}", base_url, id))
        .send()
        .await?
        .json()
        .await?;
    let mut expected = payload.clone();
    expected["id"] = json!(id);
    assert_eq!(fetched, expected);

    let resp = client
        .delete(format!("{}/stadiums/{}", base_url, id))
        .send()
        .await?;
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.json::<JsonValue>().await?, json!({ "success": true }));

    let resp = client
        .get(format!("{}/stadiums/{}", base_url, id))
        .send()
        .await?;
    assert_eq!(resp.status(), 404);
    Ok(())
}

#[tokio::test]
async fn test_list_stadiums() -> TestResult {
    let base_url = spawn_app().await?;
    let client = reqwest::Client::new();

    for (name, capacity) in [
        ("Fenway Park", 37755),
        ("Yankee Stadium", 54251),
        ("Gillette Stadium", 65878),
    ] {
        let mut payload = fenway();
        payload["name"] = json!(name);
        payload["capacity"] = json!(capacity);
        assert_eq!(create(&client, &base_url, &payload).await?.status(), 200);
    }

    let resp = client.get(format!("{}/stadiums", base_url)).send().await?;
    assert_eq!(resp.status(), 200);
    let list: Vec<JsonValue> = resp.json().await?;
    assert_eq!(list.len(), 3);
    for field in ["id", "name", "sport", "city", "state", "capacity"] {
        assert!(list[0].get(field).is_some(), "missing {}", field);
    }
    assert_eq!(list[1]["name"], "Yankee Stadium");
    Ok(())
}

#[tokio::test]
async fn test_create_normalizes_payload() -> TestResult {
    let base_url = spawn_app().await?;
    let client = reqwest::Client::new();

    let mut payload = fenway();
    payload["name"] = json!("  Fenway  ");
    payload.as_object_mut().unwrap().remove("capacity");
    payload["extra_field"] = json!("should be ignored");
    let resp = create(&client, &base_url, &payload).await?;
    assert_eq!(resp.status(), 200);
    let created: JsonValue = resp.json().await?;
    assert_eq!(created["name"], "Fenway");
    assert_eq!(created["capacity"], 0);
    assert!(created.get("extra_field").is_none());

    let mut payload = fenway();
    payload["name"] = json!("Null Capacity");
    payload["capacity"] = JsonValue::Null;
    let created: JsonValue = create(&client, &base_url, &payload).await?.json().await?;
    assert_eq!(created["capacity"], 0);
    Ok(())
}

#[tokio::test]
async fn test_create_invalid_data_is_422() -> TestResult {
    let base_url = spawn_app().await?;
    let client = reqwest::Client::new();

    let mut payload = fenway();
    payload["name"] = json!("");
    payload["capacity"] = json!(-1000);
    let resp = create(&client, &base_url, &payload).await?;
    assert_eq!(resp.status(), 422);

    let body: JsonValue = resp.json().await?;
    assert_eq!(body["success"], false);
    let fields: Vec<&str> = body["data"]["errors"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|e| e["field"].as_str())
        .collect();
    assert_eq!(fields, vec!["name", "capacity"]);
    Ok(())
}

#[tokio::test]
async fn test_capacity_boundaries() -> TestResult {
    let base_url = spawn_app().await?;
    let client = reqwest::Client::new();

    for (i, (capacity, status)) in [(-1, 422), (0, 200), (200_000, 200), (200_001, 422)]
        .into_iter()
        .enumerate()
    {
        let mut payload = fenway();
        payload["name"] = json!(format!("Stadium {}", i));
        payload["capacity"] = json!(capacity);
        let resp = create(&client, &base_url, &payload).await?;
        assert_eq!(resp.status(), status, "capacity {}", capacity);
    }
    Ok(())
}

#[tokio::test]
async fn test_create_duplicate_name_is_400() -> TestResult {
    let base_url = spawn_app().await?;
    let client = reqwest::Client::new();

    assert_eq!(create(&client, &base_url, &fenway()).await?.status(), 200);

    let mut payload = fenway();
    payload["sport"] = json!("Basketball");
    let resp = create(&client, &base_url, &payload).await?;
    assert_eq!(resp.status(), 400);
    let body: JsonValue = resp.json().await?;
    assert_eq!(body["error"], "A stadium with this name already exists.");
    Ok(())
}

#[tokio::test]
async fn test_malformed_bodies_are_client_errors() -> TestResult {
    let base_url = spawn_app().await?;
    let client = reqwest::Client::new();
    let url = format!("{}/stadiums", base_url);

    let resp = client
        .post(&url)
        .header("content-type", "application/json")
        .body(r#"{"name": "Test Stadium", "sport": "Baseball""#)
        .send()
        .await?;
    assert_eq!(resp.status(), 400);
    let body: JsonValue = resp.json().await?;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid JSON body"));

    let resp = client
        .post(&url)
        .header("content-type", "application/json")
        .body("")
        .send()
        .await?;
    assert!([400, 422].contains(&resp.status().as_u16()));

    let resp = client
        .post(&url)
        .form(&[("name", "Test Stadium"), ("sport", "Baseball")])
        .send()
        .await?;
    assert!(resp.status().is_client_error());

    let resp = create(&client, &base_url, &json!(["not", "an", "object"])).await?;
    assert_eq!(resp.status(), 422);
    Ok(())
}

#[tokio::test]
async fn test_update_stadium() -> TestResult {
    let base_url = spawn_app().await?;
    let client = reqwest::Client::new();

    let created: JsonValue = create(&client, &base_url, &fenway()).await?.json().await?;
    let id = created["id"].as_i64().unwrap();

    let mut payload = fenway();
    payload["capacity"] = json!(37800);
    let resp = client
        .put(format!("{}/stadiums/{}", base_url, id))
        .json(&payload)
        .send()
        .await?;
    assert_eq!(resp.status(), 200);
    let updated: JsonValue = resp.json().await?;
    assert_eq!(updated["id"], id);
    assert_eq!(updated["capacity"], 37800);

    let fetched: JsonValue = client
        .get(format!("{}/stadiums/{}", base_url, id))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(fetched, updated);

    payload["capacity"] = json!(200_001);
    let resp = client
        .put(format!("{}/stadiums/{}", base_url, id))
        .json(&payload)
        .send()
        .await?;
    assert_eq!(resp.status(), 422);
    Ok(())
}

#[tokio::test]
async fn test_update_onto_existing_name_is_400() -> TestResult {
    let base_url = spawn_app().await?;
    let client = reqwest::Client::new();

    assert_eq!(create(&client, &base_url, &fenway()).await?.status(), 200);
    let mut other = fenway();
    other["name"] = json!("TD Garden");
    let created: JsonValue = create(&client, &base_url, &other).await?.json().await?;

    let resp = client
        .put(format!("{}/stadiums/{}", base_url, created["id"]))
        .json(&fenway())
        .send()
        .await?;
    assert_eq!(resp.status(), 400);
    Ok(())
}

#[tokio::test]
async fn test_missing_ids_are_404() -> TestResult {
    let base_url = spawn_app().await?;
    let client = reqwest::Client::new();
    let url = format!("{}/stadiums/999", base_url);

    let resp = client.get(&url).send().await?;
    assert_eq!(resp.status(), 404);
    let body: JsonValue = resp.json().await?;
    assert_eq!(body["error"], "Stadium 999 not found");

    // Not found wins regardless of payload validity.
    let resp = client.put(&url).json(&fenway()).send().await?;
    assert_eq!(resp.status(), 404);
    let resp = client.put(&url).json(&json!({ "name": "" })).send().await?;
    assert_eq!(resp.status(), 404);

    let resp = client.delete(&url).send().await?;
    assert_eq!(resp.status(), 404);

    let resp = client
        .get(format!("{}/stadiums/not-a-number", base_url))
        .send()
        .await?;
    assert_eq!(resp.status(), 400);
    Ok(())
}

#[tokio::test]
async fn test_health_endpoints() -> TestResult {
    let base_url = spawn_app().await?;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{}/healthcheck", base_url)).send().await?;
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.json::<JsonValue>().await?, json!({ "status": "ok" }));

    let resp = client.get(format!("{}/readiness", base_url)).send().await?;
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.json::<JsonValue>().await?["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn test_openapi_document_is_served() -> TestResult {
    let base_url = spawn_app().await?;
    let doc: JsonValue = reqwest::get(format!("{}/api-docs/openapi.json", base_url))
        .await?
        .json()
        .await?;
    assert!(doc["paths"].get("/stadiums").is_some());
    assert!(doc["paths"].get("/stadiums/{id}").is_some());
    assert!(doc["paths"].get("/healthcheck").is_some());
    Ok(())
}

/// A store whose database is gone: every call fails with a pool error.
struct UnreachableStore;

#[async_trait::async_trait]
impl StadiumStore for UnreachableStore {
    async fn list(&self) -> Result<Vec<Stadium>, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }

    async fn create(&self, _req: &CreateStadiumRequest) -> Result<Stadium, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }

    async fn get(&self, _id: i64) -> Result<Stadium, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }

    async fn update(&self, _id: i64, _req: &CreateStadiumRequest) -> Result<Stadium, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }

    async fn delete(&self, _id: i64) -> Result<(), StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }
}

#[tokio::test]
async fn test_store_failures_are_opaque() -> TestResult {
    let base_url = serve(Arc::new(UnreachableStore)).await?;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{}/stadiums", base_url)).send().await?;
    assert_eq!(resp.status(), 500);
    assert_eq!(
        resp.json::<JsonValue>().await?,
        json!({ "success": false, "error": "Internal server error" })
    );

    let resp = create(&client, &base_url, &fenway()).await?;
    assert_eq!(resp.status(), 500);
    assert_eq!(resp.json::<JsonValue>().await?["error"], "Internal server error");

    let resp = client.get(format!("{}/readiness", base_url)).send().await?;
    assert_eq!(resp.status(), 503);
    assert_eq!(resp.json::<JsonValue>().await?, json!({ "status": "unavailable" }));

    // Liveness does not depend on the store.
    let resp = client.get(format!("{}/healthcheck", base_url)).send().await?;
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.json::<JsonValue>().await?, json!({ "status": "ok" }));
    Ok(())
}
