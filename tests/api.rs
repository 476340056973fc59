//! End-to-end tests for the agenda API over real HTTP.

use chrono::{DateTime, Utc};
use serde_json::{json, Value};

mod common;

async fn create(
    client: &reqwest::Client,
    base: &str,
    body: Value,
) -> (reqwest::StatusCode, Value) {
    let response = client
        .post(format!("{base}/contatos"))
        .json(&body)
        .send()
        .await
        .unwrap();
    let status = response.status();
    let body = response.json().await.unwrap();
    (status, body)
}

#[tokio::test]
async fn create_then_fetch_roundtrip() {
    let addr = common::spawn_server().await;
    let base = format!("http://{addr}");
    let client = reqwest::Client::new();

    let before = Utc::now();
    let (status, created) = create(
        &client,
        &base,
        json!({"nome": "Ana", "telefone": "123"}),
    )
    .await;
    let after = Utc::now();

    assert_eq!(status, 200);
    assert_eq!(created["nome"], "Ana");
    assert_eq!(created["telefone"], "123");
    assert!(created["email"].is_null());
    assert!(created["endereco"].is_null());

    let id = created["id"].as_str().unwrap();
    assert!(!id.is_empty());

    let created_at: DateTime<Utc> = created["created_at"]
        .as_str()
        .unwrap()
        .parse()
        .expect("created_at is a valid timestamp");
    assert!(created_at >= before && created_at <= after);

    // Listing returns exactly the created record.
    let listed: Value = client
        .get(format!("{base}/contatos"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0], created);

    // Direct lookup returns the same record.
    let fetched: Value = client
        .get(format!("{base}/contatos/{id}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn listing_preserves_creation_order() {
    let addr = common::spawn_server().await;
    let base = format!("http://{addr}");
    let client = reqwest::Client::new();

    let mut ids = Vec::new();
    for name in ["Ana", "Bia", "Caio"] {
        let (status, body) =
            create(&client, &base, json!({"nome": name, "telefone": "555"})).await;
        assert_eq!(status, 200);
        ids.push(body["id"].as_str().unwrap().to_string());
    }
    assert_eq!(ids.len(), 3);
    assert_ne!(ids[0], ids[1]);
    assert_ne!(ids[1], ids[2]);

    let listed: Value = client
        .get(format!("{base}/contatos"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let names: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["nome"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Ana", "Bia", "Caio"]);
}

#[tokio::test]
async fn unknown_id_is_404_with_fixed_message() {
    let addr = common::spawn_server().await;
    let base = format!("http://{addr}");
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{base}/contatos/does-not-exist"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["detail"], "Contato não encontrado");
}

#[tokio::test]
async fn invalid_payloads_are_422_and_store_stays_empty() {
    let addr = common::spawn_server().await;
    let base = format!("http://{addr}");
    let client = reqwest::Client::new();

    // Missing required field.
    let (status, body) = create(&client, &base, json!({"nome": "Ana"})).await;
    assert_eq!(status, 422);
    assert!(body["detail"].is_array());

    // Empty required field.
    let (status, body) =
        create(&client, &base, json!({"nome": "", "telefone": "123"})).await;
    assert_eq!(status, 422);
    assert_eq!(body["detail"][0]["loc"], json!(["body", "nome"]));

    // Wrong type.
    let (status, _) =
        create(&client, &base, json!({"nome": 42, "telefone": "123"})).await;
    assert_eq!(status, 422);

    let listed: Value = client
        .get(format!("{base}/contatos"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(listed.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn health_tracks_contact_count() {
    let addr = common::spawn_server().await;
    let base = format!("http://{addr}");
    let client = reqwest::Client::new();

    let health: Value = client
        .get(format!("{base}/health"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["service"], "agenda-api");
    assert_eq!(health["total_contatos"], 0);

    create(&client, &base, json!({"nome": "Ana", "telefone": "1"})).await;

    let health: Value = client
        .get(format!("{base}/health"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["total_contatos"], 1);
}

#[tokio::test]
async fn root_lists_endpoint_directory() {
    let addr = common::spawn_server().await;
    let client = reqwest::Client::new();

    let body: Value = client
        .get(format!("http://{addr}/"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["status"], "active");
    assert_eq!(body["endpoints"]["adicionar_contato"], "POST /contatos");
    assert_eq!(body["endpoints"]["health_check"], "GET /health");
}

#[tokio::test]
async fn system_metrics_snapshot_has_documented_shape() {
    let addr = common::spawn_server().await;
    let base = format!("http://{addr}");
    let client = reqwest::Client::new();

    create(&client, &base, json!({"nome": "Ana", "telefone": "1"})).await;

    let body: Value = client
        .get(format!("{base}/system-metrics"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert!(body["timestamp"].is_string());
    assert!(body["cpu"]["usage_percent"].is_number());
    assert!(body["cpu"]["count"].is_number());
    for key in ["total_gb", "available_gb", "used_gb", "usage_percent"] {
        assert!(body["memory"][key].is_number(), "missing memory.{key}");
    }
    for key in ["total_gb", "used_gb", "free_gb", "usage_percent"] {
        assert!(body["disk"][key].is_number(), "missing disk.{key}");
    }
    assert_eq!(body["contacts_count"], 1);
}

#[tokio::test]
async fn system_metrics_prometheus_is_line_oriented() {
    let addr = common::spawn_server().await;
    let base = format!("http://{addr}");
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{base}/system-metrics-prometheus"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let text = response.text().await.unwrap();

    assert!(text.ends_with('\n'));
    for line in text.trim_end().lines() {
        assert_eq!(line.split_whitespace().count(), 2, "bad line: {line}");
    }
    assert!(text.contains("system_cpu_usage_percent "));
    assert!(text.contains("agenda_contacts_total 0"));
}

#[tokio::test]
async fn metrics_scrape_exposes_request_counters() {
    let addr = common::spawn_server().await;
    let base = format!("http://{addr}");
    let client = reqwest::Client::new();

    // Generate at least one completed request before scraping.
    client
        .get(format!("{base}/health"))
        .send()
        .await
        .unwrap();

    let response = client
        .get(format!("{base}/metrics"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let text = response.text().await.unwrap();
    assert!(text.contains("agenda_requests_total"));
}
