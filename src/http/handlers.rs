//! Route handlers.
//!
//! Handlers are the observability boundary: trace spans for the create and
//! lookup operations open here, wrapping calls into the (tracing-free)
//! contact service. Span and attribute names mirror the agenda API's
//! original instrumentation.

use std::time::Duration;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::json;
use tracing::field::Empty;

use crate::contacts::types::{Contact, ContactInput};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::sysmetrics::SystemSnapshot;

pub const SERVICE_NAME: &str = "agenda-api";

/// GET / — service metadata and endpoint directory.
pub async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Bem-vindo à API de Agenda!",
        "status": "active",
        "endpoints": {
            "adicionar_contato": "POST /contatos",
            "listar_contatos": "GET /contatos",
            "buscar_contato": "GET /contatos/{contact_id}",
            "health_check": "GET /health",
            "system_metrics": "GET /system-metrics",
            "prometheus_metrics": "GET /metrics",
        }
    }))
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "total_contatos": state.service.count(),
    }))
}

/// GET /system-metrics — live host snapshot, sampled per request.
pub async fn system_metrics(State(state): State<AppState>) -> Json<serde_json::Value> {
    let sample = Duration::from_millis(state.observability.cpu_sample_ms);
    let snapshot = SystemSnapshot::capture(sample).await;
    Json(snapshot.to_json(state.service.count()))
}

/// GET /system-metrics-prometheus — plain-text exposition lines.
pub async fn system_metrics_prometheus(State(state): State<AppState>) -> String {
    let sample = Duration::from_millis(state.observability.cpu_sample_ms);
    let snapshot = SystemSnapshot::capture(sample).await;
    snapshot.to_exposition(state.service.count())
}

/// GET /metrics — Prometheus scrape of the service counters/histograms.
pub async fn prometheus_metrics(State(state): State<AppState>) -> String {
    state.metrics.render()
}

/// POST /contatos
pub async fn create_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactInput>, JsonRejection>,
) -> Result<Json<Contact>, ApiError> {
    let Json(input) = payload?;
    input.validate().map_err(ApiError::Validation)?;

    let span = tracing::info_span!(
        "create_contact",
        contact.name = %input.name,
        contact.has_email = input.email.is_some(),
        contact.has_address = input.address.is_some(),
        total_contacts = Empty,
    );
    let _guard = span.enter();

    tracing::info!(
        event = "creating_contact",
        contact_name = %input.name,
        has_email = input.email.is_some(),
        has_address = input.address.is_some(),
    );

    let id = tracing::info_span!("generate_contact_id").in_scope(|| state.service.new_id());

    let contact =
        tracing::info_span!("create_contact_object").in_scope(|| Contact::build(id, input));

    let total = tracing::info_span!("save_contact_to_db")
        .in_scope(|| state.service.insert(contact.clone()));
    span.record("total_contacts", total as u64);

    tracing::info!(
        event = "contact_created",
        contact_id = %contact.id,
        contact_name = %contact.name,
        total_contacts = total as u64,
    );

    Ok(Json(contact))
}

/// GET /contatos
pub async fn list_contacts(State(state): State<AppState>) -> Json<Vec<Contact>> {
    let contacts = state.service.list();

    tracing::info!(
        event = "listing_contacts",
        total_contacts = contacts.len() as u64,
    );

    Json(contacts)
}

/// GET /contatos/{id}
pub async fn get_contact(
    State(state): State<AppState>,
    Path(contact_id): Path<String>,
) -> Result<Json<Contact>, ApiError> {
    let span = tracing::info_span!(
        "search_contact",
        contact.id = %contact_id,
        database.size = state.service.count() as u64,
        contact.found = Empty,
        contact.name = Empty,
    );
    let _guard = span.enter();

    tracing::info!(event = "searching_contact", contact_id = %contact_id);

    let result = tracing::info_span!("database_search").in_scope(|| state.service.get(&contact_id));

    match result {
        Ok(contact) => {
            span.record("contact.found", true);
            span.record("contact.name", contact.name.as_str());

            tracing::info!(
                event = "contact_found",
                contact_id = %contact_id,
                contact_name = %contact.name,
            );

            Ok(Json(contact))
        }
        Err(err) => {
            span.record("contact.found", false);

            tracing::warn!(event = "contact_not_found", contact_id = %contact_id);

            Err(err.into())
        }
    }
}
