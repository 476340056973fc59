//! Contact records and creation payloads.
//!
//! Wire field names stay in Portuguese (`nome`, `telefone`, `endereco`) for
//! compatibility with existing clients of the agenda API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A directory record. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Server-assigned identifier (UUID v4), never supplied by the client.
    pub id: String,

    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "telefone")]
    pub phone: String,

    pub email: Option<String>,

    #[serde(rename = "endereco")]
    pub address: Option<String>,

    /// Creation time, server clock.
    pub created_at: DateTime<Utc>,
}

impl Contact {
    /// Build a record from a validated payload and a freshly generated id.
    pub fn build(id: String, input: ContactInput) -> Self {
        Self {
            id,
            name: input.name,
            phone: input.phone,
            email: input.email,
            address: input.address,
            created_at: Utc::now(),
        }
    }
}

/// Creation payload for `POST /contatos`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContactInput {
    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "telefone")]
    pub phone: String,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(rename = "endereco", default)]
    pub address: Option<String>,
}

/// One field-level validation failure, shaped like the original API's
/// 422 detail entries.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub loc: Vec<String>,

    pub msg: String,

    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    pub fn required(field: &str) -> Self {
        Self {
            loc: vec!["body".to_string(), field.to_string()],
            msg: "String should have at least 1 character".to_string(),
            kind: "string_too_short".to_string(),
        }
    }

    pub fn body(msg: String) -> Self {
        Self {
            loc: vec!["body".to_string()],
            msg,
            kind: "json_invalid".to_string(),
        }
    }
}

impl ContactInput {
    /// Enforce the schema rules: `nome` and `telefone` must be non-empty.
    /// `email` and `endereco` are optional and unvalidated.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError::required("nome"));
        }
        if self.phone.trim().is_empty() {
            errors.push(FieldError::required("telefone"));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
