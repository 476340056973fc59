//! Contact directory subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP handler (validated input)
//!     → service.rs (id generation, record construction)
//!     → store.rs (append / linear scan)
//! ```
//!
//! # Design Decisions
//! - The store is an injected object, not a module-level global, so tests
//!   get isolated instances
//! - Records are immutable after creation; the only mutation is append
//! - The service knows nothing about HTTP, logging or tracing

pub mod service;
pub mod store;
pub mod types;

pub use service::{ContactError, ContactService};
pub use store::ContactStore;
pub use types::{Contact, ContactInput, FieldError};
