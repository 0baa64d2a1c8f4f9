//! Networking modules for the REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs credentialed HTTP calls against the backend; `types`
//! defines the serde DTOs mirroring its payloads. The backend itself is an
//! external collaborator; nothing here implements server behavior.

pub mod api;
pub mod types;
