//! Process-wide state shared through Leptos context providers.
//!
//! ARCHITECTURE
//! ============
//! `auth` is the single source of truth for login status; `toast` is the
//! transient notification queue. Both are provided as `RwSignal` contexts by
//! `App` and mutated only from the UI event loop.

pub mod auth;
pub mod toast;
