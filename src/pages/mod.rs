//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, guards, stash
//! draining) and delegates rendering details to `components`.

pub mod archive;
pub mod board;
pub mod home;
pub mod login;
pub mod post;
pub mod projects;
pub mod write;
