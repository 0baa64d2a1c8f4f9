//! # dypocrypha
//!
//! Leptos + WASM frontend for the Dypocrypha community platform: boards,
//! posts with comments, a shared file archive, and project tracking over a
//! remote REST API.
//!
//! Session state and the toast relay live in `state` and `util`; pages and
//! components read them from the context providers installed by `App`. The
//! backend is an external collaborator reached through `net::api`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
