//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and list items while reading shared state
//! from the Leptos context providers installed by `App`.

pub mod comment_item;
pub mod nav_bar;
pub mod pagination;
pub mod post_card;
pub mod toast_host;
