//! Serde DTOs for the client/server REST boundary.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's camelCase payloads via serde renames so
//! deserialization stays lossless and the wire contract is visible in one
//! place.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Response of the session-verification endpoint.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct VerifyResponse {
    /// Whether the backend considers the session logged in.
    #[serde(rename = "isLogined")]
    pub is_logined: bool,
}

/// Response of the logout endpoint.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct LogoutResponse {
    #[serde(rename = "logoutSuccess")]
    pub logout_success: bool,
}

/// Response of the login endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "loginSuccess")]
    pub login_success: bool,
    /// Human-readable outcome shown on failure.
    #[serde(default)]
    pub message: String,
}

/// A board post. List endpoints omit `content`; the detail endpoint fills it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub board: String,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub content: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "commentCount", default)]
    pub comment_count: i64,
}

/// One page of a board's post list.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PostList {
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(rename = "totalPages", default = "default_total_pages")]
    pub total_pages: i64,
}

fn default_total_pages() -> i64 {
    1
}

/// A comment on a post.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    #[serde(rename = "postId")]
    pub post_id: i64,
    pub author: String,
    pub content: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// An entry in the file archive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArchiveEntry {
    pub id: i64,
    pub name: String,
    #[serde(rename = "sizeBytes")]
    pub size_bytes: u64,
    #[serde(rename = "uploadedBy")]
    pub uploaded_by: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// A tracked project.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    /// Backend-defined status string (e.g. `"planned"`, `"active"`, `"done"`).
    pub status: String,
    #[serde(rename = "startDate", default)]
    pub start_date: String,
    #[serde(rename = "endDate", default)]
    pub end_date: String,
    #[serde(default)]
    pub description: String,
}
