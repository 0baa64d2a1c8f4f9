//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, always with
//! credentials included so the session cookie travels. Server-side (SSR):
//! stubs returning `None`/error since these endpoints are only meaningful in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so fetch failures
//! degrade UI behavior without crashing hydration. In-flight requests are not
//! cancelled on navigation; a late response against a torn-down view is
//! silently dropped.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ArchiveEntry, Comment, Post, PostList, Project};
#[cfg(feature = "hydrate")]
use super::types::{LoginResponse, LogoutResponse, VerifyResponse};
#[cfg(feature = "hydrate")]
use serde::Deserialize;

#[cfg(any(test, feature = "hydrate"))]
fn board_posts_endpoint(board: &str, page: i64) -> String {
    format!("/api/boards/{board}/posts?page={page}")
}

#[cfg(any(test, feature = "hydrate"))]
fn post_endpoint(post_id: i64) -> String {
    format!("/api/posts/{post_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn post_comments_endpoint(post_id: i64) -> String {
    format!("/api/posts/{post_id}/comments")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    format!("login request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn publish_failed_message(status: u16) -> String {
    format!("publish request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn comment_failed_message(status: u16) -> String {
    format!("comment request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn upload_failed_message(status: u16) -> String {
    format!("upload request failed: {status}")
}

/// Verify the current session via `POST /api/auth/verify`.
///
/// `Some(flag)` carries the server-reported login status; `None` means the
/// call failed (network error or non-2xx) and the caller should fail closed.
pub async fn verify_session() -> Option<bool> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/verify")
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        let body: VerifyResponse = resp.json().await.ok()?;
        Some(body.is_logined)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log out via `POST /api/auth/logout`. Returns whether the server confirmed.
pub async fn logout() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Ok(resp) = gloo_net::http::Request::post("/api/auth/logout")
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
        else {
            return false;
        };
        if !resp.ok() {
            return false;
        }
        resp.json::<LogoutResponse>()
            .await
            .map(|body| body.logout_success)
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Log in via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns the backend's failure message, or a generic one when the HTTP
/// request itself fails.
pub async fn login(email: &str, password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .credentials(web_sys::RequestCredentials::Include)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(login_failed_message(resp.status()));
        }
        let body: LoginResponse = resp.json().await.map_err(|e| e.to_string())?;
        if !body.login_success {
            if body.message.is_empty() {
                return Err("login failed".to_owned());
            }
            return Err(body.message);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Fetch one page of a board's posts. `None` on any failure.
pub async fn fetch_posts(board: &str, page: i64) -> Option<PostList> {
    #[cfg(feature = "hydrate")]
    {
        let url = board_posts_endpoint(board, page);
        let resp = gloo_net::http::Request::get(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<PostList>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (board, page);
        None
    }
}

/// Fetch a post with its full content. `None` on any failure.
pub async fn fetch_post(post_id: i64) -> Option<Post> {
    #[cfg(feature = "hydrate")]
    {
        let url = post_endpoint(post_id);
        let resp = gloo_net::http::Request::get(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Post>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = post_id;
        None
    }
}

/// Create a post on `board` via `POST /api/boards/{board}/posts`.
///
/// # Errors
///
/// Returns an error string when the request fails or the server rejects it.
pub async fn create_post(board: &str, title: &str, content: &str) -> Result<i64, String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(Deserialize)]
        struct CreatePostResponse {
            #[serde(rename = "postId")]
            post_id: i64,
        }
        let payload = serde_json::json!({ "title": title, "content": content });
        let url = format!("/api/boards/{board}/posts");
        let resp = gloo_net::http::Request::post(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(publish_failed_message(resp.status()));
        }
        let body: CreatePostResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.post_id)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (board, title, content);
        Err("not available on server".to_owned())
    }
}

/// Fetch the comments of a post. `None` on any failure.
pub async fn fetch_comments(post_id: i64) -> Option<Vec<Comment>> {
    #[cfg(feature = "hydrate")]
    {
        let url = post_comments_endpoint(post_id);
        let resp = gloo_net::http::Request::get(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<Comment>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = post_id;
        None
    }
}

/// Add a comment to a post.
///
/// # Errors
///
/// Returns an error string when the request fails or the server rejects it.
pub async fn create_comment(post_id: i64, content: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "content": content });
        let url = post_comments_endpoint(post_id);
        let resp = gloo_net::http::Request::post(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(comment_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (post_id, content);
        Err("not available on server".to_owned())
    }
}

/// Fetch the file archive listing. `None` on any failure.
pub async fn fetch_archive() -> Option<Vec<ArchiveEntry>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/archive/files")
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<ArchiveEntry>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Upload a file to the archive via multipart `POST /api/archive/files`.
///
/// # Errors
///
/// Returns an error string when form construction or the request fails.
#[cfg(feature = "hydrate")]
pub async fn upload_archive_file(file: &web_sys::File) -> Result<(), String> {
    let form = web_sys::FormData::new().map_err(|_| "form construction failed".to_owned())?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| "form append failed".to_owned())?;
    let resp = gloo_net::http::Request::post("/api/archive/files")
        .credentials(web_sys::RequestCredentials::Include)
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(upload_failed_message(resp.status()));
    }
    Ok(())
}

/// Fetch the project tracking list. `None` on any failure.
pub async fn fetch_projects() -> Option<Vec<Project>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/projects")
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<Project>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
