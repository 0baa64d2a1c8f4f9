use super::*;

// =============================================================
// Auth payloads — camelCase wire names
// =============================================================

#[test]
fn verify_response_reads_is_logined() {
    let resp: VerifyResponse = serde_json::from_str(r#"{"isLogined":true}"#).expect("parse");
    assert!(resp.is_logined);
}

#[test]
fn logout_response_reads_logout_success() {
    let resp: LogoutResponse = serde_json::from_str(r#"{"logoutSuccess":false}"#).expect("parse");
    assert!(!resp.logout_success);
}

#[test]
fn login_response_message_defaults_to_empty() {
    let resp: LoginResponse = serde_json::from_str(r#"{"loginSuccess":true}"#).expect("parse");
    assert!(resp.login_success);
    assert!(resp.message.is_empty());
}

// =============================================================
// Board payloads — optional fields
// =============================================================

#[test]
fn post_list_item_parses_without_content() {
    let post: Post = serde_json::from_str(
        r#"{"id":7,"board":"free","title":"hi","author":"kim","createdAt":"2026-08-01"}"#,
    )
    .expect("parse");
    assert_eq!(post.id, 7);
    assert!(post.content.is_empty());
    assert_eq!(post.comment_count, 0);
}

#[test]
fn post_list_defaults_to_one_page() {
    let list: PostList = serde_json::from_str(r#"{"posts":[]}"#).expect("parse");
    assert!(list.posts.is_empty());
    assert_eq!(list.total_pages, 1);
}
