use super::*;

#[test]
fn board_posts_endpoint_formats_board_and_page() {
    assert_eq!(board_posts_endpoint("free", 3), "/api/boards/free/posts?page=3");
}

#[test]
fn post_endpoint_formats_id() {
    assert_eq!(post_endpoint(42), "/api/posts/42");
}

#[test]
fn post_comments_endpoint_formats_id() {
    assert_eq!(post_comments_endpoint(42), "/api/posts/42/comments");
}

#[test]
fn login_failed_message_formats_status() {
    assert_eq!(login_failed_message(401), "login request failed: 401");
}

#[test]
fn publish_failed_message_formats_status() {
    assert_eq!(publish_failed_message(500), "publish request failed: 500");
}

#[test]
fn comment_failed_message_formats_status() {
    assert_eq!(comment_failed_message(403), "comment request failed: 403");
}

#[test]
fn upload_failed_message_formats_status() {
    assert_eq!(upload_failed_message(413), "upload request failed: 413");
}
