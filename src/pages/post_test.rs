use super::*;

#[test]
fn validate_comment_input_trims_whitespace() {
    assert_eq!(validate_comment_input("  nice post  "), Ok("nice post".to_owned()));
}

#[test]
fn validate_comment_input_rejects_blank() {
    assert_eq!(validate_comment_input("   "), Err("Write a comment first."));
}
