use super::*;

#[test]
fn validate_post_input_trims_both_fields() {
    assert_eq!(
        validate_post_input("  Title  ", "  body  "),
        Ok(("Title".to_owned(), "body".to_owned()))
    );
}

#[test]
fn validate_post_input_requires_title() {
    assert_eq!(validate_post_input("   ", "body"), Err("Give the post a title."));
}

#[test]
fn validate_post_input_requires_content() {
    assert_eq!(validate_post_input("Title", "   "), Err("The post needs some content."));
}
