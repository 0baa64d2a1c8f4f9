use super::*;

#[test]
fn renders_paragraphs() {
    assert_eq!(render_markdown("hello"), "<p>hello</p>\n");
}

#[test]
fn renders_headings() {
    assert!(render_markdown("# Notice").contains("<h1>Notice</h1>"));
}

#[test]
fn renders_strikethrough_extension() {
    assert!(render_markdown("~~gone~~").contains("<del>gone</del>"));
}
