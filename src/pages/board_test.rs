use super::*;

#[test]
fn board_heading_capitalizes_first_letter() {
    assert_eq!(board_heading("free"), "Free");
    assert_eq!(board_heading("notice"), "Notice");
}

#[test]
fn board_heading_handles_empty_name() {
    assert_eq!(board_heading(""), "");
}

#[test]
fn write_route_formats_board_name() {
    assert_eq!(write_route("free"), "/board/free/write");
}
