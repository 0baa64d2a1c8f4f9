use super::*;

#[test]
fn size_label_formats_bytes() {
    assert_eq!(size_label(512), "512 B");
}

#[test]
fn size_label_formats_kibibytes() {
    assert_eq!(size_label(2048), "2 KiB");
}

#[test]
fn size_label_formats_mebibytes_with_one_decimal() {
    assert_eq!(size_label(1024 * 1024 * 3 / 2), "1.5 MiB");
}
