use blackjack_cli::ui;

#[test]
fn write_error_formats_consistently() {
    let mut buf: Vec<u8> = Vec::new();
    ui::write_error(&mut buf, "oops").unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "Error: oops\n");
}

#[test]
fn warnings_are_prefixed() {
    let mut buf: Vec<u8> = Vec::new();
    ui::display_warning(&mut buf, "low shoe").unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "WARNING: low shoe\n");
}

#[test]
fn prompt_has_no_newline() {
    let mut buf: Vec<u8> = Vec::new();
    ui::prompt(&mut buf, "Hit or Stand? ").unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "Hit or Stand? ");
}
