use super::*;

#[test]
fn buffer_println_appends_newline() {
    let handler = BufferPrintHandler::new();
    handler.println("42");
    assert_eq!(handler.output(), "42\n");
}

#[test]
fn buffer_print_concatenates() {
    let handler = BufferPrintHandler::new();
    handler.print("a");
    handler.print("b");
    handler.println("c");
    assert_eq!(handler.output(), "abc\n");
}

#[test]
fn buffer_clear_empties() {
    let handler = buffer_handler();
    handler.print("x");
    handler.clear();
    assert!(handler.output().is_empty());
}

#[test]
fn shared_handle_sees_same_buffer() {
    let handler = buffer_handler();
    let other = Arc::clone(&handler);
    other.println("shared");
    assert_eq!(handler.output(), "shared\n");
}

#[test]
fn silent_discards() {
    let handler = silent_handler();
    handler.println("gone");
    assert_eq!(handler.output(), "");
}

#[test]
fn stdout_captures_nothing() {
    let handler = stdout_handler();
    handler.clear();
    assert_eq!(handler.output(), "");
}
