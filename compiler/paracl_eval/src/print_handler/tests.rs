use pretty_assertions::assert_eq;

use super::*;

#[test]
fn buffer_collects_lines_in_order() {
    let handler = buffer_handler();
    handler.println("1");
    handler.println("-7");
    assert_eq!(handler.get_output(), "1\n-7\n");
}

#[test]
fn buffer_clear_discards_output() {
    let handler = buffer_handler();
    handler.println("42");
    handler.clear();
    assert_eq!(handler.get_output(), "");
    handler.println("0");
    assert_eq!(handler.get_output(), "0\n");
}

#[test]
fn silent_and_stdout_capture_nothing() {
    let silent = silent_handler();
    silent.println("lost");
    assert_eq!(silent.get_output(), "");
    assert_eq!(stdout_handler().get_output(), "");
}

#[test]
fn shared_handle_sees_writes_from_clone() {
    let handler = buffer_handler();
    let writer = SharedPrintHandler::clone(&handler);
    writer.println("5");
    assert_eq!(handler.get_output(), "5\n");
}
