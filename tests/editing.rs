//! End-to-end editing flows driven through the session API.

use quill::core::selection::ClipSource;
use quill::core::session::EditorSession;

fn session_with(text: &str) -> EditorSession {
    let mut session = EditorSession::new();
    session.new_scratch().unwrap();
    session.current_mut().unwrap().insert_at_cursor(text);
    session.current_mut().unwrap().set_cursor(0);
    session
}

#[test]
fn typing_and_backspace() {
    let mut session = session_with("");
    let buffer = session.current_mut().unwrap();
    buffer.insert_at_cursor("hello");
    buffer.insert_at_cursor("\nworld");
    buffer.delete_backward();
    assert_eq!(buffer.text(), "hello\nworl");
    assert_eq!(buffer.cursor(), 10);
}

#[test]
fn selection_cut_paste_across_buffers() {
    let mut session = session_with("alpha beta");
    session.current_mut().unwrap().set_cursor(0);
    session.current_mut().unwrap().extend_selection_to(4);
    assert_eq!(session.cut(), Some(ClipSource::Selection));
    assert_eq!(session.current().unwrap().text(), " beta");

    // Clipboard survives a buffer switch
    session.new_scratch().unwrap();
    session.paste();
    assert_eq!(session.current().unwrap().text(), "alpha");
}

#[test]
fn line_copy_pastes_whole_line() {
    let mut session = session_with("first\nsecond\n");
    session.current_mut().unwrap().set_row_col(0, 1);
    assert_eq!(session.copy(), Some(ClipSource::Line));

    let buffer = session.current_mut().unwrap();
    buffer.set_cursor(0);
    session.paste();
    assert_eq!(session.current().unwrap().text(), "second\nfirst\nsecond\n");
}

#[test]
fn paste_without_clipboard_is_noop() {
    let mut session = session_with("abc");
    session.paste();
    assert_eq!(session.current().unwrap().text(), "abc");
}

#[test]
fn find_walks_forward_through_matches() {
    let session = session_with("one two one two one");
    let buffer = session.current().unwrap();

    let first = buffer.find("one", 0).unwrap();
    assert_eq!(first, 8);
    let second = buffer.find("one", first).unwrap();
    assert_eq!(second, 16);
    assert_eq!(buffer.find("one", second), None);
}

#[test]
fn replace_all_then_save_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "teh cat\nteh dog\n").unwrap();

    let mut session = EditorSession::new();
    session.open_file(path.to_str().unwrap(), false).unwrap();

    let buffer = session.current_mut().unwrap();
    assert_eq!(buffer.replace_all("teh", "the"), 2);
    buffer.save().unwrap();

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "the cat\nthe dog\n"
    );
}

#[test]
fn save_normalizes_trailing_newline_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("new.txt");

    let mut session = EditorSession::new();
    session.open_file(path.to_str().unwrap(), true).unwrap();
    session.current_mut().unwrap().insert_at_cursor("no newline");
    session.current_mut().unwrap().save().unwrap();
    session.current_mut().unwrap().save().unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "no newline\n");
}

#[test]
fn multibyte_text_keeps_offsets_consistent() {
    let mut session = session_with("héllo wörld");
    let buffer = session.current_mut().unwrap();

    buffer.set_cursor(5); // just after "héllo"
    buffer.insert_at_cursor("!");
    assert_eq!(buffer.text(), "héllo! wörld");

    buffer.set_cursor(0);
    buffer.extend_selection_to(4);
    assert_eq!(buffer.selected_text(), "héllo");
}

#[test]
fn cursor_row_col_round_trip_with_tabs() {
    let mut session = session_with("\tindented\nplain");
    let buffer = session.current_mut().unwrap();

    buffer.set_row_col(3, 0);
    assert_eq!(buffer.row_col(), (3, 0));
    buffer.set_row_col(99, 1); // clamps to end of final line
    assert_eq!(buffer.cursor(), buffer.len_chars());
}
