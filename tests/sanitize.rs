use essayist::sanitize::clean;

#[test]
fn test_plain_text_passes_through() {
    assert_eq!(clean("On Liberty & Power"), "On Liberty & Power");
}

#[test]
fn test_markup_stays_literal_text() {
    // The terminal never interprets markup; the text must survive verbatim
    assert_eq!(clean("<script>x</script>"), "<script>x</script>");
}

#[test]
fn test_csi_sequences_are_stripped() {
    assert_eq!(clean("\u{1b}[31mred\u{1b}[0m"), "red");
    assert_eq!(clean("\u{1b}[2Jcleared"), "cleared");
}

#[test]
fn test_osc_sequences_are_stripped() {
    // BEL-terminated
    assert_eq!(clean("\u{1b}]0;title\u{07}after"), "after");
    // ST-terminated
    assert_eq!(clean("\u{1b}]8;;https://evil.example\u{1b}\\after"), "after");
}

#[test]
fn test_two_byte_escapes_are_stripped() {
    assert_eq!(clean("\u{1b}cwiped"), "wiped");
}

#[test]
fn test_control_characters_are_dropped() {
    assert_eq!(clean("a\u{00}b\u{08}c\u{7f}d"), "abcd");
}

#[test]
fn test_newlines_and_tabs_collapse_to_spaces() {
    assert_eq!(clean("one\ntwo\tthree"), "one two three");
    assert_eq!(clean("one\r\ntwo"), "one two");
}

#[test]
fn test_empty_input() {
    assert_eq!(clean(""), "");
    assert_eq!(clean("\u{1b}["), "");
}
