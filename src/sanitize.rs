//! Sanitization of untrusted feed text for terminal display
//!
//! Everything the provider sends (headlines, previews, author names, URLs)
//! is embedded verbatim into terminal cells. The terminal interprets control
//! characters and ANSI escape sequences, so those are stripped here; plain
//! markup-looking text such as `<script>` is kept as literal text since the
//! terminal never executes it.

/// Clean one untrusted text field for embedding in the view.
///
/// Strips ANSI escape sequences (CSI, OSC, and lone two-byte escapes) and
/// all other control characters. Tabs and newlines become single spaces so
/// multi-line previews still read as one paragraph.
pub fn clean(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\u{1b}' => skip_escape_sequence(&mut chars),
            '\n' | '\r' | '\t' => {
                if !out.ends_with(' ') {
                    out.push(' ');
                }
            }
            c if c.is_control() => {}
            c => out.push(c),
        }
    }

    out
}

/// Consume the remainder of an escape sequence whose ESC byte was just read.
fn skip_escape_sequence(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) {
    match chars.peek() {
        // CSI: ESC [ ... terminated by a byte in 0x40..=0x7e
        Some('[') => {
            chars.next();
            for c in chars.by_ref() {
                if ('\u{40}'..='\u{7e}').contains(&c) {
                    break;
                }
            }
        }
        // OSC: ESC ] ... terminated by BEL or ST (ESC \)
        Some(']') => {
            chars.next();
            while let Some(c) = chars.next() {
                if c == '\u{07}' {
                    break;
                }
                if c == '\u{1b}' {
                    if chars.peek() == Some(&'\\') {
                        chars.next();
                    }
                    break;
                }
            }
        }
        // Two-byte escapes (ESC c, ESC 7, ...): drop the following byte
        Some(_) => {
            chars.next();
        }
        None => {}
    }
}
