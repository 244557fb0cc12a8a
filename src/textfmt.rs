//! Cleanup for raw vendor strings before display.

/// Narrows to the innermost bracketed segment. PCI device strings often
/// arrive as "Navi 22 [Radeon RX [6700] XT]" style; each pass keeps the
/// text between the first '[' and the last ']' until no pair remains.
pub fn extract_bracketed(text: &str) -> &str {
    let mut text = text;
    loop {
        match (text.find('['), text.rfind(']')) {
            (Some(open), Some(close)) if open < close => {
                text = &text[open + 1..close];
            }
            _ => return text,
        }
    }
}

/// Removes "(R)" and "(TM)" marks: "Intel(R) Core(TM) i7" -> "Intel Core i7".
/// The scan starts after the leading character, so a marker at position 0
/// stays put.
pub fn strip_markers(text: &str) -> String {
    let mut out = text.to_string();
    let mut from = match out.chars().next() {
        Some(first) => first.len_utf8(),
        None => return out,
    };
    loop {
        let Some(found) = out.get(from..).and_then(|rest| rest.find('(')) else {
            return out;
        };
        let at = from + found;
        if out[at..].starts_with("(R)") {
            out.replace_range(at..at + 3, "");
        } else if out[at..].starts_with("(TM)") {
            out.replace_range(at..at + 4, "");
        }
        from = at + 1;
    }
}

pub fn beautify(text: &str) -> String {
    strip_markers(extract_bracketed(text))
}
