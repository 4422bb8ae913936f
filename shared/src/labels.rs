/// Split a tile name into label lines before each capital letter that starts
/// a word-like run, i.e. an uppercase letter followed by a non-uppercase
/// character. `"Wii Sports Resort"` becomes `["Wii", "Sports", "Resort"]`.
///
/// Runs of capitals stay together except for the last one when it starts a
/// new run (`"FIFA 16"` → `["FIF", "A 16"]`); the heuristic is intentionally
/// the same one the chart has always used.
pub fn wrap_label(name: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut start = 0usize;
    let mut chars = name.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        let Some(&(_, next)) = chars.peek() else {
            break;
        };
        if idx > start && c.is_uppercase() && !next.is_uppercase() {
            push_line(&mut lines, &name[start..idx]);
            start = idx;
        }
    }
    push_line(&mut lines, &name[start..]);
    lines
}

fn push_line(lines: &mut Vec<String>, segment: &str) {
    let trimmed = segment.trim();
    if !trimmed.is_empty() {
        lines.push(trimmed.to_string());
    }
}
