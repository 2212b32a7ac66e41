// src/core/sanitize.rs

/// Collapse whitespace runs (including the \r\n Google Sheets keeps inside
/// multi-line cells) to single spaces, trimmed.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}
