//! Shallow deployment-descriptor scanner
//!
//! The descriptor is read as plain lines. A key counts as declared when some
//! line is `key:` with optional indentation and nothing but whitespace after
//! the colon. The full descriptor grammar is never parsed, so a key of the
//! same name inside an unrelated nested block is also counted.

/// Parse one line as a bare key declaration, returning the key
#[must_use]
pub fn parse_declaration(line: &str) -> Option<&str> {
    let (key, rest) = line.trim_start().split_once(':')?;
    if key.is_empty() || key.chars().any(char::is_whitespace) || !rest.trim().is_empty() {
        return None;
    }
    Some(key)
}

/// Whether `key` is declared anywhere in the descriptor
#[must_use]
pub fn declares_key(text: &str, key: &str) -> bool {
    text.lines().any(|line| parse_declaration(line) == Some(key))
}

/// First required key that is not declared, in the given order
#[must_use]
pub fn first_undeclared<'k>(text: &str, keys: &'k [String]) -> Option<&'k str> {
    keys.iter().map(String::as_str).find(|key| !declares_key(text, key))
}
