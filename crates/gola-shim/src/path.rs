//! String path helpers for shebang tokens.
//!
//! Shebang tokens have already had `\` rewritten to `/`, so these work on
//! `/`-separated strings on every platform.

/// Last element of `token`, ignoring trailing separators.
pub(crate) fn base_name(token: &str) -> &str {
    if token.is_empty() {
        return ".";
    }
    let trimmed = token.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/";
    }
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

/// Suffix of the last element starting at its final `.`, or `""`.
pub(crate) fn extension(name: &str) -> &str {
    for (i, b) in name.bytes().enumerate().rev() {
        match b {
            b'.' => return &name[i..],
            b'/' => break,
            _ => {}
        }
    }
    ""
}

/// `/usr/bin/env` or a drive-qualified `C:/Python/python.exe`.
pub(crate) fn is_absolute(token: &str) -> bool {
    if token.starts_with('/') {
        return true;
    }
    let bytes = token.as_bytes();
    bytes.len() >= 3 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' && bytes[2] == b'/'
}
