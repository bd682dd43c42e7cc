//! Shebang line tokenizer.

use crate::path::is_absolute;

/// Split a shebang line into an argument vector.
///
/// Returns an empty vector when `line` does not start with `#!`. Backslashes
/// become `/`, tokens are separated by runs of whitespace, and an absolute
/// first token absorbs following relative tokens that contain a `/`, which
/// rebuilds interpreter paths such as `C:/Program Files/Python/python.exe`.
/// A genuine second argument that looks like a relative path is glued on as
/// well; that ambiguity cannot be told apart from the line alone.
pub fn tokenize(line: &str) -> Vec<String> {
    let Some(rest) = line.strip_prefix("#!") else {
        return Vec::new();
    };
    let rest = rest.replace('\\', "/");

    let mut argv: Vec<String> = Vec::new();
    for token in rest.split_whitespace() {
        match argv.as_mut_slice() {
            [first] if continues_path(first.as_str(), token) => {
                first.push(' ');
                first.push_str(token);
            }
            _ => argv.push(token.to_string()),
        }
    }
    tracing::trace!(?argv, "tokenized shebang");
    argv
}

fn continues_path(first: &str, next: &str) -> bool {
    is_absolute(first) && !is_absolute(next) && next.contains('/')
}
