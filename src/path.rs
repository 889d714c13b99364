//! Lexical resolution of remote paths.
//!
//! Nothing here touches the remote filesystem. Whether a resolved path
//! actually exists is decided by the server when the request is made.

/// Resolve a caller-supplied remote path against `cwd`.
///
/// - Absolute input (leading `/`) is returned unchanged.
/// - Each leading `../` pops one trailing segment off `cwd`, clamping at `/`.
/// - Anything else is joined to `cwd`, dropping leading `./` prefixes.
///
/// Empty input is passed through untouched so the server can reject it.
pub fn resolve(input: &str, cwd: &str) -> String {
    if input.is_empty() || input.starts_with('/') {
        return input.to_string();
    }

    let mut base: Vec<&str> = cwd.split('/').filter(|s| !s.is_empty()).collect();
    let mut rest = input;

    loop {
        if let Some(stripped) = rest.strip_prefix("../") {
            base.pop();
            rest = stripped;
        } else if rest == ".." {
            base.pop();
            rest = "";
        } else if let Some(stripped) = rest.strip_prefix("./") {
            rest = stripped;
        } else if rest == "." {
            rest = "";
        } else {
            break;
        }
    }

    let mut resolved = String::from("/");
    resolved.push_str(&base.join("/"));
    if !rest.is_empty() {
        if !resolved.ends_with('/') {
            resolved.push('/');
        }
        resolved.push_str(rest);
    }
    resolved
}

/// Final segment of a remote path, ignoring a trailing `/`.
pub fn file_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_bare_name_onto_root_without_doubling_slash() {
        assert_eq!(resolve("etc", "/"), "/etc");
        assert_eq!(resolve("etc", "/srv/"), "/srv/etc");
    }

    #[test]
    fn parent_segments_clamp_at_root() {
        assert_eq!(resolve("../../../x", "/home"), "/x");
        assert_eq!(resolve("..", "/"), "/");
    }

    #[test]
    fn file_name_ignores_trailing_slash() {
        assert_eq!(file_name("/home/alice/a.md"), "a.md");
        assert_eq!(file_name("/home/alice/dir/"), "dir");
    }
}
