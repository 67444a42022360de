//! Path helpers for namespace traversal

/// Join a child name onto its parent path.
pub fn join_child_path(parent: &str, name: &str) -> String {
    if parent.ends_with('/') {
        format!("{}{}", parent, name)
    } else {
        format!("{}/{}", parent, name)
    }
}

/// Validate a traversal root and strip trailing slashes (except for `/` itself).
pub fn normalize_root(path: &str) -> Result<String, String> {
    if !path.starts_with('/') {
        return Err("path must be absolute".to_string());
    }
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return Ok("/".to_string());
    }
    if trimmed.contains("//") {
        return Err("path contains an empty segment".to_string());
    }
    Ok(trimmed.to_string())
}
