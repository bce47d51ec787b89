use std::path::Path;

// Longest string treated as a path candidate; longer text is never stat'ed.
const MAX_PATH_LEN: usize = 4096;

/// Stat-like probe: whether `candidate` names an existing regular file.
///
/// Never fails. Text that cannot be a path (too long, embedded NUL) answers `false`
/// without touching the filesystem.
pub fn is_file(candidate: &str) -> bool {
    if candidate.is_empty() || candidate.len() > MAX_PATH_LEN || candidate.contains('\0') {
        return false;
    }
    Path::new(candidate).is_file()
}
