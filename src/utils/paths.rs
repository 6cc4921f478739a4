//! Path helpers for playlist entries

use std::io;
use std::path::{Component, Path, PathBuf};

/// Expand a leading `~` to the user's home directory
pub fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}

/// Make a path absolute against the current directory and drop `.`/`..`
pub fn absolute_normalized(path: &Path) -> io::Result<PathBuf> {
    Ok(normalize(&std::path::absolute(path)?))
}

/// Lexically normalize a path, resolving `.` and `..` without touching the filesystem
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `..` at the root stays at the root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Compute `path` relative to `base`
///
/// Both paths should be absolute and normalized. Returns `None` when they
/// share no root (e.g. different drives on Windows).
pub fn relative_to(path: &Path, base: &Path) -> Option<PathBuf> {
    let mut path_iter = path.components().peekable();
    let mut base_iter = base.components().peekable();

    match (path_iter.peek(), base_iter.peek()) {
        (Some(Component::Prefix(a)), Some(Component::Prefix(b))) if a != b => return None,
        (Some(Component::Prefix(_)), Some(Component::Prefix(_))) => {}
        (Some(Component::Prefix(_)), _) | (_, Some(Component::Prefix(_))) => return None,
        _ => {}
    }

    while let (Some(a), Some(b)) = (path_iter.peek(), base_iter.peek()) {
        if a != b {
            break;
        }
        path_iter.next();
        base_iter.next();
    }

    let mut relative = PathBuf::new();
    for _ in base_iter {
        relative.push("..");
    }
    for component in path_iter {
        relative.push(component.as_os_str());
    }

    if relative.as_os_str().is_empty() {
        relative.push(".");
    }
    Some(relative)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_drops_dots() {
        assert_eq!(normalize(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
        assert_eq!(normalize(Path::new("/../a")), PathBuf::from("/a"));
        assert_eq!(normalize(Path::new("a/../../b")), PathBuf::from("../b"));
    }

    #[test]
    fn test_relative_inside_base() {
        let rel = relative_to(Path::new("/music/Artist/Album/01.flac"), Path::new("/music"));
        assert_eq!(rel, Some(PathBuf::from("Artist/Album/01.flac")));
    }

    #[test]
    fn test_relative_outside_base() {
        let rel = relative_to(Path::new("/music/Artist/01.flac"), Path::new("/feeds/daily"));
        assert_eq!(rel, Some(PathBuf::from("../../music/Artist/01.flac")));
    }

    #[test]
    fn test_relative_same_path() {
        assert_eq!(
            relative_to(Path::new("/music"), Path::new("/music")),
            Some(PathBuf::from("."))
        );
    }

    #[test]
    fn test_expand_home_leaves_plain_paths() {
        assert_eq!(expand_home(Path::new("/srv/feeds")), PathBuf::from("/srv/feeds"));
        assert_eq!(expand_home(Path::new("feeds/~x")), PathBuf::from("feeds/~x"));
    }
}
