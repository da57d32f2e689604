//! Context types for rule execution.

use std::path::{Path, PathBuf};

/// Context provided to rules for each analyzed compilation unit.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Path of the tree file as discovered.
    pub path: &'a Path,
    /// Path relative to the project root, used in reported locations.
    pub relative_path: PathBuf,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, root: &Path) -> Self {
        let relative_path = path
            .strip_prefix(root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf);

        Self {
            path,
            relative_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_path_strips_root() {
        let ctx = FileContext::new(Path::new("/proj/src/Main.tree.json"), Path::new("/proj"));
        assert_eq!(ctx.relative_path, PathBuf::from("src/Main.tree.json"));
    }

    #[test]
    fn relative_path_falls_back_to_full_path() {
        let ctx = FileContext::new(Path::new("other/Main.tree.json"), Path::new("/proj"));
        assert_eq!(ctx.relative_path, PathBuf::from("other/Main.tree.json"));
    }
}
