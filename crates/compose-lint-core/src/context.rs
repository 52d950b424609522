//! Context types for rule execution.

use std::path::{Path, PathBuf};

/// The file being analyzed.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Path to the file as discovered.
    pub path: &'a Path,
    /// File contents as a string.
    pub content: &'a str,
    /// Path relative to the project root.
    pub relative_path: PathBuf,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str, root: &Path) -> Self {
        let relative_path = match path.strip_prefix(root) {
            Ok(relative) if !relative.as_os_str().is_empty() => relative.to_path_buf(),
            // the root is the file itself
            Ok(_) => path.file_name().map_or_else(|| path.to_path_buf(), PathBuf::from),
            Err(_) => path.to_path_buf(),
        };

        Self {
            path,
            content,
            relative_path,
        }
    }

    /// Whether the file is a Kotlin script (`.kts`).
    #[must_use]
    pub fn is_script(&self) -> bool {
        self.path.extension().is_some_and(|ext| ext == "kts")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_path_is_stripped_from_root() {
        let ctx = FileContext::new(
            Path::new("/project/app/src/main/Screen.kt"),
            "",
            Path::new("/project"),
        );
        assert_eq!(ctx.relative_path, PathBuf::from("app/src/main/Screen.kt"));
        assert!(!ctx.is_script());
    }

    #[test]
    fn paths_outside_root_are_kept() {
        let ctx = FileContext::new(Path::new("other/build.gradle.kts"), "", Path::new("/project"));
        assert_eq!(ctx.relative_path, PathBuf::from("other/build.gradle.kts"));
        assert!(ctx.is_script());
    }

    #[test]
    fn single_file_root_keeps_file_name() {
        let ctx = FileContext::new(Path::new("/project/Screen.kt"), "", Path::new("/project/Screen.kt"));
        assert_eq!(ctx.relative_path, PathBuf::from("Screen.kt"));
    }
}
