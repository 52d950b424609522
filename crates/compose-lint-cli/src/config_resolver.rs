//! Configuration file resolution with global fallback.
//!
//! Resolves the configuration file path using a deterministic priority order:
//!
//! 1. `--config` flag (explicit path)
//! 2. `{project}/compose-lint.toml` or `.compose-lint.toml`
//! 3. `~/.compose-lint/config.toml` (global fallback)
//! 4. No config found → defaults
//!
//! When the analyzed path is a single file, its directory is the project.

use std::path::{Path, PathBuf};

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly specified via `--config` flag.
    Explicit(PathBuf),
    /// Found in the project directory.
    Project(PathBuf),
    /// Loaded from the global config directory (`~/.compose-lint/`).
    Global(PathBuf),
    /// No config found; defaults will be used.
    Default,
}

impl ConfigSource {
    /// Returns the resolved path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Returns `true` if the config was loaded from the global directory.
    #[must_use]
    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global(_))
    }
}

/// Project-level config file names, checked in order.
const PROJECT_CONFIG_NAMES: &[&str] = &["compose-lint.toml", ".compose-lint.toml"];

/// Config file name within the global config directory.
const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Resolves the configuration file path.
///
/// See module-level docs for resolution order.
#[must_use]
pub fn resolve(target: &Path, explicit: Option<&Path>) -> ConfigSource {
    let project_dir = if target.is_file() {
        target.parent().unwrap_or(target)
    } else {
        target
    };
    resolve_inner(project_dir, explicit, global_config_dir())
}

/// Takes `global_dir` as a parameter so tests avoid env var races.
fn resolve_inner(project_dir: &Path, explicit: Option<&Path>, global_dir: Option<PathBuf>) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    for name in PROJECT_CONFIG_NAMES {
        let candidate = project_dir.join(name);
        if candidate.exists() {
            tracing::debug!("Found project config: {}", candidate.display());
            return ConfigSource::Project(candidate);
        }
    }

    if let Some(dir) = global_dir {
        let candidate = dir.join(GLOBAL_CONFIG_NAME);
        if candidate.exists() {
            tracing::debug!("Found global config: {}", candidate.display());
            return ConfigSource::Global(candidate);
        }
    }

    ConfigSource::Default
}

/// Returns the global config directory path.
///
/// Resolution: `$COMPOSE_LINT_CONFIG_DIR` > `~/.compose-lint/`
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("COMPOSE_LINT_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".compose-lint"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io;
    use tempfile::TempDir;

    #[test]
    fn explicit_takes_priority_over_project() -> io::Result<()> {
        let tmp = TempDir::new()?;
        let explicit = tmp.path().join("custom.toml");
        fs::write(&explicit, "")?;

        let project = tmp.path().join("project");
        fs::create_dir(&project)?;
        fs::write(project.join("compose-lint.toml"), "")?;

        let result = resolve_inner(&project, Some(&explicit), None);
        assert_eq!(result, ConfigSource::Explicit(explicit));
        Ok(())
    }

    #[test]
    fn explicit_does_not_check_existence() {
        let result = resolve_inner(Path::new("/tmp"), Some(Path::new("/nonexistent.toml")), None);
        assert_eq!(result, ConfigSource::Explicit(PathBuf::from("/nonexistent.toml")));
    }

    #[test]
    fn dot_prefixed_project_config_found() -> io::Result<()> {
        let tmp = TempDir::new()?;
        fs::write(tmp.path().join(".compose-lint.toml"), "")?;

        let result = resolve_inner(tmp.path(), None, None);
        assert_eq!(result, ConfigSource::Project(tmp.path().join(".compose-lint.toml")));
        Ok(())
    }

    #[test]
    fn plain_name_preferred_over_dot_prefix() -> io::Result<()> {
        let tmp = TempDir::new()?;
        fs::write(tmp.path().join("compose-lint.toml"), "")?;
        fs::write(tmp.path().join(".compose-lint.toml"), "")?;

        let result = resolve_inner(tmp.path(), None, None);
        assert_eq!(result, ConfigSource::Project(tmp.path().join("compose-lint.toml")));
        Ok(())
    }

    #[test]
    fn global_fallback_when_no_project_config() -> io::Result<()> {
        let project = TempDir::new()?;
        let global = TempDir::new()?;
        fs::write(global.path().join("config.toml"), "")?;

        let result = resolve_inner(project.path(), None, Some(global.path().to_path_buf()));
        assert_eq!(result, ConfigSource::Global(global.path().join("config.toml")));
        assert!(result.is_global());
        Ok(())
    }

    #[test]
    fn global_skipped_when_project_config_exists() -> io::Result<()> {
        let project = TempDir::new()?;
        fs::write(project.path().join("compose-lint.toml"), "")?;
        let global = TempDir::new()?;
        fs::write(global.path().join("config.toml"), "")?;

        let result = resolve_inner(project.path(), None, Some(global.path().to_path_buf()));
        assert!(matches!(result, ConfigSource::Project(_)));
        Ok(())
    }

    #[test]
    fn no_config_anywhere_returns_default() -> io::Result<()> {
        let project = TempDir::new()?;
        let global = TempDir::new()?;

        let result = resolve_inner(project.path(), None, Some(global.path().to_path_buf()));
        assert_eq!(result, ConfigSource::Default);
        assert!(result.path().is_none());
        Ok(())
    }

    #[test]
    fn single_file_target_uses_its_directory() -> io::Result<()> {
        let tmp = TempDir::new()?;
        fs::write(tmp.path().join("compose-lint.toml"), "")?;
        let file = tmp.path().join("Screen.kt");
        fs::write(&file, "")?;

        let result = resolve(&file, None);
        assert_eq!(result, ConfigSource::Project(tmp.path().join("compose-lint.toml")));
        Ok(())
    }
}
