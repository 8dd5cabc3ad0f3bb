//! Configuration file resolution with global fallback.
//!
//! Priority order:
//!
//! 1. `--config` flag (explicit path, trusted as-is)
//! 2. `{project}/docstyle.toml`, then `{project}/.docstyle.toml`
//! 3. `$DOCSTYLE_CONFIG_DIR/config.toml` or `~/.docstyle/config.toml`
//! 4. Nothing found → built-in defaults

use std::path::{Path, PathBuf};

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly specified via `--config` flag.
    Explicit(PathBuf),
    /// Found in the project directory.
    Project(PathBuf),
    /// Loaded from the global config directory.
    Global(PathBuf),
    /// No config found; built-in defaults apply.
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

    /// Returns `true` if the config came from the global directory.
    #[must_use]
    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global(_))
    }
}

/// Resolves the configuration file path for a project directory.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_with_global(project_dir, explicit, global_config_dir())
}

/// Resolution core, parameterized over the global directory so tests do
/// not race on environment variables.
fn resolve_with_global(
    project_dir: &Path,
    explicit: Option<&Path>,
    global_dir: Option<PathBuf>,
) -> ConfigSource {
    if let Some(p) = explicit {
        // The caller surfaces a read error if the path is bogus.
        return ConfigSource::Explicit(p.to_path_buf());
    }

    let project = ["docstyle.toml", ".docstyle.toml"]
        .iter()
        .map(|name| project_dir.join(name))
        .find(|candidate| candidate.exists());
    if let Some(found) = project {
        tracing::debug!("using project config: {}", found.display());
        return ConfigSource::Project(found);
    }

    if let Some(found) = global_dir
        .map(|dir| dir.join("config.toml"))
        .filter(|candidate| candidate.exists())
    {
        tracing::debug!("using global config: {}", found.display());
        return ConfigSource::Global(found);
    }

    ConfigSource::Default
}

/// Returns the global config directory: `$DOCSTYLE_CONFIG_DIR` if set,
/// otherwise `~/.docstyle`.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    std::env::var("DOCSTYLE_CONFIG_DIR")
        .map(PathBuf::from)
        .ok()
        .or_else(|| home::home_dir().map(|h| h.join(".docstyle")))
}
