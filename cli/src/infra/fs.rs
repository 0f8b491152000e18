//! Filesystem infrastructure — implements `PathProbe` and locates the
//! dispatcher on disk.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::PathProbe;

/// Production filesystem implementation of `PathProbe`.
pub struct LocalFs;

impl PathProbe for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn search_path(&self, name: &str, path_var: &str) -> Option<PathBuf> {
        std::env::split_paths(path_var)
            .map(|dir| dir.join(name))
            .find(|candidate| is_executable_file(candidate))
    }
}

fn is_executable_file(path: &Path) -> bool {
    let Ok(meta) = std::fs::metadata(path) else {
        return false;
    };
    if !meta.is_file() {
        return false;
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        meta.permissions().mode() & 0o111 != 0
    }
    #[cfg(not(unix))]
    {
        true
    }
}

/// Directory containing the running dispatcher executable.
///
/// # Errors
///
/// Returns an error if the executable path cannot be determined.
pub fn dispatcher_base_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("cannot determine dispatcher location")?;
    exe.parent()
        .map(Path::to_path_buf)
        .with_context(|| format!("{} has no parent directory", exe.display()))
}
