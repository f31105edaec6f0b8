use crate::domain::ports::ToolLocator;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Looks tools up the way a shell's `command -v` does: first executable
/// regular file along the search path wins.
#[derive(Debug, Clone, Default)]
pub struct PathLocator {
    search_path: Option<OsString>,
}

impl PathLocator {
    /// Searches the process's `PATH` at lookup time.
    pub fn from_env() -> Self {
        Self { search_path: None }
    }

    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
        }
    }

    fn candidates(dir: &Path, tool: &str) -> Vec<PathBuf> {
        #[cfg(windows)]
        {
            vec![dir.join(tool), dir.join(format!("{}.exe", tool))]
        }
        #[cfg(not(windows))]
        {
            vec![dir.join(tool)]
        }
    }
}

impl ToolLocator for PathLocator {
    fn locate(&self, tool: &str) -> Option<PathBuf> {
        // A name with a separator is taken as a path, not searched for.
        if tool.contains(std::path::MAIN_SEPARATOR) || tool.contains('/') {
            let path = PathBuf::from(tool);
            return is_executable(&path).then_some(path);
        }

        let search_path = match &self.search_path {
            Some(path) => path.clone(),
            None => std::env::var_os("PATH")?,
        };

        std::env::split_paths(&search_path)
            .filter(|dir| !dir.as_os_str().is_empty())
            .flat_map(|dir| Self::candidates(&dir, tool))
            .find(|candidate| is_executable(candidate))
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
