use crate::utils::error::{CogError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Directories and dangling symlinks do not count.
pub fn validate_regular_file(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(CogError::InputNotFound {
            path: path.to_path_buf(),
        })
    }
}
