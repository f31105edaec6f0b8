use std::path::PathBuf;
use thiserror::Error;

pub const INSTALL_HINT: &str =
    "Install GDAL (e.g. 'sudo apt install gdal-bin' or 'brew install gdal') and make sure it is on PATH.";

#[derive(Error, Debug)]
pub enum CogError {
    #[error("{tool} not found on PATH")]
    ToolNotFound { tool: String },

    #[error("expected <input.tif> <output_cog.tif>")]
    Usage { program: String },

    #[error("input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("failed to start {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} exited with status {code}")]
    ToolFailed { tool: String, code: i32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CogError {
    /// Process exit status for this failure. Tool failures propagate the
    /// child's own status; everything else is 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            CogError::ToolFailed { code, .. } if *code != 0 => *code,
            _ => 1,
        }
    }

    /// Line printed to stdout, or `None` when the external tool's own
    /// diagnostics are all the user gets.
    pub fn user_message(&self) -> Option<String> {
        match self {
            CogError::ToolNotFound { tool } => {
                Some(format!("Error: {} not found. {}", tool, INSTALL_HINT))
            }
            CogError::Usage { program } => {
                Some(format!("Usage: {} <input.tif> <output_cog.tif>", program))
            }
            CogError::InputNotFound { path } => {
                Some(format!("Error: input file not found: {}", path.display()))
            }
            CogError::Spawn { tool, source } => {
                Some(format!("Error: could not run {}: {}", tool, source))
            }
            CogError::ToolFailed { .. } => None,
            CogError::Io(e) => Some(format!("Error: {}", e)),
        }
    }
}

pub type Result<T> = std::result::Result<T, CogError>;
