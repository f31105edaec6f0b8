use crate::domain::model::{CogRequest, ToolCommand};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Names of the GDAL executables a run depends on.
pub trait ToolProvider: Send + Sync {
    fn probe_tool(&self) -> &str;
    fn translate_tool(&self) -> &str;
    fn overview_tool(&self) -> &str;
}

/// Finds executables without running them.
pub trait ToolLocator: Send + Sync {
    fn locate(&self, tool: &str) -> Option<PathBuf>;
}

/// Runs a command to completion and returns its exit code. `None` means the
/// child ended without one (killed by a signal).
#[async_trait]
pub trait ToolRunner: Send + Sync {
    async fn run(&self, command: &ToolCommand) -> Result<Option<i32>>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn convert(&self, request: &CogRequest) -> Result<()>;
    async fn build_overviews(&self, request: &CogRequest) -> Result<()>;
}
