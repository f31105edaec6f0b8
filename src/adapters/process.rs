use crate::domain::model::ToolCommand;
use crate::domain::ports::ToolRunner;
use crate::utils::error::{CogError, Result};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

/// Spawns the tool as a child that shares our stdio, so GDAL's own progress
/// and error output reach the terminal untouched.
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ToolRunner for ProcessRunner {
    async fn run(&self, command: &ToolCommand) -> Result<Option<i32>> {
        tracing::debug!("Running: {}", command);

        let status = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| CogError::Spawn {
                tool: command.program_name(),
                source,
            })?;

        tracing::debug!("{} finished with {}", command.program_name(), status);
        Ok(status.code())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reports_exit_code() {
        let runner = ProcessRunner::new();
        let ok = ToolCommand::new("sh").args(["-c", "exit 0"]);
        let failed = ToolCommand::new("sh").args(["-c", "exit 3"]);

        assert_eq!(runner.run(&ok).await.unwrap(), Some(0));
        assert_eq!(runner.run(&failed).await.unwrap(), Some(3));
    }

    #[tokio::test]
    async fn test_unstartable_program_is_spawn_error() {
        let runner = ProcessRunner::new();
        let command = ToolCommand::new("/nonexistent/gdal_translate");

        let err = runner.run(&command).await.unwrap_err();
        assert!(matches!(err, CogError::Spawn { .. }));
    }
}
