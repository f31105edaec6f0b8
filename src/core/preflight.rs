use crate::core::{CogRequest, ToolLocator, ToolProvider};
use crate::utils::error::{CogError, Result};
use crate::utils::validation::Validate;
use std::path::PathBuf;

/// The three checks that run before any tool is invoked. Nothing here
/// executes a program; the tool check only looks on the search path.
pub struct Preflight<L: ToolLocator, T: ToolProvider> {
    locator: L,
    tools: T,
}

impl<L: ToolLocator, T: ToolProvider> Preflight<L, T> {
    pub fn new(locator: L, tools: T) -> Self {
        Self { locator, tools }
    }

    pub fn check_tool(&self) -> Result<PathBuf> {
        let tool = self.tools.probe_tool();
        match self.locator.locate(tool) {
            Some(path) => {
                tracing::debug!("Found {} at {}", tool, path.display());
                Ok(path)
            }
            None => Err(CogError::ToolNotFound {
                tool: tool.to_string(),
            }),
        }
    }

    pub fn check_args(&self, program: &str, request: Option<CogRequest>) -> Result<CogRequest> {
        request.ok_or_else(|| CogError::Usage {
            program: program.to_string(),
        })
    }

    pub fn check_input(&self, request: &CogRequest) -> Result<()> {
        request.validate()
    }
}
