use crate::core::preflight::Preflight;
use crate::core::{CogRequest, Pipeline, Result, Stage, ToolLocator, ToolProvider};
use crate::utils::monitor::SystemMonitor;
use std::path::PathBuf;
use std::sync::Mutex;

/// Runs preflight, conversion and overview building in order, stopping at
/// the first failure.
pub struct CogEngine<P: Pipeline, L: ToolLocator, T: ToolProvider> {
    pipeline: P,
    preflight: Preflight<L, T>,
    monitor: SystemMonitor,
    stage: Mutex<Stage>,
}

impl<P: Pipeline, L: ToolLocator, T: ToolProvider> CogEngine<P, L, T> {
    pub fn new(pipeline: P, preflight: Preflight<L, T>) -> Self {
        Self::new_with_monitoring(pipeline, preflight, false)
    }

    pub fn new_with_monitoring(pipeline: P, preflight: Preflight<L, T>, monitor: bool) -> Self {
        Self {
            pipeline,
            preflight,
            monitor: SystemMonitor::new(monitor),
            stage: Mutex::new(Stage::Start),
        }
    }

    /// Last stage reached by `run`.
    pub fn stage(&self) -> Stage {
        self.stage.lock().map(|s| *s).unwrap_or(Stage::Failed)
    }

    fn set_stage(&self, stage: Stage) {
        if let Ok(mut current) = self.stage.lock() {
            tracing::debug!("Stage: {} -> {}", *current, stage);
            *current = stage;
        }
        self.monitor.log_stats(&stage.to_string());
    }

    fn advance(&self) {
        self.set_stage(self.stage().next());
    }

    /// `request` is `None` when fewer than two positionals were given; that
    /// is only reported once the tool check has passed.
    pub async fn run(&self, program: &str, request: Option<CogRequest>) -> Result<PathBuf> {
        match self.run_stages(program, request).await {
            Ok(output) => {
                self.monitor.log_final_stats();
                Ok(output)
            }
            Err(e) => {
                tracing::error!("Run failed after stage '{}': {}", self.stage(), e);
                self.set_stage(Stage::Failed);
                Err(e)
            }
        }
    }

    async fn run_stages(&self, program: &str, request: Option<CogRequest>) -> Result<PathBuf> {
        self.set_stage(Stage::Start);

        self.preflight.check_tool()?;
        self.advance();

        let request = self.preflight.check_args(program, request)?;
        self.advance();

        self.preflight.check_input(&request)?;
        self.advance();

        println!("Converting to COG...");
        self.pipeline.convert(&request).await?;
        self.advance();

        println!("Building overviews...");
        self.pipeline.build_overviews(&request).await?;
        self.advance();

        println!("Done: {}", request.output.display());
        self.advance();

        Ok(request.output)
    }
}
