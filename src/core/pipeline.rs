use crate::core::{
    CogOptions, CogRequest, OverviewOptions, Pipeline, ToolCommand, ToolProvider, ToolRunner,
};
use crate::utils::error::{CogError, Result};

/// Drives `gdal_translate` then `gdaladdo` with the fixed option sets.
pub struct GdalPipeline<R: ToolRunner, T: ToolProvider> {
    runner: R,
    tools: T,
    cog: CogOptions,
    overviews: OverviewOptions,
}

impl<R: ToolRunner, T: ToolProvider> GdalPipeline<R, T> {
    pub fn new(runner: R, tools: T) -> Self {
        Self {
            runner,
            tools,
            cog: CogOptions::FIXED,
            overviews: OverviewOptions::FIXED,
        }
    }

    async fn run_checked(&self, command: ToolCommand) -> Result<()> {
        let tool = command.program_name();
        match self.runner.run(&command).await? {
            Some(0) => Ok(()),
            Some(code) => Err(CogError::ToolFailed { tool, code }),
            None => {
                tracing::warn!("{} terminated without an exit status", tool);
                Err(CogError::ToolFailed { tool, code: 1 })
            }
        }
    }
}

#[async_trait::async_trait]
impl<R: ToolRunner, T: ToolProvider> Pipeline for GdalPipeline<R, T> {
    async fn convert(&self, request: &CogRequest) -> Result<()> {
        let command = self
            .cog
            .translate_command(self.tools.translate_tool(), request);
        self.run_checked(command).await
    }

    async fn build_overviews(&self, request: &CogRequest) -> Result<()> {
        let command = self
            .overviews
            .addo_command(self.tools.overview_tool(), &request.output);
        self.run_checked(command).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GdalTools;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockRunner {
        calls: Arc<Mutex<Vec<ToolCommand>>>,
        exit_codes: HashMap<String, Option<i32>>,
    }

    impl MockRunner {
        fn failing(tool: &str, code: Option<i32>) -> Self {
            let mut runner = Self::default();
            runner.exit_codes.insert(tool.to_string(), code);
            runner
        }
    }

    #[async_trait::async_trait]
    impl ToolRunner for MockRunner {
        async fn run(&self, command: &ToolCommand) -> Result<Option<i32>> {
            self.calls.lock().await.push(command.clone());
            Ok(*self
                .exit_codes
                .get(&command.program_name())
                .unwrap_or(&Some(0)))
        }
    }

    #[tokio::test]
    async fn test_convert_runs_translate_with_fixed_options() {
        let runner = MockRunner::default();
        let pipeline = GdalPipeline::new(runner.clone(), GdalTools::default());
        let request = CogRequest::new("scene.tif", "scene_cog.tif");

        pipeline.convert(&request).await.unwrap();

        let calls = runner.calls.lock().await;
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0].to_string(),
            "gdal_translate scene.tif scene_cog.tif -of COG -co COMPRESS=DEFLATE \
             -co PREDICTOR=2 -co BIGTIFF=IF_SAFER -co NUM_THREADS=ALL_CPUS"
        );
    }

    #[tokio::test]
    async fn test_overviews_target_the_output() {
        let runner = MockRunner::default();
        let pipeline = GdalPipeline::new(runner.clone(), GdalTools::default());
        let request = CogRequest::new("scene.tif", "scene_cog.tif");

        pipeline.build_overviews(&request).await.unwrap();

        let calls = runner.calls.lock().await;
        assert_eq!(
            calls[0].to_string(),
            "gdaladdo -r average scene_cog.tif 2 4 8 16"
        );
    }

    #[tokio::test]
    async fn test_non_zero_exit_becomes_tool_failure() {
        let pipeline = GdalPipeline::new(
            MockRunner::failing("gdal_translate", Some(5)),
            GdalTools::default(),
        );
        let err = pipeline
            .convert(&CogRequest::new("a.tif", "b.tif"))
            .await
            .unwrap_err();

        match err {
            CogError::ToolFailed { tool, code } => {
                assert_eq!(tool, "gdal_translate");
                assert_eq!(code, 5);
            }
            other => panic!("expected ToolFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_signal_termination_exits_with_one() {
        let pipeline = GdalPipeline::new(
            MockRunner::failing("gdaladdo", None),
            GdalTools::default(),
        );
        let err = pipeline
            .build_overviews(&CogRequest::new("a.tif", "b.tif"))
            .await
            .unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }
}
