use crate::utils::error::Result;
use crate::utils::validation::{validate_regular_file, Validate};
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

/// The two positional arguments of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CogRequest {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl CogRequest {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

/// Only the input is checked; the output path goes to GDAL as given.
impl Validate for CogRequest {
    fn validate(&self) -> Result<()> {
        validate_regular_file(&self.input)
    }
}

/// Progress through a run. Stages only ever advance; any failure ends in
/// `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Start,
    ToolChecked,
    ArgsChecked,
    InputChecked,
    Converted,
    OverviewsBuilt,
    Done,
    Failed,
}

impl Stage {
    pub fn next(self) -> Stage {
        match self {
            Stage::Start => Stage::ToolChecked,
            Stage::ToolChecked => Stage::ArgsChecked,
            Stage::ArgsChecked => Stage::InputChecked,
            Stage::InputChecked => Stage::Converted,
            Stage::Converted => Stage::OverviewsBuilt,
            Stage::OverviewsBuilt => Stage::Done,
            Stage::Done => Stage::Done,
            Stage::Failed => Stage::Failed,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Stage::Done | Stage::Failed)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Start => "start",
            Stage::ToolChecked => "tool checked",
            Stage::ArgsChecked => "arguments checked",
            Stage::InputChecked => "input checked",
            Stage::Converted => "converted",
            Stage::OverviewsBuilt => "overviews built",
            Stage::Done => "done",
            Stage::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// A program plus its ordered arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: OsString,
    pub args: Vec<OsString>,
}

impl ToolCommand {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Creation options for the COG driver. Fixed; changing them means editing
/// these constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CogOptions {
    pub format: &'static str,
    pub compress: &'static str,
    pub predictor: u8,
    pub bigtiff: &'static str,
    pub num_threads: &'static str,
}

impl CogOptions {
    pub const FIXED: CogOptions = CogOptions {
        format: "COG",
        compress: "DEFLATE",
        predictor: 2,
        bigtiff: "IF_SAFER",
        num_threads: "ALL_CPUS",
    };

    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec!["-of".to_string(), self.format.to_string()];
        for creation_option in [
            format!("COMPRESS={}", self.compress),
            format!("PREDICTOR={}", self.predictor),
            format!("BIGTIFF={}", self.bigtiff),
            format!("NUM_THREADS={}", self.num_threads),
        ] {
            args.push("-co".to_string());
            args.push(creation_option);
        }
        args
    }

    pub fn translate_command(&self, program: &str, request: &CogRequest) -> ToolCommand {
        ToolCommand::new(program)
            .arg(request.input.as_os_str())
            .arg(request.output.as_os_str())
            .args(self.to_args())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverviewOptions {
    pub resampling: &'static str,
    pub factors: [u32; 4],
}

impl OverviewOptions {
    pub const FIXED: OverviewOptions = OverviewOptions {
        resampling: "average",
        factors: [2, 4, 8, 16],
    };

    pub fn addo_command(&self, program: &str, target: &Path) -> ToolCommand {
        ToolCommand::new(program)
            .arg("-r")
            .arg(self.resampling)
            .arg(target.as_os_str())
            .args(self.factors.iter().map(|f| f.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_strings(command: &ToolCommand) -> Vec<String> {
        command
            .args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_translate_command_layout() {
        let request = CogRequest::new("scene.tif", "scene_cog.tif");
        let command = CogOptions::FIXED.translate_command("gdal_translate", &request);

        assert_eq!(command.program_name(), "gdal_translate");
        assert_eq!(
            as_strings(&command),
            vec![
                "scene.tif",
                "scene_cog.tif",
                "-of",
                "COG",
                "-co",
                "COMPRESS=DEFLATE",
                "-co",
                "PREDICTOR=2",
                "-co",
                "BIGTIFF=IF_SAFER",
                "-co",
                "NUM_THREADS=ALL_CPUS",
            ]
        );
    }

    #[test]
    fn test_addo_command_layout() {
        let command = OverviewOptions::FIXED.addo_command("gdaladdo", Path::new("scene_cog.tif"));
        assert_eq!(
            command.to_string(),
            "gdaladdo -r average scene_cog.tif 2 4 8 16"
        );
    }

    #[test]
    fn test_stages_only_advance() {
        let mut stage = Stage::Start;
        let mut seen = vec![stage];
        while !stage.is_terminal() {
            let next = stage.next();
            assert!(next > stage);
            stage = next;
            seen.push(stage);
        }
        assert_eq!(seen.last(), Some(&Stage::Done));
        assert_eq!(seen.len(), 7);
        assert_eq!(Stage::Failed.next(), Stage::Failed);
    }

    #[test]
    fn test_request_validation() {
        let dir = tempfile::TempDir::new().unwrap();
        let input = dir.path().join("scene.tif");
        std::fs::write(&input, b"II*\0").unwrap();

        assert!(CogRequest::new(&input, dir.path().join("out.tif"))
            .validate()
            .is_ok());
        assert!(CogRequest::new(dir.path().join("nope.tif"), "out.tif")
            .validate()
            .is_err());
        assert!(CogRequest::new(&input, "").validate().is_ok());
    }
}
