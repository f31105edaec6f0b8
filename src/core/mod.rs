pub mod engine;
pub mod pipeline;
pub mod preflight;

pub use crate::domain::model::{CogOptions, CogRequest, OverviewOptions, Stage, ToolCommand};
pub use crate::domain::ports::{Pipeline, ToolLocator, ToolProvider, ToolRunner};
pub use crate::utils::error::Result;
