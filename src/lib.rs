pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{parse_args, CliArgs, CliConfig};

pub use adapters::{PathLocator, ProcessRunner};
pub use config::GdalTools;
pub use crate::core::{engine::CogEngine, pipeline::GdalPipeline, preflight::Preflight};
pub use domain::model::{CogRequest, Stage};
pub use utils::error::{CogError, Result};
