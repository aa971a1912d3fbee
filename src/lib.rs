pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::cli::{LocalSink, StdoutSink};
pub use crate::core::{classifier::classify, engine::ClassifyEngine, pipeline::SimplePipeline};
pub use domain::model::{Category, Classification, ClassifyJob};
pub use utils::error::{ClassifyError, Result};
