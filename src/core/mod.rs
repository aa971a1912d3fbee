pub mod classifier;
pub mod engine;
pub mod pipeline;
pub mod render;

pub use crate::domain::model::{Category, Classification, ClassifyJob};
pub use crate::domain::ports::{ConfigProvider, Pipeline, ReportSink};
pub use crate::utils::error::Result;
