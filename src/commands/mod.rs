pub mod configure;
pub mod generate;

pub use configure::configure_settings;
pub use generate::{GeneratePipeline, PipelineOutcome};
