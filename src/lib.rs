pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod extract;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::{cli::LocalStorage, ScrapeSource, SourceOptions};

pub use crate::core::{
    conference::ConferencePipeline, etl::ScrapeEngine, hackathon::HackathonPipeline,
};
pub use crate::domain::model::RunSummary;
pub use crate::utils::error::{Result, ScrapeError};
