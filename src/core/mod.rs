pub mod conference;
pub mod etl;
pub mod hackathon;
pub mod output;

pub use crate::domain::model::RunSummary;
pub use crate::domain::ports::{Pipeline, SourceConfig, Storage};
pub use crate::utils::error::Result;
