pub mod cli;
pub mod toml_config;

use crate::domain::ports::SourceConfig;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extension, validate_path, validate_positive_number, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ScrapeSource {
    Conference,
    Hackathon,
    All,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "event-scrape")]
#[command(about = "Scrapes AI conference and hackathon listings into CSV/JSON datasets")]
pub struct CliConfig {
    #[arg(long, value_enum, default_value = "all")]
    pub source: ScrapeSource,

    #[arg(long, default_value = ".")]
    pub output_path: String,

    #[arg(long, help = "Optional TOML file overriding the built-in targets")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log system resource usage per phase")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 將 CLI 參數與(選配的)TOML 覆寫檔合成每個來源的設定
    pub fn resolve(&self) -> Result<ResolvedTargets> {
        let mut targets = ResolvedTargets {
            conference: SourceOptions::conference_defaults(&self.output_path),
            hackathon: SourceOptions::hackathon_defaults(&self.output_path),
        };

        if let Some(path) = &self.config {
            let file = toml_config::ScrapeFileConfig::from_file(path)?;
            if let Some(overrides) = &file.conference {
                overrides.apply(&mut targets.conference);
            }
            if let Some(overrides) = &file.hackathon {
                overrides.apply(&mut targets.hackathon);
            }
        }

        Ok(targets)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output_path", &self.output_path)
    }
}

/// The two resolved scrape targets of one invocation.
#[derive(Debug, Clone)]
pub struct ResolvedTargets {
    pub conference: SourceOptions,
    pub hackathon: SourceOptions,
}

/// Resolved configuration for one source, passed into the pipeline
/// entry point. The defaults reproduce the fixed targets the scrapers
/// were written against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceOptions {
    pub listing_url: String,
    pub output_path: String,
    pub csv_filename: String,
    pub json_filename: String,
    pub marker_timeout_secs: u64,
    pub scroll_pause_ms: u64,
    pub max_scroll_rounds: usize,
    pub assumed_year: i32,
    pub domain_label: String,
}

impl SourceOptions {
    pub fn conference_defaults(output_path: &str) -> Self {
        Self {
            listing_url: "https://www.allconferencealert.com/artificial-intelligence/june-2025"
                .to_string(),
            output_path: output_path.to_string(),
            csv_filename: "allconferencealert_june2025_full.csv".to_string(),
            json_filename: "allconferencealert_june2025_full.json".to_string(),
            marker_timeout_secs: 20,
            scroll_pause_ms: 1500,
            max_scroll_rounds: 40,
            assumed_year: 2025,
            domain_label: String::new(),
        }
    }

    pub fn hackathon_defaults(output_path: &str) -> Self {
        Self {
            listing_url: "https://devpost.com/hackathons?themes[]=Machine%20Learning%2FAI"
                .to_string(),
            output_path: output_path.to_string(),
            csv_filename: "ml_ai_hackathons_final.csv".to_string(),
            json_filename: "ml_ai_hackathons_final.json".to_string(),
            marker_timeout_secs: 20,
            scroll_pause_ms: 1500,
            max_scroll_rounds: 40,
            assumed_year: 2025,
            domain_label: "Machine Learning/AI".to_string(),
        }
    }
}

impl SourceConfig for SourceOptions {
    fn listing_url(&self) -> &str {
        &self.listing_url
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn csv_filename(&self) -> &str {
        &self.csv_filename
    }

    fn json_filename(&self) -> &str {
        &self.json_filename
    }

    fn marker_timeout(&self) -> Duration {
        Duration::from_secs(self.marker_timeout_secs)
    }

    fn scroll_pause(&self) -> Duration {
        Duration::from_millis(self.scroll_pause_ms)
    }

    fn max_scroll_rounds(&self) -> usize {
        self.max_scroll_rounds
    }

    fn assumed_year(&self) -> i32 {
        self.assumed_year
    }

    fn domain_label(&self) -> &str {
        &self.domain_label
    }
}

impl Validate for SourceOptions {
    fn validate(&self) -> Result<()> {
        validate_url("listing_url", &self.listing_url)?;
        validate_path("output_path", &self.output_path)?;
        validate_file_extension("csv_filename", &self.csv_filename, "csv")?;
        validate_file_extension("json_filename", &self.json_filename, "json")?;
        validate_positive_number("max_scroll_rounds", self.max_scroll_rounds, 1)?;
        validate_positive_number("marker_timeout_secs", self.marker_timeout_secs as usize, 1)?;
        Ok(())
    }
}
