use crate::config::SourceOptions;
use crate::utils::error::{Result, ScrapeError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional override file. Only the keys present override the built-in
/// defaults; everything else keeps its default value.
///
/// ```toml
/// [conference]
/// listing_url = "https://www.allconferencealert.com/artificial-intelligence/july-2025"
/// assumed_year = 2025
///
/// [hackathon]
/// csv_filename = "hackathons.csv"
/// max_scroll_rounds = 80
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScrapeFileConfig {
    pub conference: Option<SourceOverrides>,
    pub hackathon: Option<SourceOverrides>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceOverrides {
    pub listing_url: Option<String>,
    pub csv_filename: Option<String>,
    pub json_filename: Option<String>,
    pub marker_timeout_secs: Option<u64>,
    pub scroll_pause_ms: Option<u64>,
    pub max_scroll_rounds: Option<usize>,
    pub assumed_year: Option<i32>,
    pub domain_label: Option<String>,
}

impl ScrapeFileConfig {
    /// 從 TOML 檔案載入覆寫
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析覆寫
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ScrapeError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

impl SourceOverrides {
    pub fn apply(&self, options: &mut SourceOptions) {
        if let Some(listing_url) = &self.listing_url {
            options.listing_url = listing_url.clone();
        }
        if let Some(csv_filename) = &self.csv_filename {
            options.csv_filename = csv_filename.clone();
        }
        if let Some(json_filename) = &self.json_filename {
            options.json_filename = json_filename.clone();
        }
        if let Some(marker_timeout_secs) = self.marker_timeout_secs {
            options.marker_timeout_secs = marker_timeout_secs;
        }
        if let Some(scroll_pause_ms) = self.scroll_pause_ms {
            options.scroll_pause_ms = scroll_pause_ms;
        }
        if let Some(max_scroll_rounds) = self.max_scroll_rounds {
            options.max_scroll_rounds = max_scroll_rounds;
        }
        if let Some(assumed_year) = self.assumed_year {
            options.assumed_year = assumed_year;
        }
        if let Some(domain_label) = &self.domain_label {
            options.domain_label = domain_label.clone();
        }
    }
}
