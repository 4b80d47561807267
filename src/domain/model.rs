use serde::{Deserialize, Serialize};
use std::fmt;

/// 列表頁抓到的會議項目（最小欄位）
#[derive(Debug, Clone, PartialEq)]
pub struct ConferenceListing {
    pub name: String,
    pub listing_date: String,
    pub venue: String,
    pub link: String,
}

/// Enrichment fields from one conference detail page.
/// `None` means the label was never located on the page, as opposed to a
/// label found with an empty value; both collapse to "" in the output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConferenceDetail {
    pub submission_deadline: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Final conference dataset row. Field declaration order fixes both the
/// CSV column order and the JSON key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConferenceRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Listing Date")]
    pub listing_date: String,
    #[serde(rename = "Venue")]
    pub venue: String,
    #[serde(rename = "Submission Deadline")]
    pub submission_deadline: String,
    #[serde(rename = "Conference Start Date")]
    pub start_date: String,
    #[serde(rename = "Conference End Date")]
    pub end_date: String,
    #[serde(rename = "Link")]
    pub link: String,
}

impl ConferenceRow {
    pub fn assemble(item: ConferenceListing, detail: ConferenceDetail) -> Self {
        // 缺少的欄位一律輸出空字串
        Self {
            name: item.name,
            listing_date: item.listing_date,
            venue: item.venue,
            submission_deadline: detail.submission_deadline.unwrap_or_default(),
            start_date: detail.start_date.unwrap_or_default(),
            end_date: detail.end_date.unwrap_or_default(),
            link: item.link,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventMode {
    Online,
    Offline,
}

impl fmt::Display for EventMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventMode::Online => write!(f, "Online"),
            EventMode::Offline => write!(f, "Offline"),
        }
    }
}

/// 列表頁抓到的黑客松項目
#[derive(Debug, Clone, PartialEq)]
pub struct HackathonListing {
    pub name: String,
    pub link: String,
    pub mode: EventMode,
}

/// Enrichment fields from one hackathon detail page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HackathonDetail {
    pub deadline: Option<String>,
    pub prize: Option<String>,
    pub description: String,
}

/// Final hackathon dataset row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HackathonRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Domain")]
    pub domain: String,
    #[serde(rename = "Deadline")]
    pub deadline: String,
    pub mode: EventMode,
    #[serde(rename = "Prize")]
    pub prize: String,
    #[serde(rename = "Link")]
    pub link: String,
    pub description: String,
}

/// What one pipeline run produced, for the operator summary.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub source: String,
    pub records: usize,
    pub csv_path: String,
    pub json_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_collapses_missing_fields_to_empty() {
        let item = ConferenceListing {
            name: "AI Summit".to_string(),
            listing_date: "Jun 01, 2025".to_string(),
            venue: "Berlin".to_string(),
            link: "https://example.com/ai-summit".to_string(),
        };
        let detail = ConferenceDetail {
            submission_deadline: Some("May 15, 2025".to_string()),
            start_date: None,
            end_date: None,
        };

        let row = ConferenceRow::assemble(item, detail);
        assert_eq!(row.submission_deadline, "May 15, 2025");
        assert_eq!(row.start_date, "");
        assert_eq!(row.end_date, "");
        assert_eq!(row.link, "https://example.com/ai-summit");
    }

    #[test]
    fn test_event_mode_display() {
        assert_eq!(EventMode::Online.to_string(), "Online");
        assert_eq!(EventMode::Offline.to_string(), "Offline");
    }
}
