use crate::domain::model::{EventMode, HackathonDetail, HackathonListing};
use crate::extract::{absolutize, collapsed_text, visible_text};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

/// Defining DOM element of the hackathon listing page; either tile markup
/// generation may be live.
pub const LISTING_MARKER: &str = "a.tile-anchor, div[class*='HackathonTile'] a";

const TILE_SELECTOR: &str = "a.tile-anchor";
const TILE_FALLBACK_SELECTOR: &str = "div[class*='HackathonTile'] a";

/// Marker for a loaded detail page.
pub const DETAIL_MARKER: &str = "#introduction";

const DESCRIPTION_SELECTOR: &str = "#introduction .large-8.columns.content";
const SIDEBAR_SELECTOR: &str = "#introduction .large-4.columns";

// 標籤式寫法:"Deadline" 與日期之間隔著換行或冒號
static DEADLINE_LABELED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Deadline\s*[:\n]([A-Za-z]+ \d{1,2}, ?\d{4} @ [0-9:apmGMT+\-: ]+)").unwrap()
});

// 退而求其次:頁面上任何 "Month Day, Year @ time" 樣式
static DEADLINE_BARE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z][a-z]+ \d{1,2}, ?\d{4} @ [0-9:apmGMT+\-: ]+)").unwrap());

static PRIZE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\$\d[\d,]*(?:\s?in cash)?)").unwrap());

/// Parse the scrolled-out listing page into hackathon tiles, in page order.
pub fn parse_listing(html: &str, base_url: &str) -> Vec<HackathonListing> {
    let doc = Html::parse_document(html);
    let primary = Selector::parse(TILE_SELECTOR).unwrap();
    let fallback = Selector::parse(TILE_FALLBACK_SELECTOR).unwrap();
    let h2_sel = Selector::parse("h2").unwrap();

    let mut anchors: Vec<ElementRef> = doc.select(&primary).collect();
    if anchors.is_empty() {
        anchors = doc.select(&fallback).collect();
    }

    let mut listing = Vec::new();
    for anchor in anchors {
        let Some(link) = absolutize(base_url, anchor.value().attr("href").unwrap_or("")) else {
            continue;
        };

        let name = anchor
            .select(&h2_sel)
            .next()
            .map(collapsed_text)
            .unwrap_or_else(|| "N/A".to_string());

        listing.push(HackathonListing {
            name,
            link,
            mode: classify_mode(&collapsed_text(anchor)),
        });
    }

    listing
}

/// A tile mentioning "Online" anywhere in its visible text is an online
/// event; everything else counts as offline.
pub fn classify_mode(text: &str) -> EventMode {
    if text.contains("Online") {
        EventMode::Online
    } else {
        EventMode::Offline
    }
}

/// Extract description and sidebar fields from a rendered detail page.
/// Every field is independently best-effort; a page without the sidebar
/// falls back to matching over the whole page text.
pub fn parse_detail(html: &str) -> HackathonDetail {
    let doc = Html::parse_document(html);
    let desc_sel = Selector::parse(DESCRIPTION_SELECTOR).unwrap();
    let sidebar_sel = Selector::parse(SIDEBAR_SELECTOR).unwrap();

    let description = doc
        .select(&desc_sel)
        .next()
        .map(visible_text)
        .unwrap_or_default();

    let sidebar_text = match doc.select(&sidebar_sel).next() {
        Some(sidebar) => visible_text(sidebar),
        None => visible_text(doc.root_element()),
    };

    HackathonDetail {
        deadline: extract_deadline(&sidebar_text),
        prize: extract_prize(&sidebar_text),
        description,
    }
}

/// First the labeled pattern, then the bare date-at-time pattern.
pub fn extract_deadline(text: &str) -> Option<String> {
    DEADLINE_LABELED
        .captures(text)
        .or_else(|| DEADLINE_BARE.captures(text))
        .map(|caps| caps[1].trim().to_string())
}

/// "$140,000 in cash" or any bare `$`-amount.
pub fn extract_prize(text: &str) -> Option<String> {
    PRIZE.captures(text).map(|caps| caps[1].trim().to_string())
}

/// The first description line overrides the tile name; the remaining
/// lines form the stored description body. `None` for an empty
/// description (keep the tile name).
pub fn split_name_from_description(description: &str) -> Option<(String, String)> {
    let mut lines = description.lines();
    let first = lines.next()?;
    let body = lines.collect::<Vec<_>>().join("\n").trim().to_string();
    Some((first.trim().to_string(), body))
}
