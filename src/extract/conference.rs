use crate::domain::model::{ConferenceDetail, ConferenceListing};
use crate::extract::dates::normalize_listing_date;
use crate::extract::{absolutize, collapsed_text};
use scraper::{Html, Selector};

/// Defining DOM element of the conference listing page.
pub const LISTING_MARKER: &str = "table";

/// Parse the rendered listing table: one row per conference, skipping the
/// header row and any row with fewer than three cells.
pub fn parse_listing(html: &str, base_url: &str, assumed_year: i32) -> Vec<ConferenceListing> {
    let doc = Html::parse_document(html);
    let table_sel = Selector::parse("table").unwrap();
    let tr_sel = Selector::parse("tr").unwrap();
    let td_sel = Selector::parse("td").unwrap();
    let a_sel = Selector::parse("a").unwrap();

    let Some(table) = doc.select(&table_sel).next() else {
        return Vec::new();
    };

    let mut listing = Vec::new();
    for tr in table.select(&tr_sel).skip(1) {
        let tds: Vec<_> = tr.select(&td_sel).collect();
        if tds.len() < 3 {
            continue;
        }

        // 第一欄是 "01 Jun" 這類的日期,第二欄是會議連結,第三欄是地點
        let raw_date = collapsed_text(tds[0]);
        let Some(anchor) = tds[1].select(&a_sel).next() else {
            continue;
        };
        let Some(link) = absolutize(base_url, anchor.value().attr("href").unwrap_or("")) else {
            continue;
        };

        listing.push(ConferenceListing {
            name: collapsed_text(anchor),
            listing_date: normalize_listing_date(&raw_date, assumed_year),
            venue: collapsed_text(tds[2]),
            link,
        });
    }

    listing
}

/// Pull dates and deadlines out of the detail page's `li` items. A label
/// without a colon yields an empty value; when a label repeats, the last
/// occurrence wins.
pub fn parse_detail(html: &str) -> ConferenceDetail {
    let doc = Html::parse_document(html);
    let li_sel = Selector::parse("li").unwrap();

    let mut detail = ConferenceDetail::default();
    for li in doc.select(&li_sel) {
        let txt = collapsed_text(li);
        if txt.contains("Deadline for submission") || txt.starts_with("Deadline") {
            detail.submission_deadline = Some(value_after_colon(&txt));
        } else if txt.starts_with("Conference start date") {
            detail.start_date = Some(value_after_colon(&txt));
        } else if txt.starts_with("Conference end date") {
            detail.end_date = Some(value_after_colon(&txt));
        }
    }

    detail
}

fn value_after_colon(text: &str) -> String {
    text.split_once(':')
        .map(|(_, value)| value.trim().to_string())
        .unwrap_or_default()
}
