// Extraction layer: pure parsers over fetched or rendered markup. One
// pattern-matcher per field, so individual patterns can be updated as the
// source markup drifts without touching the pipelines.

pub mod conference;
pub mod dates;
pub mod hackathon;

use scraper::ElementRef;
use url::Url;

/// Element text with runs of whitespace collapsed to single spaces,
/// matching what a rendered-text query would return for an inline element.
pub(crate) fn collapsed_text(el: ElementRef) -> String {
    let joined = el.text().collect::<Vec<_>>().join(" ");
    joined.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Element text with block structure kept as lines: one line per
/// non-empty text node, trimmed.
pub(crate) fn visible_text(el: ElementRef) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Resolve an href against the page it appeared on. `None` when the href
/// is empty or unparseable; every link this returns is absolute.
pub(crate) fn absolutize(base_url: &str, href: &str) -> Option<String> {
    if href.is_empty() {
        return None;
    }
    match Url::parse(href) {
        Ok(url) => Some(url.into()),
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(base_url)
            .ok()?
            .join(href)
            .ok()
            .map(Into::into),
        Err(_) => None,
    }
}
