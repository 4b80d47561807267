use chrono::NaiveDate;

/// Normalize a listing-page day/month token ("01 Jun") into
/// "Mon DD, YYYY" using the assumed year. Anything that does not parse
/// as exactly a day and a month abbreviation passes through unchanged.
pub fn normalize_listing_date(raw: &str, assumed_year: i32) -> String {
    let mut parts = raw.split_whitespace();
    let (Some(day), Some(month), None) = (parts.next(), parts.next(), parts.next()) else {
        return raw.to_string();
    };

    match NaiveDate::parse_from_str(&format!("{} {} {}", day, month, assumed_year), "%d %b %Y") {
        Ok(date) => date.format("%b %d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_day_month_token() {
        assert_eq!(normalize_listing_date("01 Jun", 2025), "Jun 01, 2025");
        assert_eq!(normalize_listing_date("15 Dec", 2025), "Dec 15, 2025");
    }

    #[test]
    fn test_single_digit_day_is_zero_padded() {
        assert_eq!(normalize_listing_date("1 Jun", 2025), "Jun 01, 2025");
    }

    #[test]
    fn test_unparseable_token_passes_through() {
        assert_eq!(normalize_listing_date("TBD", 2025), "TBD");
        assert_eq!(normalize_listing_date("32 Jun", 2025), "32 Jun");
        assert_eq!(normalize_listing_date("01 Junk", 2025), "01 Junk");
    }

    #[test]
    fn test_extra_tokens_pass_through() {
        assert_eq!(normalize_listing_date("01 Jun 2026", 2025), "01 Jun 2026");
        assert_eq!(normalize_listing_date("", 2025), "");
    }
}
