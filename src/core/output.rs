use crate::utils::error::Result;
use serde::Serialize;

/// CSV bytes: header row from the row struct's serde field names in
/// declaration order, one record per row, standard quoting.
pub fn to_csv_bytes<T: Serialize>(rows: &[T]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(writer.into_inner().map_err(|e| e.into_error())?)
}

/// JSON bytes: one array of objects, 4-space indentation, UTF-8 with
/// non-ASCII text preserved as-is. Key order matches the CSV columns.
pub fn to_json_pretty_bytes<T: Serialize>(rows: &[T]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    rows.serialize(&mut serializer)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ConferenceRow, EventMode, HackathonRow};

    fn sample_conference_row() -> ConferenceRow {
        ConferenceRow {
            name: "AI Summit, 2025".to_string(),
            listing_date: "Jun 01, 2025".to_string(),
            venue: "Berlin".to_string(),
            submission_deadline: "May 15, 2025".to_string(),
            start_date: "Jun 01, 2025".to_string(),
            end_date: "".to_string(),
            link: "https://example.com/ai-summit".to_string(),
        }
    }

    #[test]
    fn test_csv_header_order_and_quoting() {
        let bytes = to_csv_bytes(&[sample_conference_row()]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let mut lines = text.lines();

        assert_eq!(
            lines.next().unwrap(),
            "Name,Listing Date,Venue,Submission Deadline,Conference Start Date,Conference End Date,Link"
        );
        // comma in the name forces quoting
        assert!(lines.next().unwrap().starts_with("\"AI Summit, 2025\","));
    }

    #[test]
    fn test_json_is_four_space_indented_array() {
        let bytes = to_json_pretty_bytes(&[sample_conference_row()]).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.starts_with("[\n    {\n        \"Name\""));
        assert!(text.ends_with("}\n]"));
    }

    #[test]
    fn test_json_preserves_non_ascii() {
        let mut row = sample_conference_row();
        row.venue = "Zürich".to_string();
        let text = String::from_utf8(to_json_pretty_bytes(&[row]).unwrap()).unwrap();
        assert!(text.contains("Zürich"));
        assert!(!text.contains("\\u"));
    }

    #[test]
    fn test_csv_and_json_values_match() {
        let rows = vec![HackathonRow {
            name: "DataQuest 2025".to_string(),
            domain: "Machine Learning/AI".to_string(),
            deadline: "May 1, 2025 @ 4:30am GMT+5:30".to_string(),
            mode: EventMode::Online,
            prize: "$140,000 in cash".to_string(),
            link: "https://devpost.com/h/dataquest".to_string(),
            description: "Build something great.".to_string(),
        }];

        let csv_text = String::from_utf8(to_csv_bytes(&rows).unwrap()).unwrap();
        let json: Vec<serde_json::Value> =
            serde_json::from_slice(&to_json_pretty_bytes(&rows).unwrap()).unwrap();

        let mut csv_reader = csv::Reader::from_reader(csv_text.as_bytes());
        let headers = csv_reader.headers().unwrap().clone();
        let record = csv_reader.records().next().unwrap().unwrap();

        assert_eq!(
            headers.iter().collect::<Vec<_>>(),
            vec!["Name", "Domain", "Deadline", "mode", "Prize", "Link", "description"]
        );
        for (header, value) in headers.iter().zip(record.iter()) {
            assert_eq!(json[0][header].as_str().unwrap(), value);
        }
    }

    #[test]
    fn test_empty_dataset_serializes() {
        let rows: Vec<ConferenceRow> = Vec::new();
        assert!(to_csv_bytes(&rows).unwrap().is_empty());
        assert_eq!(to_json_pretty_bytes(&rows).unwrap(), b"[]");
    }
}
