use chrono::{DateTime, Utc};

// Renders like a US-locale date string, e.g. "1/5/2024"
pub fn format_locale_date(iso_date: &str) -> String {
    if let Ok(datetime) = iso_date.parse::<DateTime<Utc>>() {
        datetime.format("%-m/%-d/%Y").to_string()
    } else {
        iso_date.to_string()
    }
}

pub fn format_locale_datetime(iso_date: &str) -> String {
    if let Ok(datetime) = iso_date.parse::<DateTime<Utc>>() {
        datetime.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
    } else {
        iso_date.to_string()
    }
}

pub fn format_video_count(count: usize) -> String {
    if count == 1 {
        "1 video".to_string()
    } else {
        format!("{count} videos")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_locale_date() {
        assert_eq!(format_locale_date("2024-01-05T12:00:00Z"), "1/5/2024");
        assert_eq!(format_locale_date("2023-11-23T08:30:00.000Z"), "11/23/2023");
        assert_eq!(format_locale_date("yesterday"), "yesterday");
    }

    #[test]
    fn test_format_locale_datetime() {
        assert_eq!(
            format_locale_datetime("2024-03-01T15:04:05Z"),
            "3/1/2024, 3:04:05 PM"
        );
    }

    #[test]
    fn test_format_video_count() {
        assert_eq!(format_video_count(0), "0 videos");
        assert_eq!(format_video_count(1), "1 video");
        assert_eq!(format_video_count(12), "12 videos");
    }
}
