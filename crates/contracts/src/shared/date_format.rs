use chrono::NaiveDate;

/// "2025-01-12" -> "Jan 12, 2025". Unparseable input is returned unchanged.
pub fn format_short_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(d) => display_date(d),
        Err(_) => date_str.to_string(),
    }
}

pub fn display_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_short_date() {
        assert_eq!(format_short_date("2025-01-12"), "Jan 12, 2025");
        assert_eq!(format_short_date("2025-01-05T10:00:00Z"), "Jan 5, 2025");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_short_date("invalid"), "invalid");
    }
}
