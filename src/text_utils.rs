use chrono::NaiveDateTime;

/// Formats a publication date as "dd MMM yyyy" with fixed English month
/// names, e.g. "15 Mar 2021". Posts without a date render an empty string.
pub fn format_publication_date(date: Option<&NaiveDateTime>) -> String {
    match date {
        Some(date) => date.format("%d %b %Y").to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};

    use super::*;

    #[test]
    fn test_format_publication_date() {
        let date_time = NaiveDateTime::new(
            NaiveDate::from_ymd_opt(2021, 3, 15).unwrap(),
            NaiveTime::from_hms_opt(19, 25, 28).unwrap(),
        );
        assert_eq!(format_publication_date(Some(&date_time)), "15 Mar 2021");
        assert_eq!(format_publication_date(None), "");
    }
}
