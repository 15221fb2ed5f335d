//! Date and time formatting helpers.

use chrono::{DateTime, Datelike, Local, TimeZone};

/// Order timestamp in the backend's expected display shape, e.g.
/// "August 6, 2025, 02:30 PM".
pub fn format_order_timestamp<Tz: TimeZone>(at: DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let month = month_name(at.month());
    format!(
        "{} {}, {}, {}",
        month,
        at.day(),
        at.year(),
        at.format("%I:%M %p")
    )
}

/// Current local time in the order-timestamp shape.
pub fn order_timestamp_now() -> String {
    format_order_timestamp(Local::now())
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "",
    }
}

/// Date part of an ISO datetime for table cells; anything unparsable is
/// shown as-is.
pub fn format_date(date_str: &str) -> String {
    date_str.split('T').next().unwrap_or(date_str).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    #[test]
    fn test_format_order_timestamp() {
        let at = NaiveDate::from_ymd_opt(2025, 8, 6)
            .unwrap()
            .and_hms_opt(14, 5, 0)
            .unwrap()
            .and_utc();
        assert_eq!(
            format_order_timestamp::<Utc>(at),
            "August 6, 2025, 02:05 PM"
        );
    }

    #[test]
    fn test_format_order_timestamp_morning() {
        let at = NaiveDate::from_ymd_opt(2025, 1, 9)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
            .and_utc();
        assert_eq!(format_order_timestamp::<Utc>(at), "January 9, 2025, 09:30 AM");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-08-06T14:02:26Z"), "2025-08-06");
        assert_eq!(format_date("August 6, 2025, 02:05 PM"), "August 6, 2025, 02:05 PM");
    }
}
