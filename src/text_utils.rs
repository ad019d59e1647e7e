use std::ops::Index;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use lazy_static::lazy_static;
use regex::Regex;

fn to_int<T: std::str::FromStr>(num_str: &str, date_str: &str) -> Result<T, String> {
    match num_str.parse::<T>() {
        Ok(x) => Ok(x),
        Err(_) => Err(format!("Error parsing {} from the date {}", num_str, date_str)),
    }
}

pub fn parse_date_time(buf: &str) -> Result<NaiveDateTime, String> {
    lazy_static! {
        static ref DATE_TIME_REGEX: Regex = Regex::new(
            r"^(\d{4})-(\d{1,2})-(\d{1,2}) (\d{1,2}):(\d{1,2}):(\d{1,2})(\.\d{0,3})?$"
        ).unwrap();
    }

    let Some(caps) = DATE_TIME_REGEX.captures(buf) else {
        return Err(format!("Unable to parse date time {}", buf));
    };

    let to_i32 = |num_str: &str| to_int::<i32>(num_str, buf);
    let to_u32 = |num_str: &str| to_int::<u32>(num_str, buf);

    // We are using the regex approach to make it more flexible
    let y: i32 = to_i32(caps.index(1))?;
    let m: u32 = to_u32(caps.index(2))?;
    let d: u32 = to_u32(caps.index(3))?;
    let h: u32 = to_u32(caps.index(4))?;
    let mn: u32 = to_u32(caps.index(5))?;
    let s: u32 = to_u32(caps.index(6))?;

    let date = NaiveDate::from_ymd_opt(y, m, d)
        .ok_or_else(|| format!("Invalid calendar date {}", buf))?;
    let time = NaiveTime::from_hms_opt(h, mn, s)
        .ok_or_else(|| format!("Invalid time of day {}", buf))?;

    Ok(NaiveDateTime::new(date, time))
}

/// Parses the publication date of a post.
///
/// Accepts `2024-03-01`, `2024-03-01 10:42:32[.123]` and RFC 3339 date-times.
/// Only the calendar date is kept; for RFC 3339 it is the date in the given offset.
pub fn parse_publication_date(buf: &str) -> Result<NaiveDate, String> {
    let buf = buf.trim();

    if let Ok(date) = NaiveDate::parse_from_str(buf, "%Y-%m-%d") {
        return Ok(date);
    }

    if let Ok(date_time) = DateTime::parse_from_rfc3339(buf) {
        return Ok(date_time.date_naive());
    }

    match parse_date_time(buf) {
        Ok(date_time) => Ok(date_time.date()),
        Err(_) => Err(format!("Unable to parse date {}", buf)),
    }
}

pub fn format_date_time(date_time: &NaiveDateTime) -> (String, String) {
    let date = date_time.format("%Y-%m-%d").to_string();
    let time = date_time.format("%H:%M:%S").to_string();
    (date, time)
}

/// Builds a file system friendly name out of a post title, prefixed by its date.
/// Vietnamese diacritics are folded to ASCII.
pub fn slug_from_title(title: &str, date: &NaiveDate) -> String {
    let ascii = unidecode::unidecode(title);
    let alpha_chars: String = ascii.chars()
        .filter(|&c| c.is_ascii_alphanumeric() || c == ' ' || c == '-')
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .map(|c| c.to_ascii_lowercase())
        .collect();

    let mut url = String::new();
    let mut prev_char = None;

    for c in alpha_chars.trim_matches('_').chars() {
        if c != '_' || prev_char != Some('_') {
            url.push(c);
        }
        prev_char = Some(c);
    }

    format!("{}_{}", date.format("%Y%m%d"), url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_time() {
        let date_time = parse_date_time("2017-09-10 10:42:32.123").unwrap();
        let (date, time) = format_date_time(&date_time);
        assert_eq!(date, "2017-09-10");
        assert_eq!(time, "10:42:32");

        let date_time = parse_date_time("2017-09-10 10:42:32").unwrap();
        let (date, time) = format_date_time(&date_time);
        assert_eq!(date, "2017-09-10");
        assert_eq!(time, "10:42:32");
    }

    #[test]
    fn test_parse_date_time_invalid() {
        assert!(parse_date_time("2017-02-30 10:42:32").is_err());
        assert!(parse_date_time("2017-09-10 25:42:32").is_err());
        assert!(parse_date_time("yesterday").is_err());
    }

    #[test]
    fn test_parse_publication_date() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(parse_publication_date("2024-03-01").unwrap(), expected);
        assert_eq!(parse_publication_date(" 2024-03-01 ").unwrap(), expected);
        assert_eq!(parse_publication_date("2024-03-01 08:30:00.000").unwrap(), expected);
        assert_eq!(parse_publication_date("2024-03-01T23:30:00+07:00").unwrap(), expected);
        assert_eq!(parse_publication_date("2024-03-01T10:00:00Z").unwrap(), expected);
    }

    #[test]
    fn test_parse_publication_date_invalid() {
        assert!(parse_publication_date("2024-02-30").is_err());
        assert!(parse_publication_date("01/03/2024").is_err());
        assert!(parse_publication_date("").is_err());
    }

    #[test]
    fn test_slug_from_title() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(slug_from_title("Post title of mine - part 2", &date), "20240229_post_title_of_mine_part_2");
        assert_eq!(slug_from_title("Học Rust từ đầu!", &date), "20240229_hoc_rust_tu_dau");
    }
}
