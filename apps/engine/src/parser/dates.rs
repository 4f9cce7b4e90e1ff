use chrono::NaiveDate;

const FULL_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%B %d, %Y", "%b %d, %Y"];

// Month-precision formats get a synthetic first-of-month day appended so
// chrono can produce a NaiveDate.
const MONTH_FORMATS: &[&str] = &["%B %Y", "%b %Y", "%m/%Y", "%Y-%m"];

/// Parses the date formats that show up in résumés ("June 2021", "Jun 2021",
/// "06/2021", "2021-06", "2021", full dates). Returns None rather than
/// erroring on anything unrecognized.
pub fn parse_flexible(raw: &str) -> Option<NaiveDate> {
    // Dots in abbreviated months ("Sep. 2019") defeat chrono's %b
    let cleaned = raw.trim().replace('.', "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }

    for fmt in FULL_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(cleaned, fmt) {
            return Some(date);
        }
    }

    for fmt in MONTH_FORMATS {
        let padded = format!("{cleaned} 1");
        let padded_fmt = format!("{fmt} %d");
        if let Ok(date) = NaiveDate::parse_from_str(&padded, &padded_fmt) {
            return Some(date);
        }
    }

    // Bare year, bounded to plausible resume range
    if let Ok(year) = cleaned.parse::<i32>() {
        if (1900..=2100).contains(&year) {
            return NaiveDate::from_ymd_opt(year, 1, 1);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_full_month_name() {
        assert_eq!(parse_flexible("June 2021"), Some(ymd(2021, 6, 1)));
    }

    #[test]
    fn test_abbreviated_month() {
        assert_eq!(parse_flexible("Jan 2019"), Some(ymd(2019, 1, 1)));
        assert_eq!(parse_flexible("Sep. 2019"), Some(ymd(2019, 9, 1)));
    }

    #[test]
    fn test_numeric_month_year() {
        assert_eq!(parse_flexible("06/2021"), Some(ymd(2021, 6, 1)));
        assert_eq!(parse_flexible("2021-06"), Some(ymd(2021, 6, 1)));
    }

    #[test]
    fn test_iso_full_date() {
        assert_eq!(parse_flexible("2021-06-15"), Some(ymd(2021, 6, 15)));
    }

    #[test]
    fn test_bare_year() {
        assert_eq!(parse_flexible("2018"), Some(ymd(2018, 1, 1)));
        assert_eq!(parse_flexible("18"), None);
    }

    #[test]
    fn test_garbage_returns_none() {
        assert_eq!(parse_flexible("present"), None);
        assert_eq!(parse_flexible(""), None);
        assert_eq!(parse_flexible("not a date"), None);
    }
}
