use crate::errors::Result;
use chrono::NaiveDate;

/// Parse an 8-digit `YYYYMMDD` argument into a calendar date.
pub fn parse_yyyymmdd(date_str: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(date_str, "%Y%m%d")?)
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// `YYYY.MM.DD` stamp used in output filenames.
pub fn filename_stamp(date: NaiveDate) -> String {
    date.format("%Y.%m.%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_compact_dates() {
        let date = parse_yyyymmdd("20151009").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2015, 10, 9).unwrap());
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(parse_yyyymmdd("2015-10-09").is_err());
        assert!(parse_yyyymmdd("20151309").is_err());
        assert!(parse_yyyymmdd("abc").is_err());
    }

    #[test]
    fn filename_stamp_uses_dots() {
        let date = NaiveDate::from_ymd_opt(2018, 10, 8).unwrap();
        assert_eq!(filename_stamp(date), "2018.10.08");
    }
}
