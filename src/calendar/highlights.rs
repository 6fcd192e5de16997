use std::collections::BTreeSet;
use std::path::Path;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use tracing::debug;

use crate::error::{CalendarError, Result};

/// Leading `day/month` of a highlight line; anything after it is ignored.
#[allow(clippy::expect_used)]
static DATE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-3]?[0-9])/([0-1]?[0-9])").expect("date line pattern is valid")
});

/// Dates drawn with a marker on the calendar.
///
/// Loaded once before rendering and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightSet {
    dates: BTreeSet<NaiveDate>,
}

impl HighlightSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses one `day/month` entry per line, all in `year`.
    ///
    /// Blank lines are skipped. Text after the date (e.g. a label) is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::MalformedLine` for a line that does not start
    /// with `day/month`, and `CalendarError::InvalidDate` for a date that
    /// does not exist in `year`.
    pub fn parse(year: i32, text: &str) -> Result<Self> {
        let mut dates = BTreeSet::new();

        for (i, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            let malformed = || CalendarError::MalformedLine {
                line: i + 1,
                text: raw.to_owned(),
            };
            let caps = DATE_LINE.captures(line).ok_or_else(malformed)?;
            let day: u32 = caps[1].parse().map_err(|_| malformed())?;
            let month: u32 = caps[2].parse().map_err(|_| malformed())?;
            let date = NaiveDate::from_ymd_opt(year, month, day)
                .ok_or(CalendarError::InvalidDate { year, month, day })?;
            dates.insert(date);
        }

        debug!("loaded {} highlight dates for {year}", dates.len());
        Ok(Self { dates })
    }

    /// Reads and parses a highlight file, see [`HighlightSet::parse`].
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::Io` if the file cannot be read, or any error
    /// of [`HighlightSet::parse`].
    pub fn from_path(year: i32, path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(CalendarError::from)?;
        Self::parse(year, &text)
    }

    /// Returns whether `date` is highlighted.
    #[must_use]
    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.dates.contains(date)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Iterates over the dates in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = &NaiveDate> {
        self.dates.iter()
    }
}

impl FromIterator<NaiveDate> for HighlightSet {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::DodecalError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_day_month_lines() {
        let set = HighlightSet::parse(2024, "14/2\n01/12 holiday\n\n  7/07\n").unwrap();
        assert_eq!(set.len(), 3);
        assert!(set.contains(&date(2024, 2, 14)));
        assert!(set.contains(&date(2024, 12, 1)));
        assert!(set.contains(&date(2024, 7, 7)));
        assert!(!set.contains(&date(2024, 2, 15)));
    }

    #[test]
    fn date_line_matches_leading_date_only() {
        assert!(DATE_LINE.is_match("14/2"));
        assert!(DATE_LINE.is_match("01/12 new year's eve"));
        assert!(!DATE_LINE.is_match("holiday 14/2"));
        // Parsing twice reuses the compiled pattern.
        assert_eq!(HighlightSet::parse(2025, "5/5").unwrap().len(), 1);
        assert_eq!(HighlightSet::parse(2025, "6/6").unwrap().len(), 1);
    }

    #[test]
    fn duplicates_collapse() {
        let set = HighlightSet::parse(2025, "3/3\n03/03\n").unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn iterates_in_order() {
        let set = HighlightSet::parse(2025, "25/12\n1/1\n").unwrap();
        let dates: Vec<_> = set.iter().copied().collect();
        assert_eq!(dates, vec![date(2025, 1, 1), date(2025, 12, 25)]);
    }

    #[test]
    fn empty_text_is_empty_set() {
        let set = HighlightSet::parse(2025, "").unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn malformed_line_reports_line_number() {
        let result = HighlightSet::parse(2025, "1/1\nnot a date\n");
        match result {
            Err(DodecalError::Calendar(CalendarError::MalformedLine { line, text })) => {
                assert_eq!(line, 2);
                assert_eq!(text, "not a date");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn nonexistent_date_fails() {
        assert!(matches!(
            HighlightSet::parse(2023, "29/2"),
            Err(DodecalError::Calendar(CalendarError::InvalidDate {
                year: 2023,
                month: 2,
                day: 29
            }))
        ));
        assert!(HighlightSet::parse(2024, "29/2").is_ok());
        assert!(HighlightSet::parse(2024, "32/1").is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = HighlightSet::from_path(2025, "/nonexistent/dodecal/highlights.txt");
        assert!(matches!(
            result,
            Err(DodecalError::Calendar(CalendarError::Io(_)))
        ));
    }

    #[test]
    fn collects_from_dates() {
        let set: HighlightSet = [date(2024, 2, 14)].into_iter().collect();
        assert!(set.contains(&date(2024, 2, 14)));
    }
}
