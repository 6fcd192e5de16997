use chrono::{Datelike, NaiveDate};
use tracing::{debug, trace};

use super::HighlightSet;
use crate::error::{CalendarError, Result};
use crate::math::{round_point, Point2};

/// Spacing and anchors of the day grid, in a cell's local frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    /// Horizontal distance between weekday columns.
    pub dx: f64,
    /// Vertical distance between week rows.
    pub dy: f64,
    /// Position of column 0 (Sunday).
    pub x0: f64,
    /// Position of row 0.
    pub y0: f64,
    /// Height of a day marker's center above the numeral's baseline.
    pub marker_lift: f64,
    pub marker_radius: f64,
}

impl GridLayout {
    /// Creates a grid with the given spacing, centred on the cell.
    ///
    /// Sunday sits three columns left of the center and row 0 one row above.
    #[must_use]
    pub fn new(dx: f64, dy: f64) -> Self {
        Self {
            dx,
            dy,
            x0: -3.0 * dx,
            y0: dy,
            marker_lift: 0.125,
            marker_radius: 0.2,
        }
    }

    /// Local position of the numeral at `(column, row)`.
    #[must_use]
    pub fn position(&self, column: u32, row: i32) -> Point2 {
        round_point(Point2::new(
            self.x0 + self.dx * f64::from(column),
            self.y0 - self.dy * f64::from(row),
        ))
    }

    /// Local anchor of the month title, above the grid.
    #[must_use]
    pub fn title_position(&self) -> Point2 {
        Point2::new(0.0, 2.5 * self.dy)
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::new(0.5, 0.5)
    }
}

/// How a day numeral is decorated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    None,
    /// Highlighted weekday.
    Filled,
    /// Highlighted Sunday.
    Ring,
}

/// A day of the month placed on the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayEntry {
    pub date: NaiveDate,
    /// Week row; Sundays open a new row.
    pub row: i32,
    /// Weekday column, Sunday = 0 through Saturday = 6.
    pub column: u32,
    /// Numeral position in the cell's local, unrotated frame.
    pub position: Point2,
    pub marked: bool,
    pub sunday: bool,
}

impl DayEntry {
    #[must_use]
    pub fn marker(&self) -> Marker {
        match (self.marked, self.sunday) {
            (false, _) => Marker::None,
            (true, false) => Marker::Filled,
            (true, true) => Marker::Ring,
        }
    }

    /// Center of the day's marker circle.
    #[must_use]
    pub fn marker_center(&self, layout: &GridLayout) -> Point2 {
        Point2::new(self.position.x, self.position.y + layout.marker_lift)
    }
}

/// Column of `date`: Sunday = 0, Monday = 1, ..., Saturday = 6.
#[must_use]
pub fn weekday_column(date: NaiveDate) -> u32 {
    (date.weekday().num_days_from_monday() + 1) % 7
}

/// Places the days of each month of one year on a face.
#[derive(Debug, Clone, Copy)]
pub struct CalendarGrid<'a> {
    year: i32,
    highlights: &'a HighlightSet,
    layout: GridLayout,
}

impl<'a> CalendarGrid<'a> {
    /// Creates a grid for `year` with the default layout.
    #[must_use]
    pub fn new(year: i32, highlights: &'a HighlightSet) -> Self {
        Self::with_layout(year, highlights, GridLayout::default())
    }

    #[must_use]
    pub fn with_layout(year: i32, highlights: &'a HighlightSet, layout: GridLayout) -> Self {
        Self {
            year,
            highlights,
            layout,
        }
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    #[must_use]
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Computes the local position of every day of `month`, in date order.
    ///
    /// The first row is 0, unless the month starts on a Sunday: then it is
    /// -1 so that the Sunday's own row increment lands it on row 0.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::InvalidMonth` if `month` is not in `1..=12`,
    /// and `CalendarError::InvalidDate` if the year is out of range.
    pub fn day_positions(&self, month: u32) -> Result<Vec<DayEntry>> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth(month).into());
        }
        let first = NaiveDate::from_ymd_opt(self.year, month, 1).ok_or(
            CalendarError::InvalidDate {
                year: self.year,
                month,
                day: 1,
            },
        )?;

        let mut row: i32 = if weekday_column(first) == 0 { -1 } else { 0 };
        let mut entries = Vec::with_capacity(31);

        for date in first.iter_days().take_while(|d| d.month() == month) {
            let column = weekday_column(date);
            if column == 0 {
                row += 1;
            }
            let entry = DayEntry {
                date,
                row,
                column,
                position: self.layout.position(column, row),
                marked: self.highlights.contains(&date),
                sunday: column == 0,
            };
            trace!("{date}: column {column}, row {row}, marker {:?}", entry.marker());
            entries.push(entry);
        }

        debug!("{}-{month:02}: {} days over {} rows", self.year, entries.len(), row + 1);
        Ok(entries)
    }
}
