mod grid;
mod highlights;

pub use grid::{weekday_column, CalendarGrid, DayEntry, GridLayout, Marker};
pub use highlights::HighlightSet;
