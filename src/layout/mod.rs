mod config;
mod cursor;
mod sheet;

pub use config::NetConfig;
pub use cursor::{CellScope, Cursor};
pub use sheet::{PlacedFace, SheetLayout, SheetPlan};
