pub mod calendar;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod math;

pub use error::{DodecalError, Result};
