mod cell;
mod fold;

pub use cell::Cell;
pub use fold::FoldLine;
