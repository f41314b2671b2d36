mod cell;
pub mod table;

pub use cell::CellDecoder;
pub use table::{RawTable, load, load_file};
