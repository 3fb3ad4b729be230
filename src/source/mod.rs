//! Record sources
//!
//! Where records come from: a synthetic generator or a JSON/CSV file. The
//! report engine only ever sees the resulting slice.

pub mod file;
pub mod generator;

pub use file::{load_records, save_records, RecordFormat};
pub use generator::generate_records;
