pub mod json_writer;
pub mod tsv_writer;

pub use json_writer::JsonWriter;
pub use tsv_writer::TsvWriter;
