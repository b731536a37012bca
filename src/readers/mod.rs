pub mod sheet_table;
pub mod workbook_reader;

pub use sheet_table::{SheetRow, SheetTable};
pub use workbook_reader::{ObservationDocument, SourceFiles, SourceTables, WorkbookReader};
