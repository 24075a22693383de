pub mod csv;

/// Fixed file name the UI offers in the export dialog.
pub const EXPORT_FILENAME: &str = "weekplan.csv";
