pub mod console;
pub mod csv_file;
pub mod plot;
