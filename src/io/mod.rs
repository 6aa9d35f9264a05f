pub mod csv_export;
pub mod csv_import;
pub mod file;

pub use csv_export::{export_schedule, export_series};
pub use csv_import::import_tasks;
pub use file::{load_workspace, save_workspace};
