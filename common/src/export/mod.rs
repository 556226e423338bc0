//! Export core modules shared across the web app and the native client.

pub mod csv_core;

pub use csv_core::{to_csv, CSV_FILE_NAME, CSV_MIME_TYPE};
