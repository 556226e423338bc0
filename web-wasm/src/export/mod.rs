//! ブラウザでのファイル保存

pub mod csv_download;

pub use csv_download::{download_text, save_csv};
