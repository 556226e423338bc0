//! UIコンポーネント

pub mod header;
pub mod upload_form;
pub mod result_view;
