//! 抽出API連携

pub mod client;

pub use client::{build_config, ApiClient};
