//! 照合結果レポートの出力（CLI/ライブラリ共通）

pub mod excel_core;

pub use excel_core::generate_report_buffer;
