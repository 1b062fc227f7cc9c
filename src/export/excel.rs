//! Excel出力（CLI版）
//!
//! 共通ライブラリでバッファを生成してファイルに書き出す

use crate::error::{PartsMatchError, Result};
use parts_match_common::export::generate_report_buffer;
use parts_match_common::{MatchResult, Report};
use std::path::Path;

pub fn generate_excel(results: &[MatchResult], output_path: &Path) -> Result<()> {
    let report = Report::from_results(results);
    let buffer = generate_report_buffer(&report).map_err(PartsMatchError::ExcelGeneration)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(output_path, buffer)?;

    tracing::info!(
        file = %output_path.display(),
        matched = report.matched.len(),
        unmatched = report.unmatched.len(),
        detail = report.detail.len(),
        "Excel出力完了"
    );
    Ok(())
}
