//! 表ファイル読み込み
//!
//! Excel（.xlsx/.xls）とCSVを拡張子で判別し、共通の `RawRow` に変換する。
//! 行番号はシート上の行番号（1始まり）を保持する。

mod csv_reader;
mod excel_reader;

use crate::error::{PartsMatchError, Result};
use parts_match_common::{Cell, RawRow};
use std::path::Path;

pub const HEADER_ROW_MIN: usize = 1;
pub const HEADER_ROW_MAX: usize = 10;

const EXCEL_EXTENSIONS: &[&str] = &["xlsx", "xls"];
const CSV_EXTENSIONS: &[&str] = &["csv"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Excel,
    Csv,
}

impl FileKind {
    /// 拡張子から判別（大文字小文字は区別しない）
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        if EXCEL_EXTENSIONS.contains(&ext.as_str()) {
            Ok(FileKind::Excel)
        } else if CSV_EXTENSIONS.contains(&ext.as_str()) {
            Ok(FileKind::Csv)
        } else {
            tracing::warn!(file = %path.display(), "未対応のファイル形式");
            Err(parts_match_common::Error::UnsupportedFormat(format!(".{}", ext)).into())
        }
    }
}

/// ヘッダー行番号を検証
pub fn validate_header_row(header_row: usize) -> Result<usize> {
    if (HEADER_ROW_MIN..=HEADER_ROW_MAX).contains(&header_row) {
        Ok(header_row)
    } else {
        Err(PartsMatchError::InvalidHeaderRow {
            value: header_row,
            min: HEADER_ROW_MIN,
            max: HEADER_ROW_MAX,
        })
    }
}

/// ファイルの全行を読み込む（Excelは先頭シート）
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>> {
    if !path.exists() {
        return Err(PartsMatchError::FileNotFound(path.display().to_string()));
    }

    let rows = match FileKind::from_path(path)? {
        FileKind::Excel => excel_reader::read_first_sheet(path)?,
        FileKind::Csv => csv_reader::read_records(path)?,
    };

    tracing::debug!(file = %path.display(), rows = rows.len(), "ファイル読込");
    Ok(rows)
}

/// 部品展開マスタの行を読み込む
///
/// `header_row`（1始まり）以前の行を読み飛ばし、空行を除いて返す。
pub fn read_master_rows(path: &Path, header_row: usize) -> Result<Vec<RawRow>> {
    let header_row = validate_header_row(header_row)?;
    let rows = read_rows(path)?
        .into_iter()
        .filter(|r| r.line > header_row && !r.is_blank())
        .collect();
    Ok(rows)
}

/// 照合用ファイルから商品コード（A列）を読み込む
///
/// 最初の空でない行をヘッダーとして読み飛ばす。
pub fn read_codes(path: &Path) -> Result<Vec<String>> {
    let codes = read_rows(path)?
        .into_iter()
        .filter(|r| !r.is_blank())
        .skip(1)
        .map(|r| r.cells.first().map(Cell::to_text).unwrap_or_default())
        .collect();
    Ok(codes)
}
