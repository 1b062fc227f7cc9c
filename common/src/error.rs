//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// マスタ行の検証・数値変換エラー（1始まりの行番号・列名つき）
    #[error("Parse error (row {row}, column {column}): {message}")]
    Parse {
        row: usize,
        column: String,
        message: String,
    },

    #[error("Master is not loaded")]
    EmptyIndex,

    #[error("Unsupported file format: {0} (.xlsx / .xls / .csv only)")]
    UnsupportedFormat(String),
}

impl Error {
    pub(crate) fn parse(row: usize, column: &str, message: impl Into<String>) -> Self {
        Error::Parse {
            row,
            column: column.to_string(),
            message: message.into(),
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
