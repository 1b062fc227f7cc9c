use thiserror::Error;

#[derive(Error, Debug)]
pub enum PartsMatchError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("ヘッダー行は{min}～{max}の数値で指定してください: {value}")]
    InvalidHeaderRow { value: usize, min: usize, max: usize },

    #[error("Excel読込エラー: {0}")]
    SheetRead(String),

    #[error("CSV読込エラー: {0}")]
    CsvRead(#[from] csv::Error),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] parts_match_common::Error),
}

pub type Result<T> = std::result::Result<T, PartsMatchError>;
