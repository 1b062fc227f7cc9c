use crate::error::{PartsMatchError, Result};
use crate::reader;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// マスタのヘッダー行（1始まり）
    pub default_header_row: usize,
    /// 出力先ディレクトリ（未指定ならカレント）
    pub output_dir: Option<PathBuf>,
    /// Excelレポートのファイル名
    pub report_file_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_header_row: 1,
            output_dir: None,
            report_file_name: "matching_results.xlsx".into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PartsMatchError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("parts-match").join("config.json"))
    }

    pub fn set_default_header_row(&mut self, header_row: usize) -> Result<()> {
        reader::validate_header_row(header_row)?;
        self.default_header_row = header_row;
        self.save()
    }

    pub fn set_output_dir(&mut self, dir: PathBuf) -> Result<()> {
        self.output_dir = Some(dir);
        self.save()
    }

    /// レポートの既定出力パス
    pub fn report_path(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(&self.report_file_name)
    }
}
