pub mod excel;

use crate::error::Result;
use chrono::{DateTime, Local};
use parts_match_common::{MatchResult, MatchSummary};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 照合結果の保存形式（後から `export` でExcel化する）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsFile {
    pub generated_at: DateTime<Local>,
    pub master_file: String,
    pub summary: MatchSummary,
    pub results: Vec<MatchResult>,
}

impl ResultsFile {
    pub fn new(master_file: &Path, results: Vec<MatchResult>) -> Self {
        Self {
            generated_at: Local::now(),
            master_file: master_file.display().to_string(),
            summary: MatchSummary::from_results(&results),
            results,
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// 保存済み結果を読み込む
    ///
    /// 結果配列のみのJSONも受け付ける。
    pub fn load(path: &Path) -> Result<Vec<MatchResult>> {
        let content = std::fs::read_to_string(path)?;
        let value: serde_json::Value = serde_json::from_str(&content)?;
        if value.is_array() {
            return Ok(serde_json::from_value(value)?);
        }
        let file: ResultsFile = serde_json::from_value(value)?;
        Ok(file.results)
    }
}

/// 出力先がディレクトリなら既定ファイル名を付ける
pub fn output_path_for_report(output: &Path, file_name: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(file_name)
    } else {
        output.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_for_report() {
        assert_eq!(
            output_path_for_report(Path::new("out"), "matching_results.xlsx"),
            PathBuf::from("out/matching_results.xlsx")
        );
        assert_eq!(
            output_path_for_report(Path::new("out/report.xlsx"), "matching_results.xlsx"),
            PathBuf::from("out/report.xlsx")
        );
    }
}
