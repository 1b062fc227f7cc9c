use crate::error::Result;
use csv::ReaderBuilder;
use parts_match_common::{Cell, RawRow};
use std::path::Path;

const BOM: char = '\u{feff}';

/// CSVの全レコードを読み込む（ヘッダーも1行として返す）
pub fn read_records(path: &Path) -> Result<Vec<RawRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true) // 行ごとの列数の違いを許容
        .from_path(path)?;

    let mut rows = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(i + 1);

        let cells = record
            .iter()
            .enumerate()
            .map(|(col, value)| {
                let value = if i == 0 && col == 0 {
                    value.trim_start_matches(BOM)
                } else {
                    value
                };
                if value.trim().is_empty() {
                    Cell::Empty
                } else {
                    Cell::Text(value.to_string())
                }
            })
            .collect();

        rows.push(RawRow::new(line, cells));
    }

    Ok(rows)
}
