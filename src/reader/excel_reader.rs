use crate::error::{PartsMatchError, Result};
use calamine::{open_workbook_auto, Data, Reader};
use parts_match_common::{Cell, RawRow};
use std::path::Path;

/// 先頭シートの全行を読み込む
///
/// calamine の Range は最初の値のあるセルから始まるため、
/// 行番号と列位置をシート基準に戻して返す。
pub fn read_first_sheet(path: &Path) -> Result<Vec<RawRow>> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| PartsMatchError::SheetRead(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| PartsMatchError::SheetRead("ワークシートがありません".to_string()))?
        .map_err(|e| PartsMatchError::SheetRead(e.to_string()))?;

    let (start_row, start_col) = match range.start() {
        Some((row, col)) => (row as usize, col as usize),
        None => return Ok(Vec::new()),
    };

    let rows = range
        .rows()
        .enumerate()
        .map(|(i, data_row)| {
            let mut cells = vec![Cell::Empty; start_col];
            cells.extend(data_row.iter().map(to_cell));
            RawRow::new(start_row + i + 1, cells)
        })
        .collect();

    Ok(rows)
}

fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::Int(i) => Cell::Int(*i),
        Data::Float(f) => Cell::Float(*f),
        Data::Bool(b) => Cell::Bool(*b),
        Data::String(s) if s.trim().is_empty() => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        other => Cell::Text(other.to_string()),
    }
}
