//! マスタ行のスキーマ検証
//!
//! 列位置で7列を解釈し、型変換したうえで `PartLine` を作る。
//! ヘッダー名は見ない（列順はファイル読み込み側の責務）。

use crate::error::{Error, Result};
use crate::types::{Cell, PartRecord};

/// マスタの列定義（列順）
pub const MASTER_COLUMNS: [&str; 7] = [
    "完成品コード",
    "完成品商品名",
    "構成部品商品コード（確認用）",
    "構成部品商品コード",
    "入数",
    "箱数",
    "構成数量",
];

const COL_FINISHED_CODE: usize = 0;
const COL_FINISHED_NAME: usize = 1;
const COL_PART_CODE_DISPLAY: usize = 2;
const COL_PART_CODE: usize = 3;
const COL_INPUT_QTY: usize = 4;
const COL_BOX_QTY: usize = 5;
const COL_QUANTITY: usize = 6;

/// 読み込んだ表の1行
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawRow {
    /// シート上の行番号（1始まり）
    pub line: usize,
    pub cells: Vec<Cell>,
}

impl RawRow {
    pub fn new(line: usize, cells: Vec<Cell>) -> Self {
        Self { line, cells }
    }

    /// 全セルが空の行
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }
}

/// 検証済みのマスタ行
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PartLine {
    pub finished_code: String,
    pub finished_name: String,
    /// 確認用の部品コード（照合には使わない）
    pub part_code_display: String,
    pub part_code: String,
    pub quantity: u32,
    pub input_qty: u32,
    pub box_qty: u32,
}

impl PartLine {
    /// 7列のセルから検証済みの行を作る
    ///
    /// 8列目以降は空セルのみ許容する。
    pub fn from_cells(line: usize, cells: &[Cell]) -> Result<Self> {
        if cells.len() < MASTER_COLUMNS.len() {
            return Err(Error::parse(
                line,
                MASTER_COLUMNS[cells.len()],
                format!(
                    "列数が不足しています（{}列必要、{}列）",
                    MASTER_COLUMNS.len(),
                    cells.len()
                ),
            ));
        }
        if let Some(extra) = cells[MASTER_COLUMNS.len()..]
            .iter()
            .position(|c| !c.is_empty())
        {
            let column = format!("{}列目", MASTER_COLUMNS.len() + extra + 1);
            return Err(Error::parse(
                line,
                &column,
                format!("列数が多すぎます（{}列まで）", MASTER_COLUMNS.len()),
            ));
        }

        let finished_code = required_text(line, cells, COL_FINISHED_CODE)?;
        let part_code = required_text(line, cells, COL_PART_CODE)?;
        let quantity = integer(line, cells, COL_QUANTITY)?.ok_or_else(|| {
            Error::parse(line, MASTER_COLUMNS[COL_QUANTITY], "値がありません")
        })?;

        Ok(Self {
            finished_code,
            finished_name: cells[COL_FINISHED_NAME].to_text(),
            part_code_display: cells[COL_PART_CODE_DISPLAY].to_text(),
            part_code,
            quantity,
            input_qty: integer(line, cells, COL_INPUT_QTY)?.unwrap_or(0),
            box_qty: integer(line, cells, COL_BOX_QTY)?.unwrap_or(0),
        })
    }

    pub fn to_part_record(&self) -> PartRecord {
        PartRecord {
            part_code: self.part_code.clone(),
            quantity: self.quantity,
            input_qty: self.input_qty,
            box_qty: self.box_qty,
        }
    }
}

fn required_text(line: usize, cells: &[Cell], col: usize) -> Result<String> {
    let text = cells[col].to_text();
    if text.is_empty() {
        return Err(Error::parse(line, MASTER_COLUMNS[col], "値がありません"));
    }
    Ok(text)
}

/// 非負整数として解釈（空セルは None）
fn integer(line: usize, cells: &[Cell], col: usize) -> Result<Option<u32>> {
    let value = cells[col]
        .to_integer()
        .map_err(|message| Error::parse(line, MASTER_COLUMNS[col], message))?;

    value
        .map(|v| {
            u32::try_from(v).map_err(|_| {
                Error::parse(
                    line,
                    MASTER_COLUMNS[col],
                    format!("0以上の整数を指定してください: {}", v),
                )
            })
        })
        .transpose()
}
