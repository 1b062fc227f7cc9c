//! サンプルデータ
//!
//! サンプルファイル生成（`create_samples`）とテストで共用する。

use crate::row::RawRow;
use crate::types::Cell;

/// (完成品コード, 完成品商品名, 構成部品商品コード（確認用）, 構成部品商品コード, 入数, 箱数, 構成数量)
pub type SampleLine = (&'static str, &'static str, &'static str, &'static str, i64, i64, i64);

pub const SAMPLE_MASTER: &[SampleLine] = &[
    ("完成品001", "ノートパソコンセット", "部品001", "部品001", 2, 5, 1),
    ("完成品001", "ノートパソコンセット", "部品002", "部品002", 10, 2, 4),
    ("完成品001", "ノートパソコンセット", "部品003", "部品003", 1, 1, 2),
    ("完成品002", "デスクトップセット", "部品004", "部品004", 5, 1, 1),
    ("完成品002", "デスクトップセット", "部品005", "部品005", 20, 1, 3),
    ("完成品003", "マウスセット", "部品006", "部品006", 100, 1, 5),
    ("完成品004", "キーボードセット", "部品007", "部品007", 50, 2, 2),
    ("完成品004", "キーボードセット", "部品008", "部品008", 30, 1, 1),
];

/// 照合用の商品コード
pub const SAMPLE_CODES: &[&str] = &[
    "完成品001",
    "完成品002",
    "存在しないコード",
    "完成品004",
    "不正なコード123",
    "完成品003",
];

/// サンプルマスタを行データとして返す（ヘッダーを1行目とし、2行目から）
pub fn sample_master_rows() -> Vec<RawRow> {
    SAMPLE_MASTER
        .iter()
        .enumerate()
        .map(|(i, &(code, name, display, part, input_qty, box_qty, qty))| {
            RawRow::new(
                i + 2,
                vec![
                    Cell::Text(code.to_string()),
                    Cell::Text(name.to_string()),
                    Cell::Text(display.to_string()),
                    Cell::Text(part.to_string()),
                    Cell::Int(input_qty),
                    Cell::Int(box_qty),
                    Cell::Int(qty),
                ],
            )
        })
        .collect()
}
