//! 部品展開マスタモジュール
//!
//! 1行1構成部品の表を、完成品コードをキーにしたインデックスへ変換する。
//! 完成品は最初に出現した行の商品名で登録し、構成部品は行順に追加する。

use crate::error::Result;
use crate::row::{PartLine, RawRow};
use crate::types::FinishedProduct;
use std::collections::HashMap;

/// 完成品コード → 完成品 のインデックス
///
/// 反復順は完成品コードの初出順。
#[derive(Debug, Clone, Default)]
pub struct MasterIndex {
    products: Vec<FinishedProduct>,
    positions: HashMap<String, usize>,
}

impl MasterIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// 完成品数
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// 完成品コードで検索（完全一致）
    pub fn get(&self, finished_code: &str) -> Option<&FinishedProduct> {
        self.positions
            .get(finished_code)
            .map(|&i| &self.products[i])
    }

    pub fn contains(&self, finished_code: &str) -> bool {
        self.positions.contains_key(finished_code)
    }

    /// 全完成品（初出順）
    pub fn entries(&self) -> &[FinishedProduct] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &FinishedProduct> {
        self.products.iter()
    }

    /// 構成部品の総数（= 読み込んだ行数）
    pub fn total_parts(&self) -> usize {
        self.products.iter().map(|p| p.parts.len()).sum()
    }

    /// 1行分を追加
    ///
    /// 既存の完成品には商品名を上書きせず部品だけを追加する。
    fn push_line(&mut self, line: PartLine) {
        let record = line.to_part_record();
        let index = match self.positions.get(&line.finished_code) {
            Some(&i) => i,
            None => {
                let i = self.products.len();
                self.positions.insert(line.finished_code.clone(), i);
                self.products.push(FinishedProduct {
                    finished_code: line.finished_code,
                    finished_name: line.finished_name,
                    parts: Vec::new(),
                });
                i
            }
        };
        self.products[index].parts.push(record);
    }
}

/// 表の行からマスタを構築
///
/// 全行を検証し、1行でも不正なら何も返さずエラーにする。
/// 空行も不正な行として扱う（空行の除去は読み込み側で行う）。
///
/// # Examples
/// ```
/// use parts_match_common::{build_master, Cell, RawRow};
///
/// let text = |s: &str| Cell::Text(s.to_string());
/// let rows = vec![RawRow::new(2, vec![
///     text("完成品001"), text("セット"), text("部品001"), text("部品001"),
///     Cell::Int(2), Cell::Int(5), Cell::Int(1),
/// ])];
/// let master = build_master(&rows).unwrap();
/// assert_eq!(master.get("完成品001").unwrap().parts.len(), 1);
/// ```
pub fn build_master(rows: &[RawRow]) -> Result<MasterIndex> {
    let mut index = MasterIndex::new();

    for row in rows {
        let line = PartLine::from_cells(row.line, &row.cells)?;
        index.push_line(line);
    }

    tracing::info!(
        products = index.len(),
        rows = rows.len(),
        "部品展開マスタを構築しました"
    );
    Ok(index)
}
