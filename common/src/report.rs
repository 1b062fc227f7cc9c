//! 照合結果レポート
//!
//! 照合結果を出力用の3グループ（マッチ・未マッチ・構成部品明細）に分ける。

use crate::types::{MatchResult, PartRecord};
use serde::Serialize;

pub const MATCHED_HEADERS: [&str; 4] = ["Row", "Product Code", "Finished Product Name", "Parts Count"];
pub const UNMATCHED_HEADERS: [&str; 3] = ["Row", "Product Code", "Status"];
pub const DETAIL_HEADERS: [&str; 6] = [
    "完成品コード",
    "完成品商品名",
    "構成部品商品コード",
    "入数",
    "箱数",
    "構成数量",
];

pub const UNMATCHED_STATUS: &str = "Unmatched";

/// マッチした入力の集計行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedRow {
    pub row: usize,
    pub product_code: String,
    pub finished_product_name: String,
    pub parts_count: usize,
}

/// マッチしなかった入力の行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnmatchedRow {
    pub row: usize,
    pub product_code: String,
}

/// 構成部品明細の行
///
/// 構成部品のない完成品は `part: None` のプレースホルダー1行になる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailRow {
    pub product_code: String,
    pub finished_product_name: String,
    pub part: Option<PartRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub matched: Vec<MatchedRow>,
    pub unmatched: Vec<UnmatchedRow>,
    pub detail: Vec<DetailRow>,
}

impl Report {
    pub fn from_results(results: &[MatchResult]) -> Self {
        let mut report = Self::default();

        for result in results {
            if !result.matched {
                report.unmatched.push(UnmatchedRow {
                    row: result.row,
                    product_code: result.product_code.clone(),
                });
                continue;
            }

            let name = result.finished_product_name.clone().unwrap_or_default();
            let parts = result.parts();

            report.matched.push(MatchedRow {
                row: result.row,
                product_code: result.product_code.clone(),
                finished_product_name: name.clone(),
                parts_count: result.parts_count.unwrap_or(parts.len()),
            });

            if parts.is_empty() {
                report.detail.push(DetailRow {
                    product_code: result.product_code.clone(),
                    finished_product_name: name,
                    part: None,
                });
            } else {
                report.detail.extend(parts.iter().map(|part| DetailRow {
                    product_code: result.product_code.clone(),
                    finished_product_name: name.clone(),
                    part: Some(part.clone()),
                }));
            }
        }

        report
    }

    pub fn is_empty(&self) -> bool {
        self.matched.is_empty() && self.unmatched.is_empty() && self.detail.is_empty()
    }
}
