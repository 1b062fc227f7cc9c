//! 部品展開マスタと照合結果の型定義
//!
//! - Cell: 読み込んだ表のセル値（Excel/CSV共通）
//! - PartRecord / FinishedProduct: マスタの構成部品・完成品
//! - MatchResult / MatchSummary: 照合結果

use serde::{Deserialize, Serialize};

/// 表のセル値
///
/// Excelは型付き、CSVは常に `Text` で渡される。
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Cell {
    /// 空セル判定（空白のみの文字列も空とみなす）
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// 文字列化してトリム
    ///
    /// 整数値のFloatは小数部なしで出力する（Excelの数値コード `1001.0` → `"1001"`）。
    pub fn to_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.trim().to_string(),
            Cell::Int(i) => i.to_string(),
            Cell::Float(f) => {
                if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
                    format!("{}", *f as i64)
                } else {
                    f.to_string()
                }
            }
            Cell::Bool(b) => b.to_string(),
        }
    }

    /// 整数として解釈
    ///
    /// 空セルは `Ok(None)`。小数・非数値は `Err`（エラーメッセージ）。
    pub fn to_integer(&self) -> std::result::Result<Option<i64>, String> {
        match self {
            Cell::Empty => Ok(None),
            Cell::Int(i) => Ok(Some(*i)),
            Cell::Float(f) => float_to_integer(*f).map(Some),
            Cell::Bool(b) => Err(format!("整数ではありません: {}", b)),
            Cell::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    return Ok(None);
                }
                if let Ok(i) = s.parse::<i64>() {
                    return Ok(Some(i));
                }
                match s.parse::<f64>() {
                    Ok(f) => float_to_integer(f).map(Some),
                    Err(_) => Err(format!("整数ではありません: {}", s)),
                }
            }
        }
    }
}

fn float_to_integer(f: f64) -> std::result::Result<i64, String> {
    if !f.is_finite() {
        return Err(format!("整数ではありません: {}", f));
    }
    if f.fract() != 0.0 {
        return Err(format!("小数は指定できません: {}", f));
    }
    // i64::MAX as f64 は 2^63 に丸められるため未満で比較する
    if f < i64::MIN as f64 || f >= i64::MAX as f64 {
        return Err(format!("数値が大きすぎます: {}", f));
    }
    Ok(f as i64)
}

/// 構成部品（部品展開の1行）
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartRecord {
    /// 構成部品商品コード
    pub part_code: String,
    /// 構成数量
    pub quantity: u32,
    /// 入数
    pub input_qty: u32,
    /// 箱数
    pub box_qty: u32,
}

/// 完成品（マスタのエントリ）
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinishedProduct {
    pub finished_code: String,
    /// 最初に出現した行の商品名
    pub finished_name: String,
    /// 構成部品（行順）
    pub parts: Vec<PartRecord>,
}

/// 照合結果（入力コード1件ごと）
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// 入力リスト上の位置（1始まり）
    pub row: usize,
    pub product_code: String,
    pub matched: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_product_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parts_count: Option<usize>,

    /// マスタの構成部品のコピー
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parts: Option<Vec<PartRecord>>,
}

impl MatchResult {
    pub fn matched(row: usize, product_code: impl Into<String>, product: &FinishedProduct) -> Self {
        Self {
            row,
            product_code: product_code.into(),
            matched: true,
            finished_product_name: Some(product.finished_name.clone()),
            parts_count: Some(product.parts.len()),
            parts: Some(product.parts.clone()),
        }
    }

    pub fn unmatched(row: usize, product_code: impl Into<String>) -> Self {
        Self {
            row,
            product_code: product_code.into(),
            matched: false,
            ..Default::default()
        }
    }

    /// 構成部品（未マッチは空）
    pub fn parts(&self) -> &[PartRecord] {
        self.parts.as_deref().unwrap_or_default()
    }
}

/// 照合件数の集計
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub total: usize,
    pub matched: usize,
    pub unmatched: usize,
}

impl MatchSummary {
    pub fn from_results(results: &[MatchResult]) -> Self {
        let matched = results.iter().filter(|r| r.matched).count();
        Self {
            total: results.len(),
            matched,
            unmatched: results.len() - matched,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_is_empty() {
        assert!(Cell::Empty.is_empty());
        assert!(Cell::Text("   ".to_string()).is_empty());
        assert!(!Cell::Text("A".to_string()).is_empty());
        assert!(!Cell::Int(0).is_empty());
    }

    #[test]
    fn test_cell_to_text() {
        assert_eq!(Cell::Text("  完成品001 ".to_string()).to_text(), "完成品001");
        assert_eq!(Cell::Int(42).to_text(), "42");
        assert_eq!(Cell::Float(1001.0).to_text(), "1001");
        assert_eq!(Cell::Float(1.5).to_text(), "1.5");
        assert_eq!(Cell::Empty.to_text(), "");
    }

    #[test]
    fn test_cell_to_integer() {
        assert_eq!(Cell::Int(3).to_integer(), Ok(Some(3)));
        assert_eq!(Cell::Float(4.0).to_integer(), Ok(Some(4)));
        assert_eq!(Cell::Text(" 12 ".to_string()).to_integer(), Ok(Some(12)));
        assert_eq!(Cell::Text("5.0".to_string()).to_integer(), Ok(Some(5)));
        assert_eq!(Cell::Empty.to_integer(), Ok(None));
        assert_eq!(Cell::Text("".to_string()).to_integer(), Ok(None));
    }

    #[test]
    fn test_cell_to_integer_rejects_invalid() {
        assert!(Cell::Text("abc".to_string()).to_integer().is_err());
        assert!(Cell::Float(2.5).to_integer().is_err());
        assert!(Cell::Bool(true).to_integer().is_err());
        assert!(Cell::Float(f64::NAN).to_integer().is_err());
    }

    #[test]
    fn test_cell_to_integer_out_of_range() {
        let err = Cell::Float(1e20).to_integer().unwrap_err();
        assert!(err.contains("100000000000000000000"), "{}", err);
        assert!(!err.contains("9223372036854775807"));

        assert!(Cell::Text("1e20".to_string()).to_integer().is_err());
        assert!(Cell::Float(-1e20).to_integer().is_err());
    }

    #[test]
    fn test_match_result_unmatched_serialize() {
        let result = MatchResult::unmatched(3, "存在しないコード");
        let json = serde_json::to_string(&result).expect("シリアライズ失敗");
        assert!(json.contains("\"row\":3"));
        assert!(json.contains("\"matched\":false"));
        assert!(!json.contains("partsCount"));
        assert!(!json.contains("finishedProductName"));
    }

    #[test]
    fn test_match_result_matched_copies_parts() {
        let product = FinishedProduct {
            finished_code: "完成品001".to_string(),
            finished_name: "ノートパソコンセット".to_string(),
            parts: vec![PartRecord {
                part_code: "部品001".to_string(),
                quantity: 1,
                input_qty: 2,
                box_qty: 5,
            }],
        };

        let result = MatchResult::matched(1, "完成品001", &product);
        assert!(result.matched);
        assert_eq!(result.parts_count, Some(1));
        assert_eq!(result.parts(), product.parts.as_slice());

        let json = serde_json::to_string(&result).expect("シリアライズ失敗");
        assert!(json.contains("\"finishedProductName\":\"ノートパソコンセット\""));
        assert!(json.contains("\"partCode\":\"部品001\""));
        assert!(json.contains("\"inputQty\":2"));
    }

    #[test]
    fn test_match_result_deserialize_missing_fields() {
        let json = r#"{"row": 2, "productCode": "X", "matched": false}"#;
        let result: MatchResult = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(result.row, 2);
        assert!(result.parts().is_empty());
        assert_eq!(result.finished_product_name, None);
    }

    #[test]
    fn test_match_summary() {
        let results = vec![
            MatchResult::unmatched(1, "A"),
            MatchResult::matched(2, "B", &FinishedProduct::default()),
            MatchResult::unmatched(3, "C"),
        ];
        let summary = MatchSummary::from_results(&results);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.matched, 1);
        assert_eq!(summary.unmatched, 2);
    }
}
