//! 完成品照合モジュール
//!
//! 入力コードの一覧をマスタと完全一致で照合する。

use crate::error::{Error, Result};
use crate::master::MasterIndex;
use crate::types::{MatchResult, MatchSummary};

/// 入力コードをマスタと照合
///
/// 入力1件につき結果1件を入力順で返す（重複コードもそれぞれ返す）。
/// マスタが空の場合は `Error::EmptyIndex`。
pub fn match_codes<S: AsRef<str>>(index: &MasterIndex, codes: &[S]) -> Result<Vec<MatchResult>> {
    if index.is_empty() {
        tracing::warn!("マスタ未読込のまま照合が要求されました");
        return Err(Error::EmptyIndex);
    }

    let results: Vec<MatchResult> = codes
        .iter()
        .enumerate()
        .map(|(i, code)| {
            let code = code.as_ref().trim();
            match index.get(code) {
                Some(product) => MatchResult::matched(i + 1, code, product),
                None => MatchResult::unmatched(i + 1, code),
            }
        })
        .collect();

    let summary = MatchSummary::from_results(&results);
    tracing::info!(
        total = summary.total,
        matched = summary.matched,
        unmatched = summary.unmatched,
        "照合完了"
    );
    Ok(results)
}
