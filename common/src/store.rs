//! 現在のマスタを保持する状態オブジェクト
//!
//! 未読込（Unset）と読込済み（Loaded）の2状態。
//! 構築はロック外で完了させてから参照を差し替えるため、
//! 照合側から構築途中のマスタが見えることはない。
//! 構築に失敗した場合は直前のマスタがそのまま残る。

use crate::error::{Error, Result};
use crate::master::{build_master, MasterIndex};
use crate::matcher;
use crate::row::RawRow;
use crate::types::MatchResult;
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Debug, Default)]
pub struct MasterStore {
    current: RwLock<Option<Arc<MasterIndex>>>,
}

impl MasterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 行からマスタを構築して差し替える
    pub fn load(&self, rows: &[RawRow]) -> Result<Arc<MasterIndex>> {
        let index = build_master(rows)?;
        Ok(self.replace(index))
    }

    /// 構築済みのマスタで差し替える
    pub fn replace(&self, index: MasterIndex) -> Arc<MasterIndex> {
        let index = Arc::new(index);
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = Some(Arc::clone(&index));
        index
    }

    /// 現在のマスタ（未読込なら None）
    pub fn current(&self) -> Option<Arc<MasterIndex>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.current().is_some_and(|index| !index.is_empty())
    }

    /// 現在のマスタで照合
    pub fn match_codes<S: AsRef<str>>(&self, codes: &[S]) -> Result<Vec<MatchResult>> {
        let index = self.current().ok_or(Error::EmptyIndex)?;
        matcher::match_codes(&index, codes)
    }
}
