//! Parts Match Common Library
//!
//! 部品展開マスタの構築と完成品コード照合のコア。
//! ファイル読み込みやCLIには依存しない。

pub mod types;
pub mod error;
pub mod row;
pub mod master;
pub mod matcher;
pub mod store;
pub mod report;
pub mod samples;

#[cfg(feature = "excel")]
pub mod export;

pub use types::{Cell, FinishedProduct, MatchResult, MatchSummary, PartRecord};
pub use error::{Error, Result};
pub use row::{PartLine, RawRow, MASTER_COLUMNS};
pub use master::{build_master, MasterIndex};
pub use matcher::match_codes;
pub use store::MasterStore;
pub use report::{DetailRow, MatchedRow, Report, UnmatchedRow};
