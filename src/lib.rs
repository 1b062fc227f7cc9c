pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod reader;

pub use parts_match_common::{MasterIndex, MasterStore, MatchResult, MatchSummary};
