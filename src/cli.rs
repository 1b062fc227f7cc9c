use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "parts-match")]
#[command(about = "部品展開マスタ照合・照合結果Excel出力ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 部品展開マスタを読み込んで内容を表示
    Master {
        /// マスタファイル（.xlsx/.xls/.csv）
        #[arg(required = true)]
        file: PathBuf,

        /// ヘッダー行（1～10、省略時は設定値）
        #[arg(long)]
        header_row: Option<usize>,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 商品コード一覧をマスタと照合
    Match {
        /// マスタファイル（.xlsx/.xls/.csv）
        #[arg(required = true)]
        master: PathBuf,

        /// 照合用ファイル（A列が商品コード）
        #[arg(required = true)]
        codes: PathBuf,

        /// マスタのヘッダー行（1～10、省略時は設定値）
        #[arg(long)]
        header_row: Option<usize>,

        /// 照合結果JSONの出力先
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 照合結果Excelの出力先（ファイルまたはディレクトリ）
        #[arg(short, long)]
        excel: Option<PathBuf>,
    },

    /// 保存済みの照合結果JSONからExcelを生成
    Export {
        /// 照合結果JSONファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 出力ファイル/ディレクトリ（省略時は設定の出力先）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// 既定のヘッダー行を設定
        #[arg(long)]
        set_header_row: Option<usize>,

        /// 既定の出力ディレクトリを設定
        #[arg(long)]
        set_output_dir: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

impl Commands {
    /// 照合結果の保存先（JSON/Excel）が指定されているか
    pub fn saves_results(&self) -> bool {
        match self {
            Commands::Match { output, excel, .. } => output.is_some() || excel.is_some(),
            Commands::Export { .. } => true,
            _ => false,
        }
    }
}
