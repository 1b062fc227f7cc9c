use clap::Parser;
use parts_match::{cli, config, error, export, logging, reader};
use parts_match_common::{MasterIndex, MasterStore, MatchResult, MatchSummary};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use serde::Serialize;
use std::path::Path;

/// マスタ閲覧用の出力
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MasterListing<'a> {
    total_finished_products: usize,
    total_parts: usize,
    data: &'a [parts_match_common::FinishedProduct],
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        tracing::error!("{}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let saves_results = cli.command.saves_results();

    match cli.command {
        Commands::Master { file, header_row, json } => {
            let header_row = header_row.unwrap_or(config.default_header_row);
            let store = MasterStore::new();
            let master = load_master(&store, &file, header_row)?;

            if json {
                let listing = MasterListing {
                    total_finished_products: master.len(),
                    total_parts: master.total_parts(),
                    data: master.entries(),
                };
                println!("{}", serde_json::to_string_pretty(&listing)?);
            } else {
                print_master(&master);
            }
        }

        Commands::Match { master, codes, header_row, output, excel } => {
            println!("🔍 parts-match - 完成品照合\n");
            let header_row = header_row.unwrap_or(config.default_header_row);
            let store = MasterStore::new();

            println!("[1/3] マスタを読み込み中...");
            let index = load_master(&store, &master, header_row)?;
            println!("✔ マスタを読み込みました（{}個の完成品）\n", index.len());

            println!("[2/3] 照合中...");
            let product_codes = reader::read_codes(&codes)?;
            let results = store.match_codes(product_codes.as_slice())?;
            let summary = MatchSummary::from_results(&results);
            print_results(&results);
            println!(
                "✔ 照合完了: {}件マッチ / {}件未マッチ (合計: {}件)\n",
                summary.matched, summary.unmatched, summary.total
            );

            if saves_results {
                println!("[3/3] 結果を保存中...");
            }
            if let Some(output) = output {
                export::ResultsFile::new(&master, results.clone()).save(&output)?;
                println!("✔ 結果を保存: {}", output.display());
            }
            if let Some(excel) = excel {
                let path = export::output_path_for_report(&excel, &config.report_file_name);
                export::excel::generate_excel(&results, &path)?;
                println!("✔ Excel出力: {}", path.display());
            }

            println!("\n✅ 完了");
        }

        Commands::Export { input, output } => {
            println!("📄 parts-match - エクスポート\n");

            let results = export::ResultsFile::load(&input)?;
            let path = match output {
                Some(output) => export::output_path_for_report(&output, &config.report_file_name),
                None => config.report_path(),
            };

            println!("- Excelを生成中... ({}件)", results.len());
            export::excel::generate_excel(&results, &path)?;
            println!("✔ Excel出力: {}", path.display());

            println!("\n✅ エクスポート完了");
        }

        Commands::Config { set_header_row, set_output_dir, show } => {
            let mut config = config;

            if let Some(header_row) = set_header_row {
                config.set_default_header_row(header_row)?;
                println!("✔ ヘッダー行を設定しました: {}", header_row);
            }

            if let Some(dir) = set_output_dir {
                config.set_output_dir(dir)?;
                println!("✔ 出力ディレクトリを設定しました");
            }

            if show {
                println!("設定:");
                println!("  ヘッダー行: {}", config.default_header_row);
                println!(
                    "  出力ディレクトリ: {}",
                    config
                        .output_dir
                        .as_ref()
                        .map(|d| d.display().to_string())
                        .unwrap_or_else(|| "(カレント)".into())
                );
                println!("  レポートファイル名: {}", config.report_file_name);
            }
        }
    }

    Ok(())
}

fn load_master(
    store: &MasterStore,
    path: &Path,
    header_row: usize,
) -> Result<std::sync::Arc<MasterIndex>> {
    tracing::info!(file = %path.display(), header_row, "マスタ読込");
    let rows = reader::read_master_rows(path, header_row)?;
    Ok(store.load(&rows)?)
}

fn print_master(master: &MasterIndex) {
    println!("部品展開マスタ: {}個の完成品 / {}部品\n", master.len(), master.total_parts());
    for product in master.iter() {
        println!("■ {} {} ({}部品)", product.finished_code, product.finished_name, product.parts.len());
        for part in &product.parts {
            println!(
                "    - {}  構成数量: {}  入数: {}  箱数: {}",
                part.part_code, part.quantity, part.input_qty, part.box_qty
            );
        }
    }
}

fn print_results(results: &[MatchResult]) {
    for r in results {
        if r.matched {
            println!(
                "  {:>4}  ✓ {}  {} ({}部品)",
                r.row,
                r.product_code,
                r.finished_product_name.as_deref().unwrap_or_default(),
                r.parts_count.unwrap_or_default()
            );
        } else {
            println!("  {:>4}  ✗ {}  未マッチ", r.row, r.product_code);
        }
    }
}
