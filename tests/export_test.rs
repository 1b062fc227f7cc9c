//! 照合結果の保存・Excel出力の統合テスト

use calamine::{open_workbook_auto, Data, Range, Reader};
use parts_match::export::{self, excel, ResultsFile};
use parts_match_common::samples::{sample_master_rows, SAMPLE_CODES};
use parts_match_common::{FinishedProduct, MasterStore, MatchResult, PartRecord};
use std::path::Path;
use tempfile::tempdir;

fn sample_results() -> Vec<MatchResult> {
    let store = MasterStore::new();
    store.load(&sample_master_rows()).expect("マスタ構築失敗");
    store.match_codes(SAMPLE_CODES).expect("照合失敗")
}

/// 書き出したExcelを読み戻す（シート名, シートごとの内容）
fn read_back(path: &Path) -> (Vec<String>, Vec<Range<Data>>) {
    let mut workbook = open_workbook_auto(path).expect("Excel読込失敗");
    let names = workbook.sheet_names();
    let ranges = names
        .iter()
        .map(|name| workbook.worksheet_range(name).expect("シート読込失敗"))
        .collect();
    (names, ranges)
}

fn text(data: &Data) -> String {
    match data {
        Data::String(s) => s.clone(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

#[test]
fn test_excel_generation() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("matching_results.xlsx");

    let result = excel::generate_excel(&sample_results(), &output_path);

    assert!(result.is_ok(), "Excel生成に失敗: {:?}", result.err());
    assert!(output_path.exists(), "Excelファイルが作成されていない");

    let metadata = std::fs::metadata(&output_path).expect("ファイルメタデータ取得失敗");
    assert!(metadata.len() > 0, "Excelファイルが空");
}

#[test]
fn test_excel_generation_empty_results() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("empty.xlsx");

    let result = excel::generate_excel(&[], &output_path);

    assert!(result.is_ok(), "空のExcel生成に失敗: {:?}", result.err());
    assert!(output_path.exists());
}

#[test]
fn test_excel_generation_creates_parent_dir() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("out").join("report.xlsx");

    excel::generate_excel(&sample_results(), &output_path).expect("Excel生成に失敗");
    assert!(output_path.exists());
}

/// 結果JSONの保存→読み込み→Excel出力
#[test]
fn test_results_file_save_and_export() {
    let dir = tempdir().expect("Failed to create temp dir");
    let json_path = dir.path().join("results.json");

    let results = sample_results();
    ResultsFile::new(Path::new("sample_master.xlsx"), results.clone())
        .save(&json_path)
        .expect("結果保存失敗");

    let content = std::fs::read_to_string(&json_path).unwrap();
    assert!(content.contains("\"generatedAt\""));
    assert!(content.contains("\"matched\": 4"));
    assert!(content.contains("\"unmatched\": 2"));

    let loaded = ResultsFile::load(&json_path).expect("結果読込失敗");
    assert_eq!(loaded, results);

    let report_path = export::output_path_for_report(dir.path(), "matching_results.xlsx");
    excel::generate_excel(&loaded, &report_path).expect("Excel生成に失敗");
    assert!(dir.path().join("matching_results.xlsx").exists());
}

/// 結果配列のみのJSONも読み込める
#[test]
fn test_results_file_load_plain_array() {
    let dir = tempdir().expect("Failed to create temp dir");
    let json_path = dir.path().join("results.json");
    std::fs::write(
        &json_path,
        r#"[{"row": 1, "productCode": "完成品001", "matched": true,
             "finishedProductName": "ノートパソコンセット", "partsCount": 0, "parts": []},
            {"row": 2, "productCode": "X", "matched": false}]"#,
    )
    .unwrap();

    let loaded = ResultsFile::load(&json_path).expect("結果読込失敗");
    assert_eq!(loaded.len(), 2);
    assert!(loaded[0].matched);
    assert!(!loaded[1].matched);

    let output_path = dir.path().join("report.xlsx");
    excel::generate_excel(&loaded, &output_path).expect("Excel生成に失敗");
}

#[test]
fn test_results_file_load_invalid_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let json_path = dir.path().join("broken.json");
    std::fs::write(&json_path, "{ invalid").unwrap();

    assert!(ResultsFile::load(&json_path).is_err());
}

/// マッチ・未マッチ・構成部品なしを含むレポートの内容
#[test]
fn test_excel_report_contents() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("report.xlsx");

    let with_parts = FinishedProduct {
        finished_code: "完成品001".to_string(),
        finished_name: "ノートパソコンセット".to_string(),
        parts: vec![PartRecord {
            part_code: "部品001".to_string(),
            quantity: 3,
            input_qty: 2,
            box_qty: 5,
        }],
    };
    let without_parts = FinishedProduct {
        finished_code: "完成品009".to_string(),
        finished_name: "空セット".to_string(),
        parts: Vec::new(),
    };
    let results = vec![
        MatchResult::matched(1, "完成品001", &with_parts),
        MatchResult::unmatched(2, "存在しない"),
        MatchResult::matched(3, "完成品009", &without_parts),
    ];

    excel::generate_excel(&results, &output_path).expect("Excel生成に失敗");
    let (names, ranges) = read_back(&output_path);
    assert_eq!(names, vec!["Matched", "Unmatched", "Detail"]);

    // Matched: ヘッダー + 2行
    let matched = &ranges[0];
    assert_eq!(matched.height(), 3);
    let second: Vec<String> = matched.rows().nth(2).unwrap().iter().map(text).collect();
    assert_eq!(second, vec!["3", "完成品009", "空セット", "0"]);

    // Unmatched: ヘッダー + 1行
    let unmatched = &ranges[1];
    assert_eq!(unmatched.height(), 2);
    let row: Vec<String> = unmatched.rows().nth(1).unwrap().iter().map(text).collect();
    assert_eq!(row, vec!["2", "存在しない", "Unmatched"]);

    // Detail: 部品行 + 構成部品なしの行（C〜F列は空）
    let detail = &ranges[2];
    assert_eq!(detail.height(), 3);
    let part_row: Vec<String> = detail.rows().nth(1).unwrap().iter().map(text).collect();
    assert_eq!(part_row, vec!["完成品001", "ノートパソコンセット", "部品001", "2", "5", "3"]);

    let placeholder: Vec<&Data> = detail.rows().nth(2).unwrap().iter().collect();
    assert_eq!(text(placeholder[0]), "完成品009");
    assert_eq!(text(placeholder[1]), "空セット");
    assert!(placeholder[2..].iter().all(|d| matches!(d, Data::Empty)));
}

/// 行のないシートは作らない
#[test]
fn test_excel_report_omits_empty_sheets() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("unmatched_only.xlsx");

    let results = vec![MatchResult::unmatched(1, "A"), MatchResult::unmatched(2, "B")];
    excel::generate_excel(&results, &output_path).expect("Excel生成に失敗");

    let (names, ranges) = read_back(&output_path);
    assert_eq!(names, vec!["Unmatched"]);
    assert_eq!(ranges[0].height(), 3);
}

/// 結果が空ならヘッダーのみのMatchedシート
#[test]
fn test_excel_report_empty_has_header_only_sheet() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("empty.xlsx");

    excel::generate_excel(&[], &output_path).expect("Excel生成に失敗");

    let (names, ranges) = read_back(&output_path);
    assert_eq!(names, vec!["Matched"]);
    assert_eq!(ranges[0].height(), 1);
    let header: Vec<String> = ranges[0].rows().next().unwrap().iter().map(text).collect();
    assert_eq!(header, vec!["Row", "Product Code", "Finished Product Name", "Parts Count"]);
}
