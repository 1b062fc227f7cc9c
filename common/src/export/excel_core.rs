//! Excel生成（共通ライブラリ）
//!
//! 照合結果レポートを Matched / Unmatched / Detail の3シートで出力する。
//! 行のないシートは作らない。

use crate::report::{
    Report, DETAIL_HEADERS, MATCHED_HEADERS, UNMATCHED_HEADERS, UNMATCHED_STATUS,
};
use rust_xlsxwriter::*;

pub const MATCHED_SHEET: &str = "Matched";
pub const UNMATCHED_SHEET: &str = "Unmatched";
pub const DETAIL_SHEET: &str = "Detail";

const CODE_COL_WIDTH: f64 = 18.0;
const NAME_COL_WIDTH: f64 = 28.0;
const NUMBER_COL_WIDTH: f64 = 10.0;

/// レポートをExcelバッファに生成
pub fn generate_report_buffer(report: &Report) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(0x366092))
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);

    if !report.matched.is_empty() {
        let worksheet = add_sheet(&mut workbook, MATCHED_SHEET, &MATCHED_HEADERS, &header_format)?;
        set_widths(worksheet, &[NUMBER_COL_WIDTH, CODE_COL_WIDTH, NAME_COL_WIDTH, NUMBER_COL_WIDTH])?;

        for (i, m) in report.matched.iter().enumerate() {
            let r = (i + 1) as u32;
            worksheet.write_number(r, 0, m.row as f64)
                .map_err(|e| format!("Matched書き込みエラー: {}", e))?;
            worksheet.write_string(r, 1, &m.product_code)
                .map_err(|e| format!("Matched書き込みエラー: {}", e))?;
            worksheet.write_string(r, 2, &m.finished_product_name)
                .map_err(|e| format!("Matched書き込みエラー: {}", e))?;
            worksheet.write_number(r, 3, m.parts_count as f64)
                .map_err(|e| format!("Matched書き込みエラー: {}", e))?;
        }
    }

    if !report.unmatched.is_empty() {
        let worksheet = add_sheet(&mut workbook, UNMATCHED_SHEET, &UNMATCHED_HEADERS, &header_format)?;
        set_widths(worksheet, &[NUMBER_COL_WIDTH, CODE_COL_WIDTH, NUMBER_COL_WIDTH + 2.0])?;

        for (i, u) in report.unmatched.iter().enumerate() {
            let r = (i + 1) as u32;
            worksheet.write_number(r, 0, u.row as f64)
                .map_err(|e| format!("Unmatched書き込みエラー: {}", e))?;
            worksheet.write_string(r, 1, &u.product_code)
                .map_err(|e| format!("Unmatched書き込みエラー: {}", e))?;
            worksheet.write_string(r, 2, UNMATCHED_STATUS)
                .map_err(|e| format!("Unmatched書き込みエラー: {}", e))?;
        }
    }

    if !report.detail.is_empty() {
        let worksheet = add_sheet(&mut workbook, DETAIL_SHEET, &DETAIL_HEADERS, &header_format)?;
        set_widths(
            worksheet,
            &[CODE_COL_WIDTH, NAME_COL_WIDTH, CODE_COL_WIDTH, NUMBER_COL_WIDTH, NUMBER_COL_WIDTH, NUMBER_COL_WIDTH],
        )?;

        for (i, d) in report.detail.iter().enumerate() {
            let r = (i + 1) as u32;
            worksheet.write_string(r, 0, &d.product_code)
                .map_err(|e| format!("Detail書き込みエラー: {}", e))?;
            worksheet.write_string(r, 1, &d.finished_product_name)
                .map_err(|e| format!("Detail書き込みエラー: {}", e))?;

            // 構成部品なしは部品欄を空のまま残す
            if let Some(part) = &d.part {
                worksheet.write_string(r, 2, &part.part_code)
                    .map_err(|e| format!("Detail書き込みエラー: {}", e))?;
                worksheet.write_number(r, 3, part.input_qty)
                    .map_err(|e| format!("Detail書き込みエラー: {}", e))?;
                worksheet.write_number(r, 4, part.box_qty)
                    .map_err(|e| format!("Detail書き込みエラー: {}", e))?;
                worksheet.write_number(r, 5, part.quantity)
                    .map_err(|e| format!("Detail書き込みエラー: {}", e))?;
            }
        }
    }

    // 全グループが空でも開けるブックにする
    if report.is_empty() {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(MATCHED_SHEET)
            .map_err(|e| format!("シート名設定エラー: {}", e))?;
        write_headers(worksheet, &MATCHED_HEADERS, &header_format)?;
    }

    workbook.save_to_buffer()
        .map_err(|e| format!("Excel保存エラー: {}", e))
}

fn add_sheet<'a>(
    workbook: &'a mut Workbook,
    name: &str,
    headers: &[&str],
    header_format: &Format,
) -> Result<&'a mut Worksheet, String> {
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(name)
        .map_err(|e| format!("シート名設定エラー: {}", e))?;
    write_headers(worksheet, headers, header_format)?;
    Ok(worksheet)
}

fn write_headers(worksheet: &mut Worksheet, headers: &[&str], format: &Format) -> Result<(), String> {
    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, format)
            .map_err(|e| format!("ヘッダー書き込みエラー: {}", e))?;
    }
    Ok(())
}

fn set_widths(worksheet: &mut Worksheet, widths: &[f64]) -> Result<(), String> {
    for (col, width) in widths.iter().enumerate() {
        worksheet.set_column_width(col as u16, *width)
            .map_err(|e| format!("列幅設定エラー: {}", e))?;
    }
    Ok(())
}
