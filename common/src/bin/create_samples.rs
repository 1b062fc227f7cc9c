use parts_match_common::samples::{SAMPLE_CODES, SAMPLE_MASTER};
use parts_match_common::MASTER_COLUMNS;
use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook, XlsxError};
use std::env;
use std::path::PathBuf;

fn main() -> Result<(), XlsxError> {
    let args: Vec<String> = env::args().collect();
    let output_dir = if args.len() >= 2 {
        PathBuf::from(&args[1])
    } else {
        PathBuf::from(".")
    };

    if !output_dir.is_dir() {
        eprintln!("Output directory not found: {}", output_dir.display());
        std::process::exit(1);
    }

    let header = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(0x366092))
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);

    // マスタ
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Parts Master")?;

    for (col, title) in MASTER_COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *title, &header)?;
    }
    for (i, &(code, name, display, part, input_qty, box_qty, qty)) in SAMPLE_MASTER.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet.write_string(row, 0, code)?;
        worksheet.write_string(row, 1, name)?;
        worksheet.write_string(row, 2, display)?;
        worksheet.write_string(row, 3, part)?;
        worksheet.write_number(row, 4, input_qty as f64)?;
        worksheet.write_number(row, 5, box_qty as f64)?;
        worksheet.write_number(row, 6, qty as f64)?;
    }
    for (col, width) in [15.0, 20.0, 18.0, 18.0, 12.0, 12.0, 12.0].into_iter().enumerate() {
        worksheet.set_column_width(col as u16, width)?;
    }

    let master_path = output_dir.join("sample_master.xlsx");
    workbook.save(&master_path)?;
    println!("✓ {} を作成しました", master_path.display());

    // 照合用
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Products")?;
    worksheet.write_string_with_format(0, 0, "商品コード", &header)?;
    for (i, code) in SAMPLE_CODES.iter().enumerate() {
        worksheet.write_string((i + 1) as u32, 0, *code)?;
    }
    worksheet.set_column_width(0, 20.0)?;

    let matching_path = output_dir.join("sample_matching.xlsx");
    workbook.save(&matching_path)?;
    println!("✓ {} を作成しました", matching_path.display());

    Ok(())
}
