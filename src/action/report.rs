use std::fs;
use std::path::Path;
use crate::models::conversion::{BatchPlan, BatchReport};
use crate::utils::utils::{chunk_into_rows, display_relative};

const FORMAT_COLUMNS: usize = 4;

/// 將格式清單排成固定欄數的表格
pub fn render_format_table(formats: &[String]) -> String {
    let rows = chunk_into_rows(formats, FORMAT_COLUMNS);
    let headers: Vec<String> = (1..=FORMAT_COLUMNS).map(|i| format!("Format {}", i)).collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let render_row = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };
    let separator = widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("-+-");

    let mut lines = vec![render_row(headers.as_slice()), separator];
    lines.extend(rows.iter().map(|row| render_row(row.as_slice())));
    lines.join("\n")
}

pub fn print_formats(formats: &[String]) {
    if formats.is_empty() {
        println!("找不到任何輸出格式。");
        return;
    }
    println!("pandoc 支援的輸出格式（共 {} 種）", formats.len());
    println!("{}", render_format_table(formats));
}

pub fn print_conversion_success(input: &Path, output: &Path) {
    let parent = output.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
    let saved_in = fs::canonicalize(parent).unwrap_or_else(|_| parent.to_path_buf());
    println!("=== 轉換完成 ===");
    println!(
        "檔案 '{}' 已成功轉換為 '{}'！",
        file_name(input),
        file_name(output)
    );
    println!("儲存於：{}", saved_in.display());
}

pub fn render_batch_report(report: &BatchReport, plan: &BatchPlan) -> String {
    let mut lines = vec!["批次轉換完成！".to_string()];
    if !report.successes.is_empty() {
        lines.push(format!("成功（{}）：", report.successes.len()));
        for (input, _) in &report.successes {
            lines.push(format!("  {}", display_relative(input, &plan.input_dir).display()));
        }
    }
    if !report.failures.is_empty() {
        lines.push(format!("失敗（{}）：", report.failures.len()));
        for (input, detail) in &report.failures {
            lines.push(format!("  {}（失敗：{}）", display_relative(input, &plan.input_dir).display(), detail));
        }
    }
    lines.join("\n")
}

pub fn print_batch_report(report: &BatchReport, plan: &BatchPlan) {
    println!("\n{}", render_batch_report(report, plan));
    println!("輸出目錄：{}", plan.output_dir.display());
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
