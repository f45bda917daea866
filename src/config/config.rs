use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use crate::service::pandoc::DEFAULT_PANDOC_BINARY;
use crate::utils::error::{ConverterError, Result};

#[derive(Parser, Clone, Debug)]
#[command(
    name = "doc-converter",
    about = "透過 pandoc 轉換文件格式的命令列工具",
    long_about = "一個呼叫 pandoc 轉換文件格式的命令列工具，支援列出輸出格式、單一檔案轉換與目錄批次轉換。\n不帶任何參數執行時進入互動模式。\n使用 `--help` 查看詳細用法。",
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    #[arg(long, global = true, default_value = "info", value_parser = ["debug", "info", "warn", "error"])]
    pub log_level: String,
    #[arg(long, global = true, default_value_t = false)]
    pub no_progress: bool,
    #[arg(long, global = true, env = "PANDOC_PATH", default_value = DEFAULT_PANDOC_BINARY)]
    pub pandoc: PathBuf,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// 列出所有支援的輸出格式
    ListFormats,
    /// 轉換單一檔案
    Convert(ConvertArgs),
    /// 轉換目錄中的多個檔案
    Batch(BatchArgs),
}

#[derive(Args, Clone, Debug)]
pub struct ConvertArgs {
    /// 要轉換的檔案
    pub file: PathBuf,
    /// 輸出格式
    #[arg(short, long)]
    pub format: String,
    /// 輸出目錄或檔名；為目錄時依輸入檔名推導，預設為目前目錄
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Clone, Debug)]
pub struct BatchArgs {
    /// 要處理的輸入目錄
    pub input_dir: PathBuf,
    /// 輸出格式
    #[arg(short, long)]
    pub format: String,
    /// 輸出目錄，預設為目前目錄下的 output
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// 遞迴處理子目錄
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,
    #[arg(long, default_value = "*", value_delimiter = ',')]
    pub include: Vec<String>,
    #[arg(long, value_delimiter = ',')]
    pub exclude: Option<Vec<String>>,
}

/// 格式識別字一律小寫
pub fn normalize_format(format: &str) -> String {
    format.trim().to_lowercase()
}

pub fn validate_input_file(input: &Path) -> Result<&Path> {
    if !input.exists() {
        log::error!("輸入檔案不存在：{}", input.display());
        return Err(ConverterError::InputNotFound(input.to_path_buf()));
    }
    if !input.is_file() {
        return Err(ConverterError::InvalidInput(format!("'{}' 不是一般檔案", input.display())));
    }
    Ok(input)
}
