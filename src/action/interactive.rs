use dialoguer::{Confirm, Input, Select};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::action::cli::run_task;
use crate::config::ports::{AppConfig, ConfigPort, Task};
use crate::facade::conversion_facade::ConversionFacade;
use crate::service::config_service::{default_pandoc_binary, ConfigService, DEFAULT_BATCH_OUTPUT_DIR};
use crate::service::file::FileService;
use crate::service::pandoc::PandocEngine;
use crate::utils::error::{ConverterError, Result};
use crate::utils::utils::setup_logging;

const PREFERRED_FORMAT: &str = "html";

pub fn process_interactive_mode() -> Result<()> {
    println!("=== 歡迎使用互動模式 ===");
    setup_logging("info")?;

    let facade = ConversionFacade::new(
        Arc::new(PandocEngine::new(default_pandoc_binary())),
        Box::new(FileService::new()),
    );
    // 格式清單只查詢一次，之後的驗證沿用同一份快取
    let formats = facade.registry().get_supported_formats()?.to_vec();

    let config_service = ConfigService::new(Box::new(InteractiveConfigAdapter::new(formats)));
    let config = config_service.get_config()?;
    run_task(&facade, &config)
}

pub fn get_task_choice() -> Result<usize> {
    Select::new()
        .with_prompt("選擇要執行的工作（使用方向鍵選擇，按 Enter 確認）")
        .items(&["列出支援的輸出格式", "轉換單一檔案", "批次轉換目錄"])
        .default(1)
        .interact()
        .map_err(|e| ConverterError::Prompt(format!("工作選擇失敗: {}", e)))
}

pub fn get_input_file() -> Result<PathBuf> {
    let input: String = Input::new()
        .with_prompt("請輸入要轉換的檔案路徑（例如：./README.md）")
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            if Path::new(input).is_file() { Ok(()) } else { Err(format!("檔案 '{}' 不存在", input)) }
        })
        .interact_text()?;
    Ok(PathBuf::from(input))
}

pub fn get_input_dir() -> Result<PathBuf> {
    let input: String = Input::new()
        .with_prompt("請輸入要處理的目錄路徑（例如：./docs）")
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            if Path::new(input).is_dir() { Ok(()) } else { Err(format!("目錄 '{}' 不存在", input)) }
        })
        .interact_text()?;
    Ok(PathBuf::from(input))
}

pub fn get_format(formats: &[String]) -> Result<String> {
    if formats.is_empty() {
        return Err(ConverterError::EngineUnavailable("轉換引擎未回報任何輸出格式".to_string()));
    }
    let default = formats.iter().position(|f| f == PREFERRED_FORMAT).unwrap_or(0);
    let index = Select::new()
        .with_prompt("選擇輸出格式")
        .items(formats)
        .default(default)
        .max_length(15)
        .interact()
        .map_err(|e| ConverterError::Prompt(format!("格式選擇失敗: {}", e)))?;
    Ok(formats[index].clone())
}

pub fn get_output_path(default: &str) -> Result<PathBuf> {
    let output: String = Input::new()
        .with_prompt(format!("輸入輸出目錄或檔名（預設為 {}）", default))
        .default(default.to_string())
        .interact_text()?;
    Ok(PathBuf::from(output))
}

pub fn get_recursive_option() -> Result<bool> {
    Confirm::new()
        .with_prompt("是否遞迴處理子目錄？")
        .default(false)
        .interact()
        .map_err(|e| ConverterError::Prompt(format!("遞迴選項輸入失敗: {}", e)))
}

// 交互配置適配器
pub struct InteractiveConfigAdapter {
    formats: Vec<String>,
}

impl InteractiveConfigAdapter {
    pub fn new(formats: Vec<String>) -> Self {
        InteractiveConfigAdapter { formats }
    }
}

impl ConfigPort for InteractiveConfigAdapter {
    fn get_config(&self) -> Result<AppConfig> {
        let task = match get_task_choice()? {
            0 => Task::ListFormats,
            1 => {
                let input = get_input_file()?;
                let format = get_format(&self.formats)?;
                let output = get_output_path(".")?;
                Task::Convert { input, format, output }
            }
            _ => {
                let input_dir = get_input_dir()?;
                let format = get_format(&self.formats)?;
                let output_dir = get_output_path(DEFAULT_BATCH_OUTPUT_DIR)?;
                let recursive = get_recursive_option()?;
                Task::Batch {
                    input_dir,
                    format,
                    output_dir,
                    recursive,
                    include: vec!["*".to_string()],
                    exclude: None,
                }
            }
        };

        Ok(AppConfig {
            task,
            log_level: "info".to_string(),
            no_progress: false,
            pandoc: default_pandoc_binary(),
        })
    }
}
