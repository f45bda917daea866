use std::path::PathBuf;
use crate::utils::error::Result;

// 要執行的工作
#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    ListFormats,
    Convert {
        input: PathBuf,
        format: String,
        output: PathBuf,
    },
    Batch {
        input_dir: PathBuf,
        format: String,
        output_dir: PathBuf,
        recursive: bool,
        include: Vec<String>,
        exclude: Option<Vec<String>>,
    },
}

// 應用配置結構體，封裝所有參數
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub task: Task,
    pub log_level: String,
    pub no_progress: bool,
    pub pandoc: PathBuf,
}

// 配置來源的 Port
pub trait ConfigPort {
    fn get_config(&self) -> Result<AppConfig>;
}

// 轉換執行的 Port
pub trait ConversionPort {
    fn execute(&self, config: AppConfig) -> Result<()>;
}
