use std::env;
use std::path::PathBuf;
use crate::config::ports::{AppConfig, ConfigPort, Task};
use crate::service::pandoc::DEFAULT_PANDOC_BINARY;
use crate::utils::error::Result;

pub const DEFAULT_BATCH_OUTPUT_DIR: &str = "output";

// 配置服務，負責選擇適當的配置適配器
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> Result<AppConfig> {
        self.config_port.get_config()
    }
}

/// 單一檔案轉換的預設輸出位置：目前目錄
pub fn default_convert_output() -> Result<PathBuf> {
    Ok(env::current_dir()?)
}

/// 批次轉換的預設輸出目錄：目前目錄下的 output
pub fn default_batch_output() -> Result<PathBuf> {
    Ok(env::current_dir()?.join(DEFAULT_BATCH_OUTPUT_DIR))
}

pub fn default_pandoc_binary() -> PathBuf {
    env::var_os("PANDOC_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PANDOC_BINARY))
}

// 預設配置適配器，僅指定工作內容，其餘使用預設值
pub struct DefaultConfigAdapter {
    task: Task,
}

impl DefaultConfigAdapter {
    pub fn new(task: Task) -> Self {
        DefaultConfigAdapter { task }
    }
}

impl ConfigPort for DefaultConfigAdapter {
    fn get_config(&self) -> Result<AppConfig> {
        Ok(AppConfig {
            task: self.task.clone(),
            log_level: "info".to_string(),
            no_progress: false,
            pandoc: default_pandoc_binary(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_adapter_keeps_task() {
        let service = ConfigService::new(Box::new(DefaultConfigAdapter::new(Task::ListFormats)));
        let config = service.get_config().unwrap();
        assert_eq!(config.task, Task::ListFormats);
        assert_eq!(config.log_level, "info");
        assert!(!config.no_progress);
    }

    #[test]
    fn test_default_batch_output_under_cwd() {
        let output = default_batch_output().unwrap();
        assert_eq!(output, env::current_dir().unwrap().join("output"));
    }
}
