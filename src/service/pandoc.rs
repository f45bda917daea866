use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use log::{debug, info};
use crate::models::format::FormatListing;
use crate::service::traits::i_service::DocumentEngine;
use crate::utils::error::{ConverterError, Result};

pub const DEFAULT_PANDOC_BINARY: &str = "pandoc";

/// 透過 pandoc 執行檔實作的轉換引擎
pub struct PandocEngine {
    binary: PathBuf,
}

impl PandocEngine {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        PandocEngine { binary: binary.into() }
    }

    fn run(&self, cmd: &mut Command) -> Result<Output> {
        debug!("pandoc 指令：{:?}", cmd);
        cmd.output().map_err(|e| {
            ConverterError::EngineUnavailable(format!("無法執行 {}：{}", self.binary.display(), e))
        })
    }

    fn list(&self, flag: &str) -> Result<Vec<String>> {
        let output = self.run(Command::new(&self.binary).arg(flag))?;
        if !output.status.success() {
            return Err(ConverterError::EngineUnavailable(format!(
                "{} {} 失敗：{}",
                self.binary.display(),
                flag,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        Ok(parse_format_lines(&String::from_utf8_lossy(&output.stdout)))
    }
}

impl Default for PandocEngine {
    fn default() -> Self {
        PandocEngine::new(DEFAULT_PANDOC_BINARY)
    }
}

impl DocumentEngine for PandocEngine {
    fn list_formats(&self) -> Result<FormatListing> {
        let listing = FormatListing {
            input: self.list("--list-input-formats")?,
            output: self.list("--list-output-formats")?,
        };
        info!("pandoc 回報 {} 個輸入格式，{} 個輸出格式", listing.input.len(), listing.output.len());
        Ok(listing)
    }

    fn convert_file(&self, input: &Path, to: &str, output: &Path, encoding: &str) -> Result<()> {
        // pandoc 僅以 UTF-8 讀寫文字
        if !is_utf8_label(encoding) {
            return Err(ConverterError::UnsupportedEncoding(encoding.to_string()));
        }

        let mut cmd = Command::new(&self.binary);
        cmd.arg(input).arg("--to").arg(to).arg("--output").arg(output);

        let result = self.run(&mut cmd)?;
        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            let detail = match stderr.trim() {
                "" => format!("pandoc 結束碼：{}", result.status),
                message => message.to_string(),
            };
            return Err(ConverterError::ConversionFailed { input: input.to_path_buf(), detail });
        }
        Ok(())
    }
}

/// 解析 `--list-*-formats` 的輸出，每行一個格式
pub fn parse_format_lines(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

fn is_utf8_label(encoding: &str) -> bool {
    matches!(encoding.to_ascii_lowercase().as_str(), "utf-8" | "utf8")
}
