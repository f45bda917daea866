use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConverterError {
    #[error("輸入檔案不存在：{}", .0.display())]
    InputNotFound(PathBuf),

    #[error("無效的輸入：{0}")]
    InvalidInput(String),

    #[error("輸出格式 '{0}' 不受支援")]
    UnsupportedFormat(String),

    #[error("轉換 {} 失敗：{detail}", input.display())]
    ConversionFailed { input: PathBuf, detail: String },

    #[error("轉換引擎無法使用：{0}")]
    EngineUnavailable(String),

    #[error("轉換引擎不支援文字編碼 '{0}'")]
    UnsupportedEncoding(String),

    #[error("互動輸入失敗：{0}")]
    Prompt(String),

    #[error("IO 錯誤：{0}")]
    Io(#[from] std::io::Error),
}

impl From<dialoguer::Error> for ConverterError {
    fn from(err: dialoguer::Error) -> Self {
        ConverterError::Prompt(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ConverterError>;
