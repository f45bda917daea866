use std::sync::Arc;
use log::{info, warn};
use once_cell::sync::OnceCell;
use crate::models::format::FormatDirection;
use crate::service::traits::i_service::DocumentEngine;
use crate::utils::error::{ConverterError, Result};

/// 支援的輸出格式登錄表
///
/// 第一次查詢時向引擎取得格式清單並快取，之後於整個行程期間直接回傳快取內容。
/// 查詢失敗不會寫入快取，錯誤直接交給呼叫端。
pub struct FormatRegistry {
    engine: Arc<dyn DocumentEngine>,
    formats: OnceCell<Vec<String>>,
}

impl FormatRegistry {
    pub fn new(engine: Arc<dyn DocumentEngine>) -> Self {
        FormatRegistry {
            engine,
            formats: OnceCell::new(),
        }
    }

    /// 取得排序後的輸出格式清單
    pub fn get_supported_formats(&self) -> Result<&[String]> {
        self.formats
            .get_or_try_init(|| {
                let listing = self.engine.list_formats()?;
                let mut formats = listing.formats(FormatDirection::Output).to_vec();
                formats.sort();
                formats.dedup();
                info!("已快取 {} 個輸出格式", formats.len());
                Ok::<_, ConverterError>(formats)
            })
            .map(Vec::as_slice)
    }

    pub fn is_supported(&self, format: &str) -> Result<bool> {
        let formats = self.get_supported_formats()?;
        Ok(formats.binary_search_by(|f| f.as_str().cmp(format)).is_ok())
    }

    pub fn ensure_supported(&self, format: &str) -> Result<()> {
        if self.is_supported(format)? {
            Ok(())
        } else {
            warn!("輸出格式不受支援：{}", format);
            Err(ConverterError::UnsupportedFormat(format.to_string()))
        }
    }
}
