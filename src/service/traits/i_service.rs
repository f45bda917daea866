use std::path::Path;
use crate::models::file::{FileCollectInput, FileCollectOutput};
use crate::models::format::FormatListing;
use crate::utils::error::Result;

// 外部轉換引擎接口，所有格式相關的工作都交給引擎
pub trait DocumentEngine: Send + Sync {
    /// 查詢引擎支援的輸入與輸出格式
    /// # 回傳
    /// - 成功時返回格式清單，引擎無法執行時返回錯誤
    fn list_formats(&self) -> Result<FormatListing>;

    /// 將單一檔案轉換為指定格式並寫入輸出路徑
    /// # 參數
    /// - input: 輸入檔案路徑
    /// - to: 目標格式識別字
    /// - output: 已解析的輸出檔案路徑
    /// - encoding: 文字編碼
    /// # 回傳
    /// - 引擎回報錯誤時返回 ConversionFailed
    fn convert_file(&self, input: &Path, to: &str, output: &Path, encoding: &str) -> Result<()>;
}

// File 服務接口，負責批次輸入檔案的收集
pub trait FileServiceTrait: Send + Sync {
    /// 收集符合條件的檔案
    /// # 參數
    /// - input: 檔案收集的輸入參數
    /// # 回傳
    /// - 成功時返回依路徑排序的檔案列表和總大小
    fn collect_files(&self, input: FileCollectInput) -> Result<FileCollectOutput>;
}
