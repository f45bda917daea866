use std::path::PathBuf;
use crate::models::conversion::{BatchInput, BatchPlan, ConversionOutcome, ConversionRequest};
use crate::utils::error::Result;

// Facade 接口，負責協調格式驗證、檔案收集與轉換流程
pub trait ConversionFacadeTrait: Send + Sync {
    /// 列出支援的輸出格式
    fn list_formats(&self) -> Result<Vec<String>>;

    /// 轉換單一檔案
    /// # 參數
    /// - request: 輸入檔案、目標格式與輸出位置
    /// # 回傳
    /// - 成功時返回實際輸出檔案路徑；格式不受支援時在任何檔案操作前失敗
    fn convert_file(&self, request: ConversionRequest) -> Result<PathBuf>;

    /// 驗證格式並收集批次輸入檔案
    fn prepare_batch(&self, input: BatchInput) -> Result<BatchPlan>;

    /// 依序轉換批次中的檔案
    /// # 回傳
    /// - 每個輸入檔案產生一筆結果，單一檔案失敗不會中斷批次
    fn run_batch<'a>(&'a self, plan: &'a BatchPlan) -> Result<Box<dyn Iterator<Item = ConversionOutcome> + 'a>>;
}
