use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct FileCollectInput {
    pub input_dir: PathBuf,
    pub recursive: bool,
    pub include_patterns: Vec<String>,
    pub exclude_patterns: Option<Vec<String>>,
    // 不進入的子目錄（通常為批次輸出目錄）
    pub skip_dir: Option<PathBuf>,
}

#[derive(Debug)]
pub struct FileCollectOutput {
    pub files: Vec<PathBuf>,
    pub total_size: u64,
}
