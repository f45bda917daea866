use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use log::{debug, info};
use regex::RegexSet;
use walkdir::{DirEntry, WalkDir};
use crate::models::file::{FileCollectInput, FileCollectOutput};
use crate::service::traits::i_service::FileServiceTrait;
use crate::utils::error::{ConverterError, Result};
use crate::utils::utils::create_regex_sets;

/// 檔案服務，批次模式中唯一負責列舉輸入檔案的地方
pub struct FileService;

impl FileService {
    pub fn new() -> Self {
        FileService
    }
}

impl Default for FileService {
    fn default() -> Self {
        FileService::new()
    }
}

impl FileServiceTrait for FileService {
    fn collect_files(&self, input: FileCollectInput) -> Result<FileCollectOutput> {
        validate_input_dir(&input.input_dir)?;
        let exclude = input.exclude_patterns.clone().unwrap_or_default();
        let (include_set, exclude_set) = create_regex_sets(&input.include_patterns, &exclude)?;

        let skip_dir = input.skip_dir.as_deref().and_then(|dir| fs::canonicalize(dir).ok());
        let mut files = Vec::new();
        let mut total_size = 0;
        for entry in walk(&input.input_dir, input.recursive, skip_dir) {
            let entry = entry.map_err(io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }
            if !is_file_selected(entry.path(), &include_set, &exclude_set) {
                debug!("略過不符合模式的檔案：{}", entry.path().display());
                continue;
            }
            total_size += entry.metadata().map_err(io::Error::from)?.len();
            files.push(entry.into_path());
        }

        info!("於 {} 找到 {} 個檔案（遞迴：{}）", input.input_dir.display(), files.len(), input.recursive);
        Ok(FileCollectOutput { files, total_size })
    }
}

pub fn validate_input_dir(input_dir: &Path) -> Result<()> {
    if !input_dir.exists() {
        return Err(ConverterError::InputNotFound(input_dir.to_path_buf()));
    }
    if !input_dir.is_dir() {
        return Err(ConverterError::InvalidInput(format!("'{}' 不是目錄", input_dir.display())));
    }
    Ok(())
}

fn walk(
    input_dir: &Path,
    recursive: bool,
    skip_dir: Option<PathBuf>,
) -> impl Iterator<Item = walkdir::Result<DirEntry>> {
    let max_depth = if recursive { usize::MAX } else { 1 };
    WalkDir::new(input_dir)
        .min_depth(1)
        .max_depth(max_depth)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |entry| !is_skipped_dir(entry, skip_dir.as_deref()))
}

fn is_skipped_dir(entry: &DirEntry, skip_dir: Option<&Path>) -> bool {
    match skip_dir {
        Some(skip) if entry.file_type().is_dir() => {
            fs::canonicalize(entry.path()).map(|p| p == skip).unwrap_or(false)
        }
        _ => false,
    }
}

// 模式只比對檔名，不比對目錄
pub fn is_file_selected(path: &Path, include_set: &RegexSet, exclude_set: &RegexSet) -> bool {
    let name = match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None => return false,
    };
    include_set.is_match(&name) && !exclude_set.is_match(&name)
}
