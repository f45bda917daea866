use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use indicatif::{ProgressBar, ProgressStyle};
use pathdiff::diff_paths;
use regex::RegexSet;
use crate::utils::error::{ConverterError, Result};

pub fn setup_logging(log_level: &str) -> Result<()> {
    let log_level_filter = match log_level {
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };
    // 互動模式可能重複呼叫，已初始化時忽略
    let _ = env_logger::Builder::new()
        .filter_level(log_level_filter)
        .try_init();
    Ok(())
}

pub struct ProgressManager {
    pb: ProgressBar,
    no_progress: bool,
    start: Instant,
}

impl ProgressManager {
    pub fn new(total: u64, no_progress: bool) -> Self {
        let pb = if no_progress {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new(total);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner} {msg} [{bar:40}] {pos}/{len} {elapsed_precise}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("##-"),
            );
            pb
        };
        ProgressManager {
            pb,
            no_progress,
            start: Instant::now(),
        }
    }

    pub fn spinner(message: String, no_progress: bool) -> Self {
        let pb = if no_progress {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        };
        pb.set_message(message);
        ProgressManager {
            pb,
            no_progress,
            start: Instant::now(),
        }
    }

    pub fn update(&self, message: String) {
        if self.no_progress {
            return;
        }
        self.pb.set_message(message);
    }

    pub fn inc(&self) {
        self.pb.inc(1);
    }

    pub fn finish(&self, message: String) {
        if self.no_progress {
            return;
        }
        self.pb.finish_with_message(format!("{}（{:.1} 秒）", message, self.start.elapsed().as_secs_f64()));
    }

    pub fn clear(&self) {
        self.pb.finish_and_clear();
    }
}

pub fn create_progress_bar(total: u64, no_progress: bool) -> ProgressManager {
    ProgressManager::new(total, no_progress)
}

pub fn is_valid_pattern(pattern: &str) -> bool {
    let invalid_chars = ['/', '\\', ':', '?', '"', '<', '>', '|'];
    !pattern.is_empty() && !pattern.contains(&invalid_chars[..])
}

pub fn validate_file_patterns(include: &[String], exclude: &[String]) -> Result<()> {
    for pattern in include {
        if !is_valid_pattern(pattern) {
            return Err(ConverterError::InvalidInput(format!("無效的包含模式: {}", pattern)));
        }
    }
    for pattern in exclude {
        if !is_valid_pattern(pattern) {
            return Err(ConverterError::InvalidInput(format!("無效的排除模式: {}", pattern)));
        }
    }
    Ok(())
}

/// 將檔名模式轉為正規表示式
///
/// `*` 比對任意字元；以 `.` 開頭的模式視為副檔名（例如 `.md`）。
pub fn pattern_to_regex(pattern: &str) -> String {
    let body = regex::escape(pattern).replace("\\*", ".*");
    if pattern.starts_with('.') {
        format!("{}$", body)
    } else {
        format!("^{}$", body)
    }
}

pub fn create_regex_sets(include: &[String], exclude: &[String]) -> Result<(RegexSet, RegexSet)> {
    validate_file_patterns(include, exclude)?;
    let include_patterns: Vec<_> = include.iter().map(|p| pattern_to_regex(p)).collect();
    let exclude_patterns: Vec<_> = exclude.iter().map(|p| pattern_to_regex(p)).collect();

    let include_set = RegexSet::new(&include_patterns)
        .map_err(|e| ConverterError::InvalidInput(format!("無效的包含模式: {}", e)))?;
    let exclude_set = RegexSet::new(&exclude_patterns)
        .map_err(|e| ConverterError::InvalidInput(format!("無效的排除模式: {}", e)))?;

    Ok((include_set, exclude_set))
}

pub fn format_file_size(size: u64) -> String {
    if size < 1024 * 1024 {
        format!("{:.2} KB", size as f64 / 1024.0)
    } else {
        format!("{:.2} MB", size as f64 / (1024.0 * 1024.0))
    }
}

/// 依欄數切分清單，最後一列以空字串補齊
pub fn chunk_into_rows(items: &[String], columns: usize) -> Vec<Vec<String>> {
    let columns = columns.max(1);
    items
        .chunks(columns)
        .map(|chunk| {
            let mut row = chunk.to_vec();
            row.resize(columns, String::new());
            row
        })
        .collect()
}

// 報告中以相對於輸入目錄的路徑顯示
pub fn display_relative(path: &Path, base: &Path) -> PathBuf {
    diff_paths(path, base)
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_pattern_to_regex() {
        let (include, exclude) = create_regex_sets(&strings(&["*.md", ".rst"]), &strings(&["draft*"])).unwrap();
        assert!(include.is_match("notes.md"));
        assert!(!include.is_match("notes.md.bak"));
        assert!(include.is_match("index.rst"));
        assert!(exclude.is_match("draft-1.md"));
        assert!(!exclude.is_match("final.md"));
    }

    #[test]
    fn test_invalid_patterns_rejected() {
        assert!(create_regex_sets(&strings(&["a/b"]), &[]).is_err());
        assert!(create_regex_sets(&strings(&["*"]), &strings(&[""])).is_err());
    }

    #[test]
    fn test_chunk_into_rows_pads_last_row() {
        let rows = chunk_into_rows(&strings(&["a", "b", "c", "d", "e"]), 4);
        assert_eq!(rows, vec![strings(&["a", "b", "c", "d"]), strings(&["e", "", "", ""])]);
        assert!(chunk_into_rows(&[], 4).is_empty());
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(512), "0.50 KB");
        assert_eq!(format_file_size(3 * 1024 * 1024), "3.00 MB");
    }

    #[test]
    fn test_display_relative() {
        assert_eq!(display_relative(Path::new("in/sub/a.md"), Path::new("in")), PathBuf::from("sub/a.md"));
        assert_eq!(display_relative(Path::new("in"), Path::new("in")), PathBuf::from("in"));
    }
}
