use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use log::{debug, error, info};
use crate::models::conversion::{ConversionOutcome, ConversionRequest};
use crate::service::traits::i_service::DocumentEngine;
use crate::utils::error::{ConverterError, Result};

/// 交給引擎的文字編碼
pub const TEXT_ENCODING: &str = "utf-8";

/// 依輸出位置決定確切的輸出檔案路徑
///
/// - 輸出位置為既有目錄：`目錄/輸入檔主檔名.格式`
/// - 其他情況：直接使用輸出位置，並建立缺少的上層目錄
pub fn resolve_output_path(input_path: &Path, target_format: &str, output_location: &Path) -> io::Result<PathBuf> {
    if output_location.is_dir() {
        let stem = input_path.file_stem().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("無法取得輸入檔名：{}", input_path.display()),
            )
        })?;
        let mut file_name = OsString::from(stem);
        file_name.push(".");
        file_name.push(target_format);
        return Ok(output_location.join(file_name));
    }

    if let Some(parent) = output_location.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(output_location.to_path_buf())
}

// 轉換協調器，本身不保存狀態
pub struct Converter {
    engine: Arc<dyn DocumentEngine>,
}

impl Converter {
    pub fn new(engine: Arc<dyn DocumentEngine>) -> Self {
        Converter { engine }
    }

    /// 轉換單一檔案，所有錯誤都交給呼叫端
    ///
    /// 目標格式須由呼叫端先行驗證，這裡不再檢查。
    pub fn convert(&self, input_path: &Path, target_format: &str, output_location: &Path) -> Result<PathBuf> {
        // 呼叫端可能已驗證過，仍於轉換當下再確認一次
        if !input_path.exists() {
            return Err(ConverterError::InputNotFound(input_path.to_path_buf()));
        }

        let output_path = resolve_output_path(input_path, target_format, output_location)?;
        debug!("轉換 {} -> {}（{}）", input_path.display(), output_path.display(), target_format);
        self.engine.convert_file(input_path, target_format, &output_path, TEXT_ENCODING)?;
        info!("已轉換：{} -> {}", input_path.display(), output_path.display());
        Ok(output_path)
    }

    pub fn convert_request(&self, request: &ConversionRequest) -> Result<PathBuf> {
        self.convert(&request.input_path, &request.target_format, &request.output_location)
    }

    /// 批次轉換，逐一產生每個輸入檔案的結果
    ///
    /// 先建立輸出目錄；之後單一檔案的失敗只會記錄為 `ConversionOutcome::Failed`，
    /// 不會中斷其餘檔案。
    pub fn batch_convert<'a, I>(
        &'a self,
        input_paths: I,
        target_format: &'a str,
        output_dir: &'a Path,
    ) -> Result<BatchConversion<'a, I::IntoIter>>
    where
        I: IntoIterator<Item = PathBuf>,
    {
        fs::create_dir_all(output_dir)?;
        Ok(BatchConversion {
            converter: self,
            inputs: input_paths.into_iter(),
            target_format,
            output_dir,
        })
    }
}

pub struct BatchConversion<'a, I> {
    converter: &'a Converter,
    inputs: I,
    target_format: &'a str,
    output_dir: &'a Path,
}

impl<I> Iterator for BatchConversion<'_, I>
where
    I: Iterator<Item = PathBuf>,
{
    type Item = ConversionOutcome;

    fn next(&mut self) -> Option<Self::Item> {
        let input = self.inputs.next()?;
        let outcome = match self.converter.convert(&input, self.target_format, self.output_dir) {
            Ok(output) => ConversionOutcome::Converted { input, output },
            Err(e) => {
                error!("處理檔案 {} 失敗: {}", input.display(), e);
                ConversionOutcome::Failed { input, detail: e.to_string() }
            }
        };
        Some(outcome)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inputs.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use crate::models::format::FormatListing;

    // 將輸入內容加上格式前綴寫出；檔名含 "broken" 時模擬引擎錯誤
    #[derive(Default)]
    struct FakeEngine {
        calls: Mutex<Vec<(PathBuf, String, PathBuf, String)>>,
    }

    impl DocumentEngine for FakeEngine {
        fn list_formats(&self) -> Result<FormatListing> {
            Ok(FormatListing::default())
        }

        fn convert_file(&self, input: &Path, to: &str, output: &Path, encoding: &str) -> Result<()> {
            self.calls.lock().unwrap().push((
                input.to_path_buf(),
                to.to_string(),
                output.to_path_buf(),
                encoding.to_string(),
            ));
            if input.to_string_lossy().contains("broken") {
                return Err(ConverterError::ConversionFailed {
                    input: input.to_path_buf(),
                    detail: "Unknown reader".to_string(),
                });
            }
            let body = fs::read_to_string(input)?;
            fs::write(output, format!("[{}] {}", to, body))?;
            Ok(())
        }
    }

    fn setup() -> (tempfile::TempDir, Arc<FakeEngine>, Converter) {
        let dir = tempfile::tempdir().unwrap();
        let engine = Arc::new(FakeEngine::default());
        let converter = Converter::new(engine.clone());
        (dir, engine, converter)
    }

    #[test]
    fn test_directory_location_uses_stem_and_format() {
        let (dir, _, _) = setup();
        let out = dir.path().join("out");
        fs::create_dir(&out).unwrap();

        let resolved = resolve_output_path(Path::new("docs/report.final.md"), "docx", &out).unwrap();
        assert_eq!(resolved, out.join("report.final.docx"));
    }

    #[test]
    fn test_file_location_is_verbatim_and_creates_parents() {
        let (dir, _, _) = setup();
        let target = dir.path().join("a").join("b").join("custom.txt");

        let resolved = resolve_output_path(Path::new("notes.md"), "html", &target).unwrap();
        assert_eq!(resolved, target);
        assert!(dir.path().join("a").join("b").is_dir());
        assert!(!target.exists());
    }

    #[test]
    fn test_convert_invokes_engine_once_with_utf8() {
        let (dir, engine, converter) = setup();
        let input = dir.path().join("readme.md");
        fs::write(&input, "# hi").unwrap();

        let output = converter.convert(&input, "html", dir.path()).unwrap();

        assert_eq!(output, dir.path().join("readme.html"));
        assert_eq!(fs::read_to_string(&output).unwrap(), "[html] # hi");
        let calls = engine.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].1, "html");
        assert_eq!(calls[0].3, TEXT_ENCODING);
    }

    #[test]
    fn test_convert_twice_overwrites_output() {
        let (dir, _, converter) = setup();
        let input = dir.path().join("page.md");
        let target = dir.path().join("site").join("page.html");

        fs::write(&input, "first").unwrap();
        converter.convert(&input, "html", &target).unwrap();
        fs::write(&input, "second").unwrap();
        converter.convert(&input, "html", &target).unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "[html] second");
        assert_eq!(fs::read_dir(dir.path().join("site")).unwrap().count(), 1);
    }

    #[test]
    fn test_missing_input_is_not_found_and_engine_untouched() {
        let (dir, engine, converter) = setup();
        let missing = dir.path().join("gone.md");

        let result = converter.convert(&missing, "html", dir.path());

        assert!(matches!(result, Err(ConverterError::InputNotFound(p)) if p == missing));
        assert!(engine.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_engine_failure_propagates_in_single_mode() {
        let (dir, _, converter) = setup();
        let input = dir.path().join("broken.md");
        fs::write(&input, "x").unwrap();

        let result = converter.convert(&input, "html", dir.path());
        assert!(matches!(result, Err(ConverterError::ConversionFailed { detail, .. }) if detail == "Unknown reader"));
    }

    #[test]
    fn test_batch_isolates_failures_and_keeps_order() {
        let (dir, _, converter) = setup();
        let names = ["one.md", "broken-two.md", "three.md", "broken-four.md", "five.md"];
        let inputs: Vec<PathBuf> = names
            .iter()
            .map(|name| {
                let path = dir.path().join(name);
                fs::write(&path, *name).unwrap();
                path
            })
            .collect();
        let out = dir.path().join("nested").join("out");

        let outcomes: Vec<ConversionOutcome> = converter
            .batch_convert(inputs.clone(), "html", &out)
            .unwrap()
            .collect();

        assert_eq!(outcomes.len(), 5);
        assert_eq!(outcomes.iter().filter(|o| !o.is_success()).count(), 2);
        let order: Vec<&PathBuf> = outcomes.iter().map(|o| o.input()).collect();
        assert_eq!(order, inputs.iter().collect::<Vec<_>>());
        assert_eq!(
            outcomes[2],
            ConversionOutcome::Converted { input: inputs[2].clone(), output: out.join("three.html") }
        );
        match &outcomes[1] {
            ConversionOutcome::Failed { detail, .. } => assert!(detail.contains("Unknown reader")),
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_batch_is_lazy() {
        let (dir, engine, converter) = setup();
        let inputs: Vec<PathBuf> = (0..3)
            .map(|i| {
                let path = dir.path().join(format!("f{}.md", i));
                fs::write(&path, "x").unwrap();
                path
            })
            .collect();

        let mut batch = converter.batch_convert(inputs, "html", dir.path()).unwrap();
        assert_eq!(batch.size_hint(), (3, Some(3)));
        assert!(engine.calls.lock().unwrap().is_empty());

        batch.next();
        assert_eq!(engine.calls.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_empty_batch_creates_output_dir_only() {
        let (dir, engine, converter) = setup();
        let out = dir.path().join("empty-out");

        let count = converter.batch_convert(Vec::new(), "html", &out).unwrap().count();

        assert_eq!(count, 0);
        assert!(out.is_dir());
        assert!(engine.calls.lock().unwrap().is_empty());
    }
}
