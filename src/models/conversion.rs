use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub input_path: PathBuf,
    pub target_format: String,
    // 既有目錄，或確切的輸出檔案路徑
    pub output_location: PathBuf,
}

// 批次轉換的請求參數
#[derive(Debug, Clone)]
pub struct BatchInput {
    pub input_dir: PathBuf,
    pub target_format: String,
    pub output_dir: PathBuf,
    pub recursive: bool,
    pub include: Vec<String>,
    pub exclude: Option<Vec<String>>,
}

/// 已驗證格式並完成檔案收集的批次工作
#[derive(Debug, Clone)]
pub struct BatchPlan {
    pub input_dir: PathBuf,
    pub target_format: String,
    pub output_dir: PathBuf,
    pub files: Vec<PathBuf>,
    pub total_size: u64,
}

/// 批次轉換中單一檔案的結果
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionOutcome {
    Converted { input: PathBuf, output: PathBuf },
    Failed { input: PathBuf, detail: String },
}

impl ConversionOutcome {
    pub fn input(&self) -> &PathBuf {
        match self {
            ConversionOutcome::Converted { input, .. } => input,
            ConversionOutcome::Failed { input, .. } => input,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ConversionOutcome::Converted { .. })
    }
}

#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub successes: Vec<(PathBuf, PathBuf)>,
    pub failures: Vec<(PathBuf, String)>,
}

impl BatchReport {
    pub fn record(&mut self, outcome: ConversionOutcome) {
        match outcome {
            ConversionOutcome::Converted { input, output } => self.successes.push((input, output)),
            ConversionOutcome::Failed { input, detail } => self.failures.push((input, detail)),
        }
    }

    pub fn total(&self) -> usize {
        self.successes.len() + self.failures.len()
    }
}

impl FromIterator<ConversionOutcome> for BatchReport {
    fn from_iter<I: IntoIterator<Item = ConversionOutcome>>(iter: I) -> Self {
        let mut report = BatchReport::default();
        for outcome in iter {
            report.record(outcome);
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_partitions_in_encounter_order() {
        let outcomes = vec![
            ConversionOutcome::Converted { input: "a.md".into(), output: "out/a.html".into() },
            ConversionOutcome::Failed { input: "b.md".into(), detail: "boom".to_string() },
            ConversionOutcome::Converted { input: "c.md".into(), output: "out/c.html".into() },
            ConversionOutcome::Failed { input: "d.md".into(), detail: "bad".to_string() },
        ];

        let report: BatchReport = outcomes.into_iter().collect();

        assert_eq!(report.total(), 4);
        assert_eq!(
            report.successes,
            vec![
                (PathBuf::from("a.md"), PathBuf::from("out/a.html")),
                (PathBuf::from("c.md"), PathBuf::from("out/c.html")),
            ]
        );
        assert_eq!(
            report.failures,
            vec![
                (PathBuf::from("b.md"), "boom".to_string()),
                (PathBuf::from("d.md"), "bad".to_string()),
            ]
        );
    }

    #[test]
    fn test_outcome_accessors() {
        let failed = ConversionOutcome::Failed { input: "x.rst".into(), detail: "no".to_string() };
        assert!(!failed.is_success());
        assert_eq!(failed.input(), &PathBuf::from("x.rst"));
    }
}
