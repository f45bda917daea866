use std::path::PathBuf;
use std::sync::Arc;
use log::{info, warn};
use crate::config::config::{normalize_format, validate_input_file};
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::{BatchInput, BatchPlan, ConversionOutcome, ConversionRequest};
use crate::models::file::FileCollectInput;
use crate::service::converter::Converter;
use crate::service::formats::FormatRegistry;
use crate::service::traits::i_service::{DocumentEngine, FileServiceTrait};
use crate::utils::error::Result;

pub struct ConversionFacade {
    registry: FormatRegistry,
    converter: Converter,
    file_service: Box<dyn FileServiceTrait>,
}

impl ConversionFacade {
    pub fn new(engine: Arc<dyn DocumentEngine>, file_service: Box<dyn FileServiceTrait>) -> Self {
        ConversionFacade {
            registry: FormatRegistry::new(engine.clone()),
            converter: Converter::new(engine),
            file_service,
        }
    }

    pub fn registry(&self) -> &FormatRegistry {
        &self.registry
    }
}

impl ConversionFacadeTrait for ConversionFacade {
    fn list_formats(&self) -> Result<Vec<String>> {
        Ok(self.registry.get_supported_formats()?.to_vec())
    }

    fn convert_file(&self, request: ConversionRequest) -> Result<PathBuf> {
        let target_format = normalize_format(&request.target_format);
        // 先驗證格式，確保不支援時不會碰到任何檔案
        self.registry.ensure_supported(&target_format)?;
        validate_input_file(&request.input_path)?;

        info!(
            "開始轉換，輸入檔案：{}，格式：{}，輸出位置：{}",
            request.input_path.display(),
            target_format,
            request.output_location.display()
        );
        self.converter.convert_request(&ConversionRequest { target_format, ..request })
    }

    fn prepare_batch(&self, input: BatchInput) -> Result<BatchPlan> {
        let target_format = normalize_format(&input.target_format);
        self.registry.ensure_supported(&target_format)?;

        let file_output = self.file_service.collect_files(FileCollectInput {
            input_dir: input.input_dir.clone(),
            recursive: input.recursive,
            include_patterns: input.include.clone(),
            exclude_patterns: input.exclude.clone(),
            skip_dir: Some(input.output_dir.clone()),
        })?;
        if file_output.files.is_empty() {
            warn!("無符合條件的檔案可處理：{}", input.input_dir.display());
        }

        Ok(BatchPlan {
            input_dir: input.input_dir,
            target_format,
            output_dir: input.output_dir,
            files: file_output.files,
            total_size: file_output.total_size,
        })
    }

    fn run_batch<'a>(&'a self, plan: &'a BatchPlan) -> Result<Box<dyn Iterator<Item = ConversionOutcome> + 'a>> {
        info!(
            "開始批次轉換 {} 個檔案，格式：{}，輸出目錄：{}",
            plan.files.len(),
            plan.target_format,
            plan.output_dir.display()
        );
        let batch = self
            .converter
            .batch_convert(plan.files.iter().cloned(), &plan.target_format, &plan.output_dir)?;
        Ok(Box::new(batch))
    }
}
