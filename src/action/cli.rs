use std::path::Path;
use std::sync::Arc;
use clap::Parser;
use crate::action::interactive::process_interactive_mode;
use crate::action::report::{print_batch_report, print_conversion_success, print_formats};
use crate::config::config::{Cli, Commands};
use crate::config::ports::{AppConfig, ConfigPort, ConversionPort, Task};
use crate::facade::conversion_facade::ConversionFacade;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::{BatchInput, BatchReport, ConversionRequest};
use crate::service::config_service::{default_batch_output, default_convert_output, ConfigService};
use crate::service::file::FileService;
use crate::service::pandoc::PandocEngine;
use crate::utils::error::Result;
use crate::utils::utils::{create_progress_bar, display_relative, format_file_size, setup_logging, ProgressManager};

pub fn process_args(args: Vec<String>) -> Result<()> {
    if args.len() == 1 {
        process_interactive_mode()
    } else {
        process_cli_mode()
    }
}

pub fn process_cli_mode() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli.log_level)?;

    let config_service = ConfigService::new(Box::new(CliConfigAdapter::new(cli)));
    let config = config_service.get_config()?;

    let conversion_port: Box<dyn ConversionPort> = Box::new(ConversionAdapter);
    conversion_port.execute(config)
}

// CLI 配置適配器
pub struct CliConfigAdapter {
    cli: Cli,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli) -> Self {
        CliConfigAdapter { cli }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> Result<AppConfig> {
        let task = match &self.cli.command {
            Commands::ListFormats => Task::ListFormats,
            Commands::Convert(args) => Task::Convert {
                input: args.file.clone(),
                format: args.format.clone(),
                output: match &args.output {
                    Some(output) => output.clone(),
                    None => default_convert_output()?,
                },
            },
            Commands::Batch(args) => Task::Batch {
                input_dir: args.input_dir.clone(),
                format: args.format.clone(),
                output_dir: match &args.output {
                    Some(output) => output.clone(),
                    None => default_batch_output()?,
                },
                recursive: args.recursive,
                include: args.include.clone(),
                exclude: args.exclude.clone(),
            },
        };

        Ok(AppConfig {
            task,
            log_level: self.cli.log_level.clone(),
            no_progress: self.cli.no_progress,
            pandoc: self.cli.pandoc.clone(),
        })
    }
}

// 以 pandoc 執行轉換的適配器
pub struct ConversionAdapter;

impl ConversionPort for ConversionAdapter {
    fn execute(&self, config: AppConfig) -> Result<()> {
        let facade = ConversionFacade::new(
            Arc::new(PandocEngine::new(config.pandoc.clone())),
            Box::new(FileService::new()),
        );
        run_task(&facade, &config)
    }
}

/// 依配置執行工作並輸出結果
///
/// 批次模式中個別檔案失敗只會列入報告，不視為整體失敗。
pub fn run_task(facade: &dyn ConversionFacadeTrait, config: &AppConfig) -> Result<()> {
    match &config.task {
        Task::ListFormats => {
            let formats = facade.list_formats()?;
            print_formats(&formats);
        }
        Task::Convert { input, format, output } => {
            let pm = ProgressManager::spinner(
                format!("正在將 '{}' 轉換為 '{}'...", input.display(), format.to_lowercase()),
                config.no_progress,
            );
            let result = facade.convert_file(ConversionRequest {
                input_path: input.clone(),
                target_format: format.clone(),
                output_location: output.clone(),
            });
            pm.clear();
            let output_path = result?;
            print_conversion_success(input, &output_path);
        }
        Task::Batch { input_dir, format, output_dir, recursive, include, exclude } => {
            let plan = facade.prepare_batch(BatchInput {
                input_dir: input_dir.clone(),
                target_format: format.clone(),
                output_dir: output_dir.clone(),
                recursive: *recursive,
                include: include.clone(),
                exclude: exclude.clone(),
            })?;
            if plan.files.is_empty() {
                println!("輸入目錄中沒有找到任何檔案。");
                return Ok(());
            }

            let total_files = plan.files.len();
            let pm = create_progress_bar(total_files as u64, config.no_progress);
            pm.update(format!("正在轉換 {} 個檔案，共 {}", total_files, format_file_size(plan.total_size)));
            let mut report = BatchReport::default();
            for (i, outcome) in facade.run_batch(&plan)?.enumerate() {
                pm.update(format!("處理檔案 {}/{}：{}", i + 1, total_files, relative(outcome.input(), input_dir)));
                report.record(outcome);
                pm.inc();
            }
            pm.finish(format!("處理完成，成功 {}，失敗 {}", report.successes.len(), report.failures.len()));
            print_batch_report(&report, &plan);
        }
    }
    Ok(())
}

fn relative(path: &Path, base: &Path) -> String {
    display_relative(path, base).display().to_string()
}
