use clap::Parser;
use numlist::utils::{logger, validation::Validate};
use numlist::{ClassifyEngine, CliConfig, LocalSink, SimplePipeline, StdoutSink};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting numlist CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    // 無輸出目錄時直接寫到 stdout
    let to_files = config.output_path.is_some();
    let outcome = match config.output_path.clone() {
        Some(path) => {
            let sink = LocalSink::new(path);
            let pipeline = SimplePipeline::new(sink, config);
            let engine = ClassifyEngine::new_with_monitoring(pipeline, monitor_enabled);
            engine.run()
        }
        None => {
            let sink = StdoutSink::new();
            let pipeline = SimplePipeline::new(sink, config);
            let engine = ClassifyEngine::new_with_monitoring(pipeline, monitor_enabled);
            engine.run()
        }
    };

    match outcome {
        Ok(destination) => {
            tracing::info!("✅ Classification completed successfully!");
            if to_files {
                // The list itself went to files, so the banner may use stdout.
                println!("✅ Classification completed successfully!");
                println!("📁 Reports saved to: {}", destination);
            }
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Classification run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                numlist::utils::error::ErrorSeverity::Low => 0,
                numlist::utils::error::ErrorSeverity::Medium => 2,
                numlist::utils::error::ErrorSeverity::High => 1,
                numlist::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
