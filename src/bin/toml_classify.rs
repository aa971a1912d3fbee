use anyhow::Context;
use clap::Parser;
use numlist::config::toml_config::TomlConfig;
use numlist::core::ConfigProvider;
use numlist::utils::{logger, validation::Validate};
use numlist::{ClassifyEngine, LocalSink, SimplePipeline};

#[derive(Parser)]
#[command(name = "toml-classify")]
#[command(about = "Batch number classification driven by a TOML run file")]
struct Args {
    /// Path to the TOML run file
    #[arg(short, long, default_value = "numlist.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON log lines for scripted runs
    #[arg(long)]
    log_json: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Dry run - show what would be classified without executing
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    if args.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting TOML-driven classification");
    tracing::info!("📁 Loading run file from: {}", args.config);

    // 載入 TOML 配置
    let config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("Failed to load run file '{}'", args.config))?;

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Run file validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Run file loaded and validated successfully");

    // 顯示配置摘要
    display_run_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No classification will occur");
        perform_dry_run(&config)?;
        return Ok(());
    }

    // 決定監控設定
    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());

    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    // 創建報告目的地和管道
    let sink = LocalSink::new(config.output_path().to_string());
    let pipeline = SimplePipeline::new(sink, config);

    // 創建引擎並運行
    let engine = ClassifyEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run() {
        Ok(destination) => {
            tracing::info!("✅ Classification run completed successfully!");
            tracing::info!("📁 Reports saved to: {}", destination);
            println!("✅ Classification run completed successfully!");
            println!("📁 Reports saved to: {}", destination);
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

fn display_run_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Run Summary:");
    println!("  Run: {} v{}", config.run.name, config.run.version);
    println!("  Jobs: {}", config.job_count());
    println!("  Output: {}", config.output_path());
    println!("  Formats: {}", config.output.formats.join(", "));

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

fn perform_dry_run(config: &TomlConfig) -> anyhow::Result<()> {
    println!("🔍 Dry Run Analysis:");
    println!();

    println!("🧮 Jobs:");
    let jobs = config.jobs()?;
    if jobs.is_empty() {
        println!("  (none configured - the demo job bound=100 category=odd would run)");
    }
    for job in &jobs {
        println!(
            "  {} -> {} in [1, {})",
            job.name,
            job.category.label(),
            job.bound
        );
        if job.bound <= 1 {
            println!("    ⚠️ bound <= 1 always produces an empty result");
        }
    }

    println!();
    println!("💾 Output Configuration:");
    println!("  Path: {}", config.output_path());
    println!("  Formats: {}", config.output.formats.join(", "));
    println!(
        "  Expected report files: {}",
        jobs.len().max(1) * config.output.formats.len()
    );

    println!();
    println!("✅ Dry run analysis complete. Use --verbose for more details during actual run.");

    Ok(())
}
