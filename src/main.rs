use clap::Parser;
use event_scrape::utils::{logger, validation::Validate};
use event_scrape::{
    CliConfig, ConferencePipeline, HackathonPipeline, LocalStorage, RunSummary, ScrapeEngine,
    ScrapeSource, SourceOptions,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting event-scrape CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let targets = match config.resolve() {
        Ok(targets) => targets,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    if matches!(config.source, ScrapeSource::Conference | ScrapeSource::All) {
        run_source("conference", targets.conference.clone(), |options| {
            run_conferences(options, monitor_enabled)
        })
        .await;
    }

    if matches!(config.source, ScrapeSource::Hackathon | ScrapeSource::All) {
        run_source("hackathon", targets.hackathon.clone(), |options| {
            run_hackathons(options, monitor_enabled)
        })
        .await;
    }

    Ok(())
}

async fn run_source<F, Fut>(label: &str, options: SourceOptions, run: F)
where
    F: FnOnce(SourceOptions) -> Fut,
    Fut: std::future::Future<Output = event_scrape::Result<RunSummary>>,
{
    if let Err(e) = options.validate() {
        tracing::error!("❌ {} target validation failed: {}", label, e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    tracing::info!("Scraping {} listing: {}", label, options.listing_url);
    match run(options).await {
        Ok(summary) => {
            println!(
                "✅ Scraped {} {}. Files written to:",
                summary.records, summary.source
            );
            println!("   • CSV → {}", summary.csv_path);
            println!("   • JSON → {}", summary.json_path);
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ {} scrape failed: {} (Category: {:?}, Severity: {:?})",
                label,
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 依錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                event_scrape::utils::error::ErrorSeverity::Low => 0,
                event_scrape::utils::error::ErrorSeverity::Medium => 2,
                event_scrape::utils::error::ErrorSeverity::High => 1,
                event_scrape::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }
}

async fn run_conferences(
    options: SourceOptions,
    monitor: bool,
) -> event_scrape::Result<RunSummary> {
    let storage = LocalStorage::new(options.output_path.clone());
    let pipeline = ConferencePipeline::new(storage, options);
    ScrapeEngine::new_with_monitoring(pipeline, monitor).run().await
}

async fn run_hackathons(
    options: SourceOptions,
    monitor: bool,
) -> event_scrape::Result<RunSummary> {
    let storage = LocalStorage::new(options.output_path.clone());
    let pipeline = HackathonPipeline::new(storage, options);
    ScrapeEngine::new_with_monitoring(pipeline, monitor).run().await
}
