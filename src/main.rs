use clap::Parser;
use jetwatch::core::ConfigProvider;
use jetwatch::utils::{logger, validation::Validate};
use jetwatch::{
    default_adapters, CliConfig, Fetcher, HttpTransport, JetPipeline, JetwatchError, LocalStorage,
    RetryPolicy, ScanEngine,
};
use std::sync::Arc;

fn fail(e: &JetwatchError) -> ! {
    tracing::error!("❌ Run failed: {} (Severity: {:?})", e, e.severity());
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting jetwatch");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        fail(&e);
    }

    let transport = match HttpTransport::new(config.request_timeout()) {
        Ok(t) => t,
        Err(e) => fail(&e),
    };
    let fetcher = Fetcher::new(
        Arc::new(transport),
        RetryPolicy {
            attempts: config.retry_attempts(),
            backoff: config.retry_backoff(),
        },
    );
    let adapters = default_adapters(&fetcher);

    let monitor_enabled = config.monitor;
    let pipeline = match JetPipeline::new(LocalStorage::new(), config, adapters) {
        Ok(p) => p,
        Err(e) => fail(&e),
    };
    let engine = ScanEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(summary) => {
            if !summary.failed_sources.is_empty() {
                tracing::warn!(
                    "⚠️ {} source(s) failed: {}",
                    summary.failed_sources.len(),
                    summary.failed_sources.join(", ")
                );
            }
            println!(
                "✅ {} new listing(s) out of {} collected",
                summary.new_listings, summary.collected
            );
            println!("📁 Report saved to: {}", summary.report_path);
        }
        Err(e) => fail(&e),
    }

    if let Err(e) = engine.into_pipeline().close() {
        fail(&e);
    }

    Ok(())
}
