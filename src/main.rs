use clap::Parser;
use randsum::utils::logger;
use randsum::{global, CliConfig, FileSink, RunSettings};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::debug!("Starting randsum");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let settings = match RunSettings::from_cli(&config) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    // 執行檔每次啟動都播種一次
    match settings.seed {
        Some(seed) => global::seed(seed),
        None => {
            let seed = global::seed_from_clock();
            tracing::debug!("🌱 Seeded from clock: {}", seed);
        }
    }

    let sum = global::compute_and_emit_with(
        settings.generator_settings(),
        FileSink::new(&settings.output_file),
    );

    // 結果即退出碼
    std::process::exit(sum.exit_status());
}
