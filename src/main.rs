use astro_fortune::utils::{logger, validation::Validate};
use astro_fortune::{
    render, CliConfig, FortuneEngine, FortuneError, GeminiClient, KeyStore, Sign,
};
use chrono::Local;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting astro-fortune CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let store = match &config.config_path {
        Some(path) => KeyStore::new(path.clone()),
        None => KeyStore::from_default_location()?,
    };

    // --save-key：先寫入設定檔；沒有要查的星座就到此為止
    if config.save_key {
        if let Some(key) = &config.api_key {
            store.save(key)?;
            println!("🔑 API 金鑰已儲存！");
            if config.zodiac.is_none() && config.birthdate.is_none() {
                return Ok(());
            }
        }
    }

    match run(&config, &store).await {
        Ok(output) => {
            tracing::info!("✅ 運勢查詢成功！");
            println!("{}", output);
        }
        Err(e) => {
            tracing::error!("❌ 運勢查詢失敗: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}

async fn run(config: &CliConfig, store: &KeyStore) -> astro_fortune::Result<String> {
    // 金鑰與星座都備齊才會發出請求
    let api_key = match &config.api_key {
        Some(key) if !key.trim().is_empty() => key.clone(),
        _ => store.load()?.ok_or(FortuneError::MissingApiKey)?,
    };
    let sign: Sign = config.resolve_sign()?;

    let engine = FortuneEngine::new(GeminiClient::new(config.endpoint.clone()));
    let reading = engine.run(&api_key, sign, config.period).await?;

    if config.raw_json {
        Ok(serde_json::to_string_pretty(&reading)?)
    } else {
        Ok(render::render_reading(
            sign,
            config.period,
            &reading,
            Local::now().date_naive(),
        ))
    }
}
